//! Inspect command: summarize an existing .thr file.

use serde::Serialize;

use thr_spiro::{read_from_path, Trajectory};

/// Summary of a trajectory for JSON output.
#[derive(Debug, Serialize)]
struct InspectReport {
    file: String,
    points: usize,
    theta_min: f64,
    theta_max: f64,
    rho_min: f64,
    rho_max: f64,
    revolutions: f64,
    starts_at_center: bool,
    ends_at_center: bool,
}

/// Below this rho a point counts as "at the center".
const CENTER_EPSILON: f64 = 1e-3;

impl InspectReport {
    fn new(file: &str, trajectory: &Trajectory) -> Self {
        let (theta_min, theta_max) = trajectory.theta_range().unwrap_or((0.0, 0.0));
        let (rho_min, rho_max) = trajectory.rho_range().unwrap_or((0.0, 0.0));
        let points = trajectory.points();
        Self {
            file: file.to_string(),
            points: trajectory.len(),
            theta_min,
            theta_max,
            rho_min,
            rho_max,
            revolutions: trajectory.revolutions(),
            starts_at_center: points.first().is_some_and(|p| p.rho < CENTER_EPSILON),
            ends_at_center: points.last().is_some_and(|p| p.rho < CENTER_EPSILON),
        }
    }
}

pub fn cmd_inspect(args: &[String]) -> Result<(), String> {
    let mut path: Option<&str> = None;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            other if other.starts_with('-') => {
                return Err(format!("Unknown option for inspect: {}", other));
            }
            other => {
                if path.is_some() {
                    return Err(format!("Unexpected argument: {}", other));
                }
                path = Some(other);
            }
        }
    }

    let path = path.ok_or(".thr file required")?;
    let trajectory = read_from_path(path).map_err(|e| e.to_string())?;
    let report = InspectReport::new(path, &trajectory);

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    println!("File:        {}", report.file);
    println!("Points:      {}", report.points);
    println!("Theta:       {:.5} .. {:.5}", report.theta_min, report.theta_max);
    println!("Rho:         {:.5} .. {:.5}", report.rho_min, report.rho_max);
    println!("Revolutions: {:.2}", report.revolutions);
    if report.starts_at_center {
        println!("Starts at center");
    }
    if report.ends_at_center {
        println!("Ends at center");
    }
    Ok(())
}
