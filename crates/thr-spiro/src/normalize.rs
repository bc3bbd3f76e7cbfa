//! Coordinate normalization: raw curve output to table coordinates.
//!
//! 1. Cartesian points become polar, with theta unwrapped so it stays
//!    continuous across the atan2 seam.
//! 2. Radii are divided by the largest radius in the sequence.
//! 3. Scale and center offset are applied; every rho ends up in [0, 1].

use std::f64::consts::{PI, TAU};

use crate::curves::{validate_center_offset, validate_scale, RawPath};
use crate::error::{Result, SpiroError};
use crate::geometry::{PolarPoint, RawPoint, Trajectory};

/// Turns a stream of wrapped atan2 angles into one continuous angle.
///
/// Each new raw angle is compared with the previous raw angle. A jump of
/// more than π in either direction means the seam at ±π was crossed, and
/// the revolution counter moves by one. Consecutive output angles therefore
/// never differ by more than π.
#[derive(Debug, Default, Clone)]
pub struct ThetaUnwrapper {
    prev_raw: Option<f64>,
    turns: i64,
}

impl ThetaUnwrapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unwrap(&mut self, raw: f64) -> f64 {
        if let Some(prev) = self.prev_raw {
            let delta = raw - prev;
            if delta > PI {
                self.turns -= 1;
            } else if delta < -PI {
                self.turns += 1;
            }
        }
        self.prev_raw = Some(raw);
        raw + self.turns as f64 * TAU
    }
}

/// Convert Cartesian samples to polar with continuous theta.
pub fn to_polar(points: &[RawPoint]) -> Vec<PolarPoint> {
    let mut unwrapper = ThetaUnwrapper::new();
    points
        .iter()
        .map(|p| PolarPoint::new(unwrapper.unwrap(p.angle()), p.radius()))
        .collect()
}

/// Fit a raw path onto the table.
///
/// `rho = n + center_offset * (1 - n)` where `n = rho_raw / max_rho * scale`.
/// Since `n` is in `[0, scale]` the blend already lands in `[0, 1]`; the final
/// clamp only catches rounding at the edges.
pub fn normalize(path: &RawPath, scale: f64, center_offset: f64) -> Result<Trajectory> {
    validate_scale(scale)?;
    validate_center_offset(center_offset)?;

    let polar = match path {
        RawPath::Cartesian(points) => to_polar(points),
        RawPath::Polar(points) => {
            if let Some(bad) = points.iter().find(|p| p.rho < 0.0) {
                return Err(SpiroError::invalid(format!(
                    "polar input has negative radius {} at theta {}",
                    bad.rho, bad.theta
                )));
            }
            points.clone()
        }
    };

    if polar.is_empty() {
        return Err(SpiroError::DegenerateResult("no points to normalize".into()));
    }
    if let Some(bad) = polar.iter().find(|p| !p.rho.is_finite() || !p.theta.is_finite()) {
        return Err(SpiroError::DegenerateResult(format!(
            "non-finite coordinate (theta {}, rho {})",
            bad.theta, bad.rho
        )));
    }

    let max_rho = polar.iter().map(|p| p.rho).fold(0.0, f64::max);
    if max_rho <= 0.0 {
        return Err(SpiroError::DegenerateResult(
            "every point sits at the center, nothing to scale".into(),
        ));
    }

    let points = polar
        .into_iter()
        .map(|p| {
            let scaled = p.rho / max_rho * scale;
            let rho = scaled + center_offset * (1.0 - scaled);
            PolarPoint::new(p.theta, rho.clamp(0.0, 1.0))
        })
        .collect();

    Ok(Trajectory::from_points(points))
}
