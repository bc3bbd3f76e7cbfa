//! `.thr` trajectory files: one `theta rho` pair per line.
//!
//! ```text
//! 0.00000 0.95000
//! 0.00314 0.94998
//! ...
//! ```
//!
//! No header, no trailing metadata. Theta may exceed 2π; rho is in [0, 1].
//! Line order is drawing order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SpiroError};
use crate::geometry::{PolarPoint, Trajectory};

/// Decimal places written for both columns.
pub const DEFAULT_PRECISION: usize = 5;

/// Serializes trajectories with a fixed number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrEncoder {
    precision: usize,
}

impl Default for ThrEncoder {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

impl ThrEncoder {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Render the whole trajectory as text.
    pub fn encode(&self, trajectory: &Trajectory) -> String {
        // "-12.34567 0.12345\n" is about 2 * (precision + 4) bytes
        let mut out = String::with_capacity(trajectory.len() * 2 * (self.precision + 4));
        for p in trajectory {
            out.push_str(&format!(
                "{:.prec$} {:.prec$}\n",
                p.theta,
                p.rho,
                prec = self.precision
            ));
        }
        out
    }

    /// Write the trajectory to `path`, replacing any existing file.
    ///
    /// The text goes to a hidden sibling file first and is then renamed over
    /// the target, so readers see either the old file or the complete new
    /// one. The parent directory must already exist.
    pub fn write(&self, trajectory: &Trajectory, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let text = self.encode(trajectory);
        write_replacing(path, &text)?;
        info!(path = %path.display(), points = trajectory.len(), "wrote pattern");
        Ok(path.to_path_buf())
    }
}

/// Encode with the default precision.
pub fn encode(trajectory: &Trajectory) -> String {
    ThrEncoder::default().encode(trajectory)
}

/// Write with the default precision. Returns the path written.
pub fn write_to_path(trajectory: &Trajectory, path: impl AsRef<Path>) -> Result<PathBuf> {
    ThrEncoder::default().write(trajectory, path)
}

/// Parse `.thr` text back into a trajectory.
///
/// Blank lines and `#` comments are skipped. Anything else must be exactly
/// two finite numbers with rho in [0, 1].
pub fn decode(text: &str) -> Result<Trajectory> {
    let mut points = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = idx + 1;
        let parse_error = |message: String| SpiroError::Parse { line: line_no, message };

        let mut fields = line.split_whitespace();
        let (Some(theta), Some(rho), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(parse_error(format!("expected `theta rho`, got {:?}", line)));
        };

        let theta: f64 = theta
            .parse()
            .map_err(|e| parse_error(format!("bad theta {:?}: {}", theta, e)))?;
        let rho: f64 = rho
            .parse()
            .map_err(|e| parse_error(format!("bad rho {:?}: {}", rho, e)))?;

        if !theta.is_finite() {
            return Err(parse_error(format!("theta {} is not finite", theta)));
        }
        if !(0.0..=1.0).contains(&rho) {
            return Err(parse_error(format!("rho {} is outside [0, 1]", rho)));
        }

        points.push(PolarPoint::new(theta, rho));
    }

    debug!(points = points.len(), "decoded trajectory");
    Ok(Trajectory::from_points(points))
}

/// Read and parse a `.thr` file.
pub fn read_from_path(path: impl AsRef<Path>) -> Result<Trajectory> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SpiroError::storage(path, e))?;
    decode(&text)
}

fn write_replacing(path: &Path, text: &str) -> Result<()> {
    let Some(file_name) = path.file_name() else {
        return Err(SpiroError::invalid(format!(
            "output path {} has no file name",
            path.display()
        )));
    };

    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, text).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = result {
        // leave nothing behind on failure
        let _ = fs::remove_file(&tmp_path);
        return Err(SpiroError::storage(path, e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Trajectory {
        Trajectory::from_points(vec![
            PolarPoint::new(0.0, 0.95),
            PolarPoint::new(1.234567, 0.5),
            PolarPoint::new(20.0, 0.0),
        ])
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("thr-spiro-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn encodes_two_columns_five_decimals() {
        let text = encode(&sample());
        assert_eq!(text, "0.00000 0.95000\n1.23457 0.50000\n20.00000 0.00000\n");
    }

    #[test]
    fn precision_is_configurable() {
        let text = ThrEncoder::new(2).encode(&sample());
        assert_eq!(text.lines().next(), Some("0.00 0.95"));
    }

    #[test]
    fn decode_reads_back_encoded_text() {
        let original = sample();
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded.len(), original.len());
        for (a, b) in original.iter().zip(decoded.iter()) {
            assert_relative_eq!(a.theta, b.theta, epsilon = 1e-5);
            assert_relative_eq!(a.rho, b.rho, epsilon = 1e-5);
        }
    }

    #[test]
    fn decode_skips_blank_and_comment_lines() {
        let t = decode("# spiro\n\n0.1 0.2\n  \n0.3 0.4\n").unwrap();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn decode_reports_line_numbers() {
        let err = decode("0.1 0.2\n0.3\n").unwrap_err();
        assert!(matches!(err, SpiroError::Parse { line: 2, .. }), "{}", err);

        let err = decode("0.1 0.2\n0.3 abc\n").unwrap_err();
        assert!(matches!(err, SpiroError::Parse { line: 2, .. }));

        let err = decode("0.1 1.5\n").unwrap_err();
        assert!(matches!(err, SpiroError::Parse { line: 1, .. }));
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = scratch_dir("replace");
        let path = dir.join("pattern.thr");
        fs::write(&path, "stale contents\nthat are longer than the new file\n".repeat(50)).unwrap();

        let written = write_to_path(&sample(), &path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), encode(&sample()));

        // no temp file left next to it
        let leftovers: Vec<_> = fs::read_dir(&dir).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_into_missing_directory_fails_cleanly() {
        let dir = scratch_dir("missing");
        let path = dir.join("no-such-dir").join("pattern.thr");
        let err = write_to_path(&sample(), &path).unwrap_err();
        assert!(matches!(err, SpiroError::Storage { .. }));
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_from_path_round_trips() {
        let dir = scratch_dir("read");
        let path = dir.join("pattern.thr");
        write_to_path(&sample(), &path).unwrap();
        let t = read_from_path(&path).unwrap();
        assert_eq!(t.len(), 3);
        let _ = fs::remove_dir_all(&dir);
    }
}
