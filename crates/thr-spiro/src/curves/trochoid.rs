//! Hypotrochoid and epitrochoid evaluators - the Spirograph curves.
//!
//! A pen sits at distance `d` from the center of a circle of radius `r` that
//! rolls around a fixed circle of radius `R`:
//!
//! Hypotrochoid (rolling inside):
//!   x(t) = (R - r) * cos(t) + d * cos((R - r) / r * t)
//!   y(t) = (R - r) * sin(t) - d * sin((R - r) / r * t)
//!
//! Epitrochoid (rolling outside):
//!   x(t) = (R + r) * cos(t) - d * cos((R + r) / r * t)
//!   y(t) = (R + r) * sin(t) - d * sin((R + r) / r * t)

use std::f64::consts::TAU;

use tracing::{debug, warn};

use super::TrochoidParams;
use super::util::{closure_multiple, linspace, FALLBACK_REVOLUTIONS};
use crate::geometry::RawPoint;

/// Sample a hypotrochoid over its full closing domain.
pub fn hypotrochoid(params: &TrochoidParams, num_points: usize) -> Vec<RawPoint> {
    let big_r = params.fixed_radius;
    let small_r = params.rolling_radius;
    let pen_d = params.pen_offset;

    let diff = big_r - small_r;
    let freq = diff / small_r;
    let t_max = TAU * revolutions(params) as f64;

    linspace(0.0, t_max, num_points)
        .map(|t| {
            RawPoint::new(
                diff * t.cos() + pen_d * (freq * t).cos(),
                diff * t.sin() - pen_d * (freq * t).sin(),
            )
        })
        .collect()
}

/// Sample an epitrochoid over its full closing domain.
pub fn epitrochoid(params: &TrochoidParams, num_points: usize) -> Vec<RawPoint> {
    let big_r = params.fixed_radius;
    let small_r = params.rolling_radius;
    let pen_d = params.pen_offset;

    let sum = big_r + small_r;
    let freq = sum / small_r;
    let t_max = TAU * revolutions(params) as f64;

    linspace(0.0, t_max, num_points)
        .map(|t| {
            RawPoint::new(
                sum * t.cos() - pen_d * (freq * t).cos(),
                sum * t.sin() - pen_d * (freq * t).sin(),
            )
        })
        .collect()
}

/// Number of 2π turns of `t` needed for the curve to close.
///
/// Both families close once `m * R / r` is whole (the inner frequency
/// `(R ∓ r) / r` is then whole too). An explicit `revolutions` wins; a ratio
/// with no small closing multiple falls back to a fixed turn count.
pub fn revolutions(params: &TrochoidParams) -> u32 {
    if let Some(turns) = params.revolutions {
        return turns;
    }

    let ratio = params.fixed_radius / params.rolling_radius;
    match closure_multiple(&[ratio]) {
        Some(turns) => {
            debug!(ratio, turns, "trochoid closes");
            turns
        }
        None => {
            warn!(
                ratio,
                turns = FALLBACK_REVOLUTIONS,
                "R/r has no small rational form, sampling a fixed number of turns"
            );
            FALLBACK_REVOLUTIONS
        }
    }
}
