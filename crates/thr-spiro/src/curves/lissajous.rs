//! Lissajous curve evaluator.
//!
//! Lissajous curves are the family of curves described by:
//!   x(t) = sin(a*t + δ)
//!   y(t) = sin(b*t)
//!
//! Different a:b ratios create different figures (1:1 = ellipse, 1:2 = figure-8, etc.)

use std::f64::consts::TAU;

use tracing::{debug, warn};

use super::LissajousParams;
use super::util::{closure_multiple, gcd, linspace, FALLBACK_REVOLUTIONS};
use crate::geometry::RawPoint;

/// Sample a Lissajous figure over one full period.
pub fn lissajous(params: &LissajousParams, num_points: usize) -> Vec<RawPoint> {
    let t_max = TAU * period_turns(params);

    linspace(0.0, t_max, num_points)
        .map(|t| {
            RawPoint::new(
                (params.a * t + params.delta).sin(),
                (params.b * t).sin(),
            )
        })
        .collect()
}

/// Period of the figure in units of 2π.
///
/// With `m * a` and `m * b` whole, both oscillators are back in phase after
/// `m / gcd(m*a, m*b)` turns. Integer frequencies give `1 / gcd(a, b)`.
pub fn period_turns(params: &LissajousParams) -> f64 {
    match closure_multiple(&[params.a, params.b]) {
        Some(m) => {
            let ma = (params.a * m as f64).round() as u64;
            let mb = (params.b * m as f64).round() as u64;
            let turns = m as f64 / gcd(ma, mb) as f64;
            debug!(a = params.a, b = params.b, turns, "lissajous period");
            turns
        }
        None => {
            warn!(
                a = params.a,
                b = params.b,
                turns = FALLBACK_REVOLUTIONS,
                "a:b has no small rational form, sampling a fixed number of turns"
            );
            f64::from(FALLBACK_REVOLUTIONS)
        }
    }
}
