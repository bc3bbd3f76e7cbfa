//! Rose curve (Rhodonea) evaluator.
//!
//! Rose curves are defined in polar coordinates as:
//!   ρ(θ) = cos(k * θ),  k = n / d
//!
//! When k is an integer:
//! - k odd: k petals
//! - k even: 2k petals
//!
//! With k = p/q in lowest terms the curve closes after θ = 2π * q. n and d
//! may be negative or fractional; only |n/d| matters.
//!
//! The curve is already polar, so it skips the Cartesian round trip and goes
//! straight to the normalizer as `PolarPoint`s.

use std::f64::consts::{PI, TAU};

use tracing::{debug, warn};

use super::RoseParams;
use super::util::{closure_multiple, gcd, linspace, FALLBACK_REVOLUTIONS};
use crate::geometry::PolarPoint;

/// `|n / d|` in lowest terms as `(p, q)`, or None when the ratio has no
/// small rational form.
///
/// `cos` is even, so the signs of `n` and `d` never change the curve.
/// Rational inputs are reduced here: `2.5 / 1` becomes `5 / 2`.
pub fn reduced_ratio(params: &RoseParams) -> Option<(u64, u64)> {
    let k = (params.n / params.d).abs();
    let q = u64::from(closure_multiple(&[k])?);
    let p = (k * q as f64).round() as u64;
    let g = gcd(p, q);
    Some((p / g, q / g))
}

/// Turns of θ before the rose closes: the denominator of `n/d` in lowest
/// terms.
pub fn turns(params: &RoseParams) -> u32 {
    match reduced_ratio(params) {
        Some((p, q)) => {
            debug!(n = params.n, d = params.d, p, q, "rose closes");
            u32::try_from(q).unwrap_or(FALLBACK_REVOLUTIONS)
        }
        None => {
            warn!(
                n = params.n,
                d = params.d,
                turns = FALLBACK_REVOLUTIONS,
                "n/d has no small rational form, sampling a fixed number of turns"
            );
            FALLBACK_REVOLUTIONS
        }
    }
}

/// Sample a rose curve.
///
/// The table cannot draw a negative radius, so each point is emitted as
/// `(θ + offset, |ρ|)`. Every time ρ changes sign the offset grows by π: the
/// point `(θ + π, -ρ)` is the same place as `(θ, ρ)`, so the shape is exact,
/// and theta never decreases. The π jump always happens at ρ ≈ 0, i.e. while
/// the ball sits at the center.
pub fn rose(params: &RoseParams, num_points: usize) -> Vec<PolarPoint> {
    let k = (params.n / params.d).abs();
    let theta_max = TAU * f64::from(turns(params));

    let mut offset = 0.0;
    let mut negative = false;

    linspace(0.0, theta_max, num_points)
        .map(|theta| {
            let rho = (k * theta).cos();
            if (rho < 0.0) != negative {
                negative = rho < 0.0;
                offset += PI;
            }
            PolarPoint::new(theta + offset, rho.abs())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_at_petal_tip() {
        let pts = rose(&RoseParams { n: 5.0, d: 1.0 }, 100);
        assert_eq!(pts.len(), 100);
        assert_relative_eq!(pts[0].theta, 0.0);
        assert_relative_eq!(pts[0].rho, 1.0);
    }

    #[test]
    fn theta_never_decreases() {
        let pts = rose(&RoseParams { n: 3.0, d: 2.0 }, 1500);
        for pair in pts.windows(2) {
            assert!(pair[1].theta >= pair[0].theta);
        }
    }

    #[test]
    fn radius_is_never_negative() {
        let pts = rose(&RoseParams { n: 7.0, d: 3.0 }, 2000);
        assert!(pts.iter().all(|p| p.rho >= 0.0 && p.rho <= 1.0));
    }

    #[test]
    fn flipped_points_match_signed_curve() {
        // Every emitted point must sit where the signed rose puts it.
        let params = RoseParams { n: 4.0, d: 1.0 };
        let k = 4.0;
        let pts = rose(&params, 400);
        for (i, theta) in linspace(0.0, TAU, 400).enumerate() {
            let signed = (k * theta).cos();
            let expected = (signed * theta.cos(), signed * theta.sin());
            let got = pts[i].to_cartesian();
            assert_relative_eq!(got.x, expected.0, epsilon = 1e-9);
            assert_relative_eq!(got.y, expected.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn rational_rose_spans_denominator_turns() {
        let pts = rose(&RoseParams { n: 3.0, d: 2.0 }, 200);
        // base angle (without flip offsets) ends at 2π * 2
        let last = pts[pts.len() - 1];
        let flips = ((last.theta - 2.0 * TAU) / PI).round();
        assert_relative_eq!(last.theta, 2.0 * TAU + flips * PI, epsilon = 1e-9);
    }

    #[test]
    fn negative_numerator_matches_positive() {
        let neg = rose(&RoseParams { n: -5.0, d: 1.0 }, 500);
        let pos = rose(&RoseParams { n: 5.0, d: 1.0 }, 500);
        assert_eq!(neg, pos);
        assert_eq!(rose(&RoseParams { n: 3.0, d: -2.0 }, 200), rose(&RoseParams { n: 3.0, d: 2.0 }, 200));
    }

    #[test]
    fn fractional_numerator_reduces() {
        let half = RoseParams { n: 2.5, d: 1.0 };
        assert_eq!(reduced_ratio(&half), Some((5, 2)));
        assert_eq!(turns(&half), 2);
        assert_eq!(rose(&half, 400), rose(&RoseParams { n: 5.0, d: 2.0 }, 400));
    }

    #[test]
    fn irrational_ratio_falls_back() {
        let params = RoseParams { n: std::f64::consts::SQRT_2, d: 1.0 };
        assert_eq!(reduced_ratio(&params), None);
        assert_eq!(turns(&params), FALLBACK_REVOLUTIONS);
    }

    #[test]
    fn non_reduced_fraction_uses_lowest_terms() {
        let a = rose(&RoseParams { n: 2.0, d: 1.0 }, 300);
        let b = rose(&RoseParams { n: 4.0, d: 2.0 }, 300);
        assert_eq!(a, b);
    }
}
