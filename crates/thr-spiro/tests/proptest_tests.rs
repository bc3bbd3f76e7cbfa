//! Property-based tests for trajectory invariants using the `proptest` crate.

use std::f64::consts::PI;

use proptest::prelude::*;

use thr_spiro::{decode, encode, generate, CurveParameters, CurveType};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Sample counts large enough that no family collapses to the center.
fn arb_num_points() -> impl Strategy<Value = usize> {
    10usize..1500
}

/// Table fit: scale in (0, 1], center offset in [0, 1).
fn arb_fit() -> impl Strategy<Value = (f64, f64)> {
    (0.05f64..=1.0, 0.0f64..0.95)
}

/// Trochoid radii with the rolling circle strictly smaller than the fixed one,
/// so the hypotrochoid never shrinks to a point.
fn arb_trochoid() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.5f64..2.0, 0.05f64..0.9, 0.0f64..1.5).prop_map(|(big_r, frac, d)| (big_r, big_r * frac, d))
}

fn arb_cartesian_params() -> impl Strategy<Value = CurveParameters> {
    let hypo = arb_trochoid().prop_map(|(big_r, r, d)| CurveParameters::hypotrochoid(big_r, r, d));
    let epi = arb_trochoid().prop_map(|(big_r, r, d)| CurveParameters::epitrochoid(big_r, r, d));
    let liss = (1u32..9, 1u32..9, -PI..PI)
        .prop_map(|(a, b, delta)| CurveParameters::lissajous(f64::from(a), f64::from(b), delta));
    (prop_oneof![hypo, epi, liss], arb_num_points(), arb_fit()).prop_map(
        |(params, n, (scale, offset))| {
            params.with_num_points(n).with_scale(scale).with_center_offset(offset)
        },
    )
}

fn arb_rose_params() -> impl Strategy<Value = CurveParameters> {
    let numerator = prop_oneof![
        (-12i32..=12).prop_filter("nonzero", |n| *n != 0).prop_map(f64::from),
        (1u32..25).prop_map(|halves| f64::from(halves) / 2.0),
    ];
    (numerator, 1u32..7, arb_num_points(), arb_fit()).prop_map(|(n, d, points, (scale, offset))| {
        CurveParameters::rose(n, f64::from(d))
            .with_num_points(points)
            .with_scale(scale)
            .with_center_offset(offset)
    })
}

fn arb_any_params() -> impl Strategy<Value = CurveParameters> {
    prop_oneof![arb_cartesian_params(), arb_rose_params()]
}

const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// 1. One output point per requested sample
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn trajectory_length_matches_num_points(params in arb_any_params()) {
        let t = generate(&params).unwrap();
        prop_assert_eq!(t.len(), params.num_points);
    }
}

// ---------------------------------------------------------------------------
// 2. Every rho lies on the table
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn rho_stays_in_unit_interval(params in arb_any_params()) {
        let t = generate(&params).unwrap();
        for p in t.iter() {
            prop_assert!((0.0..=1.0).contains(&p.rho), "rho {} out of range", p.rho);
            prop_assert!(p.theta.is_finite());
        }
    }
}

// ---------------------------------------------------------------------------
// 3. The largest rho equals the blended scale: auto-scaling hits the rim
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn largest_rho_matches_scale(params in arb_any_params()) {
        let t = generate(&params).unwrap();
        let (_, max_rho) = t.rho_range().unwrap();
        let expected = params.scale + params.center_offset * (1.0 - params.scale);
        prop_assert!((max_rho - expected).abs() < TOL,
            "max rho {} != {}", max_rho, expected);
    }
}

// ---------------------------------------------------------------------------
// 4. Cartesian families: consecutive theta never jumps by more than π
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cartesian_theta_is_continuous(params in arb_cartesian_params()) {
        let t = generate(&params).unwrap();
        for pair in t.points().windows(2) {
            let step = (pair[1].theta - pair[0].theta).abs();
            prop_assert!(step <= PI + TOL,
                "{} theta jumped by {}", params.curve_type(), step);
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Rose: theta never decreases
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn rose_theta_is_monotonic(params in arb_rose_params()) {
        prop_assert_eq!(params.curve_type(), CurveType::Rose);
        let t = generate(&params).unwrap();
        for pair in t.points().windows(2) {
            let step = pair[1].theta - pair[0].theta;
            prop_assert!(step >= 0.0, "theta decreased by {}", -step);
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Text encoding keeps 5 decimals of both columns
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn encode_decode_within_precision(params in arb_any_params()) {
        let t = generate(&params).unwrap();
        let text = encode(&t);
        prop_assert_eq!(text.lines().count(), t.len());
        prop_assert!(text.ends_with('\n'));

        let back = decode(&text).unwrap();
        prop_assert_eq!(back.len(), t.len());
        for (a, b) in t.iter().zip(back.iter()) {
            prop_assert!((a.theta - b.theta).abs() <= 1e-5);
            prop_assert!((a.rho - b.rho).abs() <= 1e-5);
        }
    }
}

// ---------------------------------------------------------------------------
// 7. Generation is deterministic
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn generation_is_repeatable(params in arb_any_params()) {
        prop_assert_eq!(generate(&params).unwrap(), generate(&params).unwrap());
    }
}
