//! Shared helpers for the curve evaluators: sampling and closure detection.

/// Largest multiple tried when looking for the point where a curve closes.
pub const MAX_CLOSURE_MULTIPLE: u32 = 64;

/// How far `m * ratio` may sit from a whole number (scaled by `m`) and still
/// count as closed. Loose enough that `1.0 / 0.142857` reads as 7.
pub const CLOSURE_TOLERANCE: f64 = 1e-4;

/// Turns sampled when no closure exists within `MAX_CLOSURE_MULTIPLE`.
pub const FALLBACK_REVOLUTIONS: u32 = 20;

/// `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// Callers guarantee `n >= 2`. The last sample is pinned to `end` exactly so
/// accumulated float error never leaves a closed curve slightly open.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let last = n.saturating_sub(1);
    let step = if last == 0 { 0.0 } else { (end - start) / last as f64 };
    (0..n).map(move |i| if i == last { end } else { start + i as f64 * step })
}

/// Greatest common divisor. `gcd(0, n) == n`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Smallest `m` in `1..=MAX_CLOSURE_MULTIPLE` such that every `m * ratio` is
/// (within tolerance) a positive whole number.
///
/// Trochoids close after `m` turns of `t` when `m * R / r` is whole; a
/// Lissajous figure closes once both `m * a` and `m * b` are whole.
pub fn closure_multiple(ratios: &[f64]) -> Option<u32> {
    (1..=MAX_CLOSURE_MULTIPLE).find(|&m| {
        let m = m as f64;
        ratios.iter().all(|ratio| {
            let scaled = ratio * m;
            scaled.round() >= 1.0 && (scaled - scaled.round()).abs() < CLOSURE_TOLERANCE * m
        })
    })
}
