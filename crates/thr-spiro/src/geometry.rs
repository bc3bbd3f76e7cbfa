//! Core coordinate types for thr-spiro.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The evaluators speak Cartesian (`RawPoint`), the sand table speaks polar
//! (`PolarPoint`). Both are tiny `Copy` structs: passing them around by value
//! costs the same as passing two floats.

use std::f64::consts::TAU;

use serde::Serialize;

/// A Cartesian point straight out of an equation evaluator.
///
/// Unbounded and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
}

/// A point in table coordinates.
///
/// `theta` is continuous (it keeps growing past 2π on multi-revolution
/// patterns), `rho` is 0.0 at the center and 1.0 at the rim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarPoint {
    pub theta: f64,
    pub rho: f64,
}

impl RawPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive x axis, in (-π, π].
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl PolarPoint {
    #[inline]
    pub fn new(theta: f64, rho: f64) -> Self {
        Self { theta, rho }
    }

    /// Back to Cartesian, mostly useful for checking shapes in tests.
    #[inline]
    pub fn to_cartesian(&self) -> RawPoint {
        RawPoint::new(self.rho * self.theta.cos(), self.rho * self.theta.sin())
    }
}

/// An ordered, finished path for the table to trace.
///
/// ## Rust Lesson #4: Ownership & Vec
///
/// The points live in a private `Vec`. There is no `&mut` accessor, so once a
/// trajectory exists nothing can reorder or edit it; callers only ever get a
/// borrowed slice (`&[PolarPoint]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<PolarPoint>,
}

impl Trajectory {
    /// Only the normalizer and the `.thr` decoder build trajectories, both of
    /// which uphold the `rho ∈ [0, 1]` bound.
    pub(crate) fn from_points(points: Vec<PolarPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PolarPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PolarPoint> {
        self.points.iter()
    }

    /// (min, max) of theta, or None for an empty trajectory.
    pub fn theta_range(&self) -> Option<(f64, f64)> {
        range_of(self.points.iter().map(|p| p.theta))
    }

    /// (min, max) of rho, or None for an empty trajectory.
    pub fn rho_range(&self) -> Option<(f64, f64)> {
        range_of(self.points.iter().map(|p| p.rho))
    }

    /// Net number of turns between the first and last point.
    pub fn revolutions(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (last.theta - first.theta) / TAU,
            _ => 0.0,
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a PolarPoint;
    type IntoIter = std::slice::Iter<'a, PolarPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn range_of(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
