//! Equation evaluators for the four curve families.
//!
//! Each family is a pure function from its constants to a sampled path.
//! `evaluate` validates the parameters first and then dispatches on the
//! `Curve` variant, so nothing out of domain ever reaches the formulas.

pub mod util;

mod lissajous;
mod rose;
mod trochoid;

pub use lissajous::{lissajous, period_turns};
pub use rose::rose;
pub use trochoid::{epitrochoid, hypotrochoid, revolutions};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SpiroError};
use crate::geometry::{PolarPoint, RawPoint};

/// Samples per pattern when the caller does not say.
pub const DEFAULT_NUM_POINTS: usize = 2000;
/// Keeps the pattern just inside the table rim.
pub const DEFAULT_SCALE: f64 = 0.95;
pub const DEFAULT_CENTER_OFFSET: f64 = 0.0;

/// The closed set of curve families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    Hypotrochoid,
    Epitrochoid,
    Rose,
    Lissajous,
}

impl CurveType {
    /// Get all curve types.
    pub fn all() -> &'static [CurveType] {
        &[
            CurveType::Hypotrochoid,
            CurveType::Epitrochoid,
            CurveType::Rose,
            CurveType::Lissajous,
        ]
    }

    /// Get curve type name as string.
    pub fn name(&self) -> &'static str {
        match self {
            CurveType::Hypotrochoid => "hypotrochoid",
            CurveType::Epitrochoid => "epitrochoid",
            CurveType::Rose => "rose",
            CurveType::Lissajous => "lissajous",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            CurveType::Hypotrochoid => "Circle rolling inside a fixed circle (classic Spirograph)",
            CurveType::Epitrochoid => "Circle rolling outside a fixed circle",
            CurveType::Rose => "Rose/rhodonea petals, rho = cos(n/d * theta)",
            CurveType::Lissajous => "Two perpendicular harmonic oscillations",
        }
    }

    /// Parse curve type from string.
    pub fn from_name(name: &str) -> Option<CurveType> {
        match name.trim().to_lowercase().as_str() {
            "hypotrochoid" | "hypo" | "spirograph" | "inner" => Some(CurveType::Hypotrochoid),
            "epitrochoid" | "epi" | "outer" => Some(CurveType::Epitrochoid),
            "rose" | "rhodonea" => Some(CurveType::Rose),
            "lissajous" | "lissa" | "bowditch" => Some(CurveType::Lissajous),
            _ => None,
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constants shared by hypotrochoids and epitrochoids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrochoidParams {
    /// Radius of the fixed circle (`R`).
    #[serde(rename = "R")]
    pub fixed_radius: f64,
    /// Radius of the rolling circle (`r`).
    #[serde(rename = "r")]
    pub rolling_radius: f64,
    /// Distance from the rolling circle's center to the pen (`d`).
    #[serde(rename = "d")]
    pub pen_offset: f64,
    /// Force a number of 2π turns instead of searching for closure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revolutions: Option<u32>,
}

/// Rose with k = n/d. Either may be negative or fractional; both must be
/// nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoseParams {
    pub n: f64,
    #[serde(default = "default_denominator")]
    pub d: f64,
}

fn default_denominator() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LissajousParams {
    pub a: f64,
    pub b: f64,
    /// Phase shift of the x oscillator, radians.
    #[serde(default)]
    pub delta: f64,
}

/// A curve family together with its constants.
///
/// ## Rust Lesson #22: Pattern Matching on Enums with Data
///
/// Each variant carries exactly the constants its equations need, so a rose
/// can never be handed a pen offset and a trochoid can never miss one. The
/// serde tag makes the JSON/YAML form `{"type": "rose", "n": 5, "d": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Curve {
    Hypotrochoid(TrochoidParams),
    Epitrochoid(TrochoidParams),
    Rose(RoseParams),
    Lissajous(LissajousParams),
}

impl Curve {
    pub fn curve_type(&self) -> CurveType {
        match self {
            Curve::Hypotrochoid(_) => CurveType::Hypotrochoid,
            Curve::Epitrochoid(_) => CurveType::Epitrochoid,
            Curve::Rose(_) => CurveType::Rose,
            Curve::Lissajous(_) => CurveType::Lissajous,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Curve::Hypotrochoid(p) | Curve::Epitrochoid(p) => {
                require_positive("R", p.fixed_radius)?;
                require_positive("r", p.rolling_radius)?;
                if !p.pen_offset.is_finite() || p.pen_offset < 0.0 {
                    return Err(SpiroError::invalid(format!(
                        "d must be a finite value >= 0, got {}",
                        p.pen_offset
                    )));
                }
                if p.revolutions == Some(0) {
                    return Err(SpiroError::invalid("revolutions must be at least 1"));
                }
            }
            Curve::Rose(p) => {
                require_nonzero("n", p.n)?;
                require_nonzero("d", p.d)?;
            }
            Curve::Lissajous(p) => {
                require_positive("a", p.a)?;
                require_positive("b", p.b)?;
                if !p.delta.is_finite() {
                    return Err(SpiroError::invalid(format!("delta must be finite, got {}", p.delta)));
                }
            }
        }
        Ok(())
    }
}

/// Everything needed to generate one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParameters {
    #[serde(flatten)]
    pub curve: Curve,
    /// Number of samples, at least 2. Directly controls smoothness.
    #[serde(default = "default_num_points")]
    pub num_points: usize,
    /// Output radius multiplier in (0, 1].
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Radial bias toward the rim in [0, 1).
    #[serde(default)]
    pub center_offset: f64,
}

fn default_num_points() -> usize {
    DEFAULT_NUM_POINTS
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

impl CurveParameters {
    /// Parameters with the default sampling (2000 points, scale 0.95, no offset).
    pub fn new(curve: Curve) -> Self {
        Self {
            curve,
            num_points: DEFAULT_NUM_POINTS,
            scale: DEFAULT_SCALE,
            center_offset: DEFAULT_CENTER_OFFSET,
        }
    }

    pub fn hypotrochoid(big_r: f64, small_r: f64, d: f64) -> Self {
        Self::new(Curve::Hypotrochoid(TrochoidParams {
            fixed_radius: big_r,
            rolling_radius: small_r,
            pen_offset: d,
            revolutions: None,
        }))
    }

    pub fn epitrochoid(big_r: f64, small_r: f64, d: f64) -> Self {
        Self::new(Curve::Epitrochoid(TrochoidParams {
            fixed_radius: big_r,
            rolling_radius: small_r,
            pen_offset: d,
            revolutions: None,
        }))
    }

    pub fn rose(n: f64, d: f64) -> Self {
        Self::new(Curve::Rose(RoseParams { n, d }))
    }

    pub fn lissajous(a: f64, b: f64, delta: f64) -> Self {
        Self::new(Curve::Lissajous(LissajousParams { a, b, delta }))
    }

    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_center_offset(mut self, center_offset: f64) -> Self {
        self.center_offset = center_offset;
        self
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve.curve_type()
    }

    /// Check every domain constraint. Called by `evaluate` before any work.
    pub fn validate(&self) -> Result<()> {
        validate_num_points(self.num_points)?;
        validate_scale(self.scale)?;
        validate_center_offset(self.center_offset)?;
        self.curve.validate()
    }
}

/// Raw evaluator output, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPath {
    Cartesian(Vec<RawPoint>),
    /// Families that are natively polar (the rose) skip the round trip.
    Polar(Vec<PolarPoint>),
}

impl RawPath {
    pub fn len(&self) -> usize {
        match self {
            RawPath::Cartesian(points) => points.len(),
            RawPath::Polar(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sample the curve described by `params`.
///
/// Returns `num_points` samples, uniform in the curve parameter and covering
/// the whole closing domain of the family.
pub fn evaluate(params: &CurveParameters) -> Result<RawPath> {
    params.validate()?;

    let n = params.num_points;
    let path = match &params.curve {
        Curve::Hypotrochoid(p) => RawPath::Cartesian(hypotrochoid(p, n)),
        Curve::Epitrochoid(p) => RawPath::Cartesian(epitrochoid(p, n)),
        Curve::Rose(p) => RawPath::Polar(rose(p, n)),
        Curve::Lissajous(p) => RawPath::Cartesian(lissajous(p, n)),
    };

    debug!(curve = %params.curve_type(), points = path.len(), "evaluated curve");
    Ok(path)
}

/// Sample arbitrary parametric functions `x(t)`, `y(t)` over `[t_start, t_end]`.
///
/// For shapes outside the four built-in families. The result goes through
/// the same normalizer, which auto-scales it to the table.
pub fn evaluate_custom<X, Y>(
    x_fn: X,
    y_fn: Y,
    t_start: f64,
    t_end: f64,
    num_points: usize,
) -> Result<RawPath>
where
    X: Fn(f64) -> f64,
    Y: Fn(f64) -> f64,
{
    validate_num_points(num_points)?;
    if !t_start.is_finite() || !t_end.is_finite() || t_end <= t_start {
        return Err(SpiroError::invalid(format!(
            "parameter range [{}, {}] is empty or not finite",
            t_start, t_end
        )));
    }

    let points = util::linspace(t_start, t_end, num_points)
        .map(|t| RawPoint::new(x_fn(t), y_fn(t)))
        .collect();
    Ok(RawPath::Cartesian(points))
}

fn require_nonzero(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value != 0.0 {
        Ok(())
    } else {
        Err(SpiroError::invalid(format!("rose {} must be finite and nonzero, got {}", name, value)))
    }
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SpiroError::invalid(format!("{} must be a finite value > 0, got {}", name, value)))
    }
}

pub(crate) fn validate_num_points(num_points: usize) -> Result<()> {
    if num_points < 2 {
        return Err(SpiroError::invalid(format!("num_points must be at least 2, got {}", num_points)));
    }
    Ok(())
}

pub(crate) fn validate_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 && scale <= 1.0 {
        Ok(())
    } else {
        Err(SpiroError::invalid(format!("scale must be in (0, 1], got {}", scale)))
    }
}

pub(crate) fn validate_center_offset(center_offset: f64) -> Result<()> {
    if center_offset.is_finite() && (0.0..1.0).contains(&center_offset) {
        Ok(())
    } else {
        Err(SpiroError::invalid(format!("center_offset must be in [0, 1), got {}", center_offset)))
    }
}
