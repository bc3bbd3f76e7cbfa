//! Request shapes for front ends (CLI, HTTP handlers).
//!
//! A request arrives as loosely typed JSON, gets checked here, and only
//! validated `CurveParameters` reach the engine.
//!
//! ```json
//! {"action": "preset", "preset_name": "rose_5", "output_name": "my_rose"}
//! {"action": "custom", "curve_type": "hypotrochoid", "output_name": "spiro",
//!  "R": 1.0, "r": 0.25, "d": 0.5, "num_points": 3000}
//! {"action": "list_presets"}
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Preset;
use crate::config::SamplingDefaults;
use crate::curves::{
    Curve, CurveParameters, CurveType, LissajousParams, RoseParams, TrochoidParams,
};
use crate::error::{Result, SpiroError};
use crate::generator::Generator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    Preset(PresetRequest),
    Custom(CustomRequest),
    ListPresets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetRequest {
    pub preset_name: String,
    pub output_name: String,
}

/// A custom curve with every parameter optional. Which ones are required
/// depends on `curve_type`; `d` is the pen offset for trochoids and the
/// denominator for roses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomRequest {
    pub curve_type: String,
    pub output_name: String,

    #[serde(rename = "R", default, skip_serializing_if = "Option::is_none")]
    pub big_r: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revolutions: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_points: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_offset: Option<f64>,
}

/// What a request produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Saved { path: PathBuf, points: usize },
    Presets { presets: Vec<PresetSummary> },
}

/// A catalog entry as shown to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetSummary {
    pub name: String,
    pub curve_type: String,
    pub description: String,
    pub parameters: CurveParameters,
}

impl From<&Preset> for PresetSummary {
    fn from(preset: &Preset) -> Self {
        Self {
            name: preset.name.clone(),
            curve_type: preset.curve_type().name().to_string(),
            description: preset.description.clone(),
            parameters: preset.parameters,
        }
    }
}

impl Request {
    /// Parse a JSON request body. Malformed JSON is an invalid parameter.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SpiroError::invalid(format!("malformed request: {}", e)))
    }

    pub fn execute(&self, generator: &Generator) -> Result<Response> {
        match self {
            Request::Preset(req) => {
                info!(preset = %req.preset_name, output = %req.output_name, "generate preset");
                let saved = generator.generate_preset(&req.preset_name, &req.output_name)?;
                Ok(Response::Saved { path: saved.path, points: saved.points })
            }
            Request::Custom(req) => {
                let params = req.to_parameters(&generator.config().defaults)?;
                info!(curve = %params.curve_type(), output = %req.output_name, "generate custom");
                let saved = generator.generate_custom(&params, &req.output_name)?;
                Ok(Response::Saved { path: saved.path, points: saved.points })
            }
            Request::ListPresets => Ok(Response::Presets {
                presets: generator.catalog().list().iter().map(PresetSummary::from).collect(),
            }),
        }
    }
}

impl CustomRequest {
    pub fn new(curve_type: &str, output_name: &str) -> Self {
        Self {
            curve_type: curve_type.to_string(),
            output_name: output_name.to_string(),
            ..Self::default()
        }
    }

    /// Resolve into engine parameters, filling sampling from `defaults`.
    pub fn to_parameters(&self, defaults: &SamplingDefaults) -> Result<CurveParameters> {
        let curve_type = CurveType::from_name(&self.curve_type).ok_or_else(|| {
            SpiroError::invalid(format!("unknown curve type: {}", self.curve_type))
        })?;

        let curve = match curve_type {
            CurveType::Hypotrochoid | CurveType::Epitrochoid => {
                let params = TrochoidParams {
                    fixed_radius: required(self.big_r, "R", curve_type)?,
                    rolling_radius: required(self.r, "r", curve_type)?,
                    pen_offset: required(self.d, "d", curve_type)?,
                    revolutions: self.revolutions,
                };
                if curve_type == CurveType::Hypotrochoid {
                    Curve::Hypotrochoid(params)
                } else {
                    Curve::Epitrochoid(params)
                }
            }
            CurveType::Rose => Curve::Rose(RoseParams {
                n: required(self.n, "n", curve_type)?,
                d: self.d.unwrap_or(1.0),
            }),
            CurveType::Lissajous => Curve::Lissajous(LissajousParams {
                a: required(self.a, "a", curve_type)?,
                b: required(self.b, "b", curve_type)?,
                delta: self.delta.unwrap_or(0.0),
            }),
        };

        let params = CurveParameters {
            curve,
            num_points: self.num_points.unwrap_or(defaults.num_points),
            scale: self.scale.unwrap_or(defaults.scale),
            center_offset: self.center_offset.unwrap_or(defaults.center_offset),
        };
        params.validate()?;
        Ok(params)
    }
}

fn required(value: Option<f64>, name: &str, curve_type: CurveType) -> Result<f64> {
    value.ok_or_else(|| SpiroError::invalid(format!("{} requires parameter {}", curve_type, name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;

    #[test]
    fn parses_all_request_shapes() {
        let preset = Request::from_json(
            r#"{"action": "preset", "preset_name": "rose_5", "output_name": "out"}"#,
        )
        .unwrap();
        assert!(matches!(preset, Request::Preset(ref p) if p.preset_name == "rose_5"));

        let custom = Request::from_json(
            r#"{"action": "custom", "curve_type": "epitrochoid", "output_name": "o",
                "R": 1, "r": 0.1, "d": 0.3}"#,
        )
        .unwrap();
        assert!(matches!(custom, Request::Custom(ref c) if c.big_r == Some(1.0)));

        assert_eq!(Request::from_json(r#"{"action": "list_presets"}"#).unwrap(), Request::ListPresets);
    }

    #[test]
    fn malformed_json_is_invalid_parameter() {
        let err = Request::from_json(r#"{"action": "explode"}"#).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn custom_request_fills_defaults() {
        let mut req = CustomRequest::new("hypotrochoid", "x");
        req.big_r = Some(1.0);
        req.r = Some(0.25);
        req.d = Some(0.5);

        let defaults = SamplingDefaults { num_points: 1234, scale: 0.8, center_offset: 0.1 };
        let params = req.to_parameters(&defaults).unwrap();
        assert_eq!(params.num_points, 1234);
        assert_eq!(params.scale, 0.8);
        assert_eq!(params.center_offset, 0.1);
    }

    #[test]
    fn custom_request_missing_parameter() {
        let mut req = CustomRequest::new("lissajous", "x");
        req.a = Some(3.0);
        let err = req.to_parameters(&SamplingDefaults::default()).unwrap_err();
        assert!(err.to_string().contains("b"), "{}", err);
    }

    #[test]
    fn custom_request_unknown_curve() {
        let req = CustomRequest::new("cardioid", "x");
        let err = req.to_parameters(&SamplingDefaults::default()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn rose_request_accepts_signed_and_fractional_n() {
        let mut req = CustomRequest::new("rose", "x");
        req.n = Some(-5.0);
        let params = req.to_parameters(&SamplingDefaults::default()).unwrap();
        assert_eq!(params.curve, Curve::Rose(RoseParams { n: -5.0, d: 1.0 }));
        assert_eq!(
            crate::generate(&params).unwrap(),
            crate::generate(&CurveParameters::rose(5.0, 1.0)).unwrap()
        );

        req.n = Some(2.5);
        let params = req.to_parameters(&SamplingDefaults::default()).unwrap();
        assert_eq!(
            crate::generate(&params).unwrap(),
            crate::generate(&CurveParameters::rose(5.0, 2.0)).unwrap()
        );
    }

    #[test]
    fn rose_request_missing_n() {
        let req = CustomRequest::new("rose", "x");
        assert!(req.to_parameters(&SamplingDefaults::default()).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn rose_zero_numerator_rejected() {
        let mut req = CustomRequest::new("rose", "x");
        req.n = Some(0.0);
        assert!(req.to_parameters(&SamplingDefaults::default()).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn rose_zero_denominator_rejected() {
        let mut req = CustomRequest::new("rose", "x");
        req.n = Some(5.0);
        req.d = Some(0.0);
        assert!(req.to_parameters(&SamplingDefaults::default()).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn execute_list_presets() {
        let generator = Generator::new(Config::default()).unwrap();
        let Response::Presets { presets } = Request::ListPresets.execute(&generator).unwrap() else {
            panic!("expected a preset listing");
        };
        assert_eq!(presets.len(), 9);
        assert!(presets.iter().any(|p| p.name == "star_burst" && p.curve_type == "epitrochoid"));
    }

    #[test]
    fn execute_custom_writes_file() {
        let dir = std::env::temp_dir().join(format!("thr-spiro-req-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let config = Config { output_dir: dir.clone(), ..Config::default() };
        let generator = Generator::new(config).unwrap();

        let req = Request::from_json(
            r#"{"action": "custom", "curve_type": "lissajous", "output_name": "liss",
                "a": 3, "b": 4, "num_points": 50}"#,
        )
        .unwrap();
        let response = req.execute(&generator).unwrap();
        assert_eq!(response, Response::Saved { path: dir.join("liss.thr"), points: 50 });
        assert_eq!(fs::read_to_string(dir.join("liss.thr")).unwrap().lines().count(), 50);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn response_serializes_with_status() {
        let json = serde_json::to_string(&Response::Saved { path: PathBuf::from("a.thr"), points: 3 }).unwrap();
        assert_eq!(json, r#"{"status":"saved","path":"a.thr","points":3}"#);
    }
}
