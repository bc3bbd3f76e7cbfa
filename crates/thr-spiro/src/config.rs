//! Generator configuration, loaded from YAML.
//!
//! ```yaml
//! output_dir: ./patterns
//! precision: 5
//! catalog: ./my_presets.yaml
//! defaults:
//!   num_points: 3000
//!   scale: 0.9
//!   center_offset: 0.05
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::curves::{
    validate_center_offset, validate_num_points, validate_scale, DEFAULT_CENTER_OFFSET,
    DEFAULT_NUM_POINTS, DEFAULT_SCALE,
};
use crate::error::{Result, SpiroError};
use crate::thr::DEFAULT_PRECISION;

/// File extension of generated patterns.
pub const THR_EXTENSION: &str = "thr";

/// Fewest decimals the encoder will write; coarser output visibly facets
/// the curve on the table.
pub const MIN_PRECISION: usize = 5;

/// Most decimals the encoder will write.
pub const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory generated `.thr` files are saved to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Decimal places per column in `.thr` output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Optional YAML preset file layered over the built-in presets
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Sampling used by custom requests that leave it out
    #[serde(default)]
    pub defaults: SamplingDefaults,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./patterns")
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingDefaults {
    #[serde(default = "default_num_points")]
    pub num_points: usize,

    #[serde(default = "default_scale")]
    pub scale: f64,

    #[serde(default)]
    pub center_offset: f64,
}

fn default_num_points() -> usize {
    DEFAULT_NUM_POINTS
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            scale: DEFAULT_SCALE,
            center_offset: DEFAULT_CENTER_OFFSET,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            precision: DEFAULT_PRECISION,
            catalog: None,
            defaults: SamplingDefaults::default(),
        }
    }
}

impl Config {
    /// Parse YAML config text and check its values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // an empty file is a valid, all-default config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SpiroError::invalid(format!("failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A relative `catalog` path is resolved against the
    /// config file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SpiroError::storage(path, e))?;
        let mut config = Self::from_yaml_str(&content)?;

        if let (Some(catalog), Some(base)) = (config.catalog.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(base.join(catalog));
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(SpiroError::invalid(format!(
                "precision must be between {} and {}, got {}",
                MIN_PRECISION, MAX_PRECISION, self.precision
            )));
        }
        validate_num_points(self.defaults.num_points)?;
        validate_scale(self.defaults.scale)?;
        validate_center_offset(self.defaults.center_offset)
    }

    /// The built-in presets plus the configured preset file, if any.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Ok(Catalog::builtin().merged(&Catalog::load(path)?)),
            None => Ok(Catalog::builtin().clone()),
        }
    }

    /// Where a pattern called `name` is saved.
    ///
    /// The name must be a bare file name: no directories, no `..`. A missing
    /// `.thr` extension is added.
    pub fn output_path(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpiroError::invalid("output name is empty"));
        }
        if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
            return Err(SpiroError::invalid(format!(
                "output name must be a plain file name, got {:?}",
                name
            )));
        }

        let suffix = format!(".{}", THR_EXTENSION);
        let file_name = if name.ends_with(&suffix) {
            name.to_string()
        } else {
            format!("{}{}", name, suffix)
        };
        Ok(self.output_dir.join(file_name))
    }
}
