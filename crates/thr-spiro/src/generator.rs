//! The end-to-end pipeline: evaluate, normalize, encode.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::curves::{evaluate, CurveParameters};
use crate::error::{Result, SpiroError};
use crate::geometry::Trajectory;
use crate::normalize::normalize;
use crate::thr::{write_to_path, ThrEncoder};

/// Generate a trajectory in memory, without touching storage.
#[instrument(level = "debug", skip_all, fields(curve = %params.curve_type(), points = params.num_points))]
pub fn generate(params: &CurveParameters) -> Result<Trajectory> {
    let raw = evaluate(params)?;
    let trajectory = normalize(&raw, params.scale, params.center_offset)?;
    debug!(revolutions = trajectory.revolutions(), "normalized trajectory");
    Ok(trajectory)
}

/// Generate a trajectory and write it to `path`.
///
/// Nothing is written unless generation succeeds. An existing file at
/// `path` is replaced.
pub fn generate_and_save(params: &CurveParameters, path: impl AsRef<Path>) -> Result<PathBuf> {
    let trajectory = generate(params)?;
    write_to_path(&trajectory, path)
}

/// Result of a saved generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Saved {
    pub path: PathBuf,
    pub points: usize,
}

/// Ties the engine to a config and a preset catalog: resolves names, picks
/// output paths and creates the output directory.
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
    catalog: Catalog,
}

impl Generator {
    /// Build from a config, loading its preset file if it names one.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let catalog = config.catalog()?;
        Ok(Self { config, catalog })
    }

    /// Use an explicit catalog instead of the configured one.
    pub fn with_catalog(config: Config, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn encoder(&self) -> ThrEncoder {
        ThrEncoder::new(self.config.precision)
    }

    /// Save a finished trajectory as `<output_dir>/<name>.thr`.
    pub fn save(&self, trajectory: &Trajectory, name: &str) -> Result<PathBuf> {
        let path = self.config.output_path(name)?;
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| SpiroError::storage(&self.config.output_dir, e))?;
        self.encoder().write(trajectory, path)
    }

    /// Generate `params` and save under `name`.
    pub fn generate_custom(&self, params: &CurveParameters, name: &str) -> Result<Saved> {
        // reject a bad name before doing any work
        self.config.output_path(name)?;
        let trajectory = generate(params)?;
        let path = self.save(&trajectory, name)?;
        Ok(Saved { path, points: trajectory.len() })
    }

    /// Generate the named preset and save under `name`.
    pub fn generate_preset(&self, preset: &str, name: &str) -> Result<Saved> {
        let params = self.catalog.resolve(preset)?;
        self.generate_custom(&params, name)
    }

    /// Render a trajectory with the configured precision.
    pub fn encode(&self, trajectory: &Trajectory) -> String {
        self.encoder().encode(trajectory)
    }
}
