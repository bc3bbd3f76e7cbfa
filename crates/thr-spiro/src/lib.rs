//! # thr-spiro
//!
//! Spirograph-style pattern generation for polar sand tables.
//!
//! A pattern goes through three stages:
//! 1. `curves::evaluate` samples a curve family (hypotrochoid, epitrochoid,
//!    rose, Lissajous) into raw points.
//! 2. `normalize::normalize` converts them to a continuous polar trajectory
//!    that fits the unit disc.
//! 3. `thr` writes the trajectory as `theta rho` text lines.
//!
//! `Generator` and `Request` sit on top for front ends that work with preset
//! names, output names and a config file.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Unlike Node.js, you must explicitly declare every module.

pub mod catalog;
pub mod config;
pub mod curves;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod normalize;
pub mod request;
pub mod thr;

// Re-export common types at crate root for convenience.
pub use catalog::{list_presets, resolve, Catalog, Preset};
pub use config::{Config, SamplingDefaults};
pub use curves::{
    evaluate, evaluate_custom, Curve, CurveParameters, CurveType, LissajousParams, RawPath,
    RoseParams, TrochoidParams,
};
pub use error::{Result, SpiroError};
pub use generator::{generate, generate_and_save, Generator, Saved};
pub use geometry::{PolarPoint, RawPoint, Trajectory};
pub use normalize::normalize;
pub use request::{CustomRequest, PresetRequest, PresetSummary, Request, Response};
pub use thr::{decode, encode, read_from_path, write_to_path, ThrEncoder};
