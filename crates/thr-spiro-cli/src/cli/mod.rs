//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `presets` - List the preset catalog and curve types
//! - `preset` - Generate a named preset
//! - `custom` - Generate a curve from explicit parameters
//! - `request` - Run one JSON request
//! - `inspect` - Summarize an existing .thr file
//!
//! Every command returns `Result<(), String>`; `main` prints the error and
//! exits with status 1.

pub mod common;
pub mod generate;
pub mod inspect;
pub mod presets;
pub mod request;

pub use generate::{cmd_custom, cmd_preset};
pub use inspect::cmd_inspect;
pub use presets::cmd_presets;
pub use request::cmd_request;
