//! Error type shared by the engine, the catalog and the request layer.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Every fallible function returns `Result<T, SpiroError>`. The `thiserror`
//! derive writes the `Display` and `std::error::Error` impls for us, and
//! `#[source]` keeps the underlying io error reachable for callers that want
//! to walk the chain.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpiroError>;

#[derive(Debug, Error)]
pub enum SpiroError {
    /// Out-of-domain or degenerate input, rejected before any evaluation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown preset: {0}")]
    PresetNotFound(String),

    /// The generated shape has no extent (every radius is zero), so it
    /// cannot be normalized.
    #[error("degenerate pattern: {0}")]
    DegenerateResult(String),

    #[error("I/O error on {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("catalog error: {0}")]
    Catalog(String),
}

impl SpiroError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SpiroError::InvalidParameter(msg.into())
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpiroError::Storage { path: path.into(), source }
    }

    /// True for errors caused by the caller's input rather than by the
    /// environment. Unknown preset names count as bad input.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SpiroError::InvalidParameter(_) | SpiroError::PresetNotFound(_))
    }
}
