//! Error types for the selector library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading the catalog or dispatching commands.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Neither the primary data source nor the seed fallback exists.
    #[error("missing data source: neither {} nor {} exists", primary.display(), fallback.display())]
    DataUnavailable { primary: PathBuf, fallback: PathBuf },

    /// A named array literal was not found, was malformed, or exceeded
    /// the evaluation deadline.
    #[error("parse error: {0}")]
    Parse(String),

    /// Missing required option or unknown command.
    #[error("{0}")]
    Usage(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SelectorError>;
