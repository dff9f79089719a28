//! Error types for polyfill operations.
//!
//! Rewriting itself never fails; only the edges that touch the outside
//! world (files, decoding, configuration) return these.

use thiserror::Error;

/// Errors that can occur while loading input or configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
