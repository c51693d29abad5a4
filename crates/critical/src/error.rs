//! Style cache error types (pure - no I/O variants).

use thiserror::Error;

/// Errors raised while constructing a style cache.
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Cache key must not be empty")]
    EmptyKey,

    #[error("Cache key {0:?} contains characters outside [a-zA-Z0-9-]")]
    InvalidKey(String),

    #[error("Failed to compile class marker pattern: {0}")]
    Marker(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, StyleError>;
