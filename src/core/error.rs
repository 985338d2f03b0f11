//! Error handling for the camelize library.
//!
//! This module defines the main error type `Error` used by the configuration
//! layer and the I/O adapters, along with a convenient `Result` type alias.
//! The rewrite engine itself never fails; only loading configuration and
//! moving text in and out of files can.
//!
//! # Examples
//!
//! ```
//! use camelize::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("missing policy"))
//! }
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

/// Result type for camelize operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for camelize operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that is not valid UTF-8 text
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new encoding error
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Self::Encoding(msg.into())
    }
}
