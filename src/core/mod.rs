//! camelize core library support
//!
//! Shared error type and configuration model used by the application and
//! infrastructure layers.

pub mod config;
pub mod error;

pub use config::{BenchFileConfig, Config};
pub use error::{Error, Result};
