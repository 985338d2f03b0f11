//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CoreError(#[from] crate::core::Error),
}

/// Validation errors for requests
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("--in-place needs an input file")]
    InPlaceRequiresFile,

    #[error("--in-place cannot be combined with an explicit output path")]
    ConflictingOutput,

    #[error("Input and output are the same file ({0}); use --in-place instead")]
    OutputOverwritesInput(String),
}
