//! Port interfaces for the application layer

use async_trait::async_trait;

use crate::application::ApplicationError;

/// Supplies an ordered, finite sequence of text lines.
///
/// Each line keeps its terminator exactly as read; the last line may have
/// none.
#[async_trait]
pub trait LineSource: Send + Sync {
    /// Human readable name of the source, used in logs and reports
    fn describe(&self) -> String;

    /// Read every line of the source
    async fn read_lines(&self) -> Result<Vec<String>, ApplicationError>;
}

/// Persists an ordered sequence of text lines
#[async_trait]
pub trait LineSink: Send + Sync {
    /// Human readable name of the destination, used in logs and reports
    fn describe(&self) -> String;

    /// Write all lines, in order, without adding or removing terminators
    async fn write_lines(&self, lines: &[String]) -> Result<(), ApplicationError>;
}
