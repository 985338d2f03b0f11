//! Line source and line sink implementations

pub mod file_sink;
pub mod file_source;

pub use file_sink::*;
pub use file_source::*;

use std::path::Path;
use std::sync::Arc;

use crate::application::{ConvertRequest, LineSink, LineSource, is_stdio};

/// Picks the source for an input argument; `None` and `-` mean stdin
pub fn line_source(input: Option<&Path>) -> Arc<dyn LineSource> {
    match input {
        Some(path) if !is_stdio(path) => Arc::new(FileLineSource::new(path)),
        _ => Arc::new(StdinLineSource::new()),
    }
}

/// Picks the sink matching a conversion request
pub fn line_sink(request: &ConvertRequest) -> Arc<dyn LineSink> {
    match (&request.output, &request.input) {
        (Some(output), _) if !is_stdio(output) => Arc::new(FileLineSink::new(output)),
        (None, Some(input)) if request.in_place => Arc::new(AtomicFileLineSink::new(input)),
        _ => Arc::new(StdoutLineSink::new()),
    }
}
