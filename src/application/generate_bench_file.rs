//! Use case for generating a large benchmark input file

use std::sync::Arc;
use tracing::info;

use crate::application::{ApplicationError, BenchFileRequest, BenchFileResponse, LineSink};

/// Lays out `header` once followed by `count` copies of `block`
pub fn bench_file_lines(header: &str, block: &str, count: usize) -> Vec<String> {
    let block_lines: Vec<&str> = block.split_inclusive('\n').collect();
    let mut lines = Vec::with_capacity(header.lines().count() + block_lines.len() * count);

    lines.extend(header.split_inclusive('\n').map(str::to_string));
    for _ in 0..count {
        lines.extend(block_lines.iter().map(|line| line.to_string()));
    }
    lines
}

/// Writes a benchmark file through a line sink
pub struct GenerateBenchFileUseCase {
    sink: Arc<dyn LineSink>,
}

impl GenerateBenchFileUseCase {
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }

    pub async fn execute(
        &self,
        request: BenchFileRequest,
    ) -> Result<BenchFileResponse, ApplicationError> {
        let destination = self.sink.describe();
        info!(%destination, count = request.count, "Generating benchmark file");

        let lines = bench_file_lines(&request.header, &request.block, request.count);
        self.sink.write_lines(&lines).await?;

        Ok(BenchFileResponse {
            destination,
            repetitions: request.count,
            lines: lines.len(),
        })
    }
}
