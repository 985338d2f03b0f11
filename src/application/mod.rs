//! Application layer - use cases wiring the rewrite engine to its I/O ports

pub mod commands;
pub mod convert_file;
pub mod errors;
pub mod generate_bench_file;
pub mod traits;

pub use commands::*;
pub use convert_file::*;
pub use errors::*;
pub use generate_bench_file::*;
pub use traits::*;
