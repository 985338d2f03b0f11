//! Data Transfer Objects for application layer

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application::ValidationError;
use crate::conversion::{CasePolicy, ConversionStats};

/// Request to rewrite one input into one output
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertRequest {
    /// Input file; `None` reads standard input
    pub input: Option<PathBuf>,
    /// Output file; `None` writes standard output unless `in_place` is set
    pub output: Option<PathBuf>,
    /// Replace the input file atomically with the result
    pub in_place: bool,
    pub policy: CasePolicy,
}

impl ConvertRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let input = self.input.as_deref().filter(|p| !is_stdio(p));
        let output = self.output.as_deref().filter(|p| !is_stdio(p));

        if self.in_place {
            if input.is_none() {
                return Err(ValidationError::InPlaceRequiresFile);
            }
            if self.output.is_some() {
                return Err(ValidationError::ConflictingOutput);
            }
        }

        // Truncating the output before the input is read would lose the file
        if let (Some(input), Some(output)) = (input, output) {
            if input == output {
                return Err(ValidationError::OutputOverwritesInput(
                    input.display().to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// `-` stands for stdin or stdout
pub fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Response from a conversion run
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
    pub source: String,
    pub destination: String,
    pub policy: CasePolicy,
    pub stats: ConversionStats,
}

/// Request to generate a benchmark input file
#[derive(Debug, Clone, Deserialize)]
pub struct BenchFileRequest {
    pub output: PathBuf,
    /// How many times `block` is repeated after `header`
    pub count: usize,
    pub header: String,
    pub block: String,
}

impl From<crate::core::BenchFileConfig> for BenchFileRequest {
    fn from(config: crate::core::BenchFileConfig) -> Self {
        Self {
            output: config.output,
            count: config.count,
            header: config.header,
            block: config.block,
        }
    }
}

/// Response from benchmark file generation
#[derive(Debug, Clone, Serialize)]
pub struct BenchFileResponse {
    pub destination: String,
    pub repetitions: usize,
    pub lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_request_defaults_are_valid() {
        let request = ConvertRequest::default();
        assert_eq!(request.policy, CasePolicy::Camel);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_in_place_requires_input() {
        let request = ConvertRequest {
            in_place: true,
            ..Default::default()
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::InPlaceRequiresFile)
        );
    }

    #[test]
    fn test_in_place_conflicts_with_output() {
        let request = ConvertRequest {
            input: Some(PathBuf::from("a.h")),
            output: Some(PathBuf::from("b.h")),
            in_place: true,
            ..Default::default()
        };
        assert_eq!(request.validate(), Err(ValidationError::ConflictingOutput));
    }

    #[test]
    fn test_in_place_rejects_stdin() {
        let request = ConvertRequest {
            input: Some(PathBuf::from("-")),
            in_place: true,
            ..Default::default()
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::InPlaceRequiresFile)
        );
    }

    #[test]
    fn test_dash_for_both_ends_is_valid() {
        let request = ConvertRequest {
            input: Some(PathBuf::from("-")),
            output: Some(PathBuf::from("-")),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_output_must_differ_from_input() {
        let request = ConvertRequest {
            input: Some(PathBuf::from("a.h")),
            output: Some(PathBuf::from("a.h")),
            ..Default::default()
        };
        assert!(matches!(
            request.validate(),
            Err(ValidationError::OutputOverwritesInput(_))
        ));
    }

    #[test]
    fn test_bench_request_from_config() {
        let request = BenchFileRequest::from(crate::core::BenchFileConfig::default());
        assert_eq!(request.count, 10_000);
        assert_eq!(request.output, PathBuf::from("bench.flx"));
    }
}
