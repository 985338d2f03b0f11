//! Line sources backed by a file or standard input

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::application::{ApplicationError, LineSource};
use crate::core::Error;

/// Splits decoded text after every `\n`, keeping terminators attached
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

fn decode(bytes: Vec<u8>, origin: &str) -> Result<String, ApplicationError> {
    String::from_utf8(bytes)
        .map_err(|e| Error::encoding(format!("{origin} is not valid UTF-8: {e}")).into())
}

/// Reads lines from a UTF-8 text file
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LineSource for FileLineSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_lines(&self) -> Result<Vec<String>, ApplicationError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            ApplicationError::InputError(format!(
                "Failed to read file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let text = decode(bytes, &self.describe())?;
        Ok(split_lines(&text))
    }
}

/// Reads lines from standard input until EOF
pub struct StdinLineSource;

impl StdinLineSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinLineSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineSource for StdinLineSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    async fn read_lines(&self) -> Result<Vec<String>, ApplicationError> {
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .map_err(|e| ApplicationError::InputError(format!("Failed to read stdin: {e}")))?;

        let text = decode(bytes, &self.describe())?;
        Ok(split_lines(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_lines_keeps_terminators() {
        assert_eq!(split_lines("a\r\nb\n\nc"), vec!["a\r\n", "b\n", "\n", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[tokio::test]
    async fn test_file_source_reads_lines() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("input.h");
        std::fs::write(&path, "int foo_bar;\nvoid baz_qux();").unwrap();

        let source = FileLineSource::new(&path);
        let lines = source.read_lines().await.unwrap();

        assert_eq!(lines, vec!["int foo_bar;\n", "void baz_qux();"]);
        assert_eq!(source.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let source = FileLineSource::new(temp_dir.path().join("missing.h"));

        let result = source.read_lines().await;
        assert!(matches!(result, Err(ApplicationError::InputError(_))));
    }

    #[tokio::test]
    async fn test_file_source_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("binary.bin");
        std::fs::write(&path, [0x66, 0x5f, 0xff, 0xfe]).unwrap();

        let result = FileLineSource::new(&path).read_lines().await;
        match result {
            Err(ApplicationError::CoreError(Error::Encoding(msg))) => {
                assert!(msg.contains("not valid UTF-8"));
                assert!(msg.contains("binary.bin"));
            }
            other => panic!("expected encoding error, got {other:?}"),
        }
    }
}
