//! Line sinks writing to a file, atomically over a file, or to standard output

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::application::{ApplicationError, LineSink};

/// Creates or truncates a file and writes the lines to it
pub struct FileLineSink {
    path: PathBuf,
}

impl FileLineSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LineSink for FileLineSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn write_lines(&self, lines: &[String]) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = fs::File::create(&self.path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut writer = BufWriter::new(file);
        for line in lines {
            writer.write_all(line.as_bytes()).await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to write file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        }

        writer.flush().await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to flush file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), lines = lines.len(), "Wrote file");
        Ok(())
    }
}

/// Replaces a file atomically.
///
/// Lines go to a temporary file next to the target, which is renamed over
/// the target once fully written. The target keeps its permissions. If
/// anything fails the original file is left as it was.
pub struct AtomicFileLineSink {
    path: PathBuf,
}

impl AtomicFileLineSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn replace(path: &Path, lines: &[String]) -> std::io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut writer = std::io::BufWriter::new(temp.as_file_mut());
            for line in lines {
                writer.write_all(line.as_bytes())?;
            }
            writer.flush()?;
        }
        temp.as_file().sync_all()?;

        if let Ok(metadata) = std::fs::metadata(path) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }

        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl LineSink for AtomicFileLineSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn write_lines(&self, lines: &[String]) -> Result<(), ApplicationError> {
        let path = self.path.clone();
        let count = lines.len();
        let lines = lines.to_vec();

        tokio::task::spawn_blocking(move || Self::replace(&path, &lines))
            .await
            .map_err(|e| ApplicationError::OutputError(format!("Task execution failed: {e}")))?
            .map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to replace file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        debug!(path = %self.path.display(), lines = count, "Replaced file in place");
        Ok(())
    }
}

/// Writes lines to standard output
pub struct StdoutLineSink;

impl StdoutLineSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutLineSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineSink for StdoutLineSink {
    fn describe(&self) -> String {
        "<stdout>".to_string()
    }

    async fn write_lines(&self, lines: &[String]) -> Result<(), ApplicationError> {
        let mut stdout = BufWriter::new(tokio::io::stdout());
        for line in lines {
            stdout.write_all(line.as_bytes()).await.map_err(|e| {
                ApplicationError::OutputError(format!("Failed to write stdout: {e}"))
            })?;
        }
        stdout
            .flush()
            .await
            .map_err(|e| ApplicationError::OutputError(format!("Failed to flush stdout: {e}")))?;
        Ok(())
    }
}
