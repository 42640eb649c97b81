use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::error::{CompareError, Result};
use crate::logging::Logger;
use crate::merge::Line;

/// Something that can persist an ordered sequence of lines.
pub trait LineSink {
    /// Replace the contents of `path` with `lines` joined by `\n`.
    fn write_lines(&self, path: &Path, lines: &[Line]) -> Result<()>;
}

/// Writes lines to files, creating missing parent directories.
pub struct FileLineSink {
    logger: Arc<dyn Logger>,
}

impl FileLineSink {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl LineSink for FileLineSink {
    fn write_lines(&self, path: &Path, lines: &[Line]) -> Result<()> {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !dir.is_dir() {
                fs::create_dir_all(dir).map_err(|source| {
                    self.logger.log(
                        &format!("Failed to create directory: {}", dir.display()),
                        Level::ERROR,
                    );
                    CompareError::DirectoryCreateFailure {
                        path: dir.to_path_buf(),
                        source,
                    }
                })?;
            }
        }

        // No trailing separator; an empty slice gives an empty file.
        fs::write(path, lines.join(&b'\n')).map_err(|source| {
            self.logger.log(
                &format!("Error: Failed to write to file: {}", path.display()),
                Level::ERROR,
            );
            CompareError::WriteFailure {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.logger.log(
            &format!("Successfully wrote {} lines to {}", lines.len(), path.display()),
            Level::INFO,
        );
        Ok(())
    }
}
