use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::error::{CompareError, Result};
use crate::logging::Logger;
use crate::merge::Line;
use crate::utils::trim_line;

/// Default per-file ceiling: 10 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Something that can produce an ordered sequence of lines.
pub trait LineSource {
    /// Read `path` into trimmed, non-empty lines in file order.
    ///
    /// Fails with [`CompareError::SizeExceeded`] before reading anything if
    /// the file is larger than `max_bytes`.
    fn read_lines(&self, path: &Path, max_bytes: u64) -> Result<Vec<Line>>;
}

/// Reads lines from files on disk.
pub struct FileLineSource {
    logger: Arc<dyn Logger>,
    max_bytes: u64,
}

impl FileLineSource {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Read with this source's own ceiling.
    pub fn read(&self, path: &Path) -> Result<Vec<Line>> {
        self.read_lines(path, self.max_bytes)
    }

    fn fail(&self, err: CompareError) -> CompareError {
        self.logger.log(&format!("Error: {err}"), Level::ERROR);
        err
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self, path: &Path, max_bytes: u64) -> Result<Vec<Line>> {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(self.fail(CompareError::NotFound {
                    path: path.to_path_buf(),
                }));
            }
            Err(source) => {
                return Err(self.fail(CompareError::ReadFailure {
                    path: path.to_path_buf(),
                    source,
                }));
            }
        };

        if !meta.is_file() {
            return Err(self.fail(CompareError::ReadFailure {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            }));
        }

        let size = meta.len();
        if size > max_bytes {
            return Err(self.fail(CompareError::SizeExceeded {
                path: path.to_path_buf(),
                size,
                max: max_bytes,
            }));
        }

        let read_failure = |source| CompareError::ReadFailure {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(|e| self.fail(read_failure(e)))?;
        let mut lines = Vec::new();
        for raw in BufReader::new(file).split(b'\n') {
            let raw = raw.map_err(|e| self.fail(read_failure(e)))?;
            let trimmed = trim_line(&raw);
            if !trimmed.is_empty() {
                lines.push(trimmed.to_vec());
            }
        }

        self.logger.log(
            &format!("Successfully read {} lines from {}", lines.len(), path.display()),
            Level::INFO,
        );
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::TracingLogger;
    use tempfile::TempDir;

    fn source() -> FileLineSource {
        FileLineSource::new(Arc::new(TracingLogger))
    }

    fn lines(items: &[&str]) -> Vec<Line> {
        items.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn reads_lines_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.txt");
        fs::write(&path, "line1\nline2\nline3\n").unwrap();

        assert_eq!(source().read(&path).unwrap(), lines(&["line1", "line2", "line3"]));
    }

    #[test]
    fn trims_and_drops_blank_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.txt");
        fs::write(&path, "  apple \r\n\r\n\t\nbanana\r\n   \ncherry").unwrap();

        assert_eq!(source().read(&path).unwrap(), lines(&["apple", "banana", "cherry"]));
    }

    #[test]
    fn trims_ascii_padding_and_nul_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.txt");
        fs::write(&path, "\u{A0}apple\nbanana\0\n\u{3000}\n\x0B\0\n").unwrap();

        assert_eq!(
            source().read(&path).unwrap(),
            lines(&["\u{a0}apple", "banana", "\u{3000}"])
        );
    }

    #[test]
    fn keeps_non_utf8_bytes_verbatim() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("latin.txt");
        fs::write(&path, b"caf\xE9\r\n\x80\n").unwrap();

        assert_eq!(
            source().read(&path).unwrap(),
            vec![b"caf\xE9".to_vec(), vec![0x80]]
        );
    }

    #[test]
    fn empty_file_gives_no_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(source().read(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = source().read(&tmp.path().join("nope.txt")).unwrap_err();

        assert!(matches!(err, CompareError::NotFound { .. }));
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn ceiling_is_inclusive() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.txt");
        fs::write(&path, "x".repeat(100)).unwrap();

        assert_eq!(source().read_lines(&path, 100).unwrap().len(), 1);
        let err = source().read_lines(&path, 99).unwrap_err();
        assert!(matches!(
            err,
            CompareError::SizeExceeded {
                size: 100,
                max: 99,
                ..
            }
        ));
    }

    #[test]
    fn configured_ceiling_applies_to_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.txt");
        fs::write(&path, "x".repeat(200)).unwrap();

        let err = source().with_max_bytes(100).read(&path).unwrap_err();
        assert!(matches!(err, CompareError::SizeExceeded { .. }));
    }

    #[test]
    fn directory_is_a_read_failure() {
        let tmp = TempDir::new().unwrap();
        let err = source().read(tmp.path()).unwrap_err();

        assert!(matches!(err, CompareError::ReadFailure { .. }));
    }
}
