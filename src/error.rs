use std::io;
use std::path::PathBuf;

/// Errors that can occur while running a comparison.
///
/// Every variant is terminal for the comparison that raised it.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// The input file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input file is larger than the configured ceiling.
    #[error("File too large: {} ({size} bytes, maximum is {max} bytes)", path.display())]
    SizeExceeded { path: PathBuf, size: u64, max: u64 },

    /// The input exists but could not be read.
    #[error("Could not read file: {}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parent directory of an output file could not be created.
    #[error("Failed to create directory: {}", path.display())]
    DirectoryCreateFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write to file: {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience alias for comparison results.
pub type Result<T> = std::result::Result<T, CompareError>;
