use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while scanning a log corpus
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Failed to decompress {path}: {source}")]
    Decompression {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid UTF-8 in file {path}: {source}")]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid archive pattern: {0}")]
    InvalidPattern(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound(path.into())
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn decompression(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Decompression {
            path: path.into(),
            source,
        }
    }

    pub fn encoding(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern(pattern.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let path = Path::new("logs");
        let err = ScanError::directory_not_found(path);
        assert!(matches!(err, ScanError::DirectoryNotFound(_)));

        let err = ScanError::file_not_found(path);
        assert!(matches!(err, ScanError::FileNotFound(_)));

        let err = ScanError::permission_denied(path);
        assert!(matches!(err, ScanError::PermissionDenied(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "corrupt stream");
        let err = ScanError::decompression("app.1.gz", io_err);
        assert!(matches!(err, ScanError::Decompression { .. }));

        let err = ScanError::invalid_pattern("**[");
        assert!(matches!(err, ScanError::InvalidPattern(_)));

        let err = ScanError::config("missing query");
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = ScanError::directory_not_found("logs");
        assert_eq!(err.to_string(), "Directory not found: logs");

        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "corrupt stream");
        let err = ScanError::decompression("app.1.gz", io_err);
        assert_eq!(
            err.to_string(),
            "Failed to decompress app.1.gz: corrupt stream"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = ScanError::output_write("out/results.txt", io_err);
        assert_eq!(
            err.to_string(),
            "Failed to write output out/results.txt: no such directory"
        );

        let err = ScanError::config("missing query");
        assert_eq!(err.to_string(), "Configuration error: missing query");
    }
}
