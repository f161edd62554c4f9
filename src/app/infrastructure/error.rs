use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot read file {}:\n{source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write file {}:\n{source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl AppError {
    /// Path of the file an I/O failure refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FileRead { path, .. } | Self::FileWrite { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
        assert!(app_err.path().is_none());
    }

    #[test]
    fn test_file_errors_name_path_and_reason() {
        let err = AppError::FileRead {
            path: PathBuf::from("/no/such/file"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read file /no/such/file:\nNo such file or directory"
        );
        assert_eq!(err.path(), Some(std::path::Path::new("/no/such/file")));

        let err = AppError::FileWrite {
            path: PathBuf::from("/readonly/a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(err.to_string(), "Cannot write file /readonly/a.txt:\nPermission denied");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("invalid geometry".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid geometry");
    }
}
