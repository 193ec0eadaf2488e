//! Error types for the logging facility
//!
//! Logging itself never fails visibly; these errors exist for the fallible
//! configuration helpers (log-file resolution and opening) and are absorbed
//! into error-level self-diagnostics at the public surface.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log file path could not be resolved to an absolute form.
    #[error("cannot resolve log file path '{path}': {source}")]
    ResolvePath {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be created or opened for appending.
    #[error("cannot open log file '{path}': {source}")]
    OpenLogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create a path resolution error
    pub(crate) fn resolve_path(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::ResolvePath {
            path: path.into(),
            source,
        }
    }

    /// Create a file open error
    pub(crate) fn open_log_file(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::OpenLogFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::open_log_file("/missing/dir/app.log", io_err);
        assert_eq!(
            err.to_string(),
            "cannot open log file '/missing/dir/app.log': no such directory"
        );
    }

    #[test]
    fn test_error_source_preserved() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::resolve_path("/etc/secret.log", io_err);
        assert!(err.source().is_some());
    }
}
