use std::io;
use thiserror::Error;

/// Application-wide error type for the code surrounding the classifiers.
///
/// Classification itself never fails; these variants only come out of
/// configuration loading, lexicon files and task-draft validation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors (reading lexicon or title files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents task-draft validation errors (e.g., an empty title).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unknown log format).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents a keyword or polarity lexicon that could not be parsed.
    #[error("Lexicon error: {0}")]
    Lexicon(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Lexicon(s) => AppError::Lexicon(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Lexicon(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_lexicon() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Lexicon(_)));
        assert!(app.to_string().starts_with("Lexicon error: JSON error"));
    }

    #[test]
    fn test_clone_preserves_io_kind() {
        let err = AppError::Io(io::Error::new(io::ErrorKind::NotFound, "missing.json"));
        match err.clone() {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
