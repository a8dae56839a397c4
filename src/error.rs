//! Error types for twolist

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for twolist
#[derive(Debug, Error)]
pub enum TwolistError {
    #[error("Not a twolist directory: {0}")]
    NotTwolistDirectory(PathBuf),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TwolistError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TwolistError::NotTwolistDirectory(_) => 2,
            TwolistError::InvalidCategory(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TwolistError::NotTwolistDirectory(path) => {
                format!(
                    "Not a twolist directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'twolist init' in this directory to create your lists\n\
                    • Navigate to an existing twolist directory\n\
                    • Set TWOLIST_ROOT environment variable to your list path",
                    path.display()
                )
            }
            TwolistError::InvalidCategory(value) => {
                format!(
                    "Invalid category: '{}'\n\n\
                    Valid categories: work, travel\n\
                    Example: twolist use travel",
                    value
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TwolistError
pub type Result<T> = std::result::Result<T, TwolistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_twolist_directory_suggestion() {
        let err = TwolistError::NotTwolistDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("twolist init"));
        assert!(msg.contains("TWOLIST_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_category_suggestion() {
        let err = TwolistError::InvalidCategory("home".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'home'"));
        assert!(msg.contains("work, travel"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TwolistError::NotTwolistDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(TwolistError::InvalidCategory("x".into()).exit_code(), 3);
        assert_eq!(TwolistError::Storage("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TwolistError::Storage("disk full".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Storage error: disk full");
    }
}
