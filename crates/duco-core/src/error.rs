//! Error types for the DUCO core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for the site runtime.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A document operation failed in the host runtime.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The preference store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new DOM error.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }

    /// Create a new storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("counter_frames must be positive");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("counter_frames"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let err = CoreError::config_with_source("failed to read duco.toml", io_err);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_dom_error() {
        let err = CoreError::dom("querySelectorAll(.card) failed");
        assert!(err.to_string().contains("DOM error"));
        assert!(err.to_string().contains(".card"));
    }

    #[test]
    fn test_storage_error() {
        let err = CoreError::storage("quota exceeded");
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
