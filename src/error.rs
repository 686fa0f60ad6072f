//! Error types for the clipboard store
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the clipboard store
#[derive(Error, Debug)]
pub enum ClipError {
    /// The store file exists but could not be read
    #[error("Failed to open clipboard file {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file was read but is not a string-to-string JSON object
    #[error("Failed to decode clipboard data in {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The mapping could not be serialized
    #[error("Failed to encode clipboard data")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// The store file could not be created or written
    #[error("Failed to write clipboard file {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lookup found no value under the requested key
    #[error("No value found for key '{key}'")]
    NotFound { key: String },

    /// The verb is not one of the supported subcommands
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },

    /// The OS clipboard is unavailable or refused the write
    #[error("System clipboard error: {message}")]
    SystemClipboard {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("{message}")]
    Validation { message: String },

    /// Writing user-facing output failed
    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

impl ClipError {
    /// Create a new load error
    pub fn load<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    /// Create a new decode error
    pub fn decode<P: Into<PathBuf>>(path: P, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create a new save error
    pub fn save<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Save {
            path: path.into(),
            source,
        }
    }

    /// Create a new not-found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a new unknown command error
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Create a new system clipboard error wrapping the platform failure
    pub fn system_clipboard<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SystemClipboard {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the usage text should accompany this error
    #[must_use]
    pub const fn wants_usage(&self) -> bool {
        matches!(self, Self::UnknownCommand { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ClipError>;
