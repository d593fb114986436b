//! Domain error types
//!
//! This module defines the error hierarchy for Encoda. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Encoda error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum EncodaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Host scripting gateway errors
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// Filename/version resolution errors
    #[error("Naming error: {0}")]
    Naming(String),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Host-specific errors
///
/// Errors that occur when talking to the editor's scripting gateway.
/// These errors don't expose the HTTP client types.
#[derive(Debug, Error)]
pub enum HostError {
    /// Failed to connect to the host gateway
    #[error("Failed to connect to host: {0}")]
    ConnectionFailed(String),

    /// Host responded but the payload could not be parsed
    #[error("Invalid response from host: {0}")]
    InvalidResponse(String),

    /// Host executed the call but reported a failure
    #[error("Host script error: {0}")]
    ScriptError(String),

    /// No active sequence is open in the host
    #[error("No active sequence: {0}")]
    NoActiveSequence(String),

    /// Call exceeded its deadline
    #[error("Host call timed out: {0}")]
    Timeout(String),

    /// The host does not implement the requested call (older host version)
    #[error("Host call unavailable: {0}")]
    Unavailable(String),
}

impl HostError {
    /// True when the error class means the host itself is unreachable,
    /// as opposed to a single call failing.
    pub fn is_connection(&self) -> bool {
        matches!(self, HostError::ConnectionFailed(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for EncodaError {
    fn from(err: std::io::Error) -> Self {
        EncodaError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for EncodaError {
    fn from(err: serde_json::Error) -> Self {
        EncodaError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for EncodaError {
    fn from(err: toml::de::Error) -> Self {
        EncodaError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<reqwest::Error> for HostError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HostError::Timeout(err.to_string())
        } else if err.is_connect() {
            HostError::ConnectionFailed(err.to_string())
        } else {
            HostError::InvalidResponse(err.to_string())
        }
    }
}
