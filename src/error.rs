//! # Error Types
//!
//! Structured errors for the construction, configuration and transport paths.
//!
//! The resolution path itself never surfaces these: every failure inside a
//! resolution is classified as a [`ResolutionFailure`] and rendered as a
//! sentinel value in the [`ResolutionResult`](crate::models::ResolutionResult).

use crate::constants::sentinels;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-level result type
pub type SimServiceResult<T> = Result<T, SimServiceError>;

/// Result type for the code fetcher
pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum SimServiceError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Registry error: {0}")]
    RegistryError(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Failure classes a resolution can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum ResolutionFailure {
    /// The selected parser key has no registered implementation
    #[error("no sms parser registered for the selected key")]
    NoParserFound,
    /// No resolver arguments (credentials) were supplied
    #[error("no resolver arguments supplied for the sms lookup")]
    NoSmsNumber,
    /// The fetch succeeded but no message yielded a code
    #[error("no message matched the parser")]
    NoMessageMatched,
    /// Transport failure, non-200 status or unexpected response shape
    #[error("sms api request failed")]
    ApiError,
}

impl ResolutionFailure {
    /// Sentinel value shown in place of a code
    pub fn sentinel(&self) -> &'static str {
        match self {
            ResolutionFailure::NoParserFound => sentinels::NO_PARSER,
            ResolutionFailure::NoSmsNumber => sentinels::NO_SMS_NUMBER,
            ResolutionFailure::NoMessageMatched => sentinels::NO_MSG,
            ResolutionFailure::ApiError => sentinels::API_ERROR,
        }
    }

    /// Reverse lookup from a rendered sentinel value
    pub fn from_sentinel(value: &str) -> Option<Self> {
        match value {
            sentinels::NO_PARSER => Some(ResolutionFailure::NoParserFound),
            sentinels::NO_SMS_NUMBER => Some(ResolutionFailure::NoSmsNumber),
            sentinels::NO_MSG => Some(ResolutionFailure::NoMessageMatched),
            sentinels::API_ERROR => Some(ResolutionFailure::ApiError),
            _ => None,
        }
    }
}

/// Errors raised by the sim-service code fetcher
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value for {header}")]
    InvalidHeader { header: &'static str },

    #[error("Invalid response (status {status}): {reason}")]
    InvalidResponse { status: u16, reason: String },
}

impl FetchError {
    /// Create an invalid response error for a body that does not match the
    /// expected message list shape
    pub fn invalid_response(status: u16, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            status,
            reason: reason.into(),
        }
    }

    /// HTTP status associated with the failure, when one was received.
    ///
    /// Pure transport failures (connect, DNS, TLS) never got a response and
    /// return `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http(e) => e.status().map(|s| s.as_u16()),
            FetchError::InvalidResponse { status, .. } => Some(*status),
            FetchError::InvalidHeader { .. } => None,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to read configuration file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Failed to write configuration file {path}: {reason}")]
    FileWrite { path: String, reason: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfigurationError {
    pub fn file_read_error(path: impl Into<String>, error: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
