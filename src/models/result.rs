//! ResolutionResult
//!
//! Normalized outcome of one resolution. A successful result always carries a
//! real code and its message timestamp; a failed one always carries a
//! sentinel value and no timestamp. The constructors are the only way to
//! build one, so the two shapes can't be mixed.

use serde::Serialize;

use crate::error::ResolutionFailure;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    value: String,
    timestamp: Option<String>,
    is_error: bool,
}

impl ResolutionResult {
    /// A code extracted from the message received at `timestamp`
    pub fn success(code: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            value: code.into(),
            timestamp: Some(timestamp.into()),
            is_error: false,
        }
    }

    pub fn failure(failure: ResolutionFailure) -> Self {
        Self {
            value: failure.sentinel().to_string(),
            timestamp: None,
            is_error: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Failure class of an error result
    pub fn failure_kind(&self) -> Option<ResolutionFailure> {
        if self.is_error {
            ResolutionFailure::from_sentinel(&self.value)
        } else {
            None
        }
    }
}

impl From<ResolutionFailure> for ResolutionResult {
    fn from(failure: ResolutionFailure) -> Self {
        Self::failure(failure)
    }
}
