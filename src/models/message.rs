//! Message records returned by the sim-service API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One retrieved SMS
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "Message")]
    pub text: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl MessageRecord {
    pub fn new(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Parsed receive time; `None` when the api sent a format we don't know
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .or_else(|_| DateTime::parse_from_rfc2822(&self.timestamp))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

/// Success body of `GET /messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageRecord>,
}
