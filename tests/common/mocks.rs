//! Mock collaborators for testing the resolution engine and plugin
//! lifecycle without a real host or sim-service deployment.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use simservice_resolver::error::{FetchError, FetchResult};
use simservice_resolver::registry::{MessageParser, ProfileRegistry, ProfileResolver};
use simservice_resolver::services::{CodeFetcher, FetchResponse};
use simservice_resolver::{HostContext, MessageRecord, ResolutionRequest};

/// What the mock fetcher answers with on every call
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// 200 with these messages
    Messages(Vec<MessageRecord>),
    /// Any non-200 status
    Status(u16),
    /// 200 with a body that isn't a message list
    InvalidBody,
}

/// A recorded fetch invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub phone_number: String,
    pub api_key: String,
    pub user_key: Option<String>,
}

/// Code fetcher that records its calls and answers from a script
pub struct MockFetcher {
    outcome: MockOutcome,
    calls: Arc<Mutex<Vec<FetchCall>>>,
}

impl MockFetcher {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_messages(messages: Vec<MessageRecord>) -> Self {
        Self::new(MockOutcome::Messages(messages))
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CodeFetcher for MockFetcher {
    async fn fetch(
        &self,
        phone_number: &str,
        api_key: &str,
        user_key: Option<&str>,
    ) -> FetchResult<FetchResponse> {
        self.calls.lock().unwrap().push(FetchCall {
            phone_number: phone_number.to_string(),
            api_key: api_key.to_string(),
            user_key: user_key.map(str::to_string),
        });

        match &self.outcome {
            MockOutcome::Messages(messages) => Ok(FetchResponse::ok(messages.clone())),
            MockOutcome::Status(status) => Ok(FetchResponse::with_status(*status)),
            MockOutcome::InvalidBody => Err(FetchError::invalid_response(
                200,
                "missing field `messages`",
            )),
        }
    }
}

/// Parser returning whatever follows `prefix`, recording every text it sees
pub struct RecordingParser {
    prefix: String,
    seen: Mutex<Vec<String>>,
}

impl RecordingParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl MessageParser for RecordingParser {
    fn parse_message(
        &self,
        _context: &HostContext,
        _request: &ResolutionRequest,
        text: &str,
    ) -> Option<String> {
        self.seen.lock().unwrap().push(text.to_string());
        text.strip_prefix(self.prefix.as_str())
            .map(|rest| rest.split_whitespace().next().unwrap_or_default().to_string())
    }
}

/// Profile registry counting add/remove calls
#[derive(Default)]
pub struct RecordingProfileRegistry {
    pub added: Mutex<Vec<String>>,
    pub removed: Mutex<Vec<String>>,
}

impl RecordingProfileRegistry {
    pub fn add_count(&self) -> usize {
        self.added.lock().unwrap().len()
    }

    pub fn remove_count(&self) -> usize {
        self.removed.lock().unwrap().len()
    }
}

impl ProfileRegistry for RecordingProfileRegistry {
    fn add_resolver(&self, resolver: Arc<dyn ProfileResolver>) {
        self.added.lock().unwrap().push(resolver.name().to_string());
    }

    fn remove_resolver(&self, resolver: &Arc<dyn ProfileResolver>) {
        self.removed.lock().unwrap().push(resolver.name().to_string());
    }
}
