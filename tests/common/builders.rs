//! Builders for test contexts and requests.

use std::sync::Arc;

use simservice_resolver::registry::{
    InMemoryParserRegistry, InMemoryProfileRegistry, MessageParser,
};
use simservice_resolver::services::CodeFetcher;
use simservice_resolver::{
    Field, HostContext, ProfileRecord, ResolutionEngine, ResolutionRequest, Site,
};

pub const TEST_PHONE_NUMBER: &str = "+15550100";

/// Builder for a resolution engine wired to in-memory registries
pub struct EngineBuilder {
    parsers: InMemoryParserRegistry,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            parsers: InMemoryParserRegistry::new(),
        }
    }

    pub fn with_sms_parser(self, key: &str, parser: Arc<dyn MessageParser>) -> Self {
        self.parsers
            .register_parser("sms", key, parser)
            .expect("Failed to register test parser");
        self
    }

    pub fn build(self, fetcher: Arc<dyn CodeFetcher>) -> ResolutionEngine {
        let context = HostContext::new(
            Arc::new(self.parsers),
            Arc::new(InMemoryProfileRegistry::new()),
        );
        ResolutionEngine::new(context, fetcher)
    }
}

/// An sms-code request for `site` with the given resolver arguments
pub fn sms_request(site: Site, args: &[&str]) -> ResolutionRequest {
    let request = ResolutionRequest::new(
        Field::SmsCode,
        site,
        ProfileRecord::new("test-profile").with_sms_lookup_number(TEST_PHONE_NUMBER),
    )
    .with_resolver_args(args.iter().copied());

    if site == Site::Other {
        request.with_url("https://example.com/verify")
    } else {
        request
    }
}
