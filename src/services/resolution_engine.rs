//! # Resolution Engine
//!
//! Orchestrates one resolution: parser selection, the sim-service fetch and
//! first-match message parsing, producing exactly one [`ResolutionResult`].
//!
//! ```text
//! Start -> ParserLookup -> NoParser                                  (#NO PARSER)
//!                       -> HasParser -> NoCredentials                (#NO SMS NUMBER)
//!                                    -> Fetching -> FetchFailed      (#API ERROR)
//!                                                -> ParsingMessages -> CodeFound (code)
//!                                                                   -> NoMatch   (#NO MSG)
//! ```
//!
//! `resolve` never fails: every failure is classified into a sentinel result.
//! The engine is stateless, so concurrent resolutions share nothing mutable.

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::constants::parsers;
use crate::context::HostContext;
use crate::error::{FetchError, ResolutionFailure};
use crate::models::{MessageRecord, ResolutionRequest, ResolutionResult};
use crate::registry::MessageParser;
use crate::services::code_fetcher::{CodeFetcher, FetchResponse};
use crate::services::parser_selection::select_parser_key;

pub struct ResolutionEngine {
    context: HostContext,
    fetcher: Arc<dyn CodeFetcher>,
}

impl std::fmt::Debug for ResolutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionEngine")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl ResolutionEngine {
    /// The engine keeps only a weak handle on the host profile registry,
    /// since that registry ends up owning the resolver wrapping this engine.
    pub fn new(context: HostContext, fetcher: Arc<dyn CodeFetcher>) -> Self {
        Self {
            context: context.downgrade(),
            fetcher,
        }
    }

    pub fn context(&self) -> &HostContext {
        &self.context
    }

    /// Resolve the sms code for `request`
    #[instrument(skip_all, fields(field = %request.field, site = %request.site))]
    pub async fn resolve(&self, request: &ResolutionRequest) -> ResolutionResult {
        let parser_key = select_parser_key(request.site, &request.resolver_args);

        let Some(parser) = self
            .context
            .parser_registry()
            .get_parser(parsers::SMS_DOMAIN, parser_key)
        else {
            warn!(
                parser_key = parser_key,
                "Could not find an sms parser for {}",
                parser_key.unwrap_or("<none>")
            );
            return ResolutionFailure::NoParserFound.into();
        };

        let Some(api_key) = request.resolver_args.api_key() else {
            debug!("No resolver arguments supplied - skipping sms lookup");
            return ResolutionFailure::NoSmsNumber.into();
        };

        // A profile without the lookup attribute is still queried; the api
        // decides what an empty number means.
        let phone_number = request.profile.sms_lookup_number().unwrap_or_default();

        let response = match self
            .fetcher
            .fetch(phone_number, api_key, request.resolver_args.user_key())
            .await
        {
            Ok(response) if response.is_ok() => response,
            Ok(response) => {
                Self::log_api_failure(Some(response.status), None);
                return ResolutionFailure::ApiError.into();
            }
            Err(error) => {
                Self::log_api_failure(error.status(), Some(&error));
                return ResolutionFailure::ApiError.into();
            }
        };

        self.first_code(parser.as_ref(), request, &response)
    }

    /// Apply `parser` to each message in api order, stopping at the first
    /// non-empty code
    fn first_code(
        &self,
        parser: &dyn MessageParser,
        request: &ResolutionRequest,
        response: &FetchResponse,
    ) -> ResolutionResult {
        let found = response.messages.iter().find_map(|message: &MessageRecord| {
            parser
                .parse_message(&self.context, request, &message.text)
                .filter(|code| !code.is_empty())
                .map(|code| (code, message))
        });

        match found {
            Some((code, message)) => {
                debug!(timestamp = %message.timestamp, "Extracted sms code");
                ResolutionResult::success(code, message.timestamp.clone())
            }
            None => {
                debug!(
                    messages = response.messages.len(),
                    "No message matched the sms parser"
                );
                ResolutionResult::failure(ResolutionFailure::NoMessageMatched)
            }
        }
    }

    fn log_api_failure(status: Option<u16>, error: Option<&FetchError>) {
        match (status, error) {
            (Some(status), None) => warn!(status = status, "sim-service: api returned {}", status),
            (Some(status), Some(error)) => warn!(
                status = status,
                error = %error,
                "sim-service: unreadable api response"
            ),
            (None, Some(error)) => warn!(
                error = %error,
                "sim-service: api request failed before a response was received"
            ),
            (None, None) => warn!("sim-service: api request failed"),
        }
    }
}
