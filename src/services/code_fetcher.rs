//! # Code Fetcher
//!
//! HTTP client for the sim-service message API. One best-effort `GET` per
//! resolution: no retry, no circuit breaking, and no timeout beyond the
//! transport default unless one is configured.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::SimServiceApiConfig;
use crate::constants::api;
use crate::error::{ConfigurationError, FetchError, FetchResult};
use crate::models::{MessageRecord, MessagesResponse};

/// Outcome of a fetch that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status returned by the api
    pub status: u16,
    /// Messages in api order; empty unless `status` is 200
    pub messages: Vec<MessageRecord>,
}

impl FetchResponse {
    pub fn ok(messages: Vec<MessageRecord>) -> Self {
        Self {
            status: api::STATUS_OK,
            messages,
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            messages: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == api::STATUS_OK
    }
}

/// Retrieves the messages received by a phone number
#[async_trait]
pub trait CodeFetcher: Send + Sync {
    async fn fetch(
        &self,
        phone_number: &str,
        api_key: &str,
        user_key: Option<&str>,
    ) -> FetchResult<FetchResponse>;
}

/// reqwest-backed client for the sim-service API
pub struct SimServiceClient {
    client: Client,
    messages_url: Url,
    config: SimServiceApiConfig,
}

impl std::fmt::Debug for SimServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimServiceClient")
            .field("messages_url", &self.messages_url.as_str())
            .field("timeout_ms", &self.config.timeout_ms)
            .finish()
    }
}

impl SimServiceClient {
    /// Create a new client with the given configuration
    pub fn new(config: SimServiceApiConfig) -> Result<Self, ConfigurationError> {
        let messages_url = config.messages_url()?;

        let mut client_builder = Client::builder()
            .user_agent(format!("simservice-resolver/{}", env!("CARGO_PKG_VERSION")));

        if let Some(timeout_ms) = config.timeout_ms {
            client_builder = client_builder.timeout(Duration::from_millis(timeout_ms));
        }

        let client = client_builder.build().map_err(|e| {
            ConfigurationError::invalid_value(
                "api",
                &config.base_url,
                format!("Failed to create HTTP client: {e}"),
            )
        })?;

        info!(
            "Created SimServiceClient for {}, timeout: {:?}ms",
            messages_url, config.timeout_ms
        );

        Ok(Self {
            client,
            messages_url,
            config,
        })
    }

    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }

    fn request_url(&self, phone_number: &str) -> Url {
        let mut url = self.messages_url.clone();
        url.query_pairs_mut()
            .append_pair(api::PHONE_NUMBER_PARAM, phone_number);
        url
    }

    fn credential_headers(api_key: &str, user_key: Option<&str>) -> FetchResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        Self::insert_header(&mut headers, api::API_KEY_HEADER, api_key)?;

        // An absent user key means no header at all, not an empty one.
        if let Some(user_key) = user_key {
            Self::insert_header(&mut headers, api::USER_KEY_HEADER, user_key)?;
        }

        Ok(headers)
    }

    fn insert_header(
        headers: &mut HeaderMap,
        header: &'static str,
        value: &str,
    ) -> FetchResult<()> {
        let name = HeaderName::from_bytes(header.as_bytes())
            .map_err(|_| FetchError::InvalidHeader { header })?;
        let value =
            HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader { header })?;
        headers.insert(name, value);
        Ok(())
    }
}

#[async_trait]
impl CodeFetcher for SimServiceClient {
    async fn fetch(
        &self,
        phone_number: &str,
        api_key: &str,
        user_key: Option<&str>,
    ) -> FetchResult<FetchResponse> {
        let url = self.request_url(phone_number);
        let headers = Self::credential_headers(api_key, user_key)?;

        debug!("Fetching sms messages from: {}", url);

        let response = self.client.get(url).headers(headers).send().await?;

        let status = response.status().as_u16();
        if status != api::STATUS_OK {
            debug!(status = status, "sms api returned non-success status");
            return Ok(FetchResponse::with_status(status));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| FetchError::invalid_response(status, e.to_string()))?;

        debug!("Retrieved {} sms messages", body.messages.len());
        Ok(FetchResponse::ok(body.messages))
    }
}
