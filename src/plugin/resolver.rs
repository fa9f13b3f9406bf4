//! Resolver adapter exposing the resolution engine under the host's
//! resolver contract.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::SimServiceApiConfig;
use crate::constants::RESOLVER_NAME;
use crate::context::HostContext;
use crate::error::ConfigurationError;
use crate::models::{ResolutionRequest, ResolutionResult};
use crate::registry::ProfileResolver;
use crate::services::{CodeFetcher, ResolutionEngine, SimServiceClient};

#[derive(Debug)]
pub struct SimServiceResolver {
    engine: ResolutionEngine,
}

impl SimServiceResolver {
    pub fn new(engine: ResolutionEngine) -> Self {
        Self { engine }
    }

    /// Resolver backed by the given fetcher
    pub fn with_fetcher(context: HostContext, fetcher: Arc<dyn CodeFetcher>) -> Self {
        Self::new(ResolutionEngine::new(context, fetcher))
    }

    /// Resolver backed by a sim-service HTTP client
    pub fn from_config(
        context: HostContext,
        config: &SimServiceApiConfig,
    ) -> Result<Self, ConfigurationError> {
        let client = SimServiceClient::new(config.clone())?;
        Ok(Self::with_fetcher(context, Arc::new(client)))
    }

    pub fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }
}

#[async_trait]
impl ProfileResolver for SimServiceResolver {
    fn name(&self) -> &str {
        RESOLVER_NAME
    }

    async fn resolve_value(&self, request: &ResolutionRequest) -> ResolutionResult {
        self.engine.resolve(request).await
    }
}
