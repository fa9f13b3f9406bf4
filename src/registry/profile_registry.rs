//! # Profile Registry
//!
//! Host-side collection of active resolvers used by the profile-filling
//! workflow. A resolver computes a dynamic value for a profile field on
//! demand; the plugin lifecycle adds and removes resolvers here.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::{ResolutionRequest, ResolutionResult};

/// A component that resolves a profile field value on demand
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    /// Identifier the host binds profile fields to
    fn name(&self) -> &str;

    /// Resolve the current value for the requested field
    async fn resolve_value(&self, request: &ResolutionRequest) -> ResolutionResult;
}

/// Registration contract offered by the host
pub trait ProfileRegistry: Send + Sync {
    fn add_resolver(&self, resolver: Arc<dyn ProfileResolver>);

    fn remove_resolver(&self, resolver: &Arc<dyn ProfileResolver>);
}

/// Thread-safe in-memory profile registry
#[derive(Default)]
pub struct InMemoryProfileRegistry {
    resolvers: RwLock<Vec<Arc<dyn ProfileResolver>>>,
}

impl InMemoryProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver registered under `name`
    pub fn find(&self, name: &str) -> Option<Arc<dyn ProfileResolver>> {
        self.resolvers
            .read()
            .iter()
            .find(|r| r.name() == name)
            .cloned()
    }

    pub fn resolver_names(&self) -> Vec<String> {
        self.resolvers
            .read()
            .iter()
            .map(|r| r.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.resolvers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.read().is_empty()
    }
}

impl ProfileRegistry for InMemoryProfileRegistry {
    fn add_resolver(&self, resolver: Arc<dyn ProfileResolver>) {
        info!(resolver = resolver.name(), "Added profile resolver");
        self.resolvers.write().push(resolver);
    }

    fn remove_resolver(&self, resolver: &Arc<dyn ProfileResolver>) {
        let mut resolvers = self.resolvers.write();
        let before = resolvers.len();
        resolvers.retain(|r| !Arc::ptr_eq(r, resolver));

        if resolvers.len() < before {
            info!(resolver = resolver.name(), "Removed profile resolver");
        } else {
            debug!(
                resolver = resolver.name(),
                "Resolver was not registered - nothing to remove"
            );
        }
    }
}

impl std::fmt::Debug for InMemoryProfileRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryProfileRegistry")
            .field("resolvers", &self.resolver_names())
            .finish()
    }
}
