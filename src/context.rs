//! # Host Context
//!
//! The handle the host passes to the plugin at init time. It carries the
//! host's registries and is handed to parsers on every parse so a parser can
//! reach back into the host if it needs to.
//!
//! The profile registry ends up owning the resolver, so anything the resolver
//! keeps must not own the profile registry in turn. [`HostContext::downgrade`]
//! produces the non-owning view the resolution engine holds.

use std::sync::{Arc, Weak};

use crate::registry::{
    InMemoryParserRegistry, InMemoryProfileRegistry, ParserRegistry, ProfileRegistry,
};

#[derive(Clone)]
pub struct HostContext {
    parser_registry: Arc<dyn ParserRegistry>,
    profile_registry: ProfileRegistryHandle,
}

#[derive(Clone)]
enum ProfileRegistryHandle {
    Owned(Arc<dyn ProfileRegistry>),
    Detached(Weak<dyn ProfileRegistry>),
}

impl HostContext {
    pub fn new(
        parser_registry: Arc<dyn ParserRegistry>,
        profile_registry: Arc<dyn ProfileRegistry>,
    ) -> Self {
        Self {
            parser_registry,
            profile_registry: ProfileRegistryHandle::Owned(profile_registry),
        }
    }

    /// Context backed by empty in-memory registries
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryParserRegistry::new()),
            Arc::new(InMemoryProfileRegistry::new()),
        )
    }

    /// Same registries, but the profile registry is only referenced weakly
    pub fn downgrade(&self) -> Self {
        let profile_registry = match &self.profile_registry {
            ProfileRegistryHandle::Owned(registry) => {
                ProfileRegistryHandle::Detached(Arc::downgrade(registry))
            }
            ProfileRegistryHandle::Detached(registry) => {
                ProfileRegistryHandle::Detached(registry.clone())
            }
        };

        Self {
            parser_registry: Arc::clone(&self.parser_registry),
            profile_registry,
        }
    }

    /// Whether this context keeps the profile registry alive
    pub fn owns_profile_registry(&self) -> bool {
        matches!(self.profile_registry, ProfileRegistryHandle::Owned(_))
    }

    pub fn parser_registry(&self) -> &Arc<dyn ParserRegistry> {
        &self.parser_registry
    }

    /// The host profile registry; `None` once the host has dropped it
    pub fn profile_registry(&self) -> Option<Arc<dyn ProfileRegistry>> {
        match &self.profile_registry {
            ProfileRegistryHandle::Owned(registry) => Some(Arc::clone(registry)),
            ProfileRegistryHandle::Detached(registry) => registry.upgrade(),
        }
    }
}

impl std::fmt::Debug for HostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext")
            .field("owns_profile_registry", &self.owns_profile_registry())
            .finish_non_exhaustive()
    }
}
