//! # Parser Registry
//!
//! Lookup service mapping a `(domain, key)` pair to a message parser.
//!
//! ## Overview
//!
//! Site-specific parsers are owned by the host; the resolver only consumes
//! the lookup contract. [`InMemoryParserRegistry`] is a thread-safe
//! implementation for hosts that do not bring their own, and for tests.
//!
//! ## Usage
//!
//! ```rust
//! use simservice_resolver::registry::{InMemoryParserRegistry, ParserRegistry};
//! use simservice_resolver::context::HostContext;
//! use simservice_resolver::models::ResolutionRequest;
//! use std::sync::Arc;
//!
//! let registry = InMemoryParserRegistry::new();
//! registry
//!     .register_parser(
//!         "sms",
//!         "ticketmaster",
//!         Arc::new(|_: &HostContext, _: &ResolutionRequest, text: &str| {
//!             text.strip_prefix("code ").map(str::to_string)
//!         }),
//!     )
//!     .unwrap();
//!
//! assert!(registry.get_parser("sms", Some("ticketmaster")).is_some());
//! assert!(registry.get_parser("sms", None).is_none());
//! ```

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::context::HostContext;
use crate::error::{SimServiceError, SimServiceResult};
use crate::models::ResolutionRequest;

/// Strategy that extracts a verification code from raw message text
pub trait MessageParser: Send + Sync {
    /// Returns the code found in `text`, or `None` when the message doesn't
    /// carry one
    fn parse_message(
        &self,
        context: &HostContext,
        request: &ResolutionRequest,
        text: &str,
    ) -> Option<String>;
}

impl<F> MessageParser for F
where
    F: Fn(&HostContext, &ResolutionRequest, &str) -> Option<String> + Send + Sync,
{
    fn parse_message(
        &self,
        context: &HostContext,
        request: &ResolutionRequest,
        text: &str,
    ) -> Option<String> {
        self(context, request, text)
    }
}

/// Read-only lookup consumed by the resolution engine
pub trait ParserRegistry: Send + Sync {
    /// Parser registered for `domain` and `key`; a missing key never matches
    fn get_parser(&self, domain: &str, key: Option<&str>) -> Option<Arc<dyn MessageParser>>;
}

/// Key for parser lookup in the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParserKey {
    pub domain: String,
    pub key: String,
}

impl ParserKey {
    pub fn new(domain: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            key: key.into(),
        }
    }
}

impl std::fmt::Display for ParserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.domain, self.key)
    }
}

/// Registry statistics
#[derive(Debug, Clone, Default)]
pub struct ParserRegistryStats {
    pub total_parsers: usize,
    pub domains: Vec<String>,
}

/// Thread-safe in-memory parser registry
#[derive(Default)]
pub struct InMemoryParserRegistry {
    parsers: RwLock<HashMap<ParserKey, Arc<dyn MessageParser>>>,
}

impl InMemoryParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parser, replacing any parser already bound to the same key
    pub fn register_parser(
        &self,
        domain: &str,
        key: &str,
        parser: Arc<dyn MessageParser>,
    ) -> SimServiceResult<()> {
        let parser_key = ParserKey::new(domain, key);
        Self::validate_key(&parser_key)?;

        let replaced = self.parsers.write().insert(parser_key.clone(), parser);
        if replaced.is_some() {
            debug!(parser = %parser_key, "Replaced existing parser registration");
        }

        info!(parser = %parser_key, "Registered message parser");
        Ok(())
    }

    /// Remove a parser registration, returning whether one existed
    pub fn unregister_parser(&self, domain: &str, key: &str) -> bool {
        let removed = self
            .parsers
            .write()
            .remove(&ParserKey::new(domain, key))
            .is_some();

        if removed {
            info!(domain = domain, key = key, "Unregistered message parser");
        }
        removed
    }

    pub fn contains(&self, domain: &str, key: &str) -> bool {
        self.parsers
            .read()
            .contains_key(&ParserKey::new(domain, key))
    }

    pub fn stats(&self) -> ParserRegistryStats {
        let parsers = self.parsers.read();
        let mut domains: Vec<String> = parsers.keys().map(|k| k.domain.clone()).collect();
        domains.sort();
        domains.dedup();

        ParserRegistryStats {
            total_parsers: parsers.len(),
            domains,
        }
    }

    fn validate_key(key: &ParserKey) -> SimServiceResult<()> {
        if key.domain.is_empty() {
            return Err(SimServiceError::RegistryError(
                "Parser domain cannot be empty".to_string(),
            ));
        }

        if key.key.is_empty() {
            return Err(SimServiceError::RegistryError(
                "Parser key cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl ParserRegistry for InMemoryParserRegistry {
    fn get_parser(&self, domain: &str, key: Option<&str>) -> Option<Arc<dyn MessageParser>> {
        let key = key?;
        self.parsers
            .read()
            .get(&ParserKey::new(domain, key))
            .cloned()
    }
}

impl std::fmt::Debug for InMemoryParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parsers = self.parsers.read();
        let mut keys: Vec<String> = parsers.keys().map(ToString::to_string).collect();
        keys.sort();
        f.debug_struct("InMemoryParserRegistry")
            .field("parsers", &keys)
            .finish()
    }
}
