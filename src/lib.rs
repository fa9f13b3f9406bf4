#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # sim-service Resolver
//!
//! Resolves SMS one-time codes for an automated profile-filling workflow.
//!
//! ## Overview
//!
//! Given a profile and a requested field, the resolver queries the sim-service
//! SMS-retrieval API for the phone number attached to the profile, picks a
//! message parser based on the site, and extracts the code from the most
//! recent matching message.
//!
//! Every resolution ends in exactly one [`ResolutionResult`]: either a code
//! with its message timestamp, or one of four sentinel values (`#NO PARSER`,
//! `#NO SMS NUMBER`, `#NO MSG`, `#API ERROR`) the host renders verbatim.
//!
//! ## Module Organization
//!
//! - [`models`] - requests, message records and results
//! - [`registry`] - parser and profile registry contracts
//! - [`services`] - parser selection, the code fetcher and the resolution engine
//! - [`plugin`] - resolver adapter and host plugin lifecycle
//! - [`config`] - configuration management
//! - [`error`] - structured error handling
//! - [`logging`] - tracing initialisation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use simservice_resolver::config::ResolverConfig;
//! use simservice_resolver::context::HostContext;
//! use simservice_resolver::models::{Field, ProfileRecord, ResolutionRequest, Site};
//! use simservice_resolver::plugin::SimServiceResolver;
//! use simservice_resolver::registry::ProfileResolver;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ResolverConfig::load()?;
//! let resolver = SimServiceResolver::from_config(HostContext::in_memory(), &config.api)?;
//!
//! let request = ResolutionRequest::new(
//!     Field::SmsCode,
//!     Site::Ticketmaster,
//!     ProfileRecord::new("main").with_sms_lookup_number("+15550100"),
//! )
//! .with_resolver_args(["MY-API-KEY", "MY-USER-KEY"]);
//!
//! let result = resolver.resolve_value(&request).await;
//! println!("{} (error: {})", result.value(), result.is_error());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod plugin;
pub mod registry;
pub mod services;

pub use config::ResolverConfig;
pub use constants::{Field, Site, RESOLVER_NAME};
pub use context::HostContext;
pub use error::{FetchError, ResolutionFailure, SimServiceError, SimServiceResult};
pub use models::{MessageRecord, ProfileRecord, ResolutionRequest, ResolutionResult, ResolverArgs};
pub use plugin::{HostPlugin, PluginDescriptor, PluginState, SimServicePlugin, SimServiceResolver};
pub use registry::{MessageParser, ParserRegistry, ProfileRegistry, ProfileResolver};
pub use services::{CodeFetcher, FetchResponse, ResolutionEngine, SimServiceClient};
