//! # Registry Infrastructure
//!
//! Host-facing registries the resolver consumes or registers with.
//!
//! ## Available Registries
//!
//! - **ParserRegistry**: `(domain, key)` lookup of message parsers
//! - **ProfileRegistry**: collection of active profile resolvers
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── ParserRegistry    (read-only lookup from the resolver's side)
//! └── ProfileRegistry   (add/remove on plugin enable/disable)
//! ```

pub mod parser_registry;
pub mod profile_registry;

pub use parser_registry::{
    InMemoryParserRegistry, MessageParser, ParserKey, ParserRegistry, ParserRegistryStats,
};
pub use profile_registry::{InMemoryProfileRegistry, ProfileRegistry, ProfileResolver};
