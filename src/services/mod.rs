//! # Resolution Services
//!
//! - [`parser_selection`] - which parser key a request uses
//! - [`code_fetcher`] - the sim-service HTTP client
//! - [`resolution_engine`] - the resolution pipeline tying both together

pub mod code_fetcher;
pub mod parser_selection;
pub mod resolution_engine;

pub use code_fetcher::{CodeFetcher, FetchResponse, SimServiceClient};
pub use parser_selection::select_parser_key;
pub use resolution_engine::ResolutionEngine;
