//! # Domain Models
//!
//! Data carried through a resolution: the request, the messages retrieved
//! from the sim-service API and the normalized result.

pub mod message;
pub mod request;
pub mod result;

pub use crate::constants::{Field, Site};
pub use message::{MessageRecord, MessagesResponse};
pub use request::{ProfileRecord, ResolutionRequest, ResolverArgs, MAX_RESOLVER_ARGS};
pub use result::ResolutionResult;
