//! Proptest strategies for resolver inputs.

use proptest::prelude::*;
use simservice_resolver::{ResolverArgs, Site};

pub fn site_strategy() -> impl Strategy<Value = Site> {
    prop_oneof![Just(Site::Ticketmaster), Just(Site::Axs), Just(Site::Other)]
}

/// Strategy for a single resolver argument
pub fn arg_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,24}"
}

/// Resolver arguments with exactly `len` elements
pub fn args_of_len(len: usize) -> impl Strategy<Value = ResolverArgs> {
    prop::collection::vec(arg_strategy(), len).prop_map(ResolverArgs::new)
}

/// Resolver arguments with fewer than three elements
pub fn args_without_override() -> impl Strategy<Value = ResolverArgs> {
    prop::collection::vec(arg_strategy(), 0..3).prop_map(ResolverArgs::new)
}
