//! Parser key selection.
//!
//! Priority, first match wins:
//! 1. an explicit override in the third resolver argument,
//! 2. the built-in key for the ticketmaster site,
//! 3. no key.

use crate::constants::{parsers, Site};
use crate::models::ResolverArgs;

/// Parser key to look up for `site` given the profile's resolver arguments
pub fn select_parser_key<'a>(site: Site, args: &'a ResolverArgs) -> Option<&'a str> {
    if let Some(key) = args.parser_override() {
        return Some(key);
    }

    match site {
        Site::Ticketmaster => Some(parsers::TICKETMASTER_KEY),
        Site::Axs | Site::Other => None,
    }
}
