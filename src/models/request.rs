//! ResolutionRequest
//!
//! The input of a single on-demand resolution: which profile field is being
//! filled, for which site, against which profile, with the positional
//! arguments parsed from the profile file's resolver binding.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{Field, Site};
use crate::error::{SimServiceError, SimServiceResult};

/// Maximum number of positional resolver arguments
pub const MAX_RESOLVER_ARGS: usize = 3;

/// Flat record of contact/identity attributes for one profile.
///
/// Only [`ProfileRecord::sms_lookup_number`] is read by the resolver; every
/// other attribute, including unknown ones, passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub profile_name: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub sms_number: Option<String>,
    pub passcode: Option<String>,
    /// Free-form attribute reserved for the sim-service phone number
    pub free1: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ProfileRecord {
    pub fn new(profile_name: impl Into<String>) -> Self {
        Self {
            profile_name: Some(profile_name.into()),
            ..Default::default()
        }
    }

    /// Set the attribute used for the sms lookup
    pub fn with_sms_lookup_number(mut self, number: impl Into<String>) -> Self {
        self.free1 = Some(number.into());
        self
    }

    /// Phone number queried against the sms api
    pub fn sms_lookup_number(&self) -> Option<&str> {
        self.free1.as_deref()
    }
}

/// Positional arguments from the profile binding.
///
/// Index 0 is the API key, index 1 the user key and index 2 an optional
/// explicit parser key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolverArgs(Vec<String>);

impl ResolverArgs {
    pub fn new(args: Vec<String>) -> Self {
        Self(args)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// API key for the sms lookup; `None` means no credentials were supplied
    pub fn api_key(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn user_key(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// Explicit parser key, present only when all three arguments are given
    pub fn parser_override(&self) -> Option<&str> {
        if self.0.len() == MAX_RESOLVER_ARGS {
            self.0.get(2).map(String::as_str)
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ResolverArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for ResolverArgs {
    fn from(args: Vec<String>) -> Self {
        Self(args)
    }
}

/// Request to resolve the current value of one profile field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRequest {
    /// The field being resolved
    pub field: Field,

    /// Site the profile is being used on
    pub site: Site,

    /// Profile the value is resolved against
    pub profile: ProfileRecord,

    /// Page URL, required when `site` is [`Site::Other`]
    #[serde(default)]
    pub url: Option<String>,

    /// Arguments parsed from the profile binding
    #[serde(default)]
    pub resolver_args: ResolverArgs,
}

impl ResolutionRequest {
    pub fn new(field: Field, site: Site, profile: ProfileRecord) -> Self {
        Self {
            field,
            site,
            profile,
            url: None,
            resolver_args: ResolverArgs::default(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_resolver_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolver_args = args.into_iter().collect();
        self
    }

    /// Check the request is well formed before it is handed to a resolver
    pub fn validate(&self) -> SimServiceResult<()> {
        if self.site == Site::Other && self.url.as_deref().map_or(true, str::is_empty) {
            return Err(SimServiceError::ValidationError(
                "A url is required when site is 'other'".to_string(),
            ));
        }

        if self.resolver_args.len() > MAX_RESOLVER_ARGS {
            return Err(SimServiceError::ValidationError(format!(
                "At most {MAX_RESOLVER_ARGS} resolver arguments are supported, got {}",
                self.resolver_args.len()
            )));
        }

        Ok(())
    }
}
