//! # System Constants
//!
//! Fixed identifiers, wire names and sentinel values shared by the resolver,
//! the code fetcher and the plugin lifecycle.

use serde::{Deserialize, Serialize};

/// Name the resolver registers under in the host profile registry
pub const RESOLVER_NAME: &str = "simservicev1";

/// Plugin registry version this plugin was built against
pub const REGISTRY_VERSION: u32 = 1;

/// Sentinel values rendered verbatim in the profile UI when resolution fails
pub mod sentinels {
    pub const NO_PARSER: &str = "#NO PARSER";
    pub const NO_SMS_NUMBER: &str = "#NO SMS NUMBER";
    pub const NO_MSG: &str = "#NO MSG";
    pub const API_ERROR: &str = "#API ERROR";

    /// All sentinel values, in resolution-pipeline order
    pub const ALL: [&str; 4] = [NO_PARSER, NO_SMS_NUMBER, NO_MSG, API_ERROR];
}

/// Parser registry lookups
pub mod parsers {
    /// Domain every lookup made by this resolver uses
    pub const SMS_DOMAIN: &str = "sms";
    /// Built-in parser key for the ticketmaster site
    pub const TICKETMASTER_KEY: &str = "ticketmaster";
}

/// sim-service HTTP API wire constants
pub mod api {
    pub const DEFAULT_BASE_URL: &str = "https://sms-4kqy.onrender.com";
    pub const MESSAGES_PATH: &str = "/messages";
    pub const PHONE_NUMBER_PARAM: &str = "phone_number";
    pub const API_KEY_HEADER: &str = "X-API-Key";
    pub const USER_KEY_HEADER: &str = "X-USER-KEY";
    /// The only status treated as a successful fetch
    pub const STATUS_OK: u16 = 200;
}

/// Profile field a resolver can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Password,
    #[serde(rename = "smscode")]
    SmsCode,
    #[serde(rename = "emailcode")]
    EmailCode,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Password => "password",
            Field::SmsCode => "smscode",
            Field::EmailCode => "emailcode",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password" => Ok(Field::Password),
            "smscode" => Ok(Field::SmsCode),
            "emailcode" => Ok(Field::EmailCode),
            other => Err(format!("Unknown profile field: {other}")),
        }
    }
}

/// Site the profile is being filled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Ticketmaster,
    Axs,
    /// Any other site; the request must carry the page URL
    Other,
}

impl Site {
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Ticketmaster => "ticketmaster",
            Site::Axs => "axs",
            Site::Other => "other",
        }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ticketmaster" => Ok(Site::Ticketmaster),
            "axs" => Ok(Site::Axs),
            "other" => Ok(Site::Other),
            other => Err(format!("Unknown site: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_wire_names() {
        assert_eq!(serde_json::to_string(&Field::SmsCode).unwrap(), "\"smscode\"");
        assert_eq!(serde_json::to_string(&Field::EmailCode).unwrap(), "\"emailcode\"");
        assert_eq!(serde_json::to_string(&Field::Password).unwrap(), "\"password\"");
        assert_eq!("smscode".parse::<Field>().unwrap(), Field::SmsCode);
        assert!("sms".parse::<Field>().is_err());
    }

    #[test]
    fn test_site_parsing() {
        assert_eq!("ticketmaster".parse::<Site>().unwrap(), Site::Ticketmaster);
        assert_eq!("other".parse::<Site>().unwrap(), Site::Other);
        assert!("Ticketmaster".parse::<Site>().is_err());
        assert_eq!(Site::Axs.to_string(), "axs");
    }

    #[test]
    fn test_sentinels_are_distinct() {
        let mut values = sentinels::ALL.to_vec();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), sentinels::ALL.len());
        assert!(sentinels::ALL.iter().all(|s| s.starts_with('#')));
    }
}
