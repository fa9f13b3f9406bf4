//! # Plugin Lifecycle
//!
//! The surface the host plugin system drives: a descriptor, and enable /
//! disable signals after init. Discovery and loading of plugins stay on the
//! host side.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use simservice_resolver::config::ResolverConfig;
//! use simservice_resolver::context::HostContext;
//! use simservice_resolver::plugin::{HostPlugin, SimServicePlugin};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = HostContext::in_memory();
//! let config = ResolverConfig::load()?;
//!
//! let plugin = SimServicePlugin::on_init(context, &config, true)?;
//! assert!(plugin.state().is_enabled());
//!
//! plugin.on_disabled();
//! # Ok(())
//! # }
//! ```

pub mod resolver;
pub mod sim_service;

use serde::{Deserialize, Serialize};

use crate::config::PluginConfig;
use crate::constants::REGISTRY_VERSION;

pub use resolver::SimServiceResolver;
pub use sim_service::SimServicePlugin;

/// Information the plugin reports to the host plugin registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    /// Plugin registry version the plugin was built against
    pub registry_version: u32,
    /// `Some(false)` asks the host not to enable the plugin on first load
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl PluginDescriptor {
    pub fn enabled_by_default(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

impl Default for PluginDescriptor {
    fn default() -> Self {
        Self {
            registry_version: REGISTRY_VERSION,
            enabled: None,
        }
    }
}

impl From<&PluginConfig> for PluginDescriptor {
    fn from(config: &PluginConfig) -> Self {
        Self {
            registry_version: config.registry_version,
            enabled: (!config.enabled_by_default).then_some(false),
        }
    }
}

/// Plugin state for runtime management
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginState {
    /// Initialized by the host, never enabled
    Initialized,
    Enabled,
    Disabled,
}

impl PluginState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, PluginState::Enabled)
    }
}

/// Lifecycle signals the host sends after a plugin has been initialized
pub trait HostPlugin: Send + Sync {
    fn descriptor(&self) -> PluginDescriptor;

    /// The user enabled the plugin. Returns whether anything changed.
    fn on_enabled(&self) -> bool;

    /// The user disabled the plugin. Returns whether anything changed.
    fn on_disabled(&self) -> bool;

    fn state(&self) -> PluginState;
}
