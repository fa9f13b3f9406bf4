//! # sim-service Plugin
//!
//! Owns the resolver instance and registers it with the host profile
//! registry on enable, deregistering it on disable. Registration happens at
//! most once per enable/disable cycle: repeated enables without a disable in
//! between (and disables of a plugin that isn't enabled) are no-ops.
//!
//! The state is updated before the host registry is called, and no lock the
//! host can observe is held during that call: a host callback may read
//! [`HostPlugin::state`], but must not call `on_enabled`/`on_disabled` again.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{HostPlugin, PluginDescriptor, PluginState, SimServiceResolver};
use crate::config::ResolverConfig;
use crate::context::HostContext;
use crate::error::SimServiceResult;
use crate::log_resolver;
use crate::logging::log_error;
use crate::registry::ProfileResolver;

pub struct SimServicePlugin {
    context: HostContext,
    resolver: Arc<dyn ProfileResolver>,
    descriptor: PluginDescriptor,
    state: Mutex<PluginState>,
    /// Serializes enable/disable; never held by `state()`
    transition: Mutex<()>,
}

impl std::fmt::Debug for SimServicePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimServicePlugin")
            .field("resolver", &self.resolver.name())
            .field("descriptor", &self.descriptor)
            .field("state", &*self.state.lock())
            .finish()
    }
}

impl SimServicePlugin {
    /// Called by the host when the plugin is loaded. Builds the resolver and,
    /// when `enabled`, registers it straight away.
    pub fn on_init(
        context: HostContext,
        config: &ResolverConfig,
        enabled: bool,
    ) -> SimServiceResult<Self> {
        if let Err(e) = config.validate() {
            log_error("sim_service_plugin", "on_init", &e.to_string(), None);
            return Err(e.into());
        }
        let resolver = SimServiceResolver::from_config(context.clone(), &config.api)?;
        let plugin = Self::with_resolver(
            context,
            Arc::new(resolver),
            PluginDescriptor::from(&config.plugin),
        );

        info!(
            resolver = plugin.resolver.name(),
            registry_version = plugin.descriptor.registry_version,
            enabled = enabled,
            "Initialized sim-service plugin"
        );

        if enabled {
            plugin.on_enabled();
        }

        Ok(plugin)
    }

    /// Plugin around an already-built resolver; starts out not enabled
    pub fn with_resolver(
        context: HostContext,
        resolver: Arc<dyn ProfileResolver>,
        descriptor: PluginDescriptor,
    ) -> Self {
        Self {
            context,
            resolver,
            descriptor,
            state: Mutex::new(PluginState::Initialized),
            transition: Mutex::new(()),
        }
    }

    pub fn resolver(&self) -> &Arc<dyn ProfileResolver> {
        &self.resolver
    }

    fn set_state(&self, state: PluginState) {
        *self.state.lock() = state;
    }
}

impl HostPlugin for SimServicePlugin {
    fn descriptor(&self) -> PluginDescriptor {
        self.descriptor
    }

    fn on_enabled(&self) -> bool {
        let _transition = self.transition.lock();
        if self.state().is_enabled() {
            debug!(
                resolver = self.resolver.name(),
                "Plugin already enabled - resolver stays registered"
            );
            return false;
        }

        let Some(registry) = self.context.profile_registry() else {
            warn!(
                resolver = self.resolver.name(),
                "Host profile registry is gone - cannot register resolver"
            );
            return false;
        };

        self.set_state(PluginState::Enabled);
        registry.add_resolver(Arc::clone(&self.resolver));

        log_resolver!(info, "plugin_enabled", resolver: self.resolver.name());
        true
    }

    fn on_disabled(&self) -> bool {
        let _transition = self.transition.lock();
        let state = self.state();
        if !state.is_enabled() {
            debug!(
                resolver = self.resolver.name(),
                state = ?state,
                "Plugin is not enabled - nothing to deregister"
            );
            return false;
        }

        self.set_state(PluginState::Disabled);
        match self.context.profile_registry() {
            Some(registry) => registry.remove_resolver(&self.resolver),
            None => debug!(
                resolver = self.resolver.name(),
                "Host profile registry is gone - nothing to deregister"
            ),
        }

        log_resolver!(info, "plugin_disabled", resolver: self.resolver.name());
        true
    }

    fn state(&self) -> PluginState {
        *self.state.lock()
    }
}
