//! Plugin lifecycle tests: registration with the host profile registry on
//! enable/disable, and resolution through the registered resolver.

mod common;

use common::*;
use serde_json::json;
use std::sync::{Arc, Mutex, Weak};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use simservice_resolver::config::ResolverConfig;
use simservice_resolver::registry::{InMemoryParserRegistry, InMemoryProfileRegistry};
use simservice_resolver::{
    HostContext, HostPlugin, PluginState, ProfileRegistry, ProfileResolver, ResolutionResult,
    SimServicePlugin, Site, RESOLVER_NAME,
};

/// Profile registry reading the plugin state from inside its callbacks
#[derive(Default)]
struct StateObservingRegistry {
    plugin: Mutex<Weak<SimServicePlugin>>,
    observed: Mutex<Vec<PluginState>>,
}

impl StateObservingRegistry {
    fn observe(&self) {
        let plugin = self.plugin.lock().unwrap().upgrade();
        if let Some(plugin) = plugin {
            self.observed.lock().unwrap().push(plugin.state());
        }
    }
}

impl ProfileRegistry for StateObservingRegistry {
    fn add_resolver(&self, _resolver: Arc<dyn ProfileResolver>) {
        self.observe();
    }

    fn remove_resolver(&self, _resolver: &Arc<dyn ProfileResolver>) {
        self.observe();
    }
}

fn recording_context() -> (HostContext, Arc<RecordingProfileRegistry>) {
    let profiles = Arc::new(RecordingProfileRegistry::default());
    let context = HostContext::new(Arc::new(InMemoryParserRegistry::new()), profiles.clone());
    (context, profiles)
}

#[test]
fn test_repeated_enable_registers_once() {
    let (context, profiles) = recording_context();
    let plugin = SimServicePlugin::on_init(context, &ResolverConfig::default(), false).unwrap();

    assert!(plugin.on_enabled());
    assert!(!plugin.on_enabled());
    assert!(!plugin.on_enabled());

    assert_eq!(profiles.add_count(), 1);
    assert_eq!(profiles.remove_count(), 0);
    assert_eq!(plugin.state(), PluginState::Enabled);
}

#[test]
fn test_each_cycle_registers_and_deregisters_once() {
    let (context, profiles) = recording_context();
    let plugin = SimServicePlugin::on_init(context, &ResolverConfig::default(), true).unwrap();
    assert_eq!(profiles.add_count(), 1);

    assert!(plugin.on_disabled());
    assert!(!plugin.on_disabled());
    assert_eq!(profiles.remove_count(), 1);

    assert!(plugin.on_enabled());
    assert!(plugin.on_disabled());

    assert_eq!(profiles.add_count(), 2);
    assert_eq!(profiles.remove_count(), 2);
    assert_eq!(
        profiles.added.lock().unwrap().as_slice(),
        &[RESOLVER_NAME.to_string(), RESOLVER_NAME.to_string()]
    );
}

#[test]
fn test_descriptor_reflects_config() {
    let (context, _profiles) = recording_context();
    let mut config = ResolverConfig::default();
    config.plugin.enabled_by_default = false;

    let plugin = SimServicePlugin::on_init(context, &config, false).unwrap();
    let descriptor = plugin.descriptor();

    assert_eq!(descriptor.registry_version, 1);
    assert!(!descriptor.enabled_by_default());
}

#[tokio::test]
async fn test_registered_resolver_resolves_through_host() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [{"Message": "code 161803", "Timestamp": "2024-05-01T10:00:00Z"}]
        })))
        .mount(&server)
        .await;

    let parsers = Arc::new(InMemoryParserRegistry::new());
    parsers
        .register_parser("sms", "ticketmaster", Arc::new(RecordingParser::new("code ")))
        .unwrap();
    let profiles = Arc::new(InMemoryProfileRegistry::new());
    let context = HostContext::new(parsers, profiles.clone());

    let mut config = ResolverConfig::default();
    config.api.base_url = server.uri();
    let plugin = SimServicePlugin::on_init(context, &config, true).unwrap();

    let resolver = profiles.find(RESOLVER_NAME).expect("resolver registered");
    let result = resolver
        .resolve_value(&sms_request(Site::Ticketmaster, &["key", "user"]))
        .await;
    assert_eq!(result, ResolutionResult::success("161803", "2024-05-01T10:00:00Z"));

    plugin.on_disabled();
    assert!(profiles.find(RESOLVER_NAME).is_none());
}

#[test]
fn test_host_callbacks_can_read_plugin_state() {
    let registry = Arc::new(StateObservingRegistry::default());
    let context = HostContext::new(Arc::new(InMemoryParserRegistry::new()), registry.clone());
    let plugin = Arc::new(
        SimServicePlugin::on_init(context, &ResolverConfig::default(), false).unwrap(),
    );
    *registry.plugin.lock().unwrap() = Arc::downgrade(&plugin);

    assert!(plugin.on_enabled());
    assert!(plugin.on_disabled());

    assert_eq!(
        *registry.observed.lock().unwrap(),
        vec![PluginState::Enabled, PluginState::Disabled]
    );
}

#[test]
fn test_dropped_host_frees_registry_and_resolver() {
    let parsers = Arc::new(InMemoryParserRegistry::new());
    let profiles = Arc::new(InMemoryProfileRegistry::new());
    let registry = Arc::downgrade(&profiles);
    let context = HostContext::new(parsers, profiles.clone());

    let plugin = SimServicePlugin::on_init(context, &ResolverConfig::default(), true).unwrap();
    let resolver = profiles.find(RESOLVER_NAME).expect("resolver registered");
    let resolver_ref = Arc::downgrade(&resolver);
    drop(resolver);

    drop(plugin);
    drop(profiles);

    assert!(registry.upgrade().is_none());
    assert!(resolver_ref.upgrade().is_none());
}
