//! Session lifecycle scenarios driven through the in-memory host.

use std::sync::Arc;

use eqsys_host::{MemoryHost, SessionId, SessionRuntime};
use eqsys_registry::{LifecycleBridge, RegistryError, ServiceId, ServiceRegistry};

#[test]
fn session_lifecycle_attaches_and_detaches() {
    let host = MemoryHost::new();
    let registry = ServiceRegistry::new();
    host.subscribe(Arc::new(LifecycleBridge::new(registry.clone())));

    // Session start attaches eagerly with the base id.
    let session = host.open_session("GI_0");
    let attached = registry.lookup(session.id()).expect("attached at init");
    assert_eq!(attached.unique_id(), ServiceId::BASE);
    assert_eq!(attached.owner_name(), "GI_0");

    // A context from the session resolves to the same record.
    let ctx = host.issue_context(&session);
    let resolved = registry
        .attach_current(&host, ctx)
        .expect("context resolves to session");
    assert_eq!(resolved.unique_id(), attached.unique_id());

    // Shutdown detaches; the registry is empty again.
    host.close_session(session.id());
    assert!(registry.lookup(session.id()).is_none());
    assert_eq!(registry.service_count(), 0);
}

#[test]
fn reopened_session_is_a_new_logical_session() {
    let host = MemoryHost::new();
    let registry = ServiceRegistry::new();
    host.subscribe(Arc::new(LifecycleBridge::new(registry.clone())));

    let first = host.open_session("GI_0");
    let first_id = registry.lookup(first.id()).expect("attached").unique_id();
    host.close_session(first.id());

    // Same name, fresh session: the registry never resurrects the destroyed
    // record.
    let second = host.open_session("GI_0");
    let second_id = registry.lookup(second.id()).expect("attached").unique_id();
    assert!(second_id > first_id);
}

#[test]
fn orphan_context_reports_invalid_owner() {
    let host = MemoryHost::new();
    let registry = ServiceRegistry::new();

    let ctx = host.orphan_context();
    let err = registry.attach_current(&host, ctx).unwrap_err();
    assert_eq!(err, RegistryError::InvalidOwner);
    assert_eq!(registry.service_count(), 0);
}

#[test]
fn destroy_unknown_session_leaves_store_unchanged() {
    let registry = ServiceRegistry::new();
    assert!(!registry.destroy(&SessionId::from("GI_unknown")));
    assert_eq!(registry.service_count(), 0);
}
