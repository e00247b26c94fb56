//! Bridge from host session notifications into the attachment store.

use eqsys_host::{SessionHandle, SessionObserver};
use tracing::{debug, info};

use crate::registry::ServiceRegistry;

/// Observes host session lifecycle and drives attachment accordingly:
/// eager creation at session start, teardown at shutdown. Registered with
/// the host's session runtime by the bootstrap layer.
pub struct LifecycleBridge {
    registry: ServiceRegistry,
}

impl LifecycleBridge {
    pub fn new(registry: ServiceRegistry) -> Self {
        Self { registry }
    }
}

impl SessionObserver for LifecycleBridge {
    fn on_session_init(&self, session: &SessionHandle) {
        if self.registry.lookup(session.id()).is_some() {
            debug!(
                target: "registry::lifecycle",
                session = %session.id(),
                "service already attached at session init"
            );
            return;
        }
        let service = self.registry.get_or_create(session);
        info!(
            target: "registry::lifecycle",
            session = %session.id(),
            uid = %service.unique_id(),
            "service attached at session init"
        );
    }

    fn on_session_shutdown(&self, session: &SessionHandle) {
        if self.registry.destroy(session.id()) {
            info!(
                target: "registry::lifecycle",
                session = %session.id(),
                "service detached at session shutdown"
            );
        }
    }
}
