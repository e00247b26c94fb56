//! Foundational behavior for the host's core instance class.

use std::sync::Arc;

use eqsys_host::{ExtensionBehavior, SessionRuntime, TargetView};
use eqsys_registry::ServiceRegistry;
use tracing::{debug, trace};

/// Extends the core instance: tears down the session's service when the
/// instance shuts down, and observes input actions.
///
/// Registered first in the standard manifest; UI behaviors assume the
/// service machinery it anchors is in place.
pub struct CoreInstanceBehavior {
    runtime: Arc<dyn SessionRuntime>,
    registry: ServiceRegistry,
}

impl CoreInstanceBehavior {
    pub fn new(runtime: Arc<dyn SessionRuntime>, registry: ServiceRegistry) -> Self {
        Self { runtime, registry }
    }
}

impl ExtensionBehavior for CoreInstanceBehavior {
    fn name(&self) -> &'static str {
        "core_instance"
    }

    fn on_shutdown(&self, target: &dyn TargetView) {
        debug!(
            target: "bootstrap::behaviors",
            instance = target.name(),
            "core instance shutdown received"
        );
        match self.runtime.current_session(target.context()) {
            Some(session) => {
                self.registry.destroy(session.id());
            }
            None => debug!(
                target: "bootstrap::behaviors",
                instance = target.name(),
                "shutdown with no owning session"
            ),
        }
    }

    fn on_input_action(&self, target: &dyn TargetView, action: &str) {
        trace!(
            target: "bootstrap::behaviors",
            instance = target.name(),
            action,
            "input action observed"
        );
    }
}
