//! Development cheat console behavior.

use eqsys_host::{ExtensionBehavior, TargetView};
use eqsys_registry::ServiceRegistry;
use tracing::{info, warn};

/// Command console for development builds. Registered only when the
/// bootstrap configuration enables cheats.
pub struct CheatBehavior {
    registry: ServiceRegistry,
}

impl CheatBehavior {
    pub fn new(registry: ServiceRegistry) -> Self {
        Self { registry }
    }
}

impl ExtensionBehavior for CheatBehavior {
    fn name(&self) -> &'static str {
        "cheats"
    }

    fn on_command(&self, target: &dyn TargetView, command: &str) {
        match command {
            "help" => {
                info!(target: "bootstrap::cheats", "available commands:");
                info!(target: "bootstrap::cheats", "  help - show this help message");
                info!(target: "bootstrap::cheats", "  info - show registry statistics");
                info!(target: "bootstrap::cheats", "  test - verify the cheat console is wired up");
            }
            "info" => {
                info!(
                    target: "bootstrap::cheats",
                    live_services = self.registry.service_count(),
                    "registry statistics"
                );
            }
            "test" => {
                info!(target: "bootstrap::cheats", "cheat console is working");
            }
            other => {
                if let Some(detail) = other.strip_prefix("debug ") {
                    info!(target: "bootstrap::cheats", detail, "debug");
                } else {
                    warn!(
                        target: "bootstrap::cheats",
                        instance = target.name(),
                        command = other,
                        "unrecognized command"
                    );
                }
            }
        }
    }
}
