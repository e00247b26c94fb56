//! Animation debug panel behavior.

use eqsys_host::{ExtensionBehavior, TargetView};
use tracing::{info, warn};

/// Extends the animation debug panel with a visibility toggle, driven either
/// directly via [`AnimDebugBehavior::show_panel`] or through the panel's
/// command route (`show` / `hide`).
pub struct AnimDebugBehavior;

impl AnimDebugBehavior {
    pub fn show_panel(&self, target: &dyn TargetView, visible: bool) {
        info!(
            target: "bootstrap::behaviors",
            instance = target.name(),
            visible,
            "debug panel toggled"
        );
        target.set_visible(visible);
    }
}

impl ExtensionBehavior for AnimDebugBehavior {
    fn name(&self) -> &'static str {
        "anim_debug"
    }

    fn on_command(&self, target: &dyn TargetView, command: &str) {
        match command {
            "show" => self.show_panel(target, true),
            "hide" => self.show_panel(target, false),
            other => warn!(
                target: "bootstrap::behaviors",
                instance = target.name(),
                command = other,
                "unrecognized debug panel command"
            ),
        }
    }
}
