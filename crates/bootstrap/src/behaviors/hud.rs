//! HUD layout behavior.

use eqsys_host::{ExtensionBehavior, TargetView};
use tracing::info;

/// Extends the HUD layout widget with activation/deactivation logging.
pub struct HudLayoutBehavior;

impl ExtensionBehavior for HudLayoutBehavior {
    fn name(&self) -> &'static str {
        "hud_layout"
    }

    fn on_activated(&self, target: &dyn TargetView) {
        info!(
            target: "bootstrap::behaviors",
            instance = target.name(),
            "hud layout activated"
        );
    }

    fn on_deactivated(&self, target: &dyn TargetView) {
        info!(
            target: "bootstrap::behaviors",
            instance = target.name(),
            "hud layout deactivated"
        );
    }
}
