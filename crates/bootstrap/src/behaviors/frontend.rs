//! Front-end menu behavior.

use eqsys_host::{ExtensionBehavior, TargetView};
use tracing::{debug, info};

const START_GAME_BUTTON: &str = "StartGameButton";

/// Extends the front-end menu widget: logs activation and steers initial
/// focus to the start button when the widget carries one.
pub struct FrontEndBehavior;

impl ExtensionBehavior for FrontEndBehavior {
    fn name(&self) -> &'static str {
        "front_end"
    }

    fn on_activated(&self, target: &dyn TargetView) {
        info!(
            target: "bootstrap::behaviors",
            instance = target.name(),
            "front end activated"
        );
    }

    fn desired_focus_target(&self, target: &dyn TargetView) -> Option<String> {
        if target.has_widget(START_GAME_BUTTON) {
            return Some(START_GAME_BUTTON.to_string());
        }
        // No start button on this layout; let the host pick its own focus.
        debug!(
            target: "bootstrap::behaviors",
            instance = target.name(),
            "no start button to focus"
        );
        None
    }
}
