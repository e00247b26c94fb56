//! Extension points invoked by the host on extended targets.
//!
//! A behavior overrides only the points it extends; everything else is a
//! defaulted no-op. The host invokes the points through a [`TargetView`] of
//! the live instance, so behaviors never own or outlive host objects.

use crate::session::HostContext;

/// View of a live target instance, handed to extension-point callbacks.
///
/// Lifetime is scoped to the callback; behaviors must not retain it.
pub trait TargetView {
    /// Instance display name.
    fn name(&self) -> &str;

    /// Whether the instance carries a named child widget.
    fn has_widget(&self, widget: &str) -> bool;

    /// Toggle the instance's visibility.
    fn set_visible(&self, visible: bool);

    /// Host context for session resolution from inside a callback.
    fn context(&self) -> HostContext;
}

/// Behavior grafted onto an externally defined target.
///
/// Each method is one extension point the host may invoke. Defaults are
/// no-ops so implementations stay focused on the points they actually
/// extend.
pub trait ExtensionBehavior: Send + Sync {
    /// Behavior name for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// The target instance became active.
    fn on_activated(&self, _target: &dyn TargetView) {}

    /// The target instance was deactivated.
    fn on_deactivated(&self, _target: &dyn TargetView) {}

    /// Widget that should receive focus when the target activates.
    fn desired_focus_target(&self, _target: &dyn TargetView) -> Option<String> {
        None
    }

    /// A console command was routed to the target.
    fn on_command(&self, _target: &dyn TargetView, _command: &str) {}

    /// A named input action fired while the target was live.
    fn on_input_action(&self, _target: &dyn TargetView, _action: &str) {}

    /// The target's owning session is shutting down.
    fn on_shutdown(&self, _target: &dyn TargetView) {}
}
