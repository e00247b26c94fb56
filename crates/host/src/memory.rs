//! In-memory host implementation.
//!
//! Implements every collaborator seam against plain maps so integration
//! tests and engine-less embedders can drive the full registration and
//! lifecycle loop. Dispatch helpers mirror what a real host does when it
//! invokes extension points on live instances.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::trace;

use crate::args::{ArgumentChannel, ArgumentValue};
use crate::extension::{ExtensionBehavior, TargetView};
use crate::object::{ApplyOptions, ExtensibleRef, ObjectSystem, TargetPath, TargetRef};
use crate::session::{HostContext, SessionHandle, SessionId, SessionObserver, SessionRuntime};

#[derive(Default)]
struct HostState {
    next_token: u64,
    next_context: u64,
    sessions: HashMap<SessionId, SessionHandle>,
    contexts: HashMap<HostContext, SessionId>,
    targets: HashMap<TargetPath, TargetEntry>,
    resolved: HashMap<TargetRef, TargetPath>,
    arguments: HashMap<String, ArgumentValue>,
}

struct TargetEntry {
    widgets: Vec<String>,
    visible: bool,
    behaviors: Vec<Arc<dyn ExtensionBehavior>>,
}

/// In-memory host: session runtime, object system, and argument channel in
/// one object, plus dispatch helpers that play the host's side of the
/// extension-point contract.
#[derive(Default)]
pub struct MemoryHost {
    state: Mutex<HostState>,
    observers: Mutex<Vec<Arc<dyn SessionObserver>>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a resolvable target class with its child widgets.
    pub fn install_target(&self, path: impl Into<TargetPath>, widgets: &[&str]) {
        let mut state = self.state.lock().expect("host state lock poisoned");
        state.targets.insert(
            path.into(),
            TargetEntry {
                widgets: widgets.iter().map(|w| w.to_string()).collect(),
                visible: true,
                behaviors: Vec::new(),
            },
        );
    }

    /// Open a session named `name` and notify subscribed observers.
    pub fn open_session(&self, name: &str) -> SessionHandle {
        let handle = SessionHandle::new(name, name);
        {
            let mut state = self.state.lock().expect("host state lock poisoned");
            state.sessions.insert(handle.id().clone(), handle.clone());
        }
        for observer in self.observers_snapshot() {
            observer.on_session_init(&handle);
        }
        handle
    }

    /// Close a session and notify subscribed observers. No-op for unknown
    /// sessions.
    pub fn close_session(&self, session: &SessionId) {
        let handle = {
            let mut state = self.state.lock().expect("host state lock poisoned");
            state.contexts.retain(|_, owner| owner != session);
            state.sessions.remove(session)
        };
        if let Some(handle) = handle {
            for observer in self.observers_snapshot() {
                observer.on_session_shutdown(&handle);
            }
        }
    }

    /// Mint a context token belonging to `session`.
    pub fn issue_context(&self, session: &SessionHandle) -> HostContext {
        let mut state = self.state.lock().expect("host state lock poisoned");
        state.next_context += 1;
        let ctx = HostContext(state.next_context);
        state.contexts.insert(ctx, session.id().clone());
        ctx
    }

    /// Mint a context token that resolves to no session.
    pub fn orphan_context(&self) -> HostContext {
        let mut state = self.state.lock().expect("host state lock poisoned");
        state.next_context += 1;
        HostContext(state.next_context)
    }

    /// Set a named startup argument.
    pub fn set_argument(&self, name: &str, value: ArgumentValue) {
        let mut state = self.state.lock().expect("host state lock poisoned");
        state.arguments.insert(name.to_string(), value);
    }

    // ------------------------------------------------------------------
    // Extension-point dispatch, as the host would perform it
    // ------------------------------------------------------------------

    /// Dispatch `on_activated` to every behavior applied to `path`.
    pub fn activate(&self, path: &TargetPath, ctx: HostContext) {
        self.dispatch(path, ctx, |behavior, view| behavior.on_activated(view));
    }

    /// Dispatch `on_deactivated` to every behavior applied to `path`.
    pub fn deactivate(&self, path: &TargetPath, ctx: HostContext) {
        self.dispatch(path, ctx, |behavior, view| behavior.on_deactivated(view));
    }

    /// Route a console command to every behavior applied to `path`.
    pub fn command(&self, path: &TargetPath, ctx: HostContext, command: &str) {
        self.dispatch(path, ctx, |behavior, view| {
            behavior.on_command(view, command)
        });
    }

    /// Fire a named input action at every behavior applied to `path`.
    pub fn input_action(&self, path: &TargetPath, ctx: HostContext, action: &str) {
        self.dispatch(path, ctx, |behavior, view| {
            behavior.on_input_action(view, action)
        });
    }

    /// Dispatch `on_shutdown` to every behavior applied to `path`.
    pub fn shutdown_target(&self, path: &TargetPath, ctx: HostContext) {
        self.dispatch(path, ctx, |behavior, view| behavior.on_shutdown(view));
    }

    /// Ask applied behaviors for a desired focus widget; first answer wins.
    pub fn focus_query(&self, path: &TargetPath, ctx: HostContext) -> Option<String> {
        let (behaviors, view) = self.view_of(path, ctx)?;
        behaviors
            .iter()
            .find_map(|behavior| behavior.desired_focus_target(&view))
    }

    /// Current visibility of a target. Unknown targets report hidden.
    pub fn is_visible(&self, path: &TargetPath) -> bool {
        let state = self.state.lock().expect("host state lock poisoned");
        state.targets.get(path).is_some_and(|entry| entry.visible)
    }

    /// Number of behaviors applied to a target.
    pub fn behavior_count(&self, path: &TargetPath) -> usize {
        let state = self.state.lock().expect("host state lock poisoned");
        state
            .targets
            .get(path)
            .map_or(0, |entry| entry.behaviors.len())
    }

    fn dispatch<F>(&self, path: &TargetPath, ctx: HostContext, invoke: F)
    where
        F: Fn(&Arc<dyn ExtensionBehavior>, &dyn TargetView),
    {
        if let Some((behaviors, view)) = self.view_of(path, ctx) {
            for behavior in &behaviors {
                invoke(behavior, &view);
            }
        }
    }

    // Snapshot behaviors and instance data under the lock, then invoke
    // callbacks without holding it; `set_visible` re-enters the lock.
    fn view_of(
        &self,
        path: &TargetPath,
        ctx: HostContext,
    ) -> Option<(Vec<Arc<dyn ExtensionBehavior>>, MemoryTargetView<'_>)> {
        let state = self.state.lock().expect("host state lock poisoned");
        let entry = state.targets.get(path)?;
        let view = MemoryTargetView {
            host: self,
            path: path.clone(),
            name: format!("{}_0", path.leaf()),
            widgets: entry.widgets.clone(),
            ctx,
        };
        Some((entry.behaviors.clone(), view))
    }

    fn set_target_visible(&self, path: &TargetPath, visible: bool) {
        let mut state = self.state.lock().expect("host state lock poisoned");
        if let Some(entry) = state.targets.get_mut(path) {
            entry.visible = visible;
        }
    }

    fn observers_snapshot(&self) -> Vec<Arc<dyn SessionObserver>> {
        self.observers
            .lock()
            .expect("host observer lock poisoned")
            .clone()
    }
}

struct MemoryTargetView<'a> {
    host: &'a MemoryHost,
    path: TargetPath,
    name: String,
    widgets: Vec<String>,
    ctx: HostContext,
}

impl TargetView for MemoryTargetView<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_widget(&self, widget: &str) -> bool {
        self.widgets.iter().any(|w| w == widget)
    }

    fn set_visible(&self, visible: bool) {
        self.host.set_target_visible(&self.path, visible);
    }

    fn context(&self) -> HostContext {
        self.ctx
    }
}

impl SessionRuntime for MemoryHost {
    fn current_session(&self, ctx: HostContext) -> Option<SessionHandle> {
        let state = self.state.lock().expect("host state lock poisoned");
        let owner = state.contexts.get(&ctx)?;
        state.sessions.get(owner).cloned()
    }

    fn session_name(&self, session: &SessionHandle) -> String {
        let state = self.state.lock().expect("host state lock poisoned");
        state
            .sessions
            .get(session.id())
            .map_or_else(|| session.name().to_string(), |live| live.name().to_string())
    }

    fn subscribe(&self, observer: Arc<dyn SessionObserver>) {
        self.observers
            .lock()
            .expect("host observer lock poisoned")
            .push(observer);
    }
}

impl ObjectSystem for MemoryHost {
    fn resolve_target(&self, path: &TargetPath) -> Option<TargetRef> {
        let mut state = self.state.lock().expect("host state lock poisoned");
        if !state.targets.contains_key(path) {
            return None;
        }
        state.next_token += 1;
        let target = TargetRef(state.next_token);
        state.resolved.insert(target, path.clone());
        Some(target)
    }

    fn convert_for_extension(&self, target: TargetRef) -> ExtensibleRef {
        // Tokens share one numbering; conversion is identity here.
        ExtensibleRef(target.0)
    }

    fn apply_behavior(
        &self,
        class: ExtensibleRef,
        behavior: Arc<dyn ExtensionBehavior>,
        options: ApplyOptions,
    ) {
        let mut state = self.state.lock().expect("host state lock poisoned");
        let Some(path) = state.resolved.get(&TargetRef(class.0)).cloned() else {
            return;
        };
        trace!(
            target: "host::memory",
            path = %path,
            behavior = behavior.name(),
            native_lifetime = options.native_lifetime,
            "behavior applied"
        );
        if let Some(entry) = state.targets.get_mut(&path) {
            entry.behaviors.push(behavior);
        }
    }
}

impl ArgumentChannel for MemoryHost {
    fn named(&self, name: &str) -> Option<ArgumentValue> {
        let state = self.state.lock().expect("host state lock poisoned");
        state.arguments.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FocusProbe;

    impl ExtensionBehavior for FocusProbe {
        fn name(&self) -> &'static str {
            "focus_probe"
        }

        fn desired_focus_target(&self, target: &dyn TargetView) -> Option<String> {
            target
                .has_widget("StartGameButton")
                .then(|| "StartGameButton".to_string())
        }
    }

    #[test]
    fn resolve_unknown_target_is_absent() {
        let host = MemoryHost::new();
        assert!(host.resolve_target(&TargetPath::from("/missing")).is_none());
    }

    #[test]
    fn applied_behavior_answers_focus_query() {
        let host = MemoryHost::new();
        let path = TargetPath::from("/Game/UI/Menu/W_FrontEnd");
        host.install_target(path.clone(), &["StartGameButton"]);

        let target = host.resolve_target(&path).expect("target installed");
        let class = host.convert_for_extension(target);
        host.apply_behavior(class, Arc::new(FocusProbe), ApplyOptions::default());

        let session = host.open_session("GI_0");
        let ctx = host.issue_context(&session);
        assert_eq!(
            host.focus_query(&path, ctx),
            Some("StartGameButton".to_string())
        );
        assert_eq!(host.behavior_count(&path), 1);
    }

    #[test]
    fn arguments_round_trip_by_kind() {
        let host = MemoryHost::new();
        host.set_argument("Mode", ArgumentValue::Text("editor".to_string()));

        let value = host.named("Mode").expect("argument set");
        assert_eq!(value.as_text(), Some("editor"));
        assert!(value.as_session().is_none());
        assert!(host.named("Unset").is_none());
    }

    #[test]
    fn closed_session_no_longer_resolves() {
        let host = MemoryHost::new();
        let session = host.open_session("GI_0");
        let ctx = host.issue_context(&session);
        assert!(host.current_session(ctx).is_some());

        host.close_session(session.id());
        assert!(host.current_session(ctx).is_none());
    }
}
