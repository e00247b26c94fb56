//! Session identity and lifecycle notifications.

use std::fmt;
use std::sync::Arc;

/// Stable identifier for a host-owned session.
///
/// The host guarantees stability for the life of the session; a later
/// session reusing the same name is a different logical session.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Handle to a live host session.
///
/// Carries the stable id plus the display name at the time the host issued
/// the handle. The name is a convenience for diagnostics; [`SessionRuntime`]
/// answers live name queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionHandle {
    id: SessionId,
    name: String,
}

impl SessionHandle {
    pub fn new(id: impl Into<SessionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Opaque context token minted by the host.
///
/// Any gameplay or UI callback receives one; it resolves to the current
/// session through [`SessionRuntime::current_session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostContext(pub u64);

impl fmt::Display for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx#{}", self.0)
    }
}

/// Lifecycle notifications pushed by the host.
///
/// Implemented on the EqSys side and invoked synchronously from the host's
/// scripting thread on session start and shutdown.
pub trait SessionObserver: Send + Sync {
    fn on_session_init(&self, session: &SessionHandle);

    fn on_session_shutdown(&self, session: &SessionHandle);
}

/// Host-owned session runtime.
pub trait SessionRuntime: Send + Sync {
    /// Resolve the session a context belongs to, if any.
    fn current_session(&self, ctx: HostContext) -> Option<SessionHandle>;

    /// Live display name of a session.
    fn session_name(&self, session: &SessionHandle) -> String;

    /// Register an observer for session lifecycle notifications.
    fn subscribe(&self, observer: Arc<dyn SessionObserver>);
}
