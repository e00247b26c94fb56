//! Target resolution and behavior application seams.
//!
//! The host owns an object/class system that can resolve string paths to
//! classes and graft extension behaviors onto them. EqSys only sees opaque
//! tokens; the actual override mechanics stay on the host side.

use std::fmt;
use std::sync::Arc;

use crate::extension::ExtensionBehavior;

/// String path identifying an externally defined target class.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetPath(String);

impl TargetPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as the instance display name by hosts that
    /// do not track per-instance names.
    pub fn leaf(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TargetPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Opaque token for a resolved target class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetRef(pub u64);

/// Opaque token for a target class prepared for extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExtensibleRef(pub u64);

/// Options forwarded to the host when applying a behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// The host manages the extended object's lifetime. Used by UI targets
    /// whose instances are created and torn down by the host's widget
    /// machinery.
    pub native_lifetime: bool,
}

impl ApplyOptions {
    pub const NATIVE_LIFETIME: Self = Self {
        native_lifetime: true,
    };
}

/// Host-owned object/class system.
pub trait ObjectSystem: Send + Sync {
    /// Resolve a target path to a class token. `None` when the path does not
    /// name a loadable class.
    fn resolve_target(&self, path: &TargetPath) -> Option<TargetRef>;

    /// Prepare a resolved class for behavior application.
    fn convert_for_extension(&self, target: TargetRef) -> ExtensibleRef;

    /// Graft a behavior onto an extensible class. The host dispatches the
    /// class's extension points to the behavior from then on.
    fn apply_behavior(
        &self,
        class: ExtensibleRef,
        behavior: Arc<dyn ExtensionBehavior>,
        options: ApplyOptions,
    );
}
