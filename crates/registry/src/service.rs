//! Per-session service record and its identity vocabulary.

use std::fmt;

use eqsys_host::{SessionHandle, SessionId};
use tracing::{debug, info};

/// Unique identifier for a service record.
///
/// Assigned monotonically from [`ServiceId::BASE`], never reused within a
/// process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceId(pub u64);

impl ServiceId {
    /// First id handed out by a fresh factory.
    pub const BASE: Self = Self(1000);

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service lifecycle state. Destroyed is terminal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ServiceState {
    #[default]
    Active,
    Destroyed,
}

/// The per-session service.
///
/// Owned exclusively by the attachment store; callers receive clones and
/// compare identity through [`GameService::unique_id`]. The owner name is a
/// snapshot taken at construction, kept for diagnostics only.
#[derive(Clone, Debug)]
pub struct GameService {
    unique_id: ServiceId,
    owner_session: SessionId,
    owner_name: String,
    state: ServiceState,
}

impl GameService {
    pub(crate) fn new(unique_id: ServiceId, owner: &SessionHandle) -> Self {
        Self {
            unique_id,
            owner_session: owner.id().clone(),
            owner_name: owner.name().to_string(),
            state: ServiceState::Active,
        }
    }

    pub fn unique_id(&self) -> ServiceId {
        self.unique_id
    }

    pub fn owner_session(&self) -> &SessionId {
        &self.owner_session
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ServiceState::Active
    }

    /// Perform one unit of service work. Placeholder business operation kept
    /// on the record so callers exercise the attachment rather than the map.
    pub fn do_work(&self) {
        info!(target: "registry::service", uid = %self.unique_id, "doing work");
    }

    pub(crate) fn destroy(&mut self) {
        self.state = ServiceState::Destroyed;
        debug!(
            target: "registry::service",
            uid = %self.unique_id,
            owner = %self.owner_name,
            "service destroyed"
        );
    }
}
