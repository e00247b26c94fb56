//! Session-to-service attachment map.

use std::collections::HashMap;

use eqsys_host::{SessionHandle, SessionId};
use tracing::debug;

use crate::factory::ServiceFactory;
use crate::service::GameService;

/// Maps a session id to at most one live service.
///
/// The store exclusively owns its records. Creation is lazy on first access;
/// teardown is explicit. Destroying and re-creating under the same session id
/// yields a fresh record with a new unique id: session identity reuse never
/// implies service identity reuse.
#[derive(Debug, Default)]
pub struct AttachmentStore {
    factory: ServiceFactory,
    services: HashMap<SessionId, GameService>,
}

impl AttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the live service for `owner`, creating one if absent.
    ///
    /// Idempotent under repeated calls with no intervening destroy: the same
    /// record (same unique id) comes back every time.
    pub fn get_or_create(&mut self, owner: &SessionHandle) -> &GameService {
        self.services
            .entry(owner.id().clone())
            .or_insert_with(|| self.factory.create(owner))
    }

    /// Tear down the service attached to `session`.
    ///
    /// Returns whether a record was found. Calling destroy on a session with
    /// no record is a no-op returning false.
    pub fn destroy(&mut self, session: &SessionId) -> bool {
        match self.services.remove(session) {
            Some(mut service) => {
                service.destroy();
                true
            }
            None => {
                debug!(
                    target: "registry::store",
                    session = %session,
                    "destroy requested for session with no attached service"
                );
                false
            }
        }
    }

    /// Pure read. Never triggers creation.
    pub fn lookup(&self, session: &SessionId) -> Option<&GameService> {
        self.services.get(session)
    }

    /// Number of live attachments.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
