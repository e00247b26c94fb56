//! Shared, cloneable façade over the attachment store.

use std::sync::{Arc, Mutex};

use eqsys_host::{HostContext, SessionHandle, SessionId, SessionRuntime};

use crate::errors::{RegistryError, Result};
use crate::service::GameService;
use crate::store::AttachmentStore;

/// Clients hold clones of this handle; the store and its id counter live
/// behind one mutex, which is the explicit mutual exclusion required before
/// any multi-threaded embedding of the otherwise single-threaded host model.
#[derive(Clone)]
pub struct ServiceRegistry {
    store: Arc<Mutex<AttachmentStore>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(AttachmentStore::new())),
        }
    }

    /// Return a snapshot of the live service for `owner`, creating the
    /// record if absent.
    pub fn get_or_create(&self, owner: &SessionHandle) -> GameService {
        let mut store = self.store.lock().expect("attachment store lock poisoned");
        store.get_or_create(owner).clone()
    }

    /// Resolve the context's current session and lazily attach its service.
    ///
    /// Fails with [`RegistryError::InvalidOwner`] when the host reports no
    /// session for the context; callers log and degrade.
    pub fn attach_current(
        &self,
        runtime: &dyn SessionRuntime,
        ctx: HostContext,
    ) -> Result<GameService> {
        let session = runtime
            .current_session(ctx)
            .ok_or(RegistryError::InvalidOwner)?;
        Ok(self.get_or_create(&session))
    }

    /// Tear down the service attached to `session`, if any.
    pub fn destroy(&self, session: &SessionId) -> bool {
        let mut store = self.store.lock().expect("attachment store lock poisoned");
        store.destroy(session)
    }

    /// Snapshot of the attached service without triggering creation.
    pub fn lookup(&self, session: &SessionId) -> Option<GameService> {
        let store = self.store.lock().expect("attachment store lock poisoned");
        store.lookup(session).cloned()
    }

    /// Number of live attachments.
    pub fn service_count(&self) -> usize {
        let store = self.store.lock().expect("attachment store lock poisoned");
        store.len()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
