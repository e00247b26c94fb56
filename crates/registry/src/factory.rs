//! Service construction and id allocation.

use eqsys_host::SessionHandle;
use tracing::debug;

use crate::service::{GameService, ServiceId};

/// Builds service records and owns the monotonic id counter.
///
/// The counter starts at [`ServiceId::BASE`] and only moves forward for the
/// factory's life. It lives here rather than in a process-wide static so the
/// registry object constructed at startup is the sole holder of shared state.
#[derive(Debug)]
pub struct ServiceFactory {
    next_id: ServiceId,
}

impl ServiceFactory {
    pub fn new() -> Self {
        Self {
            next_id: ServiceId::BASE,
        }
    }

    /// Construct a service for `owner`, consuming the next unique id.
    ///
    /// The owner's display name is captured here as a snapshot; later renames
    /// on the host side do not retroactively change diagnostics.
    pub fn create(&mut self, owner: &SessionHandle) -> GameService {
        let id = self.next_id;
        self.next_id = id.next();

        debug!(
            target: "registry::factory",
            uid = %id,
            owner = owner.name(),
            "service created"
        );
        GameService::new(id, owner)
    }

    /// Id the next `create` call will assign.
    pub fn peek_next(&self) -> ServiceId {
        self.next_id
    }
}

impl Default for ServiceFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_and_strictly_increasing() {
        let mut factory = ServiceFactory::new();
        let owner = SessionHandle::new("GI_0", "GI_0");

        let mut previous = None;
        for _ in 0..5 {
            let service = factory.create(&owner);
            if let Some(last) = previous {
                assert!(service.unique_id() > last);
            }
            previous = Some(service.unique_id());
        }
    }

    #[test]
    fn first_id_is_the_base() {
        let mut factory = ServiceFactory::new();
        let owner = SessionHandle::new("GI_0", "MyGameInstance");

        let service = factory.create(&owner);
        assert_eq!(service.unique_id(), ServiceId::BASE);
        assert_eq!(service.owner_name(), "MyGameInstance");
        assert!(service.is_active());
        assert_eq!(factory.peek_next(), ServiceId::BASE.next());
    }
}
