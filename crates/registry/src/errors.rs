//! Error types surfaced by the service registry.
//!
//! Every variant is caught and logged at the boundary where it occurs; none
//! propagate far enough to crash the host. Missing attachments leave the
//! system running with degraded functionality.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no session available where an owner is required")]
    InvalidOwner,

    #[error("expected startup argument {name:?} is missing")]
    MissingArgument { name: String },
}
