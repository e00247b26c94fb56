//! Configuration-driven registration of extension behaviors.
//!
//! The registrar resolves externally named targets through the host's object
//! system and grafts behavior objects onto them. Registration is one-shot and
//! order-sensitive; a failing entry is logged and isolated so the rest of a
//! batch still applies.
pub mod config;
pub mod errors;
pub mod registrar;

pub use config::RegistrationConfig;
pub use errors::{ExtensionError, Result};
pub use registrar::{MixinRegistrar, RegistrationReport};
