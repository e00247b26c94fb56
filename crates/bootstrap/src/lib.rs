//! Startup wiring for the service registry and extension behaviors.
//!
//! Replaces module-load-time side effects with an explicit, consume-once
//! builder: collect the host collaborators, run the ordered registration
//! manifest, attach the initial session's service from the startup argument,
//! and subscribe the lifecycle bridge. The resulting [`System`] exposes the
//! one externally callable query, [`System::service`].
//!
//! Embedders that want log output should install a `tracing` subscriber
//! before calling [`SystemBuilder::start`], e.g.
//! `tracing_subscriber::fmt().with_env_filter(...).init()`.
pub mod behaviors;
pub mod builder;
pub mod config;
pub mod manifest;

pub use builder::{System, SystemBuilder};
pub use config::{BootstrapConfig, SESSION_ARG_NAME};
pub use manifest::standard_manifest;
