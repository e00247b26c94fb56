//! Collaborator interfaces owned by the embedding host.
//!
//! EqSys never drives the host; it reacts to host callbacks and reaches back
//! through the seams defined here. Each trait maps to one collaborator
//! surface:
//! - [`session`] covers session identity, context resolution, and lifecycle
//!   notifications
//! - [`object`] covers target resolution and behavior application
//! - [`args`] is the named-argument channel used once at process entry
//! - [`extension`] defines the extension points a behavior may override
//!
//! [`MemoryHost`] implements every seam in memory so integration tests and
//! engine-less embedders can drive the full loop.
pub mod args;
pub mod extension;
pub mod memory;
pub mod object;
pub mod session;

pub use args::{ArgumentChannel, ArgumentValue};
pub use extension::{ExtensionBehavior, TargetView};
pub use memory::MemoryHost;
pub use object::{ApplyOptions, ExtensibleRef, ObjectSystem, TargetPath, TargetRef};
pub use session::{HostContext, SessionHandle, SessionId, SessionObserver, SessionRuntime};
