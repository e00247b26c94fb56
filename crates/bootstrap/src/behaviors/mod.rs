//! Concrete extension behaviors registered by the standard manifest.
mod anim_debug;
mod cheat;
mod core_instance;
mod frontend;
mod hud;

pub use anim_debug::AnimDebugBehavior;
pub use cheat::CheatBehavior;
pub use core_instance::CoreInstanceBehavior;
pub use frontend::FrontEndBehavior;
pub use hud::HudLayoutBehavior;
