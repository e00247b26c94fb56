//! The standard, order-sensitive registration manifest.

use std::sync::Arc;

use eqsys_extension::RegistrationConfig;
use eqsys_host::{ApplyOptions, SessionRuntime};
use eqsys_registry::ServiceRegistry;

use crate::behaviors::{
    AnimDebugBehavior, CheatBehavior, CoreInstanceBehavior, FrontEndBehavior, HudLayoutBehavior,
};
use crate::config::BootstrapConfig;

pub const CORE_INSTANCE_PATH: &str = "/Game/Core/B_GameInstance";
pub const FRONT_END_PATH: &str = "/Game/UI/Menu/W_FrontEnd";
pub const HUD_LAYOUT_PATH: &str = "/Game/UI/HUD/W_HudLayout";
pub const ANIM_DEBUG_PATH: &str = "/Game/UI/Debug/W_AnimDebug";
pub const CHEATS_PATH: &str = "/Game/Development/B_Cheats";

/// Build the standard registration list.
///
/// Order matters: the core instance registration anchors the service
/// machinery and must precede the UI entries that rely on it. The cheat
/// console is development tooling and only appears when the configuration
/// enables it. UI targets are extended with host-managed lifetimes since
/// their instances are created and torn down by the host's widget machinery.
pub fn standard_manifest(
    runtime: Arc<dyn SessionRuntime>,
    registry: ServiceRegistry,
    config: &BootstrapConfig,
) -> Vec<RegistrationConfig> {
    let mut manifest = vec![
        RegistrationConfig::new(
            CORE_INSTANCE_PATH,
            Arc::new(CoreInstanceBehavior::new(runtime, registry.clone())),
        )
        .with_label("CoreInstance"),
        RegistrationConfig::new(FRONT_END_PATH, Arc::new(FrontEndBehavior))
            .with_label("FrontEnd")
            .with_options(ApplyOptions::NATIVE_LIFETIME),
        RegistrationConfig::new(HUD_LAYOUT_PATH, Arc::new(HudLayoutBehavior))
            .with_label("HudLayout")
            .with_options(ApplyOptions::NATIVE_LIFETIME),
        RegistrationConfig::new(ANIM_DEBUG_PATH, Arc::new(AnimDebugBehavior))
            .with_label("AnimDebug")
            .with_options(ApplyOptions::NATIVE_LIFETIME),
    ];

    if config.enable_cheats {
        manifest.push(
            RegistrationConfig::new(CHEATS_PATH, Arc::new(CheatBehavior::new(registry)))
                .with_label("Cheats"),
        );
    }

    manifest
}
