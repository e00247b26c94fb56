//! Full startup scenarios: registration, eager/lazy attachment, lifecycle.

use std::sync::Arc;

use eqsys_bootstrap::manifest::{
    ANIM_DEBUG_PATH, CHEATS_PATH, CORE_INSTANCE_PATH, FRONT_END_PATH, HUD_LAYOUT_PATH,
};
use eqsys_bootstrap::{BootstrapConfig, SESSION_ARG_NAME, System};
use eqsys_host::{ArgumentValue, MemoryHost, TargetPath};
use eqsys_registry::ServiceId;

// Parallel tests race to install the subscriber; whoever wins, wins.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn test_config() -> BootstrapConfig {
    init_tracing();
    BootstrapConfig {
        enable_cheats: true,
        eager_attach: true,
        session_arg: SESSION_ARG_NAME.to_string(),
    }
}

fn install_standard_targets(host: &MemoryHost) {
    host.install_target(CORE_INSTANCE_PATH, &[]);
    host.install_target(FRONT_END_PATH, &["StartGameButton", "QuitButton"]);
    host.install_target(HUD_LAYOUT_PATH, &[]);
    host.install_target(ANIM_DEBUG_PATH, &[]);
    host.install_target(CHEATS_PATH, &[]);
}

#[test]
fn startup_with_initial_session_attaches_eagerly() {
    let host = Arc::new(MemoryHost::new());
    install_standard_targets(&host);

    let session = host.open_session("GI_0");
    host.set_argument(SESSION_ARG_NAME, ArgumentValue::Session(session.clone()));

    let system = System::builder(test_config())
        .with_host(host.clone())
        .start()
        .expect("startup succeeds");

    assert!(
        system
            .registration_reports()
            .iter()
            .all(|report| report.succeeded())
    );
    assert_eq!(system.registration_reports().len(), 5);

    // The startup argument drove eager attachment at the id base.
    let attached = system
        .registry()
        .lookup(session.id())
        .expect("eagerly attached");
    assert_eq!(attached.unique_id(), ServiceId::BASE);

    // GetService from a context of the same session returns the same record.
    let ctx = host.issue_context(&session);
    let queried = system.service(ctx).expect("context has a session");
    assert_eq!(queried.unique_id(), attached.unique_id());
    queried.do_work();
}

#[test]
fn startup_without_argument_degrades_to_lazy_attachment() {
    let host = Arc::new(MemoryHost::new());
    install_standard_targets(&host);

    let system = System::builder(test_config())
        .with_host(host.clone())
        .start()
        .expect("missing argument is not fatal");
    assert_eq!(system.registry().service_count(), 0);

    // First GetService call materializes the service.
    let session = host.open_session("GI_0");
    // open_session fired the lifecycle bridge, which already attached; make
    // the lazy path observable by detaching first.
    assert!(system.registry().destroy(session.id()));

    let ctx = host.issue_context(&session);
    let service = system.service(ctx).expect("lazily attached");
    assert!(service.is_active());
    assert_eq!(system.registry().service_count(), 1);
}

#[test]
fn service_query_without_session_is_absent() {
    let host = Arc::new(MemoryHost::new());
    install_standard_targets(&host);

    let system = System::builder(test_config())
        .with_host(host.clone())
        .start()
        .expect("startup succeeds");

    let ctx = host.orphan_context();
    assert!(system.service(ctx).is_none());
    assert_eq!(system.registry().service_count(), 0);
}

#[test]
fn session_shutdown_detaches_then_reuse_gets_fresh_identity() {
    let host = Arc::new(MemoryHost::new());
    install_standard_targets(&host);

    let system = System::builder(test_config())
        .with_host(host.clone())
        .start()
        .expect("startup succeeds");

    let first = host.open_session("GI_0");
    let first_id = system
        .registry()
        .lookup(first.id())
        .expect("bridge attached at init")
        .unique_id();
    host.close_session(first.id());
    assert!(system.registry().lookup(first.id()).is_none());

    // Reused session name is a brand-new logical session.
    let second = host.open_session("GI_0");
    let second_id = system
        .registry()
        .lookup(second.id())
        .expect("bridge attached at init")
        .unique_id();
    assert!(second_id > first_id);
}

#[test]
fn core_shutdown_extension_point_destroys_the_service() {
    let host = Arc::new(MemoryHost::new());
    install_standard_targets(&host);

    let system = System::builder(test_config())
        .with_host(host.clone())
        .start()
        .expect("startup succeeds");

    let session = host.open_session("GI_0");
    let ctx = host.issue_context(&session);
    assert!(system.registry().lookup(session.id()).is_some());

    host.shutdown_target(&TargetPath::from(CORE_INSTANCE_PATH), ctx);
    assert!(system.registry().lookup(session.id()).is_none());
}

#[test]
fn front_end_focus_and_anim_debug_visibility() {
    let host = Arc::new(MemoryHost::new());
    install_standard_targets(&host);

    let _system = System::builder(test_config())
        .with_host(host.clone())
        .start()
        .expect("startup succeeds");

    let session = host.open_session("GI_0");
    let ctx = host.issue_context(&session);

    let front_end = TargetPath::from(FRONT_END_PATH);
    host.activate(&front_end, ctx);
    assert_eq!(
        host.focus_query(&front_end, ctx),
        Some("StartGameButton".to_string())
    );

    let anim_debug = TargetPath::from(ANIM_DEBUG_PATH);
    assert!(host.is_visible(&anim_debug));
    host.command(&anim_debug, ctx, "hide");
    assert!(!host.is_visible(&anim_debug));
    host.command(&anim_debug, ctx, "show");
    assert!(host.is_visible(&anim_debug));

    // HUD activation round trip and an observed input action are log-only.
    let hud = TargetPath::from(HUD_LAYOUT_PATH);
    host.activate(&hud, ctx);
    host.deactivate(&hud, ctx);
    host.input_action(&TargetPath::from(CORE_INSTANCE_PATH), ctx, "IA_Jump");
}

#[test]
fn cheat_console_commands_leave_the_registry_intact() {
    let host = Arc::new(MemoryHost::new());
    install_standard_targets(&host);

    let system = System::builder(test_config())
        .with_host(host.clone())
        .start()
        .expect("startup succeeds");

    let session = host.open_session("GI_0");
    let ctx = host.issue_context(&session);

    let cheats = TargetPath::from(CHEATS_PATH);
    host.command(&cheats, ctx, "help");
    host.command(&cheats, ctx, "info");
    host.command(&cheats, ctx, "test");
    host.command(&cheats, ctx, "debug probe message");
    host.command(&cheats, ctx, "no_such_command");

    // Console traffic is observability only; the attachment is untouched.
    assert_eq!(system.registry().service_count(), 1);
    assert!(system.registry().lookup(session.id()).is_some());
}

#[test]
fn cheat_registration_is_skipped_when_disabled() {
    let host = Arc::new(MemoryHost::new());
    install_standard_targets(&host);

    let config = BootstrapConfig {
        enable_cheats: false,
        ..test_config()
    };
    let system = System::builder(config)
        .with_host(host.clone())
        .start()
        .expect("startup succeeds");

    assert_eq!(system.registration_reports().len(), 4);
    assert_eq!(host.behavior_count(&TargetPath::from(CHEATS_PATH)), 0);
}

#[test]
fn missing_target_is_isolated_at_startup() {
    let host = Arc::new(MemoryHost::new());
    // HUD layout deliberately left uninstalled.
    host.install_target(CORE_INSTANCE_PATH, &[]);
    host.install_target(FRONT_END_PATH, &["StartGameButton"]);
    host.install_target(ANIM_DEBUG_PATH, &[]);
    host.install_target(CHEATS_PATH, &[]);

    let system = System::builder(test_config())
        .with_host(host.clone())
        .start()
        .expect("resolution failure is not fatal");

    let reports = system.registration_reports();
    assert_eq!(reports.len(), 5);
    let failed: Vec<_> = reports.iter().filter(|r| !r.succeeded()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].path, TargetPath::from(HUD_LAYOUT_PATH));

    // The degraded system still serves attachments.
    let session = host.open_session("GI_0");
    assert!(system.registry().lookup(session.id()).is_some());
}
