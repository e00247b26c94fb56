//! Builder-based startup and the running system façade.

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info, warn};

use eqsys_extension::{MixinRegistrar, RegistrationConfig, RegistrationReport};
use eqsys_host::{ArgumentChannel, HostContext, ObjectSystem, SessionRuntime};
use eqsys_registry::{GameService, LifecycleBridge, RegistryError, ServiceRegistry};

use crate::config::BootstrapConfig;
use crate::manifest::standard_manifest;

/// The running scripting-layer system.
///
/// Holds the service registry and the host session runtime; everything else
/// (registrar, manifest entries, bridge) has done its one-shot work by the
/// time `start` returns.
pub struct System {
    registry: ServiceRegistry,
    runtime: Arc<dyn SessionRuntime>,
    reports: Vec<RegistrationReport>,
}

impl System {
    pub fn builder(config: BootstrapConfig) -> SystemBuilder {
        SystemBuilder::new(config)
    }

    /// The sole externally callable query: resolve the context's session and
    /// return its attached service, lazily creating it when absent.
    ///
    /// Returns `None` (and logs) when the context resolves to no session.
    pub fn service(&self, ctx: HostContext) -> Option<GameService> {
        let Some(session) = self.runtime.current_session(ctx) else {
            debug!(
                target: "bootstrap::system",
                %ctx,
                error = %RegistryError::InvalidOwner,
                "service query aborted"
            );
            return None;
        };

        if self.registry.lookup(session.id()).is_none() {
            warn!(
                target: "bootstrap::system",
                owner = self.runtime.session_name(&session),
                "lazily attaching service"
            );
        }
        Some(self.registry.get_or_create(&session))
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Per-entry outcomes of the startup registrations.
    pub fn registration_reports(&self) -> &[RegistrationReport] {
        &self.reports
    }
}

/// Collects host collaborators and configuration, then starts the system.
///
/// `start` consumes the builder: setup runs exactly once per built system,
/// which is the explicit replacement for init-on-first-import side effects.
pub struct SystemBuilder {
    config: BootstrapConfig,
    session_runtime: Option<Arc<dyn SessionRuntime>>,
    object_system: Option<Arc<dyn ObjectSystem>>,
    arguments: Option<Arc<dyn ArgumentChannel>>,
    extra_registrations: Vec<RegistrationConfig>,
}

impl SystemBuilder {
    fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            session_runtime: None,
            object_system: None,
            arguments: None,
            extra_registrations: Vec::new(),
        }
    }

    pub fn with_session_runtime(mut self, runtime: Arc<dyn SessionRuntime>) -> Self {
        self.session_runtime = Some(runtime);
        self
    }

    pub fn with_object_system(mut self, objects: Arc<dyn ObjectSystem>) -> Self {
        self.object_system = Some(objects);
        self
    }

    pub fn with_arguments(mut self, arguments: Arc<dyn ArgumentChannel>) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Wire all three collaborator seams from one host object.
    pub fn with_host<H>(self, host: Arc<H>) -> Self
    where
        H: SessionRuntime + ObjectSystem + ArgumentChannel + 'static,
    {
        self.with_session_runtime(host.clone())
            .with_object_system(host.clone())
            .with_arguments(host)
    }

    /// Append a registration after the standard manifest.
    pub fn with_registration(mut self, registration: RegistrationConfig) -> Self {
        self.extra_registrations.push(registration);
        self
    }

    /// Run startup: registrations in manifest order, initial session
    /// attachment from the startup argument, lifecycle subscription.
    ///
    /// Registration failures and a missing startup argument degrade the
    /// system rather than failing it; only absent collaborator wiring is a
    /// hard error.
    pub fn start(self) -> anyhow::Result<System> {
        let runtime = self
            .session_runtime
            .context("session runtime not configured")?;
        let objects = self.object_system.context("object system not configured")?;
        let arguments = self.arguments.context("argument channel not configured")?;

        let registry = ServiceRegistry::new();

        let mut manifest = standard_manifest(runtime.clone(), registry.clone(), &self.config);
        manifest.extend(self.extra_registrations);

        let registrar = MixinRegistrar::new(objects);
        let reports = registrar.register_all(&manifest);
        let failed = reports.iter().filter(|report| !report.succeeded()).count();
        info!(
            target: "bootstrap::startup",
            applied = reports.len() - failed,
            failed,
            "registrations processed"
        );

        let initial = arguments.named(&self.config.session_arg);
        match initial.as_ref().and_then(|value| value.as_session()) {
            Some(session) if self.config.eager_attach => {
                if let Some(existing) = registry.lookup(session.id()) {
                    debug!(
                        target: "bootstrap::startup",
                        uid = %existing.unique_id(),
                        owner = session.name(),
                        "service already attached for initial session"
                    );
                } else {
                    let service = registry.get_or_create(session);
                    info!(
                        target: "bootstrap::startup",
                        uid = %service.unique_id(),
                        owner = session.name(),
                        "initial service attached"
                    );
                }
            }
            Some(_) => debug!(
                target: "bootstrap::startup",
                "eager attach disabled; initial session left unattached"
            ),
            None => {
                let missing = RegistryError::MissingArgument {
                    name: self.config.session_arg.clone(),
                };
                warn!(
                    target: "bootstrap::startup",
                    error = %missing,
                    "starting without an initial session; service attaches lazily"
                );
            }
        }

        runtime.subscribe(Arc::new(LifecycleBridge::new(registry.clone())));

        Ok(System {
            registry,
            runtime,
            reports,
        })
    }
}
