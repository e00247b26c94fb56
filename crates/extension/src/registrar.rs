//! Behavior registration against the host object system.

use std::sync::Arc;

use eqsys_host::{ObjectSystem, TargetPath};
use tracing::{error, info};

use crate::config::RegistrationConfig;
use crate::errors::{ExtensionError, Result};

/// Outcome of one entry in a batch registration.
#[derive(Debug)]
pub struct RegistrationReport {
    pub path: TargetPath,
    pub outcome: Result<()>,
}

impl RegistrationReport {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Applies behavior configurations through the host's object system.
///
/// Stateless after completion: the registrar holds no record of what it
/// registered beyond the reports it returns.
pub struct MixinRegistrar {
    objects: Arc<dyn ObjectSystem>,
}

impl MixinRegistrar {
    pub fn new(objects: Arc<dyn ObjectSystem>) -> Self {
        Self { objects }
    }

    /// Register a single behavior configuration.
    ///
    /// Resolution failure is logged with the offending path and returned as
    /// an error; it never aborts the process.
    pub fn register(&self, config: &RegistrationConfig) -> Result<()> {
        let Some(target) = self.objects.resolve_target(&config.target_path) else {
            error!(
                target: "extension::registrar",
                path = %config.target_path,
                "failed to resolve extension target"
            );
            return Err(ExtensionError::TargetResolution {
                path: config.target_path.clone(),
            });
        };

        let class = self.objects.convert_for_extension(target);
        self.objects
            .apply_behavior(class, Arc::clone(&config.behavior), config.options);

        match &config.debug_label {
            Some(label) => info!(
                target: "extension::registrar",
                label = label.as_str(),
                path = %config.target_path,
                "behavior applied"
            ),
            None => info!(
                target: "extension::registrar",
                path = %config.target_path,
                "behavior applied"
            ),
        }
        Ok(())
    }

    /// Register a batch of configurations in order.
    ///
    /// Each entry's failure is isolated: the full list is always processed
    /// and the returned reports carry a per-entry outcome.
    pub fn register_all(&self, configs: &[RegistrationConfig]) -> Vec<RegistrationReport> {
        configs
            .iter()
            .map(|config| RegistrationReport {
                path: config.target_path.clone(),
                outcome: self.register(config),
            })
            .collect()
    }
}
