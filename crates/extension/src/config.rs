//! Registration configuration entries.

use std::sync::Arc;

use eqsys_host::{ApplyOptions, ExtensionBehavior, TargetPath};

/// One registration: which external target to extend, with what behavior,
/// under what options. Built at startup and never mutated afterwards;
/// entries live for the process lifetime.
#[derive(Clone)]
pub struct RegistrationConfig {
    pub target_path: TargetPath,
    pub behavior: Arc<dyn ExtensionBehavior>,
    pub debug_label: Option<String>,
    pub options: ApplyOptions,
}

impl RegistrationConfig {
    pub fn new(target_path: impl Into<TargetPath>, behavior: Arc<dyn ExtensionBehavior>) -> Self {
        Self {
            target_path: target_path.into(),
            behavior,
            debug_label: None,
            options: ApplyOptions::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.debug_label = Some(label.into());
        self
    }

    pub fn with_options(mut self, options: ApplyOptions) -> Self {
        self.options = options;
        self
    }
}
