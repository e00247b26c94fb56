//! Bootstrap configuration structures and loaders.
use std::env;

/// Name of the startup argument carrying the initial session handle.
pub const SESSION_ARG_NAME: &str = "GameInstance";

/// Configuration required to start the scripting-layer system.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Register the cheat console. Development tooling; defaults to debug
    /// builds only.
    pub enable_cheats: bool,
    /// Attach the initial session's service at startup when the session
    /// argument is present.
    pub eager_attach: bool,
    /// Name of the startup argument to query for the initial session.
    pub session_arg: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enable_cheats: cfg!(debug_assertions),
            eager_attach: true,
            session_arg: SESSION_ARG_NAME.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `EQSYS_ENABLE_CHEATS` - Register the cheat console (default: debug builds)
    /// - `EQSYS_EAGER_ATTACH` - Attach the initial session's service at startup (default: true)
    /// - `EQSYS_SESSION_ARG` - Startup argument name for the initial session (default: "GameInstance")
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enable) = read_env::<bool>("EQSYS_ENABLE_CHEATS") {
            config.enable_cheats = enable;
        } else if env::var("EQSYS_ENABLE_CHEATS").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.enable_cheats = true;
        }

        if let Some(eager) = read_env::<bool>("EQSYS_EAGER_ATTACH") {
            config.eager_attach = eager;
        }

        if let Ok(name) = env::var("EQSYS_SESSION_ARG") {
            config.session_arg = name;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
