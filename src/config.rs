//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/triplepick/config.toml` (XDG) or platform config dir
//! 2. Project config: `.triplepick.toml`
//! 3. Environment variables: `TRIPLEPICK_*`
//!
//! All settings are optional; with no config present the tool operates on
//! the current working directory.
//!
//! ```toml
//! [workspace]
//! dir = "/path/to/blueprint-config"
//! ```

use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workspace: WorkspaceConfig,
}

/// Workspace location settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory holding the category graph files (`_classes.ttl`, ...)
    /// and selection state files (`classes.conf`, ...).
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();

        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(".triplepick.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("TRIPLEPICK_").split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Resolve the workspace directory: CLI override, then config, then cwd.
    pub fn workspace_dir(&self, override_dir: Option<PathBuf>) -> PathBuf {
        override_dir
            .or_else(|| self.workspace.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// User config path: ~/.config/triplepick/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("triplepick").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("triplepick").join("config.toml"))
            .unwrap_or_default()
    }
}
