/// Configuration management for the card grid server
///
/// Loads an optional TOML file named by `CARDGRID_CONFIG`; every field has a
/// default so the server starts without one.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use tracing::debug;

use crate::error::{CardGridError, Result};
use crate::logging::LoggingConfig;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "CARDGRID_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Manifest passed to `leptos::get_configuration`. `None` reads the
    /// values cargo-leptos exports into the environment.
    pub leptos_manifest: Option<String>,

    /// Overrides the Leptos `site-addr`
    pub site_addr: Option<SocketAddr>,

    pub logging: LoggingConfig,
}

impl WebConfig {
    /// Load from `CARDGRID_CONFIG` if set, defaults otherwise
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CardGridError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| {
            CardGridError::config(format!("invalid config file {}: {}", path.display(), e))
        })
    }
}
