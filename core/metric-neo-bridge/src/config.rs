use std::path::{Path, PathBuf};

use metric_neo_model::{HydrationPolicy, Hydrator};
use metric_neo_types::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// File name looked up inside the metric-neo config directory.
pub const CONFIG_FILE: &str = "bridge.toml";

/// Bridge configuration parsed from `bridge.toml`.
///
/// ```toml
/// policy = "strict"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// How required-but-missing fields are treated.
    pub policy: HydrationPolicy,
}

impl BridgeConfig {
    /// Loads `bridge.toml` from the platform config directory if it exists.
    pub fn load() -> Self {
        Self::load_from(config_dir().join(CONFIG_FILE))
    }

    /// Loads configuration from an explicit path.
    /// Falls back to defaults with a warning if the file is unreadable or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No bridge config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(config) => {
                    info!(policy = ?config.policy, "Loaded bridge config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("{} in {:?}. Falling back to defaults.", e, path);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read bridge config {:?}: {}. Falling back to defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// A hydrator configured with this policy.
    #[must_use]
    pub fn hydrator(&self) -> Hydrator {
        Hydrator::new(self.policy)
    }
}

/// Resolve the metric-neo config directory.
fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        if !dir.is_empty() {
            return Path::new(&dir).join("metric-neo");
        }
    }
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Path::new(&appdata).join("metric-neo");
    }
    if let Ok(home) = std::env::var("HOME") {
        Path::new(&home).join(".config").join("metric-neo")
    } else {
        PathBuf::from(".metric-neo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_app_name() {
        let dir = config_dir();
        assert!(
            dir.ends_with("metric-neo") || dir.ends_with(".metric-neo"),
            "{dir:?}"
        );
    }

    #[test]
    fn default_hydrator_is_tolerant() {
        assert_eq!(BridgeConfig::default().hydrator(), Hydrator::tolerant());
    }
}
