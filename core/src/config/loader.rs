//! Activation config persistence
//!
//! The config file is pretty-printed JSON at a caller-supplied path
//! (see [`default_config_path`] for the conventional location):
//!
//! ```json
//! {
//!   "activationTicks": 200,
//!   "ventPairs": [
//!     { "dormant": "modid:dormant_vent_block", "active": "modid:active_vent_block" }
//!   ]
//! }
//! ```
//!
//! Loading never fails: a missing file is created from defaults, and a
//! malformed or unreadable file falls back to in-memory defaults without
//! touching what is on disk.

use std::fs;
use std::path::{Path, PathBuf};

use caldera_types::ActivationConfig;

use super::error::ConfigError;

/// Conventional config location: `<platform config dir>/caldera/activation.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("caldera").join("activation.json"))
}

/// Load the config from `path`, creating it with defaults if absent.
///
/// On parse or I/O failure the existing file is left untouched and the
/// defaults are used for the session.
pub fn load_or_create(path: &Path) -> ActivationConfig {
    if !path.exists() {
        return write_default(path);
    }

    match read(path) {
        Ok(config) => {
            tracing::info!(
                path = %path.display(),
                pairs = config.vent_pairs.len(),
                activation_ticks = config.activation_ticks,
                "Loaded activation config"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid activation config, using defaults");
            ActivationConfig::default()
        }
    }
}

/// Write the default config to `path` and return it.
///
/// A failed write is logged and the defaults are returned regardless.
pub fn write_default(path: &Path) -> ActivationConfig {
    let defaults = ActivationConfig::default();
    match write(path, &defaults) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "Created default activation config");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to write default activation config");
        }
    }
    defaults
}

fn read(path: &Path) -> Result<ActivationConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, config: &ActivationConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Contract is pretty-printed JSON; serializing a plain struct cannot fail
    let content = serde_json::to_string_pretty(config).expect("config serialization");

    fs::write(path, content).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
