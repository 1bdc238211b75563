//! Durable read/write of exactly one [`Config`] value.
//!
//! The on-disk encoding is pretty-printed JSON whose keys are exactly the
//! schema's field names. Only the store writes the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::Config;

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "CONFIGURATOR_CONFIG";

/// Errors that can occur when loading or storing the configuration file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("no configuration file at '{path}'")]
    NotFound { path: PathBuf },

    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write configuration to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns the path to the configuration file.
///
/// `CONFIGURATOR_CONFIG` overrides; otherwise
/// `~/.config/configurator/config.json` on Unix/macOS, or equivalent on
/// other platforms via `dirs::config_dir()`. Falls back to the current
/// directory if config_dir is unavailable.
pub fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("configurator").join("config.json")
}

/// Load the persisted configuration from `path`.
///
/// Fails with [`PersistError::NotFound`] when no file exists and
/// [`PersistError::Corrupt`] when the content does not decode into a
/// complete [`Config`] — a missing key fails the load rather than
/// defaulting, so corruption is never masked.
pub fn load(path: &Path) -> Result<Config, PersistError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PersistError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            PersistError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let config = serde_json::from_str(&content).map_err(|e| PersistError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Write `config`'s full encoding to `path`, creating parent directories
/// as needed.
pub fn store(path: &Path, config: &Config) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PersistError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let encoded = serde_json::to_string_pretty(config).map_err(|e| PersistError::Write {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    fs::write(path, encoded).map_err(|e| PersistError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), "configuration stored");
    Ok(())
}
