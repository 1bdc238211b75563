//! Thread-safe configuration storage.
//!
//! Single source of truth for the current configuration. Reads hand out
//! snapshots; updates are validated, swapped in atomically, and written
//! through to disk under one lock.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::persistence::{self, PersistError};
use crate::schema::{Field, FieldValue};
use crate::types::Config;
use crate::validation::{UnknownField, ValidationError, ValidatorRegistry};

/// Handle to the process-wide configuration state.
///
/// Cloning yields another handle to the same state, so collaborators
/// receive the store by injection at startup rather than through an
/// ambient global. A `ConfigStore` value only exists once `initialize`
/// has completed, so reads and updates before startup are unrepresentable.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    /// Guards the swap-and-persist step of `set` and the snapshot in `get`.
    config: Mutex<Config>,
    /// Startup-phase registrations; append-only once traffic begins.
    validators: RwLock<ValidatorRegistry>,
    path: PathBuf,
}

impl ConfigStore {
    /// Bring up the store from the file at `path`.
    ///
    /// A missing file is expected on first run: the default configuration
    /// is persisted immediately so the next load finds a file. A file that
    /// exists but does not decode is left in place untouched and the
    /// default configuration is used instead.
    pub fn initialize(path: PathBuf) -> Self {
        let config = match persistence::load(&path) {
            Ok(config) => config,
            Err(PersistError::NotFound { .. }) => {
                warn!(path = %path.display(), "configuration file not found, creating new file");
                let config = Config::default();
                if let Err(e) = persistence::store(&path, &config) {
                    warn!("failed to store default configuration: {e}");
                }
                config
            }
            Err(e) => {
                warn!("error loading configuration: {e}");
                warn!("using default configuration");
                Config::default()
            }
        };

        info!(path = %path.display(), "configurator started");
        Self {
            inner: Arc::new(StoreInner {
                config: Mutex::new(config),
                validators: RwLock::new(ValidatorRegistry::new()),
                path,
            }),
        }
    }

    /// Get a snapshot of the current configuration.
    ///
    /// Cheap because `Config` is `Clone`. Waits only for an in-flight
    /// `set` to finish its swap-and-persist step, and can never observe a
    /// partially-replaced value.
    pub async fn get(&self) -> Config {
        self.inner.config.lock().await.clone()
    }

    /// Propose `candidate` as the new configuration.
    ///
    /// Every validator registered for any field runs against the candidate
    /// first; the first failure rejects the whole update and leaves both
    /// memory and disk unchanged. On acceptance the in-memory value is
    /// replaced and written through to disk while still holding the lock,
    /// so concurrent `set` calls cannot interleave their accept/persist
    /// steps. A failed disk write is logged but does not undo the
    /// in-memory acceptance; a restart would then come up with the last
    /// successfully persisted value.
    pub async fn set(&self, candidate: Config) -> Result<Config, ValidationError> {
        // Validators see only the candidate, so this runs outside the
        // state lock.
        self.inner.validators.read().check(&candidate)?;

        let mut guard = self.inner.config.lock().await;
        *guard = candidate;
        // Synchronous write held to completion under the lock: an update
        // must never be abandoned mid-write. Configurations are a few
        // hundred bytes, so the lock is held briefly.
        if let Err(e) = persistence::store(&self.inner.path, &guard) {
            warn!("error storing configuration: {e}");
        }
        Ok(guard.clone())
    }

    /// Register a validator for one configuration field.
    ///
    /// Intended for the startup registration phase, before traffic begins.
    /// A name not present in the schema fails with [`UnknownField`] so a
    /// misspelled registration is caught immediately instead of leaving
    /// the validator permanently inert.
    pub fn register<F>(&self, field_name: &str, validator: F) -> Result<(), UnknownField>
    where
        F: Fn(FieldValue<'_>) -> Result<(), String> + Send + Sync + 'static,
    {
        let field = Field::parse(field_name).ok_or_else(|| UnknownField {
            name: field_name.to_string(),
        })?;
        self.inner
            .validators
            .write()
            .register(field, Box::new(validator));
        Ok(())
    }

    /// Path of the persisted configuration file.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }
}
