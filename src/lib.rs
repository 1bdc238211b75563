//! Configurator service for the transcription backend.
//!
//! Maintains the single process-wide configuration value: loads it from a
//! JSON file at startup, hands out snapshots, checks proposed updates
//! against registered field validators, and writes every accepted update
//! back to disk. The HTTP layer and the audio pipeline are external
//! collaborators that only ever call [`ConfigStore::initialize`],
//! [`ConfigStore::get`], [`ConfigStore::set`] and
//! [`ConfigStore::register`].

pub mod persistence;
mod schema;
mod store;
mod types;
mod validation;

pub use persistence::{default_path, PersistError, CONFIG_PATH_ENV};
pub use schema::{Field, FieldValue};
pub use store::ConfigStore;
pub use types::Config;
pub use validation::{UnknownField, ValidationError, Validator, ValidatorRegistry};
