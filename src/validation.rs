//! Field-level validation.
//!
//! Collaborators attach validators to individual fields at startup; the
//! store consults the registry before accepting any update. Validators are
//! pure with respect to the store: they inspect only the proposed value,
//! never the previously accepted configuration.

use std::collections::HashMap;

use thiserror::Error;

use crate::schema::{Field, FieldValue};
use crate::types::Config;

/// A field-level validator. Failure carries a reason string.
pub type Validator = Box<dyn Fn(FieldValue<'_>) -> Result<(), String> + Send + Sync>;

/// A proposed configuration value was rejected by a registered validator.
#[derive(Debug, Error)]
#[error("invalid value for {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Reason reported by the failing validator.
    pub reason: String,
}

/// `register` referenced a field that is not part of the schema.
///
/// Treated as a fatal integration error at startup: a misspelled name
/// would otherwise leave the validator permanently inert.
#[derive(Debug, Error)]
#[error("unknown configuration field '{name}'")]
pub struct UnknownField {
    pub name: String,
}

/// Maps each field to its ordered validator list.
///
/// Populated during the startup registration phase and append-only after
/// that. A field with no validators always passes. Registering the same
/// validator twice is accepted; it runs twice.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: HashMap<Field, Vec<Validator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator to `field`'s list, preserving prior registrations.
    pub fn register(&mut self, field: Field, validator: Validator) {
        self.validators.entry(field).or_default().push(validator);
    }

    /// Run every registered validator against `candidate`, fields in
    /// declaration order and validators in registration order. The first
    /// failure aborts the whole check.
    pub fn check(&self, candidate: &Config) -> Result<(), ValidationError> {
        for &field in Field::all() {
            let Some(list) = self.validators.get(&field) else {
                continue;
            };
            for validator in list {
                validator(candidate.value_of(field)).map_err(|reason| ValidationError {
                    field: field.as_str(),
                    reason,
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_passes() {
        let registry = ValidatorRegistry::new();
        assert!(registry.check(&Config::default()).is_ok());
    }

    #[test]
    fn test_failure_names_field_and_reason() {
        let mut registry = ValidatorRegistry::new();
        registry.register(
            Field::Language,
            Box::new(|value| match value {
                FieldValue::Text(s) if !s.is_empty() => Ok(()),
                _ => Err("language must not be empty".to_string()),
            }),
        );

        let candidate = Config {
            language: String::new(),
            ..Config::default()
        };
        let err = registry.check(&candidate).unwrap_err();
        assert_eq!(err.field, "language");
        assert!(err.reason.contains("must not be empty"));
    }

    #[test]
    fn test_validators_run_in_registration_order() {
        let mut registry = ValidatorRegistry::new();
        registry.register(Field::Model, Box::new(|_| Err("first".to_string())));
        registry.register(Field::Model, Box::new(|_| Err("second".to_string())));

        let err = registry.check(&Config::default()).unwrap_err();
        assert_eq!(err.reason, "first");
    }
}
