//! Explicit configuration schema.
//!
//! Every [`Config`] field has a variant here, so unknown-field detection
//! and per-field validator dispatch are checked matches rather than
//! runtime introspection.

use crate::types::Config;

/// Unique identifier for each configuration field.
///
/// Adding a field: add a variant here, a struct field in [`Config`], and an
/// arm in each match below. The `as_str()` value is used as the JSON key —
/// once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Model,
    Language,
    SilenceThreshold,
    SilenceDurationMs,
    Translate,
}

impl Field {
    /// Stable JSON key, also the name used with `register`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Language => "language",
            Self::SilenceThreshold => "silence_threshold",
            Self::SilenceDurationMs => "silence_duration_ms",
            Self::Translate => "translate",
        }
    }

    /// All fields in declaration order. Validation runs in this order.
    pub fn all() -> &'static [Field] {
        &[
            Self::Model,
            Self::Language,
            Self::SilenceThreshold,
            Self::SilenceDurationMs,
            Self::Translate,
        ]
    }

    /// Parse from a field name. Unknown names return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "model" => Some(Self::Model),
            "language" => Some(Self::Language),
            "silence_threshold" => Some(Self::SilenceThreshold),
            "silence_duration_ms" => Some(Self::SilenceDurationMs),
            "translate" => Some(Self::Translate),
            _ => None,
        }
    }
}

/// Borrowed view of one field's value, handed to validators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Float(f64),
    Integer(u64),
    Flag(bool),
}

impl Config {
    /// The value a validator registered for `field` gets to inspect.
    pub fn value_of(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Model => FieldValue::Text(&self.model),
            Field::Language => FieldValue::Text(&self.language),
            Field::SilenceThreshold => FieldValue::Float(self.silence_threshold),
            Field::SilenceDurationMs => FieldValue::Integer(self.silence_duration_ms),
            Field::Translate => FieldValue::Flag(self.translate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_key_roundtrip() {
        for &field in Field::all() {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_unknown_field_name() {
        assert_eq!(Field::parse("not_a_real_field"), None);
        assert_eq!(Field::parse(""), None);
        assert_eq!(Field::parse("Model"), None);
    }

    #[test]
    fn test_value_extraction() {
        let config = Config {
            model: "tiny.en".to_string(),
            language: "de".to_string(),
            silence_threshold: 0.5,
            silence_duration_ms: 1200,
            translate: true,
        };

        assert_eq!(config.value_of(Field::Model), FieldValue::Text("tiny.en"));
        assert_eq!(config.value_of(Field::Language), FieldValue::Text("de"));
        assert_eq!(
            config.value_of(Field::SilenceThreshold),
            FieldValue::Float(0.5)
        );
        assert_eq!(
            config.value_of(Field::SilenceDurationMs),
            FieldValue::Integer(1200)
        );
        assert_eq!(config.value_of(Field::Translate), FieldValue::Flag(true));
    }
}
