use serde::{Deserialize, Serialize};

/// Root configuration record for the transcription backend.
///
/// The field set is fixed at compile time and mirrored by
/// [`Field`](crate::Field). The record is replaced wholesale on
/// every accepted update, never mutated field-by-field, so readers always
/// see a fully-accepted value.
///
/// Unknown keys in the persisted file are rejected and missing keys fail
/// the load, so a damaged file surfaces as corruption instead of silently
/// turning into defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the speech model used for transcription.
    pub model: String,
    /// Language hint passed to the model (e.g. "en").
    pub language: String,
    /// RMS level below which captured audio counts as silence.
    pub silence_threshold: f64,
    /// How long silence must last before a segment is cut, in milliseconds.
    pub silence_duration_ms: u64,
    /// Translate transcripts to English instead of keeping the source language.
    pub translate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "base.en".to_string(),
            language: "en".to_string(),
            silence_threshold: 0.01,
            silence_duration_ms: 700,
            translate: false,
        }
    }
}
