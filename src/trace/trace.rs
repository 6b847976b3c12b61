use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::adapters::adapter::Platform;
use crate::fields::field_model::DetectedField;

/// One line in the autofill trace. Fields identify themselves by type and
/// fingerprint; labels feed the hash and values never appear at all, only
/// their lengths.
#[derive(Debug, Serialize)]
pub struct AutofillEvent {
    pub timestamp_ms: u128,
    pub phase: String,

    pub url: String,
    pub platform: Option<String>,

    pub field_type: Option<String>,
    pub field_fingerprint: Option<String>,

    pub outcome: Option<String>,
    pub reason: Option<String>,
    pub value_len: Option<usize>,
    pub confidence: Option<f32>,
}

impl AutofillEvent {
    pub fn now(phase: &str, url: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            phase: phase.to_string(),
            url: url.to_string(),
            platform: None,
            field_type: None,
            field_fingerprint: None,
            outcome: None,
            reason: None,
            value_len: None,
            confidence: None,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform.name().to_string());
        self
    }

    pub fn with_field(mut self, field: &DetectedField) -> Self {
        self.field_type = Some(format!("{:?}", field.field_type));
        self.field_fingerprint = Some(field_fingerprint(&format!(
            "{:?}:{}",
            field.field_type, field.label
        )));
        self
    }

    pub fn with_outcome(mut self, outcome: impl ToString) -> Self {
        self.outcome = Some(outcome.to_string());
        self
    }

    pub fn with_reason(mut self, reason: impl ToString) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    pub fn with_value_len(mut self, len: usize) -> Self {
        self.value_len = Some(len);
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

/// Stable, non-reversible identifier for a field across runs.
pub fn field_fingerprint(seed: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(seed.as_bytes());
    format!("{:x}", hasher.finalize())
}
