use chrono::NaiveDate;

use crate::{
    adapters::registry::AdapterRegistry,
    classify::classifier::FieldClassifier,
    dom::document::Document,
    fields::field_model::FormDetectionResult,
    fill::{commit::NativeCommit, engine::fill_form, fill_model::FormFillResult},
    profile::profile_model::Profile,
};

pub mod adapters;
pub mod classify;
pub mod cli;
pub mod dom;
pub mod error;
pub mod fields;
pub mod fill;
pub mod profile;
pub mod trace;

/// Detect an application form using the registry's adapter for the
/// document's URL.
pub fn detect_form(
    doc: &Document,
    registry: &mut AdapterRegistry,
    classifier: &FieldClassifier,
) -> FormDetectionResult {
    let url = doc.url().to_string();
    registry.resolve(&url).detect_form(doc, classifier)
}

/// One-call pipeline: detect, then fill from the profile with the native
/// commit strategy. When no form is found the fill result stays empty.
pub fn autofill(
    doc: &mut Document,
    profile: &Profile,
    today: NaiveDate,
) -> (FormDetectionResult, FormFillResult) {
    let mut registry = AdapterRegistry::new();
    let classifier = FieldClassifier::new();

    let detection = detect_form(doc, &mut registry, &classifier);
    if !detection.is_application_form {
        return (detection, FormFillResult::default());
    }

    let fill = fill_form(doc, &detection.fields, profile, &NativeCommit, today);
    (detection, fill)
}
