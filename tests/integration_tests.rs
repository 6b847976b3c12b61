//! End-to-end tests over page snapshots: parse, detect, fill, undo, and the
//! serializable summaries that cross the host boundary.

use form_autofill::adapters::adapter::{Platform, PlatformRule};
use form_autofill::adapters::registry::AdapterRegistry;
use form_autofill::classify::classifier::FieldClassifier;
use form_autofill::dom::snapshot::parse_snapshot;
use form_autofill::fields::field_model::{DetectionSummary, FieldType};
use form_autofill::fill::commit::NativeCommit;
use form_autofill::fill::engine::{plan_fill, undo_fill};
use form_autofill::fill::fill_model::{FillSummary, PlannedStep};
use form_autofill::{autofill, detect_form};

use crate::common::fixtures::{fixed_today, greenhouse_page, sample_profile};

mod common;

const GREENHOUSE_SNAPSHOT: &str = r#"{
    "url": "https://boards.greenhouse.io/acme/jobs/99",
    "title": "Acme - Staff Engineer",
    "nodes": [
        {"tag": "h1", "attrs": {"class": "app-title"}, "text": "Staff Engineer"},
        {"tag": "div", "attrs": {"class": "company-name"}, "text": "Acme"},
        {
            "tag": "form",
            "attrs": {"id": "application_form"},
            "children": [
                {"tag": "label", "attrs": {"for": "first_name"}, "text": "First Name"},
                {"tag": "input", "attrs": {"id": "first_name", "name": "first_name", "type": "text", "required": ""}},
                {"tag": "label", "attrs": {"for": "email"}, "text": "Email"},
                {"tag": "input", "attrs": {"id": "email", "name": "email", "type": "email"}},
                {"tag": "label", "attrs": {"for": "phone"}, "text": "Phone"},
                {"tag": "input", "attrs": {"id": "phone", "name": "phone", "type": "tel"}}
            ]
        }
    ]
}"#;

const BLOG_SNAPSHOT: &str = r#"{
    "url": "https://example.com/blog",
    "title": "Engineering Blog",
    "nodes": [
        {"tag": "h1", "text": "Posts"},
        {
            "tag": "form",
            "attrs": {"id": "site-search", "action": "/search"},
            "children": [
                {"tag": "input", "attrs": {"id": "q", "name": "q", "type": "search"}}
            ]
        }
    ]
}"#;

// ============================================================================
// Snapshot-to-fill pipeline
// ============================================================================

#[test]
fn snapshot_pipeline_fills_a_greenhouse_application() {
    let mut doc = parse_snapshot(GREENHOUSE_SNAPSHOT).unwrap();
    let (detection, fill) = autofill(&mut doc, &sample_profile(), fixed_today());

    assert!(detection.is_application_form);
    assert_eq!(detection.platform, Platform::Greenhouse);
    let types: Vec<FieldType> = detection.fields.iter().map(|f| f.field_type).collect();
    assert_eq!(
        types,
        vec![FieldType::FirstName, FieldType::Email, FieldType::Phone]
    );

    assert_eq!(fill.total_fields, 3);
    assert_eq!(fill.filled_fields, 3);
    assert_eq!(fill.failed_fields, 0);

    let email = doc.find_by_id("email").unwrap();
    assert_eq!(doc.get(email).unwrap().value, "ada.lovelace@example.com");

    let details = detection.job_details.unwrap();
    assert_eq!(details.title, "Staff Engineer");
    assert_eq!(details.company, "Acme");
    assert_eq!(details.location, "", "Absent parts stay empty");
}

#[test]
fn plain_pages_fall_through_untouched() {
    let mut doc = parse_snapshot(BLOG_SNAPSHOT).unwrap();
    let (detection, fill) = autofill(&mut doc, &sample_profile(), fixed_today());

    assert!(!detection.is_application_form);
    assert_eq!(detection.platform, Platform::Generic);
    assert!(detection.fields.is_empty());
    assert!(detection.form_root.is_none());
    assert_eq!(fill.total_fields, 0);

    let search = doc.find_by_id("q").unwrap();
    assert_eq!(doc.get(search).unwrap().value, "", "Nothing was written");
}

#[test]
fn undo_restores_a_filled_page() {
    let mut doc = greenhouse_page();
    let (_, fill) = autofill(&mut doc, &sample_profile(), fixed_today());
    assert_eq!(fill.filled_fields, 4);

    let email = doc.find_by_id("email").unwrap();
    assert_eq!(doc.get(email).unwrap().value, "ada.lovelace@example.com");

    let restored = undo_fill(&mut doc, &fill, &NativeCommit);
    assert_eq!(restored, 4);
    assert_eq!(doc.get(email).unwrap().value, "");
}

// ============================================================================
// Registry wiring
// ============================================================================

#[test]
fn custom_rules_route_internal_hosts() {
    let doc = parse_snapshot(
        r#"{
            "url": "https://jobs.internal/engineering/apply",
            "title": "Apply",
            "nodes": [
                {
                    "tag": "form",
                    "attrs": {"id": "application_form"},
                    "children": [
                        {"tag": "label", "attrs": {"for": "email"}, "text": "Email"},
                        {"tag": "input", "attrs": {"id": "email", "name": "email", "type": "email"}},
                        {"tag": "label", "attrs": {"for": "phone"}, "text": "Phone"},
                        {"tag": "input", "attrs": {"id": "phone", "name": "phone", "type": "tel"}}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let mut registry = AdapterRegistry::with_rules(vec![PlatformRule {
        platform: Platform::Greenhouse,
        host_patterns: vec!["jobs.internal".to_string()],
        path_patterns: vec![],
    }]);
    assert_eq!(registry.adapter_count(), 2, "Generic fallback is appended");

    let classifier = FieldClassifier::new();
    let detection = detect_form(&doc, &mut registry, &classifier);

    assert_eq!(detection.platform, Platform::Greenhouse);
    assert!(detection.is_application_form);
    assert_eq!(detection.form_root, doc.find_by_id("application_form"));
}

#[test]
fn detect_form_caches_per_url() {
    let greenhouse = parse_snapshot(GREENHOUSE_SNAPSHOT).unwrap();
    let blog = parse_snapshot(BLOG_SNAPSHOT).unwrap();
    let mut registry = AdapterRegistry::new();
    let classifier = FieldClassifier::new();

    detect_form(&greenhouse, &mut registry, &classifier);
    assert_eq!(
        registry.cached_url(),
        Some("https://boards.greenhouse.io/acme/jobs/99")
    );

    detect_form(&blog, &mut registry, &classifier);
    assert_eq!(registry.cached_url(), Some("https://example.com/blog"));

    registry.clear_cache();
    assert_eq!(registry.cached_url(), None);
}

// ============================================================================
// Serializable artifacts
// ============================================================================

#[test]
fn detection_summary_strips_node_handles() {
    let doc = greenhouse_page();
    let mut registry = AdapterRegistry::new();
    let classifier = FieldClassifier::new();
    let detection = detect_form(&doc, &mut registry, &classifier);

    let summary = DetectionSummary::from_detection(doc.url(), &detection);
    let value = serde_json::to_value(&summary).unwrap();

    assert_eq!(value["platform"], "greenhouse");
    assert_eq!(value["is_application_form"], true);
    assert_eq!(value["fields"][0]["field_type"], "first_name");
    assert_eq!(value["fields"][4]["input_kind"], "file");
    assert!(
        value["fields"][0].get("node").is_none(),
        "Node handles stay internal"
    );
    assert_eq!(value["job_details"]["title"], "Senior Rust Engineer");
}

#[test]
fn plan_summary_hides_values_behind_lengths() {
    let doc = greenhouse_page();
    let mut registry = AdapterRegistry::new();
    let classifier = FieldClassifier::new();
    let detection = detect_form(&doc, &mut registry, &classifier);
    let plans = plan_fill(&detection.fields, &sample_profile(), fixed_today());

    let steps: Vec<PlannedStep> = plans.iter().map(PlannedStep::from_plan).collect();
    let text = serde_json::to_string(&steps).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value[0]["action"], "fill");
    assert_eq!(value[0]["value_len"], 3);
    assert_eq!(value[0]["reason"], serde_json::Value::Null);
    assert_eq!(value[4]["action"], "skip");
    assert_eq!(value[4]["reason"], "skipped: requires manual upload");
    assert_eq!(value[4]["value_len"], 0);
    assert!(!text.contains("Ada"), "Values never serialize: {}", text);
}

#[test]
fn fill_summary_counts_match_the_results() {
    let mut doc = greenhouse_page();
    let (_, fill) = autofill(&mut doc, &sample_profile(), fixed_today());

    let summary = FillSummary::from_fill(&fill);
    let text = serde_json::to_string(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["total_fields"], 8);
    assert_eq!(value["filled_fields"], 4);
    assert_eq!(value["skipped_fields"], 4);
    assert_eq!(value["failed_fields"], 0);
    assert_eq!(value["outcomes"][2]["field"]["field_type"], "email");
    assert_eq!(value["outcomes"][2]["success"], true);
    assert_eq!(value["outcomes"][2]["value_len"], 24);
    assert_eq!(
        value["outcomes"][6]["error"],
        "skipped: privacy-sensitive field"
    );
    assert!(
        !text.contains("ada.lovelace@example.com"),
        "Raw values stay out of summaries"
    );
}
