use form_autofill::classify::discovery::{
    attrs_mention_vocab, best_form, body_fallback, collect_fields, container_fallback,
    default_form_root, is_apply_path, score_form, MIN_FORM_SCORE,
};
use form_autofill::dom::document::Document;
use form_autofill::dom::dom_model::UiNode;

use crate::common::fixtures::{generic_page, sparse_page};

mod common;

// ============================================================================
// Field collection
// ============================================================================

#[test]
fn collect_fields_skips_non_fillable_controls() {
    let mut doc = Document::new("https://example.com/apply", "");
    let root = doc.root();
    let form = doc.push(root, UiNode::new("form"));

    let text = doc.push(form, UiNode::new("input"));
    let email = doc.push(form, UiNode::new("input").with_attr("type", "email"));
    let area = doc.push(form, UiNode::new("textarea"));
    let select = doc.push(form, UiNode::new("select"));
    doc.push(form, UiNode::new("input").with_attr("type", "hidden"));
    doc.push(form, UiNode::new("input").with_attr("type", "submit"));
    doc.push(form, UiNode::new("input").with_attr("type", "button"));
    doc.push(form, UiNode::new("input").with_attr("type", "reset"));
    doc.push(form, UiNode::new("input").with_attr("type", "image"));
    doc.push(form, UiNode::new("input").hidden());
    doc.push(form, UiNode::new("div").with_text("not a control"));

    assert_eq!(
        collect_fields(&doc, form),
        vec![text, email, area, select],
        "Only visible fillable controls survive"
    );
}

// ============================================================================
// Form scoring
// ============================================================================

#[test]
fn generic_form_scores_on_typed_inputs_and_vocabulary() {
    let doc = generic_page();
    let form = doc.find_by_id("apply-form").unwrap();

    // 4 fields + email 5 + tel 3 + textarea 3 + vocabulary 10.
    assert_eq!(score_form(&doc, form), 25);
}

#[test]
fn contact_form_stays_below_the_threshold() {
    let doc = sparse_page();
    let form = doc.find_by_id("contact").unwrap();

    assert_eq!(score_form(&doc, form), 3, "Three plain inputs, no bonuses");
    assert!(score_form(&doc, form) < MIN_FORM_SCORE);
    assert_eq!(best_form(&doc), None);
    assert_eq!(default_form_root(&doc), None, "Whole cascade rejects it");
}

#[test]
fn typed_inputs_push_a_plain_form_over_the_threshold() {
    let mut doc = Document::new("https://example.com/page", "");
    let root = doc.root();
    let form = doc.push(root, UiNode::new("form"));
    for _ in 0..3 {
        doc.push(form, UiNode::new("input"));
    }
    assert_eq!(best_form(&doc), None, "Three text inputs score 3");

    doc.push(form, UiNode::new("input").with_attr("type", "email"));
    doc.push(form, UiNode::new("input").with_attr("type", "file"));
    assert_eq!(best_form(&doc), Some(form), "Email and file bonuses decide");
}

#[test]
fn best_form_prefers_the_higher_score() {
    let mut doc = Document::new("https://example.com/page", "");
    let root = doc.root();

    let weak = doc.push(root, UiNode::new("form"));
    for _ in 0..5 {
        doc.push(weak, UiNode::new("input"));
    }
    let strong = doc.push(root, UiNode::new("form").with_attr("id", "job-application"));
    for _ in 0..5 {
        doc.push(strong, UiNode::new("input"));
    }

    assert_eq!(best_form(&doc), Some(strong), "Vocabulary bonus decides");
}

#[test]
fn tied_forms_resolve_to_document_order() {
    let mut doc = Document::new("https://example.com/page", "");
    let root = doc.root();

    let first = doc.push(root, UiNode::new("form"));
    for _ in 0..5 {
        doc.push(first, UiNode::new("input"));
    }
    let second = doc.push(root, UiNode::new("form"));
    for _ in 0..5 {
        doc.push(second, UiNode::new("input"));
    }

    assert_eq!(score_form(&doc, first), score_form(&doc, second));
    assert_eq!(best_form(&doc), Some(first), "Earliest form wins ties");
}

#[test]
fn vocabulary_check_reads_identifying_attributes() {
    let mut doc = Document::new("https://example.com", "");
    let root = doc.root();

    let by_action = doc.push(root, UiNode::new("form").with_attr("action", "/jobs/apply"));
    let by_class = doc.push(root, UiNode::new("div").with_attr("class", "candidate-panel"));
    let by_name = doc.push(root, UiNode::new("form").with_attr("name", "vacancy_form"));
    let plain = doc.push(root, UiNode::new("form").with_attr("action", "/newsletter"));

    assert!(attrs_mention_vocab(&doc, by_action));
    assert!(attrs_mention_vocab(&doc, by_class));
    assert!(attrs_mention_vocab(&doc, by_name));
    assert!(!attrs_mention_vocab(&doc, plain));
}

// ============================================================================
// Fallback cascade
// ============================================================================

#[test]
fn container_fallback_needs_enough_fields() {
    let mut doc = Document::new("https://example.com/careers", "");
    let root = doc.root();
    let container = doc.push(root, UiNode::new("div").with_attr("class", "application-form"));
    doc.push(container, UiNode::new("input"));
    doc.push(container, UiNode::new("input"));

    assert_eq!(container_fallback(&doc), None, "Two fields is not a form");

    doc.push(container, UiNode::new("input"));
    assert_eq!(container_fallback(&doc), Some(container));
    assert_eq!(default_form_root(&doc), Some(container));
}

#[test]
fn body_fallback_is_gated_on_the_url_path() {
    let mut on_apply = Document::new("https://example.com/jobs/apply", "");
    let root = on_apply.root();
    for _ in 0..3 {
        on_apply.push(root, UiNode::new("input"));
    }
    assert_eq!(body_fallback(&on_apply), Some(root));
    assert_eq!(default_form_root(&on_apply), Some(root));

    let mut elsewhere = Document::new("https://example.com/contact", "");
    let root = elsewhere.root();
    for _ in 0..3 {
        elsewhere.push(root, UiNode::new("input"));
    }
    assert_eq!(body_fallback(&elsewhere), None, "Loose inputs off-path are ignored");
}

#[test]
fn scored_forms_outrank_containers() {
    let doc = generic_page();
    let form = doc.find_by_id("apply-form").unwrap();

    assert_eq!(default_form_root(&doc), Some(form));
}

#[test]
fn apply_path_segments() {
    assert!(is_apply_path("/jobs/apply"));
    assert!(is_apply_path("/application"));
    assert!(is_apply_path("/careers/job-application/42"));
    assert!(is_apply_path("/Apply"), "Segment match is case-insensitive");
    assert!(!is_apply_path("/applying"), "Substrings never count");
    assert!(!is_apply_path("/jobs/4012"));
    assert!(!is_apply_path("/"));
}
