use crate::adapters::adapter::{detection_from_root, Platform};
use crate::adapters::job_details::{
    build_details, company_from_path, first_matching_text, truncate_description,
};
use crate::classify::classifier::FieldClassifier;
use crate::classify::discovery::{
    attrs_mention_vocab, body_fallback, collect_fields, MIN_CONTAINER_FIELDS,
};
use crate::dom::document::Document;
use crate::dom::dom_model::NodeId;
use crate::fields::field_model::{FormDetectionResult, JobDetails};

/// Containers Greenhouse has used across board revisions.
const CONTAINER_SELECTORS: &[&str] = &[
    "#application_form",
    "#grnhse_app",
    "#application-form",
    ".application-form",
    "#main_fields",
];

const APPLY_HEADINGS: &[&str] = &[
    "apply for this job",
    "apply now",
    "submit your application",
];

const MAX_HEADING_CLIMB: usize = 6;

pub fn detect(doc: &Document, classifier: &FieldClassifier) -> FormDetectionResult {
    detection_from_root(doc, classifier, Platform::Greenhouse, find_form_root(doc))
}

/// Greenhouse cascade: known containers, a vocabulary-marked form, any form
/// with enough fields, the apply-heading climb, then the path-gated body
/// scan.
pub fn find_form_root(doc: &Document) -> Option<NodeId> {
    known_container(doc)
        .or_else(|| vocab_form(doc))
        .or_else(|| sized_form(doc))
        .or_else(|| heading_climb(doc))
        .or_else(|| body_fallback(doc))
}

fn known_container(doc: &Document) -> Option<NodeId> {
    for selector in CONTAINER_SELECTORS {
        let Ok(found) = doc.query_all(doc.root(), selector) else {
            continue;
        };
        if let Some(id) = found
            .into_iter()
            .find(|id| !collect_fields(doc, *id).is_empty())
        {
            return Some(id);
        }
    }
    None
}

fn vocab_form(doc: &Document) -> Option<NodeId> {
    let forms = doc.query_all(doc.root(), "form").ok()?;
    forms
        .into_iter()
        .find(|form| attrs_mention_vocab(doc, *form) && !collect_fields(doc, *form).is_empty())
}

fn sized_form(doc: &Document) -> Option<NodeId> {
    let forms = doc.query_all(doc.root(), "form").ok()?;
    forms
        .into_iter()
        .find(|form| collect_fields(doc, *form).len() >= MIN_CONTAINER_FIELDS)
}

/// Find an "Apply for this job" heading and climb to the nearest ancestor
/// holding enough fields.
fn heading_climb(doc: &Document) -> Option<NodeId> {
    let headings = doc.query_all(doc.root(), "h1, h2, h3").ok()?;
    let heading = headings.into_iter().find(|h| {
        let text = doc.text_content(*h).to_lowercase();
        APPLY_HEADINGS.iter().any(|phrase| text.contains(phrase))
    })?;

    let mut current = heading;
    for _ in 0..MAX_HEADING_CLIMB {
        let parent = doc.parent(current)?;
        if collect_fields(doc, parent).len() >= MIN_CONTAINER_FIELDS {
            return Some(parent);
        }
        current = parent;
    }
    None
}

pub fn job_details(doc: &Document) -> Option<JobDetails> {
    let title = first_matching_text(doc, &["h1.app-title", ".app-title", "h1"]);
    let company =
        first_matching_text(doc, &[".company-name"]).or_else(|| company_from_path(doc.url()));
    let location = first_matching_text(doc, &[".location"]);
    let description = first_matching_text(doc, &["#content", ".job-post-description"])
        .map(|text| truncate_description(&text));
    build_details(doc.url(), title, company, location, description)
}
