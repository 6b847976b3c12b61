use crate::adapters::adapter::{detection_from_root, Platform};
use crate::adapters::job_details::{
    build_details, company_from_path, first_matching_text, truncate_description,
};
use crate::classify::classifier::FieldClassifier;
use crate::classify::discovery::collect_fields;
use crate::dom::document::{url_path, Document};
use crate::dom::dom_model::NodeId;
use crate::fields::field_model::{FormDetectionResult, JobDetails};

const CONTAINER_SELECTORS: &[&str] = &[
    ".application-form",
    "#application-form",
    ".application-page",
    ".postings-form",
];

pub fn detect(doc: &Document, classifier: &FieldClassifier) -> FormDetectionResult {
    detection_from_root(doc, classifier, Platform::Lever, find_form_root(doc))
}

/// Lever only renders the form on the dedicated apply sub-path; a posting
/// page without it never has one, so there is no body fallback here.
pub fn find_form_root(doc: &Document) -> Option<NodeId> {
    if !url_path(doc.url()).to_ascii_lowercase().contains("/apply") {
        return None;
    }
    known_container(doc).or_else(|| bare_form(doc))
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

fn bare_form(doc: &Document) -> Option<NodeId> {
    let forms = doc.query_all(doc.root(), "form").ok()?;
    forms
        .into_iter()
        .find(|form| !collect_fields(doc, *form).is_empty())
}

pub fn job_details(doc: &Document) -> Option<JobDetails> {
    let title = first_matching_text(doc, &[".posting-headline", "h2"]);
    let company = company_from_path(doc.url());
    let location = first_matching_text(doc, &[".location", ".posting-category"]);
    let description = first_matching_text(doc, &[".posting-description", ".section-wrapper"])
        .map(|text| truncate_description(&text));
    build_details(doc.url(), title, company, location, description)
}
