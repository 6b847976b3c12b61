use crate::adapters::adapter::{detection_from_root, Platform};
use crate::adapters::job_details::{build_details, first_matching_text, truncate_description};
use crate::classify::classifier::FieldClassifier;
use crate::classify::discovery::{collect_fields, default_form_root};
use crate::dom::document::Document;
use crate::dom::dom_model::NodeId;
use crate::fields::field_model::{FormDetectionResult, JobDetails};

/// Easy Apply renders inside a modal, not a page-level form.
const EASY_APPLY_SELECTORS: &[&str] = &[
    ".jobs-easy-apply-content",
    ".jobs-easy-apply-modal",
    "div[data-test-modal]",
];

pub fn detect(doc: &Document, classifier: &FieldClassifier) -> FormDetectionResult {
    detection_from_root(doc, classifier, Platform::Linkedin, find_form_root(doc))
}

/// LinkedIn cascade: Easy Apply containers, any dialog holding fields, then
/// the shared fallback cascade.
pub fn find_form_root(doc: &Document) -> Option<NodeId> {
    easy_apply_container(doc)
        .or_else(|| dialog_root(doc))
        .or_else(|| default_form_root(doc))
}

fn easy_apply_container(doc: &Document) -> Option<NodeId> {
    for selector in EASY_APPLY_SELECTORS {
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

/// A dialog-role node with fields; prefer a form inside it when present.
fn dialog_root(doc: &Document) -> Option<NodeId> {
    let dialogs = doc.query_all(doc.root(), "[role=dialog]").ok()?;
    for dialog in dialogs {
        if let Ok(forms) = doc.query_all(dialog, "form") {
            if let Some(form) = forms
                .into_iter()
                .find(|form| !collect_fields(doc, *form).is_empty())
            {
                return Some(form);
            }
        }
        if !collect_fields(doc, dialog).is_empty() {
            return Some(dialog);
        }
    }
    None
}

pub fn job_details(doc: &Document) -> Option<JobDetails> {
    let title = first_matching_text(
        doc,
        &[".job-details-jobs-unified-top-card__job-title", "h1"],
    );
    let company = first_matching_text(
        doc,
        &[
            ".job-details-jobs-unified-top-card__company-name",
            ".topcard__org-name-link",
        ],
    );
    let location = first_matching_text(
        doc,
        &[
            ".job-details-jobs-unified-top-card__bullet",
            ".topcard__flavor--bullet",
        ],
    );
    let description = first_matching_text(doc, &["#job-details", ".jobs-description__content"])
        .map(|text| truncate_description(&text));
    build_details(doc.url(), title, company, location, description)
}
