use crate::adapters::adapter::{detection_from_root, Platform};
use crate::adapters::job_details::{
    build_details, first_attr_text, first_matching_text, title_case_slug, truncate_description,
};
use crate::classify::classifier::FieldClassifier;
use crate::classify::discovery::default_form_root;
use crate::dom::document::{url_host, Document};
use crate::fields::field_model::{FormDetectionResult, JobDetails};

/// The catch-all adapter: no URL knowledge, just the shared scoring cascade.
pub fn detect(doc: &Document, classifier: &FieldClassifier) -> FormDetectionResult {
    detection_from_root(doc, classifier, Platform::Generic, default_form_root(doc))
}

pub fn job_details(doc: &Document) -> Option<JobDetails> {
    let title = non_empty(doc.title()).or_else(|| first_matching_text(doc, &["h1"]));
    let company = first_attr_text(doc, "meta[property=og:site_name]", "content")
        .or_else(|| host_company(doc.url()));
    let description =
        first_matching_text(doc, &["main", "article"]).map(|text| truncate_description(&text));
    build_details(doc.url(), title, company, None, description)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Fall back to the registrable part of the host ("jobs.acme.com" -> "Acme").
fn host_company(url: &str) -> Option<String> {
    let host = url_host(url);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return None;
    }
    let name = labels[labels.len() - 2];
    (!name.is_empty()).then(|| title_case_slug(name))
}
