use crate::adapters::adapter::Platform;
use crate::adapters::job_details::{
    build_details, company_from_subdomain, first_matching_text, truncate_description,
};
use crate::classify::classifier::FieldClassifier;
use crate::classify::discovery::{body_fallback, collect_fields, MIN_CONTAINER_FIELDS};
use crate::classify::labels::nearby_ancestor_text;
use crate::dom::document::Document;
use crate::dom::dom_model::NodeId;
use crate::fields::field_model::{DetectedField, FieldType, FormDetectionResult, JobDetails};

// Workday renders a single-page app with data-automation-id hooks instead of
// semantic forms, and labels frequently live several ancestors away from the
// control. Detection and labeling both compensate.

const CONTAINER_SELECTORS: &[&str] = &[
    "div[data-automation-id*=application]",
    "div[data-automation-id*=Application]",
    "[data-automation-id*=applyFlow]",
    "[data-automation-id*=Page]",
];

const LANDMARK_SELECTORS: &[&str] = &["main", "[role=main]", "article", "section"];

const SUBMIT_KEYWORDS: &[&str] = &["submit", "apply", "continue", "next", "save and continue"];

const MAX_SUBMIT_CLIMB: usize = 5;

const CHROME_TAGS: &[&str] = &["nav", "header", "footer"];
const CHROME_ROLES: &[&str] = &["navigation", "banner"];

pub fn detect(doc: &Document, classifier: &FieldClassifier) -> FormDetectionResult {
    let Some(root) = find_form_root(doc) else {
        return FormDetectionResult::none(Platform::Workday);
    };

    // Landmark roots can swallow page chrome; drop controls living in it.
    let nodes: Vec<NodeId> = collect_fields(doc, root)
        .into_iter()
        .filter(|id| !in_chrome(doc, *id))
        .collect();
    if nodes.is_empty() {
        return FormDetectionResult::none(Platform::Workday);
    }

    let mut fields = classifier.detect_fields(doc, &nodes);
    relabel_unknowns(doc, classifier, &mut fields);

    FormDetectionResult {
        is_application_form: true,
        platform: Platform::Workday,
        form_root: Some(root),
        fields,
        job_details: None,
    }
}

/// Workday cascade: a sized form if one exists, automation-id containers,
/// climbing up from a submit control, page landmarks, then the path-gated
/// body scan.
pub fn find_form_root(doc: &Document) -> Option<NodeId> {
    sized_form(doc)
        .or_else(|| automation_container(doc))
        .or_else(|| submit_climb(doc))
        .or_else(|| landmark(doc))
        .or_else(|| body_fallback(doc))
}

fn sized_form(doc: &Document) -> Option<NodeId> {
    let forms = doc.query_all(doc.root(), "form").ok()?;
    forms
        .into_iter()
        .find(|form| collect_fields(doc, *form).len() >= MIN_CONTAINER_FIELDS)
}

fn automation_container(doc: &Document) -> Option<NodeId> {
    for selector in CONTAINER_SELECTORS {
        let Ok(found) = doc.query_all(doc.root(), selector) else {
            continue;
        };
        for id in found {
            if collect_fields(doc, id).len() >= MIN_CONTAINER_FIELDS {
                return Some(id);
            }
        }
    }
    None
}

/// Find a submit-labeled control and climb a bounded number of ancestors
/// until a container holds enough fields.
fn submit_climb(doc: &Document) -> Option<NodeId> {
    let candidates = doc
        .query_all(doc.root(), "button, input[type=submit]")
        .ok()?;
    let submit = candidates.into_iter().find(|id| {
        let Some(node) = doc.get(*id) else { return false };
        let label = if node.tag == "button" {
            doc.text_content(*id)
        } else {
            node.value.clone()
        };
        let label = label.to_lowercase();
        SUBMIT_KEYWORDS.iter().any(|keyword| label.contains(keyword))
    })?;

    let mut current = submit;
    for _ in 0..MAX_SUBMIT_CLIMB {
        let parent = doc.parent(current)?;
        if collect_fields(doc, parent).len() >= MIN_CONTAINER_FIELDS {
            return Some(parent);
        }
        current = parent;
    }
    None
}

fn landmark(doc: &Document) -> Option<NodeId> {
    for selector in LANDMARK_SELECTORS {
        let Ok(found) = doc.query_all(doc.root(), selector) else {
            continue;
        };
        for id in found {
            if collect_fields(doc, id).len() >= MIN_CONTAINER_FIELDS {
                return Some(id);
            }
        }
    }
    None
}

fn in_chrome(doc: &Document, node: NodeId) -> bool {
    doc.ancestors(node).into_iter().any(|ancestor| {
        let Some(n) = doc.get(ancestor) else {
            return false;
        };
        if CHROME_TAGS.contains(&n.tag.as_str()) {
            return true;
        }
        let role = n.attr("role").unwrap_or("").to_ascii_lowercase();
        CHROME_ROLES.contains(&role.as_str())
    })
}

/// Second labeling pass: for fields the waterfall left unknown, mine short
/// text from nearby ancestors and reclassify with it.
fn relabel_unknowns(doc: &Document, classifier: &FieldClassifier, fields: &mut [DetectedField]) {
    for field in fields.iter_mut() {
        if field.field_type != FieldType::Unknown {
            continue;
        }
        let Some(text) = nearby_ancestor_text(doc, field.node) else {
            continue;
        };
        let (field_type, confidence) = classifier.classify_with_label(doc, field.node, &text);
        if field_type != FieldType::Unknown {
            field.field_type = field_type;
            field.confidence = confidence;
            if field.label.is_empty() {
                field.label = text;
            }
        }
    }
}

pub fn job_details(doc: &Document) -> Option<JobDetails> {
    let title = first_matching_text(doc, &["[data-automation-id=jobPostingHeader]", "h1"]);
    let company = company_from_subdomain(doc.url());
    let location = first_matching_text(doc, &["[data-automation-id=locations]", ".location"]);
    let description = first_matching_text(doc, &["[data-automation-id=jobPostingDescription]"])
        .map(|text| truncate_description(&text));
    build_details(doc.url(), title, company, location, description)
}
