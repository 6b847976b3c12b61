use crate::dom::document::{url_path, Document};
use crate::dom::dom_model::NodeId;

// ============================================================================
// Form root discovery and scoring
// ============================================================================

/// Vocabulary that marks a form or container as application-related.
pub const APPLICATION_VOCAB: &[&str] = &[
    "application",
    "apply",
    "job",
    "career",
    "candidate",
    "position",
    "vacancy",
    "resume",
];

/// Container selectors shared by the generic fallback cascade.
pub const APPLICATION_CONTAINER_SELECTORS: &[&str] = &[
    "#application_form",
    "#application-form",
    ".application-form",
    ".application_form",
    "#apply-form",
    ".apply-form",
    "div[id*=application]",
    "div[class*=application]",
    "div[class*=apply]",
];

/// Minimum cascade score for a `<form>` to count as an application form.
pub const MIN_FORM_SCORE: i32 = 5;
/// Minimum field count for container and body fallbacks.
pub const MIN_CONTAINER_FIELDS: usize = 3;
const MAX_FIELD_COUNT_SCORE: i32 = 15;

/// Gather fillable controls under a root: visible inputs, textareas and
/// selects. Hidden, submit, button, reset and image inputs never count.
pub fn collect_fields(doc: &Document, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    for id in doc.descendants(root) {
        let Some(node) = doc.get(id) else { continue };
        if !node.visible {
            continue;
        }
        match node.tag.as_str() {
            "textarea" | "select" => out.push(id),
            "input" => {
                let input_type = node.input_type().unwrap_or("text").to_ascii_lowercase();
                if !matches!(
                    input_type.as_str(),
                    "hidden" | "submit" | "button" | "reset" | "image"
                ) {
                    out.push(id);
                }
            }
            _ => {}
        }
    }
    out
}

/// Additive scoring cascade for a candidate form root:
/// one point per field (capped), typed-input bonuses, then vocabulary
/// bonuses on the form's own attributes and its parent's.
pub fn score_form(doc: &Document, form: NodeId) -> i32 {
    let fields = collect_fields(doc, form);
    let mut score = (fields.len() as i32).min(MAX_FIELD_COUNT_SCORE);

    let mut has_email = false;
    let mut has_tel = false;
    let mut has_file = false;
    let mut has_textarea = false;
    let mut has_select = false;

    for id in &fields {
        let Some(node) = doc.get(*id) else { continue };
        match node.tag.as_str() {
            "textarea" => has_textarea = true,
            "select" => has_select = true,
            "input" => match node.input_type().unwrap_or("text").to_ascii_lowercase().as_str() {
                "email" => has_email = true,
                "tel" => has_tel = true,
                "file" => has_file = true,
                _ => {}
            },
            _ => {}
        }
    }

    if has_email {
        score += 5;
    }
    if has_tel {
        score += 3;
    }
    if has_file {
        score += 5;
    }
    if has_textarea {
        score += 3;
    }
    if has_select {
        score += 2;
    }

    if attrs_mention_vocab(doc, form) {
        score += 10;
    }
    if doc
        .parent(form)
        .map(|parent| attrs_mention_vocab(doc, parent))
        .unwrap_or(false)
    {
        score += 5;
    }

    score
}

/// Whether any identifying attribute of a node mentions application
/// vocabulary.
pub fn attrs_mention_vocab(doc: &Document, id: NodeId) -> bool {
    let Some(node) = doc.get(id) else { return false };
    ["action", "id", "class", "name"].iter().any(|attr| {
        node.attr(attr)
            .map(|value| {
                let lower = value.to_ascii_lowercase();
                APPLICATION_VOCAB.iter().any(|word| lower.contains(word))
            })
            .unwrap_or(false)
    })
}

/// Highest-scoring `<form>` at or above the threshold. Ties go to the
/// earliest form in document order.
pub fn best_form(doc: &Document) -> Option<NodeId> {
    let forms = doc.query_all(doc.root(), "form").ok()?;
    let mut best: Option<(NodeId, i32)> = None;
    for form in forms {
        let score = score_form(doc, form);
        if score < MIN_FORM_SCORE {
            continue;
        }
        match best {
            Some((_, top)) if top >= score => {}
            _ => best = Some((form, score)),
        }
    }
    best.map(|(form, _)| form)
}

/// First known application container holding enough fields.
pub fn container_fallback(doc: &Document) -> Option<NodeId> {
    for selector in APPLICATION_CONTAINER_SELECTORS {
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

/// Whole-document scan, gated on the URL path so arbitrary pages with a few
/// inputs are not mistaken for application forms.
pub fn body_fallback(doc: &Document) -> Option<NodeId> {
    if !is_apply_path(doc.path()) {
        return None;
    }
    let root = doc.root();
    (collect_fields(doc, root).len() >= MIN_CONTAINER_FIELDS).then_some(root)
}

/// The shared three-stage cascade: scored forms, known containers, then the
/// path-gated body scan.
pub fn default_form_root(doc: &Document) -> Option<NodeId> {
    best_form(doc)
        .or_else(|| container_fallback(doc))
        .or_else(|| body_fallback(doc))
}

/// Whether a URL path contains an apply/application segment.
pub fn is_apply_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        matches!(
            segment.to_ascii_lowercase().as_str(),
            "apply" | "application" | "applications" | "job-application"
        )
    })
}

/// Convenience for callers holding a raw URL instead of a document.
pub fn is_apply_url(url: &str) -> bool {
    is_apply_path(url_path(url))
}
