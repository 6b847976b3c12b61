use crate::classify::labels::extract_label;
use crate::classify::patterns::PatternTable;
use crate::dom::document::Document;
use crate::dom::dom_model::NodeId;
use crate::fields::field_model::{DetectedField, FieldType, InputKind};

/// Confidence when the input type itself names the field.
pub const TYPE_SHORTCUT_CONFIDENCE: f32 = 0.95;
/// File inputs are uploads, but which upload is a guess from the signal.
pub const FILE_SHORTCUT_CONFIDENCE: f32 = 0.85;
/// Signals shorter than this carry no usable information.
pub const MIN_SIGNAL_LEN: usize = 2;

/// Heuristic field classifier. Holds an immutable compiled pattern table;
/// classification is pure per call.
pub struct FieldClassifier {
    patterns: PatternTable,
}

impl FieldClassifier {
    pub fn new() -> Self {
        Self {
            patterns: PatternTable::default(),
        }
    }

    /// Classifier with an injected pattern table (host-configured rules).
    pub fn with_patterns(patterns: PatternTable) -> Self {
        Self { patterns }
    }

    /// Classify one discovered control into a [`DetectedField`].
    pub fn detect_field(&self, doc: &Document, node: NodeId) -> DetectedField {
        let label = extract_label(doc, node);
        let (field_type, confidence) = self.classify_with_label(doc, node, &label);
        DetectedField {
            node,
            field_type,
            label,
            input_kind: input_kind(doc, node),
            required: is_required(doc, node),
            confidence,
        }
    }

    pub fn detect_fields(&self, doc: &Document, nodes: &[NodeId]) -> Vec<DetectedField> {
        nodes.iter().map(|id| self.detect_field(doc, *id)).collect()
    }

    /// Classification with an externally supplied label, used by adapters
    /// that mine labels out of surrounding markup.
    pub fn classify_with_label(
        &self,
        doc: &Document,
        node: NodeId,
        label: &str,
    ) -> (FieldType, f32) {
        let signal = build_signal(doc, node, label);

        // Input-type shortcuts outrank the pattern table.
        if let Some(n) = doc.get(node) {
            if n.tag == "input" {
                match n.input_type().unwrap_or("").to_ascii_lowercase().as_str() {
                    "email" => return (FieldType::Email, TYPE_SHORTCUT_CONFIDENCE),
                    "tel" => return (FieldType::Phone, TYPE_SHORTCUT_CONFIDENCE),
                    "file" => return file_field(&signal),
                    _ => {}
                }
            }
        }

        if signal.trim().len() < MIN_SIGNAL_LEN {
            return (FieldType::Unknown, 0.0);
        }
        self.patterns
            .classify(&signal)
            .unwrap_or((FieldType::Unknown, 0.0))
    }
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// The lowercase signal string a control exposes: label, name-or-id,
/// placeholder, aria-label and autocomplete joined with spaces.
pub fn build_signal(doc: &Document, node: NodeId, label: &str) -> String {
    let Some(n) = doc.get(node) else {
        return String::new();
    };
    let name_or_id = n.attr("name").or_else(|| n.attr("id")).unwrap_or("");
    [
        label,
        name_or_id,
        n.attr("placeholder").unwrap_or(""),
        n.attr("aria-label").unwrap_or(""),
        n.attr("autocomplete").unwrap_or(""),
    ]
    .iter()
    .map(|part| part.trim())
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

fn file_field(signal: &str) -> (FieldType, f32) {
    if signal.contains("cover") || signal.contains("motivation") {
        (FieldType::CoverLetter, FILE_SHORTCUT_CONFIDENCE)
    } else {
        (FieldType::Resume, FILE_SHORTCUT_CONFIDENCE)
    }
}

/// Normalize a control into its fill-dispatch kind.
pub fn input_kind(doc: &Document, node: NodeId) -> InputKind {
    let Some(n) = doc.get(node) else {
        return InputKind::Text;
    };
    match n.tag.as_str() {
        "textarea" => InputKind::Textarea,
        "select" => InputKind::Select,
        _ => match n.input_type().unwrap_or("text").to_ascii_lowercase().as_str() {
            "radio" => InputKind::Radio,
            "checkbox" => InputKind::Checkbox,
            "file" => InputKind::File,
            _ => InputKind::Text,
        },
    }
}

pub fn is_required(doc: &Document, node: NodeId) -> bool {
    doc.get(node)
        .map(|n| n.attr("required").is_some() || n.attr("aria-required") == Some("true"))
        .unwrap_or(false)
}
