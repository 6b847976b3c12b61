use crate::dom::document::Document;
use crate::dom::dom_model::NodeId;

const LABEL_LIKE_TAGS: &[&str] = &["label", "span", "div", "p", "strong", "b", "legend"];
const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
const MAX_ANCESTOR_DEPTH: usize = 5;
const MAX_NEARBY_TEXT_LEN: usize = 80;

/// Label extraction waterfall: explicit `label[for]`, wrapping label,
/// aria-label, aria-labelledby, then preceding label-like sibling text.
/// First non-empty source wins; "" when nothing matches.
pub fn extract_label(doc: &Document, node: NodeId) -> String {
    explicit_label(doc, node)
        .or_else(|| wrapping_label(doc, node))
        .or_else(|| aria_label(doc, node))
        .or_else(|| aria_labelledby(doc, node))
        .or_else(|| preceding_label_text(doc, node))
        .unwrap_or_default()
}

fn clean(text: &str) -> Option<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// `<label for="...">` pointing at the control's id.
fn explicit_label(doc: &Document, node: NodeId) -> Option<String> {
    let id = doc.get(node)?.attr("id")?;
    doc.descendants(doc.root()).into_iter().find_map(|candidate| {
        let n = doc.get(candidate)?;
        if n.tag == "label" && n.attr("for") == Some(id) {
            clean(&doc.text_content(candidate))
        } else {
            None
        }
    })
}

/// A `<label>` ancestor wrapping the control; the control's own subtree text
/// is excluded.
fn wrapping_label(doc: &Document, node: NodeId) -> Option<String> {
    doc.ancestors(node).into_iter().find_map(|ancestor| {
        if doc.get(ancestor)?.tag == "label" {
            clean(&doc.text_content_excluding(ancestor, node))
        } else {
            None
        }
    })
}

fn aria_label(doc: &Document, node: NodeId) -> Option<String> {
    clean(doc.get(node)?.attr("aria-label")?)
}

/// First resolvable id named in aria-labelledby.
fn aria_labelledby(doc: &Document, node: NodeId) -> Option<String> {
    let refs = doc.get(node)?.attr("aria-labelledby")?.to_string();
    refs.split_whitespace().find_map(|id_attr| {
        let target = doc.find_by_id(id_attr)?;
        clean(&doc.text_content(target))
    })
}

/// Nearest preceding sibling with a label-like tag and non-empty text.
fn preceding_label_text(doc: &Document, node: NodeId) -> Option<String> {
    doc.preceding_siblings(node).into_iter().find_map(|sibling| {
        let n = doc.get(sibling)?;
        if LABEL_LIKE_TAGS.contains(&n.tag.as_str()) {
            clean(&doc.text_content(sibling))
        } else {
            None
        }
    })
}

/// Secondary label mining for markup that keeps text far from the control
/// (Workday). Walks up a bounded ancestor chain looking for short text in a
/// sibling subtree, never in the subtree holding the control itself.
pub fn nearby_ancestor_text(doc: &Document, node: NodeId) -> Option<String> {
    for ancestor in doc.ancestors(node).into_iter().take(MAX_ANCESTOR_DEPTH) {
        for candidate in doc.children(ancestor) {
            if candidate == node || subtree_contains(doc, candidate, node) {
                continue;
            }
            let Some(n) = doc.get(candidate) else { continue };
            if !LABEL_LIKE_TAGS.contains(&n.tag.as_str())
                && !HEADING_TAGS.contains(&n.tag.as_str())
            {
                continue;
            }
            if let Some(text) = clean(&doc.text_content(candidate)) {
                if text.chars().count() <= MAX_NEARBY_TEXT_LEN {
                    return Some(text);
                }
            }
        }
    }
    None
}

fn subtree_contains(doc: &Document, root: NodeId, target: NodeId) -> bool {
    root == target || doc.descendants(root).contains(&target)
}
