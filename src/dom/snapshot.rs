use std::collections::HashMap;

use serde::Deserialize;

use crate::dom::document::Document;
use crate::dom::dom_model::{NodeId, SelectOption, UiNode};
use crate::error::AutofillError;

// ============================================================================
// Page snapshot ingestion
// ============================================================================
//
// The host (extension, embedder, test harness) serializes the page as a JSON
// tree; the core never touches a live DOM.

#[derive(Debug, Clone, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub nodes: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotNode {
    pub tag: String,
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub options: Vec<SnapshotOption>,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotOption {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub text: String,
}

fn default_visible() -> bool {
    true
}

/// Parse a serialized page snapshot into a document arena.
pub fn parse_snapshot(json: &str) -> Result<Document, AutofillError> {
    let snapshot: PageSnapshot =
        serde_json::from_str(json).map_err(|e| AutofillError::SnapshotParse {
            context: "page snapshot".to_string(),
            source: e,
        })?;
    Ok(build_document(&snapshot))
}

pub fn build_document(snapshot: &PageSnapshot) -> Document {
    let mut doc = Document::new(&snapshot.url, &snapshot.title);
    let root = doc.root();
    for node in &snapshot.nodes {
        attach(&mut doc, root, node);
    }
    doc
}

fn attach(doc: &mut Document, parent: NodeId, snap: &SnapshotNode) {
    let mut node = UiNode::new(&snap.tag);
    for (name, value) in &snap.attrs {
        node.attrs.insert(name.to_ascii_lowercase(), value.clone());
    }
    node.text = snap.text.clone();
    node.value = snap.value.clone();
    node.checked = snap.checked;
    node.visible = snap.visible;
    node.options = snap
        .options
        .iter()
        .map(|o| SelectOption {
            value: o.value.clone(),
            text: o.text.clone(),
        })
        .collect();

    let id = doc.push(parent, node);
    for child in &snap.children {
        attach(doc, id, child);
    }
}
