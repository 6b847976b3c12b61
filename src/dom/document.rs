use crate::dom::dom_model::{NodeId, NotifiedEvent, UiEvent, UiNode};
use crate::dom::selector::Selector;
use crate::error::AutofillError;

/// Arena-backed page model. Nodes are referenced by [`NodeId`] handles so the
/// detection pipeline never holds references into the tree; removal marks a
/// node dead without invalidating other handles.
#[derive(Debug)]
pub struct Document {
    url: String,
    title: String,
    nodes: Vec<UiNode>,
    events: Vec<NotifiedEvent>,
}

impl Document {
    /// Create an empty document with a synthetic `body` root.
    pub fn new(url: &str, title: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            nodes: vec![UiNode::new("body")],
            events: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Host part of the document URL.
    pub fn host(&self) -> &str {
        url_host(&self.url)
    }

    /// Path part of the document URL ("" when absent).
    pub fn path(&self) -> &str {
        url_path(&self.url)
    }

    // ---- Tree construction ----

    /// Append a node under `parent` and return its handle.
    pub fn push(&mut self, parent: NodeId, node: UiNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut node = node;
        node.parent = Some(parent);
        self.nodes.push(node);
        if let Some(p) = self.nodes.get_mut(parent.index()) {
            p.children.push(id);
        }
        id
    }

    /// Mark a node removed. The root cannot be removed; handles to the node
    /// stop resolving but stay safe to hold.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.removed = true;
        }
    }

    // ---- Lookup ----

    pub fn get(&self, id: NodeId) -> Option<&UiNode> {
        self.nodes.get(id.index()).filter(|n| !n.removed)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut UiNode> {
        self.nodes.get_mut(id.index()).filter(|n| !n.removed)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent?;
        self.contains(parent).then_some(parent)
    }

    /// Ancestor chain, nearest first. Stops at the first removed node.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            match self.get(parent) {
                Some(node) => {
                    out.push(parent);
                    current = node.parent;
                }
                None => break,
            }
        }
        out
    }

    /// Live children of a node, in insertion order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id)
            .map(|n| {
                n.children
                    .iter()
                    .copied()
                    .filter(|c| self.contains(*c))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Pre-order descendants of a node, excluding the node itself. Removed
    /// subtrees are skipped entirely.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id);
        stack.reverse();
        while let Some(current) = stack.pop() {
            out.push(current);
            let kids = self.children(current);
            for child in kids.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// Siblings preceding a node, nearest first.
    pub fn preceding_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.get(id).and_then(|n| n.parent) else {
            return Vec::new();
        };
        let siblings = self.children(parent);
        let Some(position) = siblings.iter().position(|s| *s == id) else {
            return Vec::new();
        };
        siblings[..position].iter().rev().copied().collect()
    }

    /// First live node carrying the given `id` attribute.
    pub fn find_by_id(&self, id_attr: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|id| self.get(*id).and_then(|n| n.attr("id")) == Some(id_attr))
    }

    // ---- Selector queries ----

    /// All descendants of `scope` matching the selector, in document order.
    /// The scope node itself is never included.
    pub fn query_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, AutofillError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|id| self.get(*id).map(|n| selector.matches(n)).unwrap_or(false))
            .collect())
    }

    pub fn query_first(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Option<NodeId>, AutofillError> {
        Ok(self.query_all(scope, selector)?.into_iter().next())
    }

    // ---- Text ----

    /// Own text plus descendant text, whitespace-collapsed.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, None, &mut parts);
        parts.join(" ")
    }

    /// Like [`text_content`](Self::text_content) but drops the `excluded`
    /// subtree, used when a label wraps the control it names.
    pub fn text_content_excluding(&self, id: NodeId, excluded: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, Some(excluded), &mut parts);
        parts.join(" ")
    }

    fn collect_text(&self, id: NodeId, excluded: Option<NodeId>, out: &mut Vec<String>) {
        if Some(id) == excluded {
            return;
        }
        let Some(node) = self.get(id) else { return };
        let own = node.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !own.is_empty() {
            out.push(own);
        }
        for child in self.children(id) {
            self.collect_text(child, excluded, out);
        }
    }

    // ---- Mutation and notifications ----

    /// Write a control value. Returns false when the node no longer resolves.
    pub fn set_value(&mut self, id: NodeId, value: &str) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Record a notification against a live node. Notifications on removed
    /// nodes are dropped.
    pub fn notify(&mut self, id: NodeId, event: UiEvent) {
        if self.contains(id) {
            self.events.push(NotifiedEvent { node: id, event });
        }
    }

    pub fn events(&self) -> &[NotifiedEvent] {
        &self.events
    }

    /// Drain the recorded notification log.
    pub fn take_events(&mut self) -> Vec<NotifiedEvent> {
        std::mem::take(&mut self.events)
    }
}

// ============================================================================
// URL helpers
// ============================================================================

/// Host portion of a URL, without scheme, path or query.
pub fn url_host(url: &str) -> &str {
    let rest = url.split("://").nth(1).unwrap_or(url);
    rest.split(['/', '?', '#']).next().unwrap_or("")
}

/// Path portion of a URL, "" when absent. Query and fragment are stripped.
pub fn url_path(url: &str) -> &str {
    let rest = url.split("://").nth(1).unwrap_or(url);
    match rest.find('/') {
        Some(pos) => rest[pos..].split(['?', '#']).next().unwrap_or(""),
        None => "",
    }
}
