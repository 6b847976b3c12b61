use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque handle into a [`Document`](crate::dom::document::Document) arena.
/// Handles stay valid across mutation; a removed node simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

/// Notification kinds re-emitted after a value commit, in the order a real
/// user interaction would produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Focus,
    Input,
    Change,
    Blur,
}

/// A notification recorded against a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifiedEvent {
    pub node: NodeId,
    pub event: UiEvent,
}

/// A single element in the page arena. Structural links are owned by the
/// document; everything else is plain data.
#[derive(Debug, Clone)]
pub struct UiNode {
    pub tag: String,
    pub attrs: HashMap<String, String>,
    pub text: String,
    pub value: String,
    pub checked: bool,
    pub options: Vec<SelectOption>,
    pub visible: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) removed: bool,
}

impl UiNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: HashMap::new(),
            text: String::new(),
            value: String::new(),
            checked: false,
            options: Vec::new(),
            visible: true,
            parent: None,
            children: Vec::new(),
            removed: false,
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_option(mut self, value: &str, text: &str) -> Self {
        self.options.push(SelectOption {
            value: value.to_string(),
            text: text.to_string(),
        });
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|v| v.as_str())
    }

    pub fn input_type(&self) -> Option<&str> {
        self.attr("type")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}
