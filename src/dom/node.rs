// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM node storage
//!
//! A parsed page is an immutable arena of nodes addressed by index, shared
//! behind an `Arc` so documents and elements are cheap to clone and can
//! cross threads.

use std::sync::Arc;

/// Index of a node in its document's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The document node
    pub const ROOT: NodeId = NodeId(0);

    /// Get the raw index
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node (like <div>, <p>, etc.)
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
}

/// Internal node data
#[derive(Debug)]
pub(crate) struct NodeData {
    pub node_type: NodeType,
    /// Lowercase tag name (elements only)
    pub tag_name: Option<String>,
    /// Text (text and comment nodes only)
    pub text: Option<String>,
    /// Attributes in source order
    pub attributes: Vec<(String, String)>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl NodeData {
    pub fn document() -> Self {
        Self::empty(NodeType::Document)
    }

    pub fn element(tag_name: impl Into<String>, attributes: Vec<(String, String)>) -> Self {
        Self {
            tag_name: Some(tag_name.into().to_lowercase()),
            attributes,
            ..Self::empty(NodeType::Element)
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::empty(NodeType::Text)
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::empty(NodeType::Comment)
        }
    }

    fn empty(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: None,
            text: None,
            attributes: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }
}

pub(crate) type NodeArena = Arc<Vec<NodeData>>;

/// Descendants of `id` in document order, `id` itself excluded
pub(crate) fn descendants(nodes: &[NodeData], id: NodeId) -> Vec<NodeId> {
    let mut result = Vec::new();
    let mut stack: Vec<NodeId> = nodes[id.0].children.iter().rev().copied().collect();

    while let Some(next) = stack.pop() {
        result.push(next);
        stack.extend(nodes[next.0].children.iter().rev().copied());
    }

    result
}

/// Concatenated text of every text node below `id`
pub(crate) fn text_content(nodes: &[NodeData], id: NodeId) -> String {
    let node = &nodes[id.0];
    if node.node_type == NodeType::Text {
        return node.text.clone().unwrap_or_default();
    }

    descendants(nodes, id)
        .into_iter()
        .filter_map(|d| {
            let data = &nodes[d.0];
            (data.node_type == NodeType::Text).then(|| data.text.as_deref().unwrap_or(""))
        })
        .collect()
}
