// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation

use std::fmt;

use super::element::Element;
use super::node::{descendants, text_content, NodeArena, NodeId};

/// Parsed HTML document
#[derive(Clone)]
pub struct Document {
    nodes: NodeArena,
}

impl Document {
    pub(crate) fn from_arena(nodes: NodeArena) -> Self {
        Self { nodes }
    }

    /// Number of nodes, document node included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the document element (<html>)
    pub fn document_element(&self) -> Option<Element> {
        self.nodes[NodeId::ROOT.0]
            .children
            .iter()
            .find_map(|&id| Element::from_id(id, self.nodes.clone()))
    }

    /// Every element in document order
    pub fn elements(&self) -> Vec<Element> {
        descendants(&self.nodes, NodeId::ROOT)
            .into_iter()
            .filter_map(|id| Element::from_id(id, self.nodes.clone()))
            .collect()
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.elements()
            .into_iter()
            .find(|e| e.get_attribute("id") == Some(id))
    }

    /// Get elements by tag name
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.local_name().eq_ignore_ascii_case(tag))
            .collect()
    }

    /// Get elements by class name
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Document title
    pub fn title(&self) -> String {
        self.get_elements_by_tag_name("title")
            .first()
            .map(|t| t.text_content().trim().to_string())
            .unwrap_or_default()
    }

    /// Get all text content
    pub fn text_content(&self) -> String {
        text_content(&self.nodes, NodeId::ROOT)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("title", &self.title())
            .finish()
    }
}
