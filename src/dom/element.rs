// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element-specific DOM operations

use std::fmt;

use super::node::{descendants, text_content, NodeArena, NodeData, NodeId};

/// Element node with read-only queries
#[derive(Clone)]
pub struct Element {
    nodes: NodeArena,
    id: NodeId,
}

impl Element {
    /// Wrap `id` if it is an element
    pub(crate) fn from_id(id: NodeId, nodes: NodeArena) -> Option<Self> {
        if nodes.get(id.0).map(NodeData::is_element).unwrap_or(false) {
            Some(Self { nodes, id })
        } else {
            None
        }
    }

    fn data(&self) -> &NodeData {
        &self.nodes[self.id.0]
    }

    /// Node id inside the owning document
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// Get the tag name (uppercase, like browsers)
    pub fn tag_name(&self) -> String {
        self.local_name().to_uppercase()
    }

    /// Get local name (lowercase)
    pub fn local_name(&self) -> &str {
        self.data().tag_name.as_deref().unwrap_or_default()
    }

    /// Get an attribute
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.data().attribute(name)
    }

    /// Check if has attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Attributes in source order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.data().attributes
    }

    /// Check if element has a class
    pub fn has_class(&self, class: &str) -> bool {
        self.data().has_class(class)
    }

    /// Get text content
    pub fn text_content(&self) -> String {
        text_content(&self.nodes, self.id)
    }

    /// Get parent element
    pub fn parent_element(&self) -> Option<Element> {
        self.data()
            .parent
            .and_then(|id| Element::from_id(id, self.nodes.clone()))
    }

    /// Get child elements (only element nodes)
    pub fn children(&self) -> Vec<Element> {
        self.data()
            .children
            .iter()
            .filter_map(|&id| Element::from_id(id, self.nodes.clone()))
            .collect()
    }

    /// Get child element by position
    pub fn child(&self, index: usize) -> Option<Element> {
        self.children().into_iter().nth(index)
    }

    /// Descendant elements in document order
    pub fn descendants(&self) -> Vec<Element> {
        descendants(&self.nodes, self.id)
            .into_iter()
            .filter_map(|id| Element::from_id(id, self.nodes.clone()))
            .collect()
    }

    /// Get descendant elements by class name
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Get descendant elements by tag name
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.local_name().eq_ignore_ascii_case(tag))
            .collect()
    }

    /// Get href for links
    pub fn href(&self) -> Option<&str> {
        self.get_attribute("href")
    }

    /// Initial value of a form control, the way a browser's `defaultValue` reads it
    pub fn default_value(&self) -> String {
        match self.local_name() {
            "textarea" => self.text_content(),
            _ => self.get_attribute("value").unwrap_or_default().to_string(),
        }
    }

    /// Selected `<option>` of a `<select>`, falling back to the first one
    pub fn selected_option(&self) -> Option<Element> {
        let options = self.get_elements_by_tag_name("option");
        options
            .iter()
            .find(|o| o.has_attribute("selected"))
            .or_else(|| options.first())
            .cloned()
    }

    /// Value of an `<option>`: its `value` attribute, else its text
    pub fn option_value(&self) -> String {
        self.get_attribute("value")
            .map(str::to_string)
            .unwrap_or_else(|| self.text_content())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.local_name())
            .field("attributes", &self.attributes())
            .finish()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        std::sync::Arc::ptr_eq(&self.nodes, &other.nodes) && self.id == other.id
    }
}

impl Eq for Element {}
