// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever

use std::sync::Arc;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::document::Document;
use super::node::{NodeData, NodeId};

/// Parse an HTML string into a Document
///
/// html5ever recovers from any malformed input, so this never fails: an
/// empty or garbage body still yields an `<html><head><body>` skeleton.
pub fn parse_html(html: &str) -> Document {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts).one(html);

    let mut converter = DomConverter::default();
    converter.convert(&dom.document);
    Document::from_arena(Arc::new(converter.nodes))
}

/// Flattens the html5ever tree into our arena
struct DomConverter {
    nodes: Vec<NodeData>,
}

impl Default for DomConverter {
    fn default() -> Self {
        Self {
            nodes: vec![NodeData::document()],
        }
    }
}

impl DomConverter {
    fn convert(&mut self, document: &Handle) {
        for child in document.children.borrow().iter() {
            self.convert_node(child, NodeId::ROOT);
        }
    }

    fn convert_node(&mut self, handle: &Handle, parent_id: NodeId) {
        let mut data = match handle.data {
            RcNodeData::Text { ref contents } => NodeData::text(contents.borrow().to_string()),
            RcNodeData::Comment { ref contents } => NodeData::comment(contents.to_string()),
            RcNodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let attributes = attrs
                    .borrow()
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect();
                NodeData::element(name.local.to_string(), attributes)
            }
            // Doctype, processing instructions and nested documents carry
            // nothing the extractors read.
            _ => return,
        };

        let node_id = NodeId(self.nodes.len());
        data.parent = Some(parent_id);
        self.nodes.push(data);
        self.nodes[parent_id.0].children.push(node_id);

        for child in handle.children.borrow().iter() {
            self.convert_node(child, node_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_html() {
        let doc = parse_html("<html><body><p>Hello</p></body></html>");
        let p = &doc.get_elements_by_tag_name("p")[0];
        assert_eq!(p.text_content(), "Hello");
        assert_eq!(p.parent_element().unwrap().tag_name(), "BODY");
    }

    #[test]
    fn test_whitespace_text_is_kept() {
        let doc = parse_html("<p>\n\tline one\n\t<span>x</span>\n</p>");
        let p = &doc.get_elements_by_tag_name("p")[0];
        assert_eq!(p.text_content(), "\n\tline one\n\tx\n");
    }

    #[test]
    fn test_parse_garbage() {
        let doc = parse_html("");
        assert!(doc.document_element().is_some());
        assert_eq!(doc.get_elements_by_tag_name("body").len(), 1);

        let doc = parse_html("plain text, no markup");
        assert_eq!(doc.text_content(), "plain text, no markup");
    }

    #[test]
    fn test_attributes() {
        let doc = parse_html("<a class=\"botCard uk-card\" href=\"/app/bot/1\">x</a>");
        let a = &doc.get_elements_by_class_name("botCard")[0];
        assert_eq!(a.href(), Some("/app/bot/1"));
        assert!(a.has_class("uk-card"));
    }
}
