// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM for scraped pages
//!
//! html5ever parses the page, the result is flattened into an immutable
//! arena with just the queries the extractors need.

mod document;
mod element;
mod node;
mod parser;

pub use document::Document;
pub use element::Element;
pub use node::{NodeId, NodeType};
pub use parser::parse_html;
