// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::dom::Document;
use crate::error::{Error, Result};

/// Username of the logged-in account, from the home page heading
pub fn username(doc: &Document) -> Result<String> {
    doc.get_elements_by_class_name("uk-heading-divider")
        .first()
        .and_then(|divider| divider.child(0))
        .map(|child| child.text_content())
        .ok_or_else(|| Error::scrape("home page has no .uk-heading-divider heading"))
}
