// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::dom::Document;
use crate::error::Result;
use crate::model::{Variable, VariableSummary};

use super::{block_value, dashboard_cards, VARIABLE_SECTION};

const NAME_BLOCK: usize = 0;
const VALUE_BLOCK: usize = 1;

/// Variable editor page
pub fn variable(doc: &Document, variable_id: &str) -> Variable {
    let blocks = doc.get_elements_by_class_name("uk-margin");

    Variable {
        id: variable_id.to_string(),
        name: block_value(blocks.get(NAME_BLOCK), "uk-input"),
        value: block_value(blocks.get(VALUE_BLOCK), "uk-input"),
    }
}

/// Variable cards of the bot dashboard
///
/// A card shows `<usage>=<value>`; the value is whatever follows the last
/// `=`, kept untrimmed.
pub fn variable_list(doc: &Document) -> Result<Vec<VariableSummary>> {
    Ok(dashboard_cards(doc, VARIABLE_SECTION)?
        .into_iter()
        .map(|card| VariableSummary {
            id: card.id,
            name: card.first,
            value: card.second.rsplit('=').next().unwrap_or_default().to_string(),
        })
        .collect())
}
