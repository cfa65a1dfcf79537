// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::dom::Document;
use crate::error::Result;
use crate::model::{Command, CommandSummary, LanguageInfo};

use super::{block_value, dashboard_cards, COMMAND_SECTION};

// `.uk-margin` blocks of the command editor
const NAME_BLOCK: usize = 0;
const TRIGGER_BLOCK: usize = 1;
const CODE_BLOCK: usize = 2;
const LANGUAGE_BLOCK: usize = 3;

/// Command editor page
///
/// The page does not repeat the id, so the caller passes it in. Missing
/// blocks read as empty fields.
pub fn command(doc: &Document, command_id: &str) -> Command {
    let blocks = doc.get_elements_by_class_name("uk-margin");

    let language = blocks
        .get(LANGUAGE_BLOCK)
        .and_then(|block| block.get_elements_by_class_name("uk-select").into_iter().next())
        .and_then(|select| select.selected_option())
        .map(|option| LanguageInfo {
            id: option.option_value(),
            name: option.text_content(),
        })
        .unwrap_or_default();

    Command {
        id: command_id.to_string(),
        name: block_value(blocks.get(NAME_BLOCK), "uk-input"),
        trigger: block_value(blocks.get(TRIGGER_BLOCK), "uk-input"),
        code: block_value(blocks.get(CODE_BLOCK), "uk-textarea"),
        language,
    }
}

/// Command cards of the bot dashboard
pub fn command_list(doc: &Document) -> Result<Vec<CommandSummary>> {
    Ok(dashboard_cards(doc, COMMAND_SECTION)?
        .into_iter()
        .map(|card| CommandSummary {
            id: card.id,
            name: card.first,
            trigger: card.second,
        })
        .collect())
}
