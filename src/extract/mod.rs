// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Field extractors
//!
//! Read records out of the web app's pages. The markup is a third-party
//! contract: class names and positions are fixed here and checked only
//! when a page is read. A missing structural element is an
//! [`Error::Scrape`](crate::Error::Scrape), never a panic.

mod bots;
mod commands;
mod user;
mod variables;

pub use bots::{bot_card, bot_list, HOSTING_ENDED};
pub use commands::{command, command_list};
pub use user::username;
pub use variables::{variable, variable_list};

use crate::dom::{Document, Element};
use crate::error::{Error, Result};
use crate::routes::id_from_href;

/// Position of the command cards among the dashboard's sections
pub const COMMAND_SECTION: usize = 1;
/// Position of the variable cards among the dashboard's sections
pub const VARIABLE_SECTION: usize = 2;

/// Id of the entity a creation page links to
///
/// Visiting a `new_command` or `new_variable` page allocates the entity;
/// its first link points at the editor of the new id.
pub fn placeholder_id(doc: &Document) -> Result<String> {
    let href = doc
        .get_elements_by_tag_name("a")
        .first()
        .and_then(|a| a.href().map(id_from_href))
        .ok_or_else(|| Error::scrape("creation page has no link to the new entity"))?;
    Ok(href)
}

/// A `<div>` section of the bot dashboard by position
fn dashboard_section(doc: &Document, index: usize) -> Result<Element> {
    let switcher = doc
        .get_element_by_id("bot-switcher")
        .ok_or_else(|| Error::scrape("dashboard has no #bot-switcher"))?;

    switcher
        .children()
        .into_iter()
        .filter(|child| child.tag_name() == "DIV")
        .nth(index)
        .ok_or_else(|| Error::scrape(format!("dashboard has no section {}", index)))
}

/// Dashboard card parts: the two detail lines and the entity id
struct Card {
    first: String,
    second: String,
    id: String,
}

/// Cards of one dashboard section
fn dashboard_cards(doc: &Document, section: usize) -> Result<Vec<Card>> {
    dashboard_section(doc, section)?
        .get_elements_by_class_name("commandCard")
        .iter()
        .map(read_card)
        .collect()
}

fn read_card(card: &Element) -> Result<Card> {
    let details = card
        .get_elements_by_class_name("commandDetails")
        .into_iter()
        .next()
        .ok_or_else(|| Error::scrape("card has no .commandDetails"))?;
    let controls = card
        .get_elements_by_class_name("commandControls")
        .into_iter()
        .next()
        .ok_or_else(|| Error::scrape("card has no .commandControls"))?;

    let line = |index: usize| {
        details
            .child(index)
            .map(|e| e.text_content())
            .ok_or_else(|| Error::scrape(format!("card details have no line {}", index)))
    };

    let id = controls
        .child(0)
        .and_then(|link| link.href().map(id_from_href))
        .ok_or_else(|| Error::scrape("card controls have no link"))?;

    Ok(Card {
        first: line(0)?,
        second: line(1)?,
        id,
    })
}

/// Initial value of the first control with `class` inside an editor block
fn block_value(block: Option<&Element>, class: &str) -> String {
    block
        .and_then(|b| b.get_elements_by_class_name(class).into_iter().next())
        .map(|control| control.default_value())
        .unwrap_or_default()
}
