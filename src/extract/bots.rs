// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Bot cards on the home page
//!
//! The card paragraph is read line by line after dropping tabs. Line 2
//! says whether hosting is over; the counts sit at different lines
//! depending on that, because a running bot's card carries a countdown.

use crate::dom::{Document, Element};
use crate::error::{Error, Result};
use crate::model::BotSummary;
use crate::routes::id_from_href;

/// Hosting line of a bot whose hosting is over
pub const HOSTING_ENDED: &str = "Hosting already ended";

const HOSTING_LINE: usize = 2;
const ENDED_COUNT_LINES: (usize, usize) = (5, 6);
const ACTIVE_COUNT_LINES: (usize, usize) = (10, 11);
const DATE_PREFIX: &str = "date: ";

/// Every bot card on the home page, in page order
pub fn bot_list(doc: &Document) -> Result<Vec<BotSummary>> {
    doc.get_elements_by_class_name("botCard")
        .iter()
        .map(bot_card)
        .collect()
}

/// One bot card
pub fn bot_card(card: &Element) -> Result<BotSummary> {
    let id = card
        .href()
        .map(id_from_href)
        .ok_or_else(|| Error::scrape("bot card has no link"))?;

    let name = card
        .get_elements_by_class_name("uk-card-title")
        .first()
        .map(|title| title.text_content())
        .ok_or_else(|| Error::scrape(format!("bot card {} has no title", id)))?;

    let paragraph = card
        .get_elements_by_tag_name("p")
        .into_iter()
        .next()
        .ok_or_else(|| Error::scrape(format!("bot card {} has no details", id)))?;

    let text = paragraph.text_content().replace('\t', "");
    let lines: Vec<&str> = text.split('\n').collect();
    let line = |index: usize| {
        lines
            .get(index)
            .copied()
            .ok_or_else(|| Error::scrape(format!("bot card {} has no line {}", id, index)))
    };

    let hosting_line = line(HOSTING_LINE)?;
    let (hosting, (commands, variables)) = if hosting_line == HOSTING_ENDED {
        (hosting_line.to_string(), ENDED_COUNT_LINES)
    } else {
        let date = countdown_date(&paragraph)
            .ok_or_else(|| Error::scrape(format!("bot card {} has no hosting date", id)))?;
        (date, ACTIVE_COUNT_LINES)
    };

    let command_count = line(commands)?.trim().to_string();
    let variable_count = line(variables)?.trim().to_string();

    Ok(BotSummary {
        id,
        name,
        hosting,
        command_count,
        variable_count,
    })
}

/// Date the hosting countdown runs to, from its `date: ...` attribute
fn countdown_date(paragraph: &Element) -> Option<String> {
    paragraph.descendants().iter().find_map(|el| {
        el.attributes()
            .iter()
            .find_map(|(_, value)| value.strip_prefix(DATE_PREFIX))
            .map(str::to_string)
    })
}
