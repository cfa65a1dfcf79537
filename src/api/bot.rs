// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use super::Client;
use crate::engine::Operation;
use crate::error::Result;
use crate::extract;
use crate::http::Transport;
use crate::model::BotSummary;
use crate::session::SessionToken;

/// Bot operations
pub struct Bots<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Bots<'a, T> {
    pub(super) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Every bot of the account, in home page order
    pub async fn list(&self, token: &SessionToken) -> Result<Vec<BotSummary>> {
        let doc = self.client.fetch(Operation::GetBotList, token).await?;
        extract::bot_list(&doc)
    }

    /// One bot from the list, `None` if the account has no such bot
    pub async fn get(&self, token: &SessionToken, bot_id: &str) -> Result<Option<BotSummary>> {
        let bots = self.list(token).await?;
        Ok(bots.into_iter().find(|bot| bot.id == bot_id))
    }
}
