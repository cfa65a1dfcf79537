// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use super::Client;
use crate::engine::Operation;
use crate::error::Result;
use crate::extract;
use crate::http::Transport;
use crate::session::SessionToken;

/// Account operations
pub struct Users<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Users<'a, T> {
    pub(super) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Username of the account the session belongs to
    pub async fn get(&self, token: &SessionToken) -> Result<String> {
        let doc = self.client.fetch(Operation::GetUser, token).await?;
        extract::username(&doc)
    }
}
