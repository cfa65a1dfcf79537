// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use super::Client;
use crate::engine::{CommandForm, Operation};
use crate::error::Result;
use crate::extract;
use crate::http::Transport;
use crate::language::Language;
use crate::model::{Command, CommandChanges, CommandSummary};
use crate::session::SessionToken;

/// Name given to a command created without one
pub const DEFAULT_COMMAND_NAME: &str = "Unnamed command";

/// Command operations
pub struct Commands<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Commands<'a, T> {
    pub(super) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Read a command from its editor page
    pub async fn get(&self, token: &SessionToken, bot_id: &str, command_id: &str) -> Result<Command> {
        let operation = Operation::GetCommand {
            bot_id: bot_id.to_string(),
            command_id: command_id.to_string(),
        };
        let doc = self.client.fetch(operation, token).await?;
        Ok(extract::command(&doc, command_id))
    }

    /// Command cards of a bot's dashboard
    pub async fn list(&self, token: &SessionToken, bot_id: &str) -> Result<Vec<CommandSummary>> {
        let operation = Operation::GetCommandVariableList {
            bot_id: bot_id.to_string(),
        };
        let doc = self.client.fetch(operation, token).await?;
        extract::command_list(&doc)
    }

    /// Allocate a command and fill it in
    ///
    /// Unset fields get an empty value, the name defaults to
    /// [`DEFAULT_COMMAND_NAME`] and the language to BDScript 2. The result is
    /// assembled locally and not read back from the server.
    pub async fn create(
        &self,
        token: &SessionToken,
        bot_id: &str,
        changes: CommandChanges,
    ) -> Result<Command> {
        let operation = Operation::CreateCommand {
            bot_id: bot_id.to_string(),
        };
        let doc = self.client.fetch(operation, token).await?;
        let id = extract::placeholder_id(&doc)?;

        let CommandChanges {
            name,
            trigger,
            code,
            language,
        } = changes;
        let language = language.unwrap_or_else(|| Language::default().into());

        let command = Command {
            id,
            name: name.unwrap_or_else(|| DEFAULT_COMMAND_NAME.to_string()),
            trigger: trigger.unwrap_or_default(),
            code: code.unwrap_or_default(),
            language: language.info(),
        };

        tracing::info!(bot_id, command_id = %command.id, "Created command");

        let fill = CommandChanges {
            name: Some(command.name.clone()),
            trigger: Some(command.trigger.clone()),
            code: Some(command.code.clone()),
            language: Some(language),
        };
        self.update(token, bot_id, &command.id, fill).await?;

        Ok(command)
    }

    /// Apply `changes` and return the command as it was before
    pub async fn update(
        &self,
        token: &SessionToken,
        bot_id: &str,
        command_id: &str,
        changes: CommandChanges,
    ) -> Result<Command> {
        let previous = self.get(token, bot_id, command_id).await?;

        let language_id = match changes.language {
            Some(choice) => choice.id(),
            None => previous_language_id(&previous),
        };
        let form = CommandForm {
            name: changes.name.unwrap_or_else(|| previous.name.clone()),
            trigger: changes.trigger.unwrap_or_else(|| previous.trigger.clone()),
            code: changes.code.unwrap_or_else(|| previous.code.clone()),
            language_id,
        };

        let operation = Operation::UpdateCommand {
            bot_id: bot_id.to_string(),
            command_id: command_id.to_string(),
            form,
        };
        self.client.submit(operation, token).await?;

        tracing::info!(bot_id, command_id, "Updated command");
        Ok(previous)
    }

    /// Delete a command and return it as it was
    pub async fn delete(&self, token: &SessionToken, bot_id: &str, command_id: &str) -> Result<Command> {
        let previous = self.get(token, bot_id, command_id).await?;

        let operation = Operation::DeleteCommand {
            bot_id: bot_id.to_string(),
            command_id: command_id.to_string(),
        };
        self.client.submit(operation, token).await?;

        tracing::info!(bot_id, command_id, "Deleted command");
        Ok(previous)
    }
}

// An editor page without a language select leaves the id empty
fn previous_language_id(previous: &Command) -> String {
    if previous.language.id.is_empty() {
        Language::default().id().to_string()
    } else {
        previous.language.id.clone()
    }
}
