// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use super::Client;
use crate::engine::{Operation, VariableForm};
use crate::error::Result;
use crate::extract;
use crate::http::Transport;
use crate::model::{Variable, VariableChanges, VariableSummary};
use crate::session::SessionToken;

/// Name given to a variable created without one
pub const DEFAULT_VARIABLE_NAME: &str = "Unnamed variable";

/// Variable operations
pub struct Variables<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Variables<'a, T> {
    pub(super) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Read a variable from its editor page
    pub async fn get(&self, token: &SessionToken, bot_id: &str, variable_id: &str) -> Result<Variable> {
        let operation = Operation::GetVariable {
            bot_id: bot_id.to_string(),
            variable_id: variable_id.to_string(),
        };
        let doc = self.client.fetch(operation, token).await?;
        Ok(extract::variable(&doc, variable_id))
    }

    /// Variable cards of a bot's dashboard
    pub async fn list(&self, token: &SessionToken, bot_id: &str) -> Result<Vec<VariableSummary>> {
        let operation = Operation::GetCommandVariableList {
            bot_id: bot_id.to_string(),
        };
        let doc = self.client.fetch(operation, token).await?;
        extract::variable_list(&doc)
    }

    /// Allocate a variable and fill it in
    ///
    /// The name defaults to [`DEFAULT_VARIABLE_NAME`], the value to empty.
    /// The result is assembled locally and not read back from the server.
    pub async fn create(
        &self,
        token: &SessionToken,
        bot_id: &str,
        changes: VariableChanges,
    ) -> Result<Variable> {
        let operation = Operation::CreateVariable {
            bot_id: bot_id.to_string(),
        };
        let doc = self.client.fetch(operation, token).await?;

        let variable = Variable {
            id: extract::placeholder_id(&doc)?,
            name: changes.name.unwrap_or_else(|| DEFAULT_VARIABLE_NAME.to_string()),
            value: changes.value.unwrap_or_default(),
        };

        tracing::info!(bot_id, variable_id = %variable.id, "Created variable");

        let fill = VariableChanges::new()
            .name(variable.name.clone())
            .value(variable.value.clone());
        self.update(token, bot_id, &variable.id, fill).await?;

        Ok(variable)
    }

    /// Apply `changes` and return the variable as it was before
    pub async fn update(
        &self,
        token: &SessionToken,
        bot_id: &str,
        variable_id: &str,
        changes: VariableChanges,
    ) -> Result<Variable> {
        let previous = self.get(token, bot_id, variable_id).await?;

        let form = VariableForm {
            name: changes.name.unwrap_or_else(|| previous.name.clone()),
            value: changes.value.unwrap_or_else(|| previous.value.clone()),
        };

        let operation = Operation::UpdateVariable {
            bot_id: bot_id.to_string(),
            variable_id: variable_id.to_string(),
            form,
        };
        self.client.submit(operation, token).await?;

        tracing::info!(bot_id, variable_id, "Updated variable");
        Ok(previous)
    }

    /// Delete a variable and return it as it was
    pub async fn delete(&self, token: &SessionToken, bot_id: &str, variable_id: &str) -> Result<Variable> {
        let previous = self.get(token, bot_id, variable_id).await?;

        let operation = Operation::DeleteVariable {
            bot_id: bot_id.to_string(),
            variable_id: variable_id.to_string(),
        };
        self.client.submit(operation, token).await?;

        tracing::info!(bot_id, variable_id, "Deleted variable");
        Ok(previous)
    }
}
