// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Logical operations against the web app

use reqwest::Method;

use crate::routes::Route;

/// Fields of the command editor form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandForm {
    pub name: String,
    pub trigger: String,
    pub code: String,
    /// Short language id, never the display name
    pub language_id: String,
}

impl CommandForm {
    /// Form fields in the order the editor posts them
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("command", self.trigger.as_str()),
            ("replyMessage", self.code.as_str()),
            ("language", self.language_id.as_str()),
        ]
    }
}

/// Fields of the variable editor form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableForm {
    pub name: String,
    pub value: String,
}

impl VariableForm {
    /// Form fields in the order the editor posts them
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [("name", self.name.as_str()), ("value", self.value.as_str())]
    }
}

/// One action the engine can perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Home page, read for the username
    GetUser,
    /// Home page, read for the bot cards
    GetBotList,
    /// Bot dashboard listing commands and variables
    GetCommandVariableList { bot_id: String },
    GetCommand { bot_id: String, command_id: String },
    GetVariable { bot_id: String, variable_id: String },
    /// Allocates a command and answers with a page linking to it
    CreateCommand { bot_id: String },
    /// Allocates a variable and answers with a page linking to it
    CreateVariable { bot_id: String },
    UpdateCommand {
        bot_id: String,
        command_id: String,
        form: CommandForm,
    },
    UpdateVariable {
        bot_id: String,
        variable_id: String,
        form: VariableForm,
    },
    DeleteCommand { bot_id: String, command_id: String },
    DeleteVariable { bot_id: String, variable_id: String },
}

impl Operation {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetUser => "get_user",
            Operation::GetBotList => "get_bot_list",
            Operation::GetCommandVariableList { .. } => "get_command_variable_list",
            Operation::GetCommand { .. } => "get_command",
            Operation::GetVariable { .. } => "get_variable",
            Operation::CreateCommand { .. } => "create_command",
            Operation::CreateVariable { .. } => "create_variable",
            Operation::UpdateCommand { .. } => "update_command",
            Operation::UpdateVariable { .. } => "update_variable",
            Operation::DeleteCommand { .. } => "delete_command",
            Operation::DeleteVariable { .. } => "delete_variable",
        }
    }

    /// Page the operation targets
    pub fn route(&self) -> Route<'_> {
        match self {
            Operation::GetUser | Operation::GetBotList => Route::Home,
            Operation::GetCommandVariableList { bot_id } => Route::Bot { bot_id },
            Operation::GetCommand { bot_id, command_id }
            | Operation::UpdateCommand {
                bot_id, command_id, ..
            }
            | Operation::DeleteCommand { bot_id, command_id } => Route::Command { bot_id, command_id },
            Operation::GetVariable {
                bot_id,
                variable_id,
            }
            | Operation::UpdateVariable {
                bot_id,
                variable_id,
                ..
            }
            | Operation::DeleteVariable {
                bot_id,
                variable_id,
            } => Route::Variable {
                bot_id,
                variable_id,
            },
            Operation::CreateCommand { bot_id } => Route::NewCommand { bot_id },
            Operation::CreateVariable { bot_id } => Route::NewVariable { bot_id },
        }
    }

    /// HTTP method
    pub fn method(&self) -> Method {
        match self {
            Operation::UpdateCommand { .. } | Operation::UpdateVariable { .. } => Method::POST,
            Operation::DeleteCommand { .. } | Operation::DeleteVariable { .. } => Method::DELETE,
            _ => Method::GET,
        }
    }

    /// Form body fields, only for updates
    pub fn form_fields(&self) -> Option<Vec<(&'static str, &str)>> {
        match self {
            Operation::UpdateCommand { form, .. } => Some(form.fields().to_vec()),
            Operation::UpdateVariable { form, .. } => Some(form.fields().to_vec()),
            _ => None,
        }
    }
}
