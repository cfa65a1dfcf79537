// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Records read from and written to the web app

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A bot card from the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSummary {
    pub id: String,
    pub name: String,
    /// Hosting end date, or `Hosting already ended`
    pub hosting: String,
    pub command_count: String,
    pub variable_count: String,
}

/// Language of a command as the editor shows it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Short id, e.g. `"3"`
    pub id: String,
    /// Display name, e.g. `"BDScript 2"`
    pub name: String,
}

impl LanguageInfo {
    /// Known language for this id, if any
    pub fn language(&self) -> Option<Language> {
        Language::from_id(&self.id)
    }
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            id: language.id().to_string(),
            name: language.name().to_string(),
        }
    }
}

/// A command as shown by its editor page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    pub name: String,
    pub trigger: String,
    pub code: String,
    pub language: LanguageInfo,
}

/// A command card from the bot dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSummary {
    pub id: String,
    pub name: String,
    pub trigger: String,
}

/// A variable as shown by its editor page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// A variable card from the bot dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSummary {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// How a caller picks a command language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChoice {
    /// Short id, sent as given
    Id(String),
    /// Display name, unknown names mean BDScript 2
    Name(String),
}

impl LanguageChoice {
    /// Short id to put in the form
    pub fn id(&self) -> String {
        match self {
            LanguageChoice::Id(id) => id.clone(),
            LanguageChoice::Name(name) => crate::language::id_from_name(name).to_string(),
        }
    }

    /// Id and display name for a record assembled without asking the server
    pub fn info(&self) -> LanguageInfo {
        match self {
            LanguageChoice::Id(id) => LanguageInfo {
                id: id.clone(),
                name: Language::from_id(id)
                    .map(|lang| lang.name().to_string())
                    .unwrap_or_default(),
            },
            LanguageChoice::Name(name) => Language::from_name(name).into(),
        }
    }
}

impl From<Language> for LanguageChoice {
    fn from(language: Language) -> Self {
        LanguageChoice::Id(language.id().to_string())
    }
}

/// Fields to set on a command; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandChanges {
    pub name: Option<String>,
    pub trigger: Option<String>,
    pub code: Option<String>,
    pub language: Option<LanguageChoice>,
}

impl CommandChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the language by short id
    pub fn language_id(mut self, id: impl Into<String>) -> Self {
        self.language = Some(LanguageChoice::Id(id.into()));
        self
    }

    /// Set the language by display name
    pub fn language_name(mut self, name: impl Into<String>) -> Self {
        self.language = Some(LanguageChoice::Name(name.into()));
        self
    }
}

/// Fields to set on a variable; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableChanges {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl VariableChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
