// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page locations inside the web app

use url::Url;

use crate::error::{Error, Result};

/// Default application root
pub const APP_URL: &str = "https://botdesignerdiscord.com/app";

/// A page of the web app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Home page with the bot list and the username
    Home,
    /// Bot dashboard with the command and variable lists
    Bot { bot_id: &'a str },
    /// Command editor
    Command { bot_id: &'a str, command_id: &'a str },
    /// Variable editor
    Variable { bot_id: &'a str, variable_id: &'a str },
    /// Visiting this allocates a new command
    NewCommand { bot_id: &'a str },
    /// Visiting this allocates a new variable
    NewVariable { bot_id: &'a str },
}

impl<'a> Route<'a> {
    /// Path segments below the application root
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Route::Home => vec!["home"],
            Route::Bot { bot_id } => vec!["bot", bot_id],
            Route::Command { bot_id, command_id } => vec!["bot", bot_id, "command", command_id],
            Route::Variable {
                bot_id,
                variable_id,
            } => vec!["bot", bot_id, "variable", variable_id],
            Route::NewCommand { bot_id } => vec!["bot", bot_id, "new_command"],
            Route::NewVariable { bot_id } => vec!["bot", bot_id, "new_variable"],
        }
    }

    /// Resolve against the application root
    ///
    /// Ids are percent-encoded as single path segments.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config(format!("Base URL cannot hold a path: {}", base)))?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

/// Last path segment of a link, which is where the app puts entity ids
pub fn id_from_href(href: &str) -> String {
    href.rsplit('/').next().unwrap_or_default().to_string()
}
