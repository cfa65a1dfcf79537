// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Domain facade
//!
//! [`Client`] owns the request engine; each entity type gets a borrowing
//! handle with its operations. Mutations re-read the entity first and
//! hand back what was there before the change.

mod bot;
mod command;
mod user;
mod variable;

pub use bot::Bots;
pub use command::{Commands, DEFAULT_COMMAND_NAME};
pub use user::Users;
pub use variable::{Variables, DEFAULT_VARIABLE_NAME};

use crate::config::ClientConfig;
use crate::dom::Document;
use crate::engine::{Engine, Operation};
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::session::SessionToken;

/// Client for the web app
///
/// ```no_run
/// use bdfd_external::{Client, SessionToken};
///
/// # async fn run() -> bdfd_external::Result<()> {
/// let client = Client::new()?;
/// let token = SessionToken::new("s%3Aabc...");
///
/// for bot in client.bots().list(&token).await? {
///     println!("{} ({} commands)", bot.name, bot.command_count);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client<T = HttpClient> {
    engine: Engine<T>,
}

impl Client<HttpClient> {
    /// Client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client over a reqwest transport built from `config`
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpClient::with_config(config.http.clone())?;
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> Client<T> {
    /// Client over any transport
    pub fn with_transport(transport: T, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        tracing::debug!(base_url = %base_url, "Client ready");

        Ok(Self {
            engine: Engine::new(transport, base_url, config.retry),
        })
    }

    pub fn engine(&self) -> &Engine<T> {
        &self.engine
    }

    pub fn user(&self) -> Users<'_, T> {
        Users::new(self)
    }

    pub fn bots(&self) -> Bots<'_, T> {
        Bots::new(self)
    }

    pub fn commands(&self) -> Commands<'_, T> {
        Commands::new(self)
    }

    pub fn variables(&self) -> Variables<'_, T> {
        Variables::new(self)
    }

    /// Run an operation and keep the page; an error status aborts
    pub(crate) async fn fetch(&self, operation: Operation, token: &SessionToken) -> Result<Document> {
        let classified = self.engine.execute(&operation, token).await?;
        Ok(classified.into_document()?)
    }

    /// Run an operation whose page carries nothing we read
    pub(crate) async fn submit(&self, operation: Operation, token: &SessionToken) -> Result<()> {
        self.fetch(operation, token).await.map(drop)
    }
}
