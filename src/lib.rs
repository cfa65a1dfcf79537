// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # bdfd-external - Bot Designer For Discord web client
//!
//! Drives the Bot Designer For Discord web app with a logged-in browser
//! session: reads the account's bots, commands and variables from the
//! app's pages and submits its editor forms to create, change and delete
//! commands and variables.
//!
//! ## Features
//!
//! - Typed records for bots, commands and variables
//! - Mutations return the entity as it was before the change
//! - Bounded retry with growing timeouts on transport failure
//! - Typed errors for the app's answers (bad session, unknown id, limits)
//! - Pluggable transport for tests and proxies
//!
//! ## Example
//!
//! ```rust,no_run
//! use bdfd_external::{Client, CommandChanges, SessionToken};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new()?;
//!     let token = SessionToken::new("<default-sessionStore cookie>");
//!
//!     println!("Logged in as {}", client.user().get(&token).await?);
//!
//!     let previous = client
//!         .commands()
//!         .update(&token, "42", "7", CommandChanges::new().trigger("!pong"))
//!         .await?;
//!     println!("Trigger was {}", previous.trigger);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod extract;
pub mod http;
pub mod language;
pub mod model;
pub mod routes;
pub mod session;
pub mod status;

// Re-exports for convenience

// Facade
pub use api::{Bots, Client, Commands, Users, Variables};
pub use api::{DEFAULT_COMMAND_NAME, DEFAULT_VARIABLE_NAME};

// Configuration
pub use config::ClientConfig;

// Engine
pub use engine::{Classified, Engine, Operation, RetryPolicy};

// Records
pub use language::Language;
pub use model::{
    BotSummary, Command, CommandChanges, CommandSummary, LanguageChoice, LanguageInfo,
    Variable, VariableChanges, VariableSummary,
};

// DOM
pub use dom::{Document, Element};

// Errors
pub use error::{Error, ErrorKind, RequestError, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, Response, Transport};

// Session
pub use session::SessionToken;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
