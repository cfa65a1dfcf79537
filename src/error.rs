// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the BDFD client
//!
//! Two layers: [`RequestError`] is what the web app told us (or the
//! terminal "never got an answer" failure), [`Error`] wraps it together
//! with everything that can go wrong on our side.

use std::fmt;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    /// The web app answered with an error status, or never answered at all
    #[error(transparent)]
    Request(#[from] RequestError),

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transport-level failure that is not a reqwest error
    #[error("Network error: {0}")]
    Network(String),

    /// Page markup did not have the expected structure
    #[error("Unexpected page structure: {0}")]
    Scrape(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Create a new scrape error
    pub fn scrape<S: Into<String>>(msg: S) -> Self {
        Error::Scrape(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a transport failure (the kind the engine retries)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Http(_))
    }

    /// The classified request error, if this is one
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            Error::Request(err) => Some(err),
            _ => None,
        }
    }

    /// Error kind reported by the web app, if any
    pub fn kind(&self) -> Option<ErrorKind> {
        self.request_error().map(RequestError::kind)
    }

    /// HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Request(err) => err.status(),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Closed set of failures the web app can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Session credential is invalid or expired (the app redirects to login)
    AuthToken,
    /// Bot, command or variable id is invalid or does not exist
    General,
    /// Command or variable count limit reached
    Limit,
    /// Command or variable id is missing
    Missing,
    /// Anything else, including "no response at all"
    Unknown,
}

impl ErrorKind {
    /// Short label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::AuthToken => "AuthToken",
            ErrorKind::General => "General",
            ErrorKind::Limit => "Limit",
            ErrorKind::Missing => "Missing",
            ErrorKind::Unknown => "Unknown",
        }
    }

    /// Fixed human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::AuthToken => {
                "[BDFD External - AuthToken] Invalid or Expired auth token was passed."
            }
            ErrorKind::General => {
                "[BDFD External - General] Invalid or Non-existent Bot ID / Command ID / Variable ID was passed."
            }
            ErrorKind::Limit => "[BDFD External - Limit] Reached command / variable count limit.",
            ErrorKind::Missing => "[BDFD External - Missing] Command ID / Variable ID is missing.",
            ErrorKind::Unknown => "[BDFD External - Unknown] Unknown Error.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error reported for a single request
///
/// `status` is `None` when the request never produced a response
/// (every delivery attempt failed at the transport level).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    kind: ErrorKind,
    status: Option<u16>,
}

impl RequestError {
    /// Error for a response that carried `status`
    pub fn new(kind: ErrorKind, status: u16) -> Self {
        Self {
            kind,
            status: Some(status),
        }
    }

    /// Terminal failure after the retry budget ran out
    pub fn no_response() -> Self {
        Self {
            kind: ErrorKind::Unknown,
            status: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Whether a response was ever received
    pub fn has_response(&self) -> bool {
        self.status.is_some()
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message(), status),
            None => write!(f, "{} (no response)", self.message()),
        }
    }
}
