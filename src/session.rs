// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session credential handling
//!
//! The web app keeps the login in a single cookie. We never log in
//! ourselves: the caller hands over the cookie value taken from a browser.

use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::{Error, Result};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "default-sessionStore";

/// Opaque session credential
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a cookie value, with or without the `default-sessionStore=` prefix
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw value as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `default-sessionStore=<value>` cookie pair
    pub fn cookie_pair(&self) -> String {
        let prefix = format!("{}=", SESSION_COOKIE);
        if self.0.starts_with(&prefix) {
            self.0.clone()
        } else {
            format!("{}{}", prefix, self.0)
        }
    }

    /// Value of the `cookie` request header
    ///
    /// A token with characters a header cannot carry (line breaks,
    /// non-ASCII) is a configuration error.
    pub fn cookie_header(&self) -> Result<HeaderValue> {
        HeaderValue::try_from(self.cookie_pair())
            .map_err(|_| Error::config("session token is not a valid cookie value"))
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
