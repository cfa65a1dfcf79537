// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Client configuration

use std::time::Duration;

use url::Url;

use crate::engine::RetryPolicy;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::routes::APP_URL;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application root every route is resolved against
    pub base_url: String,
    /// Transport settings
    pub http: HttpClientConfig,
    /// Retry behaviour on transport failure
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: APP_URL.to_string(),
            http: HttpClientConfig::default(),
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set application root
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.http.user_agent = user_agent.into();
        self
    }

    /// Set retry policy
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the pause between retries
    pub fn retry_interval(mut self, interval: Duration) -> Self {
        self.retry.interval = interval;
        self
    }

    /// Parsed application root
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Base URL cannot hold a path: {}",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Check the configuration before building a client
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;

        if self.retry.max_attempts == 0 {
            return Err(Error::config("retry.max_attempts must be at least 1"));
        }

        if self.http.user_agent.is_empty() {
            return Err(Error::config("user agent must not be empty"));
        }

        Ok(())
    }
}
