// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request engine
//!
//! Turns an [`Operation`] into an HTTP request, delivers it with bounded
//! retry on transport failure and classifies the answer. Transport failures
//! are retried; an HTTP error status is final on first sight, since a bad
//! session or a wrong id does not get better by asking again.

mod operation;
mod retry;

pub use operation::{CommandForm, Operation, VariableForm};
pub use retry::{RetryPolicy, MAX_ATTEMPTS, RETRY_INTERVAL, START_TIMEOUT, TIMEOUT_STEP};

use reqwest::header::COOKIE;
use url::Url;

use crate::dom::{parse_html, Document};
use crate::error::{RequestError, Result};
use crate::http::{HttpClient, Request, Response, Transport};
use crate::session::SessionToken;
use crate::status;

/// Outcome of a delivered request: a page, or the error its status signals
#[derive(Debug, Clone)]
pub enum Classified {
    Page(Document),
    Failed(RequestError),
}

impl Classified {
    /// Classify a response
    ///
    /// The body is parsed whatever the status; only success keeps it.
    pub fn from_response(response: &Response) -> Self {
        let document = parse_html(&response.text_lossy());
        match status::check(response.status_code()) {
            None => Classified::Page(document),
            Some(err) => Classified::Failed(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Classified::Page(_))
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            Classified::Page(doc) => Some(doc),
            Classified::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RequestError> {
        match self {
            Classified::Page(_) => None,
            Classified::Failed(err) => Some(err),
        }
    }

    pub fn into_document(self) -> std::result::Result<Document, RequestError> {
        match self {
            Classified::Page(doc) => Ok(doc),
            Classified::Failed(err) => Err(err),
        }
    }
}

/// Executes operations over a [`Transport`]
#[derive(Clone)]
pub struct Engine<T = HttpClient> {
    transport: T,
    base_url: Url,
    retry: RetryPolicy,
}

impl<T: Transport> Engine<T> {
    pub fn new(transport: T, base_url: Url, retry: RetryPolicy) -> Self {
        Self {
            transport,
            base_url,
            retry,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Outbound request for an operation, before any timeout is applied
    pub fn build_request(&self, operation: &Operation, token: &SessionToken) -> Result<Request> {
        let url = operation.route().url(&self.base_url)?;
        let mut request = Request::new(operation.method(), url)
            .typed_header(COOKIE, token.cookie_header()?);

        if let Some(fields) = operation.form_fields() {
            request = request.form(&fields);
        }

        Ok(request)
    }

    /// Run one operation end to end
    ///
    /// Only fails when the request cannot be built or when every delivery
    /// attempt failed; in the latter case the error is
    /// [`RequestError::no_response`]. HTTP error statuses come back as
    /// [`Classified::Failed`].
    pub async fn execute(&self, operation: &Operation, token: &SessionToken) -> Result<Classified> {
        let request = self.build_request(operation, token)?;

        tracing::debug!(
            operation = operation.name(),
            method = %request.method,
            url = %request.url,
            "Request"
        );

        let response = self.deliver(request).await?;
        let classified = Classified::from_response(&response);

        match classified.error() {
            Some(err) => tracing::warn!(
                operation = operation.name(),
                status = response.status_code(),
                kind = %err.kind(),
                "Request rejected"
            ),
            None => tracing::debug!(
                operation = operation.name(),
                status = response.status_code(),
                time_ms = response.response_time_ms,
                "Response"
            ),
        }

        Ok(classified)
    }

    /// Send with bounded retry and a growing per-attempt timeout
    async fn deliver(&self, mut request: Request) -> Result<Response> {
        let mut attempt = 0u32;

        loop {
            request.timeout = Some(self.retry.timeout_for_attempt(attempt + 1));

            match self.transport.send(&request).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    attempt += 1;

                    if attempt >= self.retry.max_attempts {
                        tracing::error!(
                            url = %request.url,
                            attempts = attempt,
                            error = %err,
                            "Failed to request, will not retry"
                        );
                        return Err(RequestError::no_response().into());
                    }

                    tracing::info!(
                        url = %request.url,
                        error = %err,
                        "Failed to request, retry in {}ms, {} attempts left",
                        self.retry.interval.as_millis(),
                        self.retry.attempts_left(attempt)
                    );

                    tokio::time::sleep(self.retry.interval).await;
                }
            }
        }
    }
}
