// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport seam between the request engine and the network

use std::sync::Arc;

use async_trait::async_trait;

use super::{Request, Response};
use crate::error::Result;

/// Delivers one request and returns whatever the server answered
///
/// Any HTTP status is a successful delivery. `Err` means the request never
/// produced a response (DNS, connect, timeout) and is what the engine
/// retries. A body that fails to arrive in full counts as a transport
/// failure too, so the whole request is sent again.
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use bdfd_external::http::{Request, Response, Transport};
/// use bdfd_external::Result;
///
/// struct Offline;
///
/// #[async_trait]
/// impl Transport for Offline {
///     async fn send(&self, _request: &Request) -> Result<Response> {
///         Err(bdfd_external::Error::network("offline"))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request, honouring `request.timeout`
    async fn send(&self, request: &Request) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &Request) -> Result<Response> {
        (**self).send(request).await
    }
}
