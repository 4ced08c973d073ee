// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport trait - the seam the inspector wraps

use std::sync::Arc;

use async_trait::async_trait;

use super::{RequestArgs, Response};
use crate::error::Result;

/// Something that can send a request and produce a response.
///
/// [`HttpClient`](super::HttpClient) is the real implementation; tests and
/// embedders can supply their own.
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use reqinspect::http::{RequestArgs, Response, Transport};
/// use reqinspect::Result;
///
/// struct Offline;
///
/// #[async_trait]
/// impl Transport for Offline {
///     async fn send(&self, request: &RequestArgs) -> Result<Response> {
///         Err(reqinspect::Error::transport(format!("offline: {}", request.url)))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request exactly once
    async fn send(&self, request: &RequestArgs) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &RequestArgs) -> Result<Response> {
        (**self).send(request).await
    }
}
