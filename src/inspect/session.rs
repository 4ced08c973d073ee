// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session that can be switched between direct and inspected sending

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use super::inspector::Inspector;
use super::interceptor::InspectedClient;
use crate::error::Result;
use crate::http::{HttpClient, RequestArgs, Response, Transport};

/// Entry point callers send requests through.
///
/// Unpatched, requests go straight to the transport. [`Session::patch`]
/// routes them through an [`InspectedClient`] sharing this session's
/// [`Inspector`]; [`Session::unpatch`] restores the direct route.
///
/// # Example
///
/// ```rust,no_run
/// use reqinspect::Session;
///
/// #[tokio::main]
/// async fn main() -> reqinspect::Result<()> {
///     let session = Session::http()?;
///     session.patch();
///
///     // logged as a curl command on stdout
///     let response = session.get("https://example.com").await?;
///     assert!(response.is_some());
///
///     session.unpatch();
///     Ok(())
/// }
/// ```
pub struct Session {
    transport: Arc<dyn Transport>,
    inspector: Inspector,
    inspected: RwLock<Option<InspectedClient>>,
}

impl Session {
    /// Create a session over a transport with a default inspector
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self::with_inspector(transport, Inspector::new())
    }

    /// Create a session over a transport with the given inspector
    pub fn with_inspector<T: Transport + 'static>(transport: T, inspector: Inspector) -> Self {
        Self {
            transport: Arc::new(transport),
            inspector,
            inspected: RwLock::new(None),
        }
    }

    /// Create a session over a default [`HttpClient`]
    pub fn http() -> Result<Self> {
        Ok(Self::new(HttpClient::new()?))
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    /// Route requests through the interceptor; `false` if already patched
    pub fn patch(&self) -> bool {
        let mut inspected = self.inspected.write();
        if inspected.is_some() {
            return false;
        }

        *inspected = Some(InspectedClient::new(
            self.transport.clone(),
            self.inspector.clone(),
        ));
        debug!("Session patched");
        true
    }

    /// Restore direct sending; `false` if not patched
    pub fn unpatch(&self) -> bool {
        let restored = self.inspected.write().take().is_some();
        if restored {
            debug!("Session unpatched");
        }
        restored
    }

    pub fn is_patched(&self) -> bool {
        self.inspected.read().is_some()
    }

    /// Send a request.
    ///
    /// `Ok(None)` only happens while patched, when a callback vetoed the
    /// request or its outcome.
    pub async fn request(&self, args: RequestArgs) -> Result<Option<Response>> {
        let inspected = self.inspected.read().clone();

        match inspected {
            Some(client) => client.request(args).await,
            None => self.transport.send(&args).await.map(Some),
        }
    }

    /// Execute a GET request
    pub async fn get(&self, url: impl Into<String>) -> Result<Option<Response>> {
        self.request(RequestArgs::get(url)).await
    }

    /// Execute a POST request with a raw body
    pub async fn post(
        &self,
        url: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> Result<Option<Response>> {
        self.request(RequestArgs::post(url).body(body)).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post_json<T: Serialize>(
        &self,
        url: impl Into<String>,
        data: &T,
    ) -> Result<Option<Response>> {
        self.request(RequestArgs::post(url).json(data)?).await
    }

    /// Execute a PUT request with a JSON body
    pub async fn put_json<T: Serialize>(
        &self,
        url: impl Into<String>,
        data: &T,
    ) -> Result<Option<Response>> {
        self.request(RequestArgs::new("PUT", url).json(data)?).await
    }

    /// Execute a DELETE request
    pub async fn delete(&self, url: impl Into<String>) -> Result<Option<Response>> {
        self.request(RequestArgs::new("DELETE", url)).await
    }
}
