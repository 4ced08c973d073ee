// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interceptor driving the callback protocol around a transport

use std::sync::Arc;

use tracing::{debug, trace};

use super::exchange::Exchange;
use super::inspector::Inspector;
use crate::error::{Error, Result};
use crate::http::{RequestArgs, Response, Transport};

/// Result of one intercepted call.
///
/// `value` and `error` are never both set. Both empty means a callback
/// vetoed; `suppressed` tells whether that veto swallowed a transport error.
#[derive(Debug, Default)]
pub struct Dispatch {
    pub value: Option<Response>,
    pub error: Option<Error>,
    pub suppressed: bool,
}

impl Dispatch {
    fn vetoed() -> Self {
        Self::default()
    }

    fn suppressed() -> Self {
        Self {
            suppressed: true,
            ..Self::default()
        }
    }

    /// Whether a callback stopped the call
    pub fn is_vetoed(&self) -> bool {
        self.value.is_none() && self.error.is_none()
    }

    /// Collapse into what the caller of the session sees
    pub fn into_result(self) -> Result<Option<Response>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.value),
        }
    }
}

/// Transport wrapper that records each request and lets the inspector's
/// callback observe, rewrite or veto it.
///
/// The callback runs before send and after a response. A failed send gets a
/// single callback with the exception set; there is no second look at the
/// request beforehand.
#[derive(Clone)]
pub struct InspectedClient {
    transport: Arc<dyn Transport>,
    inspector: Inspector,
}

impl InspectedClient {
    /// Wrap a transport
    pub fn new(transport: Arc<dyn Transport>, inspector: Inspector) -> Self {
        Self {
            transport,
            inspector,
        }
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    /// Send a request; `Ok(None)` when a callback vetoed it
    pub async fn request(&self, args: RequestArgs) -> Result<Option<Response>> {
        self.dispatch(args).await.into_result()
    }

    /// Send a request and report exactly how the callback protocol resolved
    pub async fn dispatch(&self, args: RequestArgs) -> Dispatch {
        let mut exchange = Exchange::new(args, self.inspector.default_callback());

        if !self.checkpoint(&mut exchange) {
            debug!(
                method = %exchange.request.method,
                url = %exchange.request.url,
                "Request vetoed before send"
            );
            return Dispatch::vetoed();
        }

        trace!(
            method = %exchange.request.method,
            url = %exchange.request.url,
            "Sending request"
        );

        match self.transport.send(&exchange.request).await {
            Ok(response) => {
                exchange.complete(response);

                if !self.checkpoint(&mut exchange) {
                    debug!(url = %exchange.request.url, "Response vetoed");
                    return Dispatch::vetoed();
                }

                Dispatch {
                    value: exchange.into_response(),
                    ..Dispatch::default()
                }
            }
            Err(error) => {
                exchange.fail(error);

                if !self.checkpoint(&mut exchange) {
                    debug!(
                        url = %exchange.request.url,
                        error = ?exchange.exception(),
                        "Transport error suppressed"
                    );
                    return Dispatch::suppressed();
                }

                Dispatch {
                    error: exchange.into_exception(),
                    ..Dispatch::default()
                }
            }
        }
    }

    /// `true` to proceed; the toggle is re-read at every checkpoint
    fn checkpoint(&self, exchange: &mut Exchange) -> bool {
        !self.inspector.callback_enabled() || self.inspector.invoke(exchange)
    }
}
