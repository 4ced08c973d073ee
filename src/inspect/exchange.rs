// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Exchange record passed to callbacks and formatters

use std::fmt;

use super::CallbackFn;
use crate::error::Error;
use crate::http::{RequestArgs, Response};

/// Where an exchange is in its lifecycle
#[derive(Debug)]
pub enum Outcome {
    /// Not sent yet
    Pending,
    /// Transport returned a response
    Completed(Response),
    /// Transport failed
    Failed(Error),
}

/// One intercepted request, alive for the duration of a single call.
///
/// Callbacks get `&mut Exchange` and may rewrite [`Exchange::request`] before
/// it is sent. The outcome can only be set by the interceptor, so at any
/// callback invocation exactly one of pending / response / exception holds.
pub struct Exchange {
    default_callback: CallbackFn,
    /// Arguments the transport will be (or was) called with
    pub request: RequestArgs,
    outcome: Outcome,
}

impl Exchange {
    /// Create a pending exchange
    pub fn new(request: RequestArgs, default_callback: CallbackFn) -> Self {
        Self {
            default_callback,
            request,
            outcome: Outcome::Pending,
        }
    }

    /// Attach a response
    pub fn with_response(mut self, response: Response) -> Self {
        self.complete(response);
        self
    }

    /// Attach a transport error
    pub fn with_exception(mut self, error: Error) -> Self {
        self.fail(error);
        self
    }

    /// Current outcome
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Response, if the transport succeeded
    pub fn response(&self) -> Option<&Response> {
        match self.outcome {
            Outcome::Completed(ref response) => Some(response),
            _ => None,
        }
    }

    /// Transport error, if the transport failed
    pub fn exception(&self) -> Option<&Error> {
        match self.outcome {
            Outcome::Failed(ref error) => Some(error),
            _ => None,
        }
    }

    /// Whether the request has not been sent yet
    pub fn is_pending(&self) -> bool {
        matches!(self.outcome, Outcome::Pending)
    }

    /// The built-in callback of the inspector that created this exchange
    pub fn default_callback(&self) -> CallbackFn {
        self.default_callback.clone()
    }

    /// Delegate to the built-in callback
    pub fn run_default_callback(&mut self) -> bool {
        let callback = self.default_callback.clone();
        callback(self)
    }

    pub(crate) fn complete(&mut self, response: Response) {
        self.outcome = Outcome::Completed(response);
    }

    pub(crate) fn fail(&mut self, error: Error) {
        self.outcome = Outcome::Failed(error);
    }

    pub(crate) fn into_response(self) -> Option<Response> {
        match self.outcome {
            Outcome::Completed(response) => Some(response),
            _ => None,
        }
    }

    pub(crate) fn into_exception(self) -> Option<Error> {
        match self.outcome {
            Outcome::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Debug for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exchange")
            .field("request", &self.request)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use bytes::Bytes;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    use super::*;

    fn ok_response() -> Response {
        Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::new(),
            url::Url::parse("http://example.com").unwrap(),
        )
    }

    #[test]
    fn test_outcome_is_exclusive() {
        let noop: CallbackFn = Arc::new(|_: &mut Exchange| true);
        let exchange = Exchange::new(RequestArgs::get("http://example.com"), noop.clone());
        assert!(exchange.is_pending());
        assert!(exchange.response().is_none() && exchange.exception().is_none());

        let exchange = exchange.with_response(ok_response());
        assert!(exchange.response().is_some());
        assert!(exchange.exception().is_none());

        let exchange = Exchange::new(RequestArgs::get("http://example.com"), noop)
            .with_exception(Error::transport("boom"));
        assert!(exchange.response().is_none());
        assert!(exchange.exception().is_some());
        assert!(exchange.into_response().is_none());
    }

    #[test]
    fn test_run_default_callback_delegates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let default: CallbackFn = Arc::new(move |_: &mut Exchange| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

        let mut exchange = Exchange::new(RequestArgs::get("http://example.com"), default);
        assert!(!exchange.run_default_callback());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
