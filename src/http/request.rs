// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request arguments handed to a transport

use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Everything a caller supplied for one request.
///
/// The interceptor hands a mutable reference to the callback before the
/// request is sent, so every field can be rewritten on the way out.
#[derive(Debug, Clone)]
pub struct RequestArgs {
    /// Request method, as given by the caller
    pub method: String,
    /// Request URL, parsed only when the transport sends it
    pub url: String,
    /// Request headers in the order given; `None` when the caller set none
    pub headers: Option<Vec<(String, String)>>,
    /// Form, text or raw body
    pub data: Option<RequestData>,
    /// JSON body, used when `data` is absent
    pub json: Option<Value>,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

/// Non-JSON request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestData {
    /// UTF-8 text body
    Text(String),
    /// Raw byte body
    Bytes(Bytes),
    /// URL-encoded form pairs, in order
    Form(Vec<(String, String)>),
}

impl RequestArgs {
    /// Create request arguments with arbitrary method
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: None,
            data: None,
            json: None,
            timeout: None,
        }
    }

    /// Create GET request arguments
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    /// Create POST request arguments
    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    /// Append a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    /// Replace all headers
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = Some(
            headers
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Set a text body
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.data = Some(RequestData::Text(body.into()));
        self
    }

    /// Set a raw body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.data = Some(RequestData::Bytes(body.into()));
        self
    }

    /// Set a form body
    pub fn form<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.data = Some(RequestData::Form(
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        ));
        self
    }

    /// Set JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self> {
        self.json = Some(serde_json::to_value(data)?);
        Ok(self)
    }

    /// Set JSON body from an already built value
    pub fn json_value(mut self, value: Value) -> Self {
        self.json = Some(value);
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Method in upper case, as sent on the wire
    pub fn method_upper(&self) -> String {
        self.method.to_ascii_uppercase()
    }

    /// Look up a header value, ignoring name case
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether a body of either kind is set
    pub fn has_body(&self) -> bool {
        self.data.is_some() || self.json.is_some()
    }
}
