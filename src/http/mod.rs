// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP transport layer
//!
//! Provides the [`Transport`] seam, the request/response types that cross it
//! and a `reqwest`-backed client implementing it.

mod client;
mod request;
mod response;
mod transport;

pub use client::{HttpClient, HttpClientConfig};
pub use request::{RequestArgs, RequestData};
pub use response::Response;
pub use transport::Transport;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("reqinspect/", env!("CARGO_PKG_VERSION"));
