// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # reqinspect - HTTP request inspection
//!
//! A debugging shim for HTTP clients. Requests sent through a patched
//! [`Session`] pass a callback before and after they hit the wire; the
//! default callback renders the exchange and hands it to a logger.
//!
//! ## Features
//!
//! - Veto: a callback returning `false` stops the request or drops its result
//! - Rewrite: callbacks get the request arguments mutably before send
//! - Two renderings: plain text or a replayable curl command
//! - Pluggable sinks: stdout, `tracing`, in-memory capture
//! - Transport agnostic: anything implementing [`Transport`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use reqinspect::{Exchange, FormatKind, Inspector, InspectorConfig, Session, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let inspector = Inspector::with_config(InspectorConfig::new().format(FormatKind::Plain));
//!     let session = Session::with_inspector(HttpClient::new()?, inspector);
//!     session.patch();
//!
//!     // Block requests to anything but example.com
//!     session.inspector().set_callback(|exchange: &mut Exchange| {
//!         exchange.request.url.contains("example.com") && exchange.run_default_callback()
//!     });
//!
//!     let response = session.get("https://example.com").await?;
//!     println!("status: {:?}", response.map(|r| r.status));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod format;
pub mod http;
pub mod inspect;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, RequestArgs, RequestData, Response, Transport};

// Inspection
pub use inspect::{
    CallbackFn, Dispatch, Exchange, FormatterFn, InspectedClient, Inspector, LoggerFn, Outcome,
    Session,
};
pub use inspect::{FormatKind, InspectorConfig, SinkKind};
pub use inspect::{stdout_logger, tracing_logger, CaptureLogger};

// Formatters
pub use format::{curl_formatter, plain_formatter, DELIMITER};

/// reqinspect version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
