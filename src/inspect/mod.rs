// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request inspection
//!
//! A [`Session`] sends requests through a [`Transport`](crate::http::Transport).
//! Once patched, each request becomes an [`Exchange`] that the
//! [`Inspector`]'s callback sees before send and after completion.

mod config;
mod exchange;
mod inspector;
mod interceptor;
mod session;
mod sink;

use std::sync::Arc;

pub use config::{FormatKind, InspectorConfig, SinkKind, CALLBACKS_ENV, FORMAT_ENV, SINK_ENV};
pub use exchange::{Exchange, Outcome};
pub use inspector::Inspector;
pub use interceptor::{Dispatch, InspectedClient};
pub use session::Session;
pub use sink::{stdout_logger, tracing_logger, CaptureLogger};

/// Gatekeeper run around each request; `false` vetoes
pub type CallbackFn = Arc<dyn Fn(&mut Exchange) -> bool + Send + Sync>;

/// Destination for formatted exchanges
pub type LoggerFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Renders an exchange, empty when there is nothing to show
pub type FormatterFn = Arc<dyn Fn(&Exchange) -> String + Send + Sync>;
