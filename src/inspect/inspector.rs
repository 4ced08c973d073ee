// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Swappable callback, logger and formatter shared by one debugging session

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::config::InspectorConfig;
use super::exchange::Exchange;
use super::{CallbackFn, FormatterFn, LoggerFn};

struct Settings {
    config: InspectorConfig,
    /// `None` means the built-in callback
    callback: Option<CallbackFn>,
    logger: LoggerFn,
    formatter: FormatterFn,
    enable_callback: bool,
}

/// Handle to the inspection settings.
///
/// Clones share state, so a callback, a test or the session owner can swap
/// behavior while requests are running. Locks are released before any user
/// function is called.
///
/// # Example
///
/// ```rust
/// use reqinspect::{Exchange, Inspector};
///
/// let inspector = Inspector::new();
/// inspector.set_callback(|exchange: &mut Exchange| {
///     if exchange.is_pending() {
///         exchange.request.url = exchange.request.url.replace("prod", "staging");
///     }
///     exchange.run_default_callback()
/// });
/// ```
#[derive(Clone)]
pub struct Inspector {
    settings: Arc<RwLock<Settings>>,
}

impl Inspector {
    /// Create an inspector with default configuration
    pub fn new() -> Self {
        Self::with_config(InspectorConfig::default())
    }

    /// Create an inspector with custom configuration
    pub fn with_config(config: InspectorConfig) -> Self {
        let settings = Settings {
            callback: None,
            logger: config.sink.logger(),
            formatter: config.format.formatter(),
            enable_callback: config.enable_callback,
            config,
        };

        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Replace the callback
    pub fn set_callback<F>(&self, callback: F)
    where
        F: Fn(&mut Exchange) -> bool + Send + Sync + 'static,
    {
        self.settings.write().callback = Some(Arc::new(callback));
    }

    /// Replace the logger
    pub fn set_logger<F>(&self, logger: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.settings.write().logger = Arc::new(logger);
    }

    /// Replace the formatter
    pub fn set_formatter<F>(&self, formatter: F)
    where
        F: Fn(&Exchange) -> String + Send + Sync + 'static,
    {
        self.settings.write().formatter = Arc::new(formatter);
    }

    /// Turn callback invocation on or off
    pub fn set_enable_callback(&self, enable: bool) {
        self.settings.write().enable_callback = enable;
    }

    pub fn callback_enabled(&self) -> bool {
        self.settings.read().enable_callback
    }

    pub fn restore_default_callback(&self) {
        self.settings.write().callback = None;
    }

    pub fn restore_default_logger(&self) {
        let mut settings = self.settings.write();
        settings.logger = settings.config.sink.logger();
    }

    pub fn restore_default_formatter(&self) {
        let mut settings = self.settings.write();
        settings.formatter = settings.config.format.formatter();
    }

    /// Configuration this inspector was created with
    pub fn config(&self) -> InspectorConfig {
        self.settings.read().config.clone()
    }

    /// The built-in callback: format, log if non-empty, never veto.
    ///
    /// Formatter and logger are looked up when it runs, not when it is
    /// created.
    pub fn default_callback(&self) -> CallbackFn {
        let settings = Arc::downgrade(&self.settings);
        Arc::new(move |exchange: &mut Exchange| run_default(&settings, exchange))
    }

    /// Render an exchange with the current formatter
    pub fn format(&self, exchange: &Exchange) -> String {
        let formatter = self.settings.read().formatter.clone();
        formatter(exchange)
    }

    /// Send a line to the current logger
    pub fn log(&self, line: &str) {
        let logger = self.settings.read().logger.clone();
        logger(line)
    }

    /// Run the current callback, built-in if none was set
    pub(crate) fn invoke(&self, exchange: &mut Exchange) -> bool {
        let callback = self.settings.read().callback.clone();
        match callback {
            Some(callback) => callback(exchange),
            None => exchange.run_default_callback(),
        }
    }
}

fn run_default(settings: &Weak<RwLock<Settings>>, exchange: &mut Exchange) -> bool {
    let Some(settings) = settings.upgrade() else {
        return true;
    };
    let inspector = Inspector { settings };

    let formatted = inspector.format(exchange);
    if formatted.is_empty() {
        return true;
    }

    inspector.log(&formatted);
    true
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Inspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings.read();
        f.debug_struct("Inspector")
            .field("config", &settings.config)
            .field("custom_callback", &settings.callback.is_some())
            .field("enable_callback", &settings.enable_callback)
            .finish()
    }
}
