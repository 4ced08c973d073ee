// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Inspector configuration

use std::str::FromStr;
use std::sync::Arc;

use super::sink::{stdout_logger, tracing_logger};
use super::{FormatterFn, LoggerFn};
use crate::error::{Error, Result};
use crate::format::{curl_formatter, plain_formatter};

/// Environment variable selecting the formatter (`curl` or `plain`)
pub const FORMAT_ENV: &str = "REQINSPECT_FORMAT";
/// Environment variable selecting the logger sink (`stdout` or `tracing`)
pub const SINK_ENV: &str = "REQINSPECT_SINK";
/// Environment variable toggling callback invocation
pub const CALLBACKS_ENV: &str = "REQINSPECT_CALLBACKS";

/// Built-in formatter choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    /// Request rendered as a curl command line
    #[default]
    Curl,
    /// Request rendered as method line, headers and body
    Plain,
}

impl FormatKind {
    pub fn formatter(self) -> FormatterFn {
        match self {
            FormatKind::Curl => Arc::new(curl_formatter),
            FormatKind::Plain => Arc::new(plain_formatter),
        }
    }
}

impl FromStr for FormatKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curl" => Ok(FormatKind::Curl),
            "plain" | "text" => Ok(FormatKind::Plain),
            other => Err(Error::config(format!("unknown format '{}'", other))),
        }
    }
}

/// Built-in logger choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    #[default]
    Stdout,
    Tracing,
}

impl SinkKind {
    pub fn logger(self) -> LoggerFn {
        match self {
            SinkKind::Stdout => Arc::new(stdout_logger),
            SinkKind::Tracing => Arc::new(tracing_logger),
        }
    }
}

impl FromStr for SinkKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" | "print" => Ok(SinkKind::Stdout),
            "tracing" | "log" => Ok(SinkKind::Tracing),
            other => Err(Error::config(format!("unknown sink '{}'", other))),
        }
    }
}

/// Inspector configuration
///
/// The chosen format and sink are also what the `restore_default_*`
/// operations on [`Inspector`](super::Inspector) return to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    /// Consult the callback around each request
    pub enable_callback: bool,
    /// Default formatter
    pub format: FormatKind,
    /// Default logger
    pub sink: SinkKind,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            enable_callback: true,
            format: FormatKind::default(),
            sink: SinkKind::default(),
        }
    }
}

impl InspectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set callback invocation
    pub fn enable_callback(mut self, enable: bool) -> Self {
        self.enable_callback = enable;
        self
    }

    /// Set default formatter
    pub fn format(mut self, format: FormatKind) -> Self {
        self.format = format;
        self
    }

    /// Set default logger
    pub fn sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup; unset keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse()?;
        }
        if let Some(sink) = lookup(SINK_ENV) {
            config.sink = sink.parse()?;
        }
        if let Some(flag) = lookup(CALLBACKS_ENV) {
            config.enable_callback = parse_flag(CALLBACKS_ENV, &flag)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => Err(Error::config(format!("{} expects a boolean, got '{}'", key, other))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = InspectorConfig::default();
        assert!(config.enable_callback);
        assert_eq!(config.format, FormatKind::Curl);
        assert_eq!(config.sink, SinkKind::Stdout);
        assert_eq!(InspectorConfig::from_lookup(lookup(&[])).unwrap(), config);
    }

    #[test]
    fn test_overrides() {
        let config = InspectorConfig::from_lookup(lookup(&[
            (FORMAT_ENV, "Plain"),
            (SINK_ENV, "tracing"),
            (CALLBACKS_ENV, "off"),
        ]))
        .unwrap();

        assert_eq!(config.format, FormatKind::Plain);
        assert_eq!(config.sink, SinkKind::Tracing);
        assert!(!config.enable_callback);
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(matches!(
            InspectorConfig::from_lookup(lookup(&[(FORMAT_ENV, "yaml")])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            InspectorConfig::from_lookup(lookup(&[(CALLBACKS_ENV, "maybe")])),
            Err(Error::Config(_))
        ));
    }
}
