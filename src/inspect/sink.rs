// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Built-in logger sinks

use std::sync::Arc;

use parking_lot::RwLock;

/// Print to stdout
pub fn stdout_logger(line: &str) {
    println!("{}", line);
}

/// Emit through `tracing` at debug level
pub fn tracing_logger(line: &str) {
    tracing::debug!(target: "reqinspect", "{}", line);
}

/// Sink that keeps every logged string in memory
#[derive(Debug, Clone, Default)]
pub struct CaptureLogger {
    lines: Arc<RwLock<Vec<String>>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger writing into this capture, for [`Inspector::set_logger`](super::Inspector::set_logger)
    pub fn sink(&self) -> impl Fn(&str) + Send + Sync + 'static {
        let lines = self.lines.clone();
        move |line: &str| lines.write().push(line.to_string())
    }

    /// Everything captured so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.read().is_empty()
    }

    pub fn clear(&self) {
        self.lines.write().clear();
    }
}
