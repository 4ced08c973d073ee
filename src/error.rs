// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for reqinspect
//!
//! Transport failures are carried through the interceptor untouched, so the
//! variants here are what a caller sees whether or not a session is patched.

use thiserror::Error;

/// Result type alias for reqinspect operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for reqinspect
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Method is not a valid HTTP token
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Header name or value rejected by the transport
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by a non-reqwest transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a header error
    pub fn invalid_header(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidHeader {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }

    /// Check if the request never produced a response
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Http(_))
    }

    /// Get HTTP status code if the transport attached one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
