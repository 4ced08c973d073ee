// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Client, Method};
use url::Url;

use super::request::{RequestArgs, RequestData};
use super::response::Response;
use super::transport::Transport;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Default headers
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            accept_invalid_certs: false,
            default_headers: HeaderMap::new(),
            proxy: None,
        }
    }
}

/// `reqwest`-backed transport
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(config.default_headers.clone());

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Execute a request
    pub async fn execute(&self, request: &RequestArgs) -> Result<Response> {
        let method = Method::from_bytes(request.method_upper().as_bytes())
            .map_err(|_| Error::InvalidMethod(request.method.clone()))?;
        let url = Url::parse(&request.url)?;

        let mut builder = self.client.request(method, url);

        if let Some(ref headers) = request.headers {
            for (name, value) in headers {
                let header_name = HeaderName::try_from(name.as_str())
                    .map_err(|e| Error::invalid_header(name, e.to_string()))?;
                let header_value = HeaderValue::try_from(value.as_str())
                    .map_err(|e| Error::invalid_header(name, e.to_string()))?;
                builder = builder.header(header_name, header_value);
            }
        }

        // data wins over json, matching how the body is rendered
        builder = match (&request.data, &request.json) {
            (Some(RequestData::Text(text)), _) => builder.body(text.clone()),
            (Some(RequestData::Bytes(bytes)), _) => builder.body(bytes.clone()),
            (Some(RequestData::Form(pairs)), _) => builder.form(pairs),
            (None, Some(json)) => builder.json(json),
            (None, None) => builder,
        };

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(Response::new(status, headers, body, final_url))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: &RequestArgs) -> Result<Response> {
        self.execute(request).await
    }
}
