// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Exchange formatters
//!
//! Both formatters emit the same envelope: request lines prefixed `> `,
//! response lines (or the error) prefixed `< `, wrapped in delimiter lines.
//! A pending exchange renders as an empty string.

mod pretty;

use serde_json::Value;

use crate::http::{RequestArgs, Response};
use crate::inspect::{Exchange, Outcome};

pub use pretty::{pretty_bytes, pretty_data, pretty_json, WIDTH};

/// Line framing every rendered exchange
pub const DELIMITER: &str = ">>>>>>>>>>>>>>>><<<<<<<<<<<<<<<<";

/// Render method line, headers and body
pub fn plain_formatter(exchange: &Exchange) -> String {
    render(exchange, plain_request_lines)
}

/// Render the request as a curl command
pub fn curl_formatter(exchange: &Exchange) -> String {
    render(exchange, curl_request_lines)
}

fn render(exchange: &Exchange, request_lines: fn(&RequestArgs) -> Vec<String>) -> String {
    let mut formatted = String::new();

    match exchange.outcome() {
        Outcome::Pending => {}
        Outcome::Failed(error) => {
            push_prefixed(&mut formatted, '>', &request_lines(&exchange.request));
            formatted.push_str(&format!("< {}\n", single_line(&error.to_string())));
        }
        Outcome::Completed(response) => {
            push_prefixed(&mut formatted, '>', &request_lines(&exchange.request));
            push_prefixed(&mut formatted, '<', &response_lines(response));
        }
    }

    let body = formatted.trim();
    if body.is_empty() {
        return String::new();
    }

    format!("\n\n{}\n{}\n{}\n\n", DELIMITER, body, DELIMITER)
}

/// Every physical line gets the marker, including continuation lines of
/// multi-line bodies.
fn push_prefixed(out: &mut String, marker: char, lines: &[String]) {
    for line in lines {
        for physical in line.split('\n') {
            out.push(marker);
            out.push(' ');
            out.push_str(physical);
            out.push('\n');
        }
    }
}

/// Error displays may span lines; the `< ` line holds all of it
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `data` wins over `json`
fn request_body(request: &RequestArgs) -> Option<String> {
    match (&request.data, &request.json) {
        (Some(data), _) => Some(pretty_data(data)),
        (None, Some(json)) => Some(pretty_json(json)),
        (None, None) => None,
    }
}

fn plain_request_lines(request: &RequestArgs) -> Vec<String> {
    let mut lines = vec![format!("{} {}", request.method_upper(), request.url)];

    match request.headers {
        Some(ref headers) => {
            lines.extend(headers.iter().map(|(name, value)| format!("{}: {}", name, value)))
        }
        None => lines.push(String::new()),
    }

    lines.push(request_body(request).unwrap_or_default());
    lines
}

fn curl_request_lines(request: &RequestArgs) -> Vec<String> {
    let mut command = format!("curl -X {}", request.method_upper());

    if let Some(ref headers) = request.headers {
        for (name, value) in headers {
            command.push_str(&format!(" -H \"{}: {}\"", name, value));
        }
    }

    if let Some(body) = request_body(request).filter(|b| !b.is_empty()) {
        command.push_str(&format!(" -d \"{}\"", body));
    }

    command.push_str(&format!(" '{}'", request.url));
    vec![command]
}

fn response_lines(response: &Response) -> Vec<String> {
    let mut lines = vec![format!("{} {}", response.status_code(), response.reason())];

    lines.extend(
        response
            .header_pairs()
            .into_iter()
            .map(|(name, value)| format!("{}: {}", name, value)),
    );

    // non-JSON bodies fall back to the raw bytes
    lines.push(match response.json::<Value>() {
        Ok(json) => pretty_json(&json),
        Err(_) => pretty_bytes(&response.body),
    });

    lines
}
