// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! reqinspect CLI
//!
//! Sends one request through a patched session so the exchange is rendered
//! the same way the library renders it for embedding applications.

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context};
use reqinspect::{FormatKind, HttpClient, Inspector, InspectorConfig, RequestArgs, Session};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reqinspect=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" => match FetchArgs::parse(&args[2..]) {
            Ok(fetch) => run_fetch(fetch).await,
            Err(e) => {
                eprintln!("{:#}", e);
                eprintln!("Usage: reqinspect fetch <url> [--plain|--curl] [-X METHOD] [-H \"name: value\"]... [-d BODY]");
                ExitCode::from(1)
            }
        },
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("reqinspect {}", reqinspect::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"reqinspect - HTTP request inspection

USAGE:
    reqinspect <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>     Send a request and print the exchange
    help            Show this help message
    version         Show version information

FETCH OPTIONS:
    --plain             Render as method line, headers and body
    --curl              Render as a curl command (default)
    -X, --method M      Request method (default GET)
    -H, --header H      Add a "name: value" header, repeatable
    -d, --data BODY     Send BODY as a text body

ENVIRONMENT:
    REQINSPECT_FORMAT      curl | plain
    REQINSPECT_SINK        stdout | tracing
    REQINSPECT_CALLBACKS   on | off

EXAMPLES:
    reqinspect fetch https://example.com
    reqinspect fetch https://httpbin.org/post -X POST -H "Content-Type: text/plain" -d hello
"#
    );
}

#[derive(Debug, Default, PartialEq)]
struct FetchArgs {
    url: String,
    method: Option<String>,
    headers: Vec<(String, String)>,
    data: Option<String>,
    format: Option<FormatKind>,
}

impl FetchArgs {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut fetch = FetchArgs::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--plain" => fetch.format = Some(FormatKind::Plain),
                "--curl" => fetch.format = Some(FormatKind::Curl),
                "-X" | "--method" => {
                    fetch.method = Some(iter.next().context("missing value for --method")?.clone())
                }
                "-H" | "--header" => {
                    let header = iter.next().context("missing value for --header")?;
                    let (name, value) = header
                        .split_once(':')
                        .with_context(|| format!("header '{}' is not 'name: value'", header))?;
                    fetch
                        .headers
                        .push((name.trim().to_string(), value.trim().to_string()));
                }
                "-d" | "--data" => {
                    fetch.data = Some(iter.next().context("missing value for --data")?.clone())
                }
                flag if flag.starts_with('-') => bail!("unknown option '{}'", flag),
                url if fetch.url.is_empty() => fetch.url = url.to_string(),
                extra => bail!("unexpected argument '{}'", extra),
            }
        }

        if fetch.url.is_empty() {
            bail!("missing <url>");
        }

        Ok(fetch)
    }

    fn request(&self) -> RequestArgs {
        let mut request = RequestArgs::new(self.method.as_deref().unwrap_or("GET"), &self.url);
        if !self.headers.is_empty() {
            request = request.headers(self.headers.clone());
        }
        if let Some(ref data) = self.data {
            request = request.text(data.clone());
        }
        request
    }
}

async fn run_fetch(fetch: FetchArgs) -> ExitCode {
    let mut config = match InspectorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };
    if let Some(format) = fetch.format {
        config = config.format(format);
    }

    let client = match HttpClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            return ExitCode::from(1);
        }
    };

    let session = Session::with_inspector(client, Inspector::with_config(config));
    session.patch();

    match session.request(fetch.request()).await {
        Ok(Some(response)) if response.is_success() => ExitCode::SUCCESS,
        Ok(Some(_)) => ExitCode::from(2),
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::from(1)
        }
    }
}
