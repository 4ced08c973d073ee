// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use reqinspect::{
    CaptureLogger, Error, Exchange, FormatKind, HttpClient, Inspector, InspectorConfig,
    RequestArgs, Session, DELIMITER,
};
use wiremock::matchers::{any, body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_with_capture(config: InspectorConfig) -> (Session, CaptureLogger) {
    let inspector = Inspector::with_config(config);
    let capture = CaptureLogger::new();
    inspector.set_logger(capture.sink());

    let session = Session::with_inspector(
        HttpClient::new().expect("Failed to create HTTP client"),
        inspector,
    );
    session.patch();
    (session, capture)
}

/// Address nothing is listening on
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

#[tokio::test]
async fn test_success_logs_once_with_curl_format() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("up"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (session, capture) = session_with_capture(InspectorConfig::default());
    let url = format!("{}/health", mock_server.uri());

    let response = session
        .get(url.clone())
        .await
        .unwrap()
        .expect("default callback never vetoes");
    assert_eq!(response.status_code(), 200);

    assert_eq!(capture.len(), 1);
    let logged = capture.lines().remove(0);
    let lines: Vec<&str> = logged.trim().split('\n').collect();

    assert_eq!(lines[0], DELIMITER);
    assert_eq!(lines[1], format!("> curl -X GET '{}'", url));
    assert_eq!(lines[2], "< 200 OK");
    assert_eq!(lines[lines.len() - 2], "< b\"up\"");
    assert_eq!(lines[lines.len() - 1], DELIMITER);
}

#[tokio::test]
async fn test_success_with_plain_format() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let (session, capture) =
        session_with_capture(InspectorConfig::new().format(FormatKind::Plain));
    session.get(mock_server.uri()).await.unwrap();

    let logged = capture.lines().remove(0);
    let lines: Vec<&str> = logged.trim().split('\n').collect();

    assert!(lines.len() > 7);
    assert_eq!(lines[1], format!("> GET {}", mock_server.uri()));
    assert_eq!(lines[2], "> ");
    assert_eq!(lines[3], "> ");
    assert_eq!(lines[4], "< 200 OK");
    assert_eq!(lines[lines.len() - 2], r#"< {"ok": true}"#);
}

#[tokio::test]
async fn test_transport_failure_propagates_after_one_callback() {
    let (session, capture) = session_with_capture(InspectorConfig::default());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let record = seen.clone();
    session.inspector().set_callback(move |exchange: &mut Exchange| {
        record.lock().push((
            exchange.response().is_some(),
            exchange.exception().is_some(),
        ));
        exchange.run_default_callback()
    });

    let err = session.get(closed_port_url()).await.unwrap_err();
    assert!(matches!(err, Error::Http(ref e) if e.is_connect()));

    // pre-send, then a single failure callback
    assert_eq!(*seen.lock(), vec![(false, false), (false, true)]);

    let logged = capture.lines().remove(0);
    assert!(logged.contains("< HTTP error:"));
}

#[tokio::test]
async fn test_failure_veto_suppresses_error() {
    let (session, _capture) = session_with_capture(InspectorConfig::default());
    session
        .inspector()
        .set_callback(|exchange: &mut Exchange| exchange.exception().is_none());

    let result = session.get(closed_port_url()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_pre_send_veto_never_reaches_server() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (session, capture) = session_with_capture(InspectorConfig::default());
    session.inspector().set_callback(|_exchange: &mut Exchange| false);

    assert!(session.get(mock_server.uri()).await.unwrap().is_none());
    assert!(capture.is_empty());
}

#[tokio::test]
async fn test_callback_rewrites_url_before_send() {
    let mock_server = MockServer::start().await;
    Mock::given(path("/original"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(path("/rewritten"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (session, _capture) = session_with_capture(InspectorConfig::default());
    session.inspector().set_callback(|exchange: &mut Exchange| {
        if exchange.is_pending() {
            exchange.request.url = exchange.request.url.replace("/original", "/rewritten");
        }
        true
    });

    let response = session
        .get(format!("{}/original", mock_server.uri()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(response.status_code(), 202);
}

#[tokio::test]
async fn test_disabled_callback_sends_untouched() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (session, capture) =
        session_with_capture(InspectorConfig::new().enable_callback(false));
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    session.inspector().set_callback(move |_exchange: &mut Exchange| {
        counter.fetch_add(1, Ordering::SeqCst);
        false
    });

    assert!(session.get(mock_server.uri()).await.unwrap().is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(capture.is_empty());
}

#[tokio::test]
async fn test_bodies_are_sent_and_rendered() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("x-trace", "abc"))
        .and(body_json(serde_json::json!({"name": "widget"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_string("q=rust&tag=a&tag=b"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (session, capture) = session_with_capture(InspectorConfig::default());

    let items = RequestArgs::post(format!("{}/items", mock_server.uri()))
        .header("X-Trace", "abc")
        .json_value(serde_json::json!({"name": "widget"}));
    let response = session.request(items).await.unwrap().unwrap();
    assert_eq!(response.status_code(), 201);

    let search = RequestArgs::post(format!("{}/search", mock_server.uri()))
        .form(vec![("q", "rust"), ("tag", "a"), ("tag", "b")]);
    session.request(search).await.unwrap().unwrap();

    let logged = capture.lines();
    assert_eq!(logged.len(), 2);
    assert!(logged[0].contains(r#"-H "X-Trace: abc" -d "{"name": "widget"}""#));
    assert!(logged[0].contains("< 201 Created"));
    assert!(logged[1].contains(r#"-d "[["q", "rust"], ["tag", "a"], ["tag", "b"]]""#));
}

#[tokio::test]
async fn test_unpatched_session_is_silent() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let (session, capture) = session_with_capture(InspectorConfig::default());
    assert!(!session.patch());
    assert!(session.unpatch());
    assert!(!session.unpatch());

    assert!(session.get(mock_server.uri()).await.unwrap().is_some());
    assert!(capture.is_empty());

    assert!(session.patch());
    session.get(mock_server.uri()).await.unwrap();
    assert_eq!(capture.len(), 1);
}
