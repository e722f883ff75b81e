// tests/integration/events_client_test.rs
//
// Exercises the real HTTP transport against a one-shot responder on localhost.

use anyhow::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use workshop_trigger::adapter::pagerduty::events_client::PagerDutyEventsClient;
use workshop_trigger::domain::error::DispatchError;
use workshop_trigger::repository::scenario_catalog::ScenarioCatalog;
use workshop_trigger::service::incident_dispatcher::{EventTransport, IncidentDispatcher};
use workshop_trigger::service::payload_builder::build_event;

struct CapturedRequest {
    head: String,
    body: String,
}

/// Accepts one connection, captures the request, replies with `status` and `body`.
async fn one_shot_server(
    status_line: &'static str,
    body: &'static str,
) -> Result<(String, JoinHandle<Result<CapturedRequest>>)> {
    one_shot_raw_server(format!(
        concat!(
            "HTTP/1.1 {}\r\n",
            "content-type: application/json\r\n",
            "content-length: {}\r\n",
            "connection: close\r\n\r\n{}",
        ),
        status_line,
        body.len(),
        body
    ))
    .await
}

/// Accepts one connection, captures the request, writes `response` verbatim and closes.
async fn one_shot_raw_server(
    response: String,
) -> Result<(String, JoinHandle<Result<CapturedRequest>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}/v2/enqueue", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await?;
            anyhow::ensure!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|l| {
                let (name, value) = l.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await?;
            anyhow::ensure!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body_in =
            String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

        socket.write_all(response.as_bytes()).await?;
        socket.shutdown().await?;

        Ok::<_, anyhow::Error>(CapturedRequest { head, body: body_in })
    });

    Ok((url, handle))
}

#[tokio::test]
async fn accepted_event_returns_parsed_response() -> Result<()> {
    let (url, server) = one_shot_server(
        "202 Accepted",
        r#"{"status":"success","message":"Event processed","dedup_key":"test-dedup-123"}"#,
    )
    .await?;
    let client = PagerDutyEventsClient::new(url);
    let scenario = ScenarioCatalog::builtin().find("crash-loop").unwrap();
    let request = build_event("valid-routing-key-12345678", scenario);

    let response = client.enqueue(&request).await?;
    assert_eq!(response.status, "success");
    assert_eq!(response.message, "Event processed");
    assert_eq!(response.dedup_key, "test-dedup-123");

    let captured = server.await??;
    assert!(captured.head.starts_with("POST /v2/enqueue HTTP/1.1"));
    assert!(captured
        .head
        .to_ascii_lowercase()
        .contains("content-type: application/json"));

    let sent: serde_json::Value = serde_json::from_str(&captured.body)?;
    assert_eq!(sent["routing_key"], "valid-routing-key-12345678");
    assert_eq!(sent["event_action"], "trigger");
    assert_eq!(sent["dedup_key"], request.dedup_key.as_str());
    assert_eq!(sent["payload"]["severity"], "critical");
    assert_eq!(sent["payload"]["class"], "CrashLoopBackOff");
    assert_eq!(sent["payload"]["custom_details"]["namespace"], "production");
    Ok(())
}

#[tokio::test]
async fn non_success_status_carries_code_and_raw_body() -> Result<()> {
    let (url, server) = one_shot_server(
        "400 Bad Request",
        r#"{"status":"invalid event","message":"Event object is invalid"}"#,
    )
    .await?;
    let dispatcher = IncidentDispatcher::new(std::sync::Arc::new(PagerDutyEventsClient::new(url)));
    let scenario = ScenarioCatalog::builtin().find("pvc-pending").unwrap();

    let err = dispatcher.dispatch("bad-key", scenario).await.unwrap_err();
    assert_eq!(
        err,
        DispatchError::Api {
            status: 400,
            body: r#"{"status":"invalid event","message":"Event object is invalid"}"#.into(),
        }
    );
    assert_eq!(
        err.to_string(),
        r#"PagerDuty API error: 400 - {"status":"invalid event","message":"Event object is invalid"}"#
    );

    server.await??;
    Ok(())
}

#[tokio::test]
async fn unreadable_error_body_is_a_transport_failure() -> Result<()> {
    // declares more body than it sends, then hangs up
    let (url, server) = one_shot_raw_server(
        concat!(
            "HTTP/1.1 500 Internal Server Error\r\n",
            "content-length: 64\r\n",
            "connection: close\r\n\r\n",
            "{\"sta",
        )
        .to_string(),
    )
    .await?;
    let client = PagerDutyEventsClient::new(url);
    let scenario = ScenarioCatalog::builtin().find("oom-killed").unwrap();

    let err = client.enqueue(&build_event("k", scenario)).await.unwrap_err();
    assert!(matches!(err, DispatchError::Transport(_)), "got {err:?}");

    server.await??;
    Ok(())
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_failure() -> Result<()> {
    let (url, server) = one_shot_server("200 OK", "not json").await?;
    let client = PagerDutyEventsClient::new(url);
    let scenario = ScenarioCatalog::builtin().find("hpa-max").unwrap();

    let err = client.enqueue(&build_event("k", scenario)).await.unwrap_err();
    assert!(matches!(err, DispatchError::Transport(ref msg) if !msg.is_empty()));

    server.await??;
    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() -> Result<()> {
    // bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}/v2/enqueue", listener.local_addr()?);
    drop(listener);

    let client = PagerDutyEventsClient::new(url);
    let scenario = ScenarioCatalog::builtin().find("image-pull").unwrap();

    let err = client.enqueue(&build_event("k", scenario)).await.unwrap_err();
    assert!(matches!(err, DispatchError::Transport(_)));
    assert!(!err.failure_message().is_empty());
    Ok(())
}
