//! End-to-end fetch tests against a minimal in-process HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use planforge_client::{DatabaseClient, DatabaseLoadError};
use planforge_game::test_utils::FIXTURE_JSON;
use planforge_store::{GameDatabaseStore, LoadStatus};

/// Serve exactly one HTTP response on an ephemeral port, then shut down.
/// Returns the base URL to point the client at.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");

        // Drain the request head; GET carries no body.
        let mut buf = [0u8; 4096];
        let mut head = Vec::new();
        loop {
            let n = stream.read(&mut buf).expect("read request");
            head.extend_from_slice(&buf[..n]);
            if n == 0 || head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn successful_load_marks_store_ready() {
    let base_url = serve_once("HTTP/1.1 200 OK", FIXTURE_JSON);
    let client = DatabaseClient::new(base_url);
    let store = GameDatabaseStore::new();

    client.load_into(&store).await.expect("load should succeed");

    assert_eq!(store.status(), LoadStatus::Ready);
    let db = store.snapshot();
    assert_eq!(db.recipe_count(), 3);
    assert_eq!(db.resource_limit("Desc_OreIron_C"), Some(70380.0));
}

#[tokio::test]
async fn http_error_status_fails_load_and_keeps_snapshot() {
    let base_url = serve_once("HTTP/1.1 500 Internal Server Error", "");
    let client = DatabaseClient::new(base_url);
    let store = GameDatabaseStore::new();

    let err = client.load_into(&store).await.unwrap_err();

    assert!(matches!(err, DatabaseLoadError::Status { code: 500 }));
    assert_eq!(store.status(), LoadStatus::Failed);
    assert!(store.last_error().is_some());
    // Previous (empty) snapshot is untouched.
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn malformed_payload_is_distinguished_from_network_failure() {
    let base_url = serve_once("HTTP/1.1 200 OK", "this is not a database");
    let client = DatabaseClient::new(base_url);
    let store = GameDatabaseStore::new();

    let err = client.load_into(&store).await.unwrap_err();

    assert!(matches!(err, DatabaseLoadError::MalformedPayload(_)));
    assert_eq!(store.status(), LoadStatus::Failed);
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Bind then immediately drop so the port is (almost certainly) closed.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr")
    };
    let client = DatabaseClient::new(format!("http://{addr}"));
    let store = GameDatabaseStore::new();

    let err = client.load_into(&store).await.unwrap_err();

    assert!(matches!(err, DatabaseLoadError::Network(_)));
    assert_eq!(store.status(), LoadStatus::Failed);
}
