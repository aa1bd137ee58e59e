//! One full collection cycle against a local stub standing in for both
//! Reddit and the ingestion endpoint.

use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use mood_config::FeedConfig;
use mood_core::responses::{IngestResponse, ResponseStatus};
use mood_feed::{Collector, FeedError, FeedPost, RedditClient};
use pretty_assertions::assert_eq;

const LISTING: &str = r#"{"data": {"children": [
    {"data": {"id": "p1", "title": "I love the new update", "selftext": "", "author": "a",
              "score": 10, "num_comments": 2, "url": "https://example.com/1",
              "created_utc": 1700000000.0, "subreddit": "technology"}},
    {"data": {"id": "p2", "title": "   ", "selftext": "", "author": "b",
              "score": 1, "num_comments": 0, "url": "https://example.com/2",
              "created_utc": 1700000001.0, "subreddit": "technology"}}
]}}"#;

/// Serve `requests` requests, answering the listing and ingest routes, and
/// report each ingest body back through the channel.
fn spawn_stub(
    requests: usize,
    ingest_status: u16,
) -> (String, mpsc::Receiver<String>, thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        for _ in 0..requests {
            let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(10)) else {
                return;
            };
            let url = request.url().to_string();
            let (status, body) = if url.starts_with("/r/technology/new.json") {
                assert!(url.ends_with("limit=5"), "unexpected url {url}");
                (200, LISTING.to_string())
            } else if url == "/ingest" {
                let mut received = String::new();
                request.as_reader().read_to_string(&mut received).unwrap();
                tx.send(received).unwrap();
                if ingest_status == 200 {
                    (
                        200,
                        r#"{"status":"success","inserted":1,"skipped":1,"failed":0}"#.to_string(),
                    )
                } else {
                    (
                        ingest_status,
                        r#"{"status":"error","message":"No data received"}"#.to_string(),
                    )
                }
            } else {
                (404, String::new())
            };
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            request.respond(response).unwrap();
        }
    });

    (format!("http://{addr}"), rx, handle)
}

fn config(base: &str, backup: Option<&std::path::Path>) -> FeedConfig {
    FeedConfig {
        fetch_limit: 5,
        save_local: backup.is_some(),
        backup_path: backup
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default(),
        endpoint: format!("{base}/ingest"),
        ..FeedConfig::default()
    }
}

fn client(base: &str) -> RedditClient {
    RedditClient::new("mood-feed-test/0.1", Duration::from_secs(5))
        .unwrap()
        .with_base_url(base)
}

#[tokio::test]
async fn cycle_fetches_backs_up_and_delivers() {
    let (base, bodies, handle) = spawn_stub(2, 200);
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("reddit_data.jsonl");

    let collector = Collector::with_client(client(&base), &config(&base, Some(&backup)));
    let report = collector.run_once().await.unwrap();
    handle.join().unwrap();

    assert_eq!(report.fetched, 2);
    assert_eq!(
        report.delivered,
        Some(IngestResponse {
            status: ResponseStatus::Success,
            inserted: 1,
            skipped: 1,
            failed: 0,
        })
    );

    let sent: Vec<FeedPost> = serde_json::from_str(&bodies.recv().unwrap()).unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].title, "I love the new update");
    assert_eq!(sent[0].created_utc, "2023-11-14 22:13:20");

    let saved: Vec<FeedPost> = serde_jsonlines::json_lines(&backup)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(saved, sent);
}

#[tokio::test]
async fn endpoint_rejection_surfaces_as_api_error() {
    let (base, _bodies, handle) = spawn_stub(2, 400);

    let collector = Collector::with_client(client(&base), &config(&base, None));
    let err = collector.run_once().await.unwrap_err();
    handle.join().unwrap();

    match err {
        FeedError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("No data received"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
