//! End-to-end tests for the `trustlens` binary.
//!
//! The analysis service is replaced by a small axum app on a loopback port.

use assert_cmd::Command;
use axum::routing::post;
use axum::{http::StatusCode, Json, Router};
use predicates::prelude::*;
use serde_json::{json, Value};

fn trustlens() -> Command {
    let mut cmd = Command::cargo_bin("trustlens").unwrap();
    cmd.env_remove("TRUSTLENS_API_URL").env_remove("RUST_LOG");
    cmd
}

async fn stub_service() -> String {
    let app = Router::new()
        .route(
            "/check-clickbait",
            post(|| async {
                Json(json!({
                    "is_clickbait": true,
                    "title": "X",
                    "similarity_score": 0.87,
                    "model_prediction": {
                        "is_clickbait": true,
                        "probability": 0.91,
                        "clickbait_words": ["shocking"]
                    }
                }))
            }),
        )
        .route(
            "/analyze",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "url": body["url"],
                    "results": {
                        "link_check": {"is_suspicious": false},
                        "clickbait": {"is_clickbait": false},
                        "sensitive_language": {"detected": false},
                        "fake_news": {"is_fake": false}
                    }
                }))
            }),
        )
        .route(
            "/check-link",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"detail": "URL could not be resolved"})),
                )
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[test]
fn test_help_lists_checks() {
    trustlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clickbait"))
        .stdout(predicate::str::contains("fake-news"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_invalid_base_url_exits_with_2() {
    trustlens()
        .args(["link", "http://example.com", "--base-url", "not a url"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid API base URL"));
}

#[test]
fn test_unreachable_service_shows_error_panel() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    trustlens()
        .args(["link", "http://example.com"])
        .env("TRUSTLENS_API_URL", format!("http://127.0.0.1:{}", port))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Network error"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_clickbait_panel_and_exit_code() {
    let base = stub_service().await;

    trustlens()
        .args(["clickbait", "http://example.com/a", "--base-url", &base])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Clickbait Detected"))
        .stdout(predicate::str::contains("Confidence: 91.0%"))
        .stdout(predicate::str::contains("Similarity: 87%"))
        .stdout(predicate::str::contains("- shocking"))
        .stdout(predicate::str::contains("Summary: N/A"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_analyze_low_risk() {
    let base = stub_service().await;

    trustlens()
        .args(["analyze", "http://example.com/a", "--base-url", &base])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Low Risk"))
        .stdout(predicate::str::contains("URL: http://example.com/a"))
        .stdout(predicate::str::contains("No similar articles found."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_json_output_is_the_raw_payload() {
    let base = stub_service().await;

    let output = trustlens()
        .args(["analyze", "http://example.com/a", "--json", "--base-url", &base])
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["url"], "http://example.com/a");
    assert_eq!(payload["results"]["fake_news"]["is_fake"], false);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_error_detail_is_shown_verbatim() {
    let base = stub_service().await;

    trustlens()
        .args(["link", "http://bad.test", "--base-url", &base])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("❌ Error: URL could not be resolved"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_interactive_session_settles_before_exit() {
    let base = stub_service().await;

    trustlens()
        .args(["interactive", "clickbait", "--base-url", &base])
        .write_stdin("http://example.com/a\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checking http://example.com/a"))
        .stdout(predicate::str::contains("Clickbait Detected"));
}
