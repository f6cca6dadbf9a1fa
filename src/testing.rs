// src/testing.rs
// =============================================================================
// In-process stand-in for the analysis service, used by unit tests.
//
// Each route answers every POST with a canned status and body. The server
// binds 127.0.0.1:0 so tests can run in parallel without port clashes.
// =============================================================================

use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct StubRoute {
    path: &'static str,
    reply: Reply,
    delay: Duration,
}

#[derive(Debug, Clone)]
enum Reply {
    /// Same status and body for every request
    Canned {
        status: StatusCode,
        content_type: &'static str,
        body: String,
    },
    /// `{"received": <request body>}`
    Echo,
}

impl StubRoute {
    /// Holds the response back, to keep a request in flight for a while
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

fn canned(path: &'static str, status: u16, content_type: &'static str, body: String) -> StubRoute {
    StubRoute {
        path,
        reply: Reply::Canned {
            status: StatusCode::from_u16(status).unwrap(),
            content_type,
            body,
        },
        delay: Duration::ZERO,
    }
}

pub fn json_route(path: &'static str, status: u16, body: Value) -> StubRoute {
    canned(path, status, "application/json", body.to_string())
}

pub fn raw_route(path: &'static str, status: u16, body: &str) -> StubRoute {
    canned(path, status, "text/plain", body.to_string())
}

/// A route that answers `{"received": <request body>}`.
///
/// Axum's `Json` extractor rejects bodies without an
/// `application/json` content type, so a 2xx proves the header was sent.
pub fn echo_route(path: &'static str) -> StubRoute {
    StubRoute {
        path,
        reply: Reply::Echo,
        delay: Duration::ZERO,
    }
}

/// Starts the stub and returns its base URL
pub async fn serve(routes: Vec<StubRoute>) -> String {
    let mut router = Router::new();

    for StubRoute { path, reply, delay } in routes {
        router = match reply {
            Reply::Echo => router.route(
                path,
                post(move |Json(received): Json<Value>| async move {
                    tokio::time::sleep(delay).await;
                    Json(json!({ "received": received }))
                }),
            ),
            Reply::Canned {
                status,
                content_type,
                body,
            } => router.route(
                path,
                post(move || {
                    let body = body.clone();
                    async move {
                        tokio::time::sleep(delay).await;
                        (status, [(header::CONTENT_TYPE, content_type)], body)
                    }
                }),
            ),
        };
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Base URL of a loopback port nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
