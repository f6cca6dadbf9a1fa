// src/view/controller.rs
// =============================================================================
// One form bound to one endpoint.
//
// Lifecycle of a submission:
// 1. begin()  -> panel switches to Loading, a fresh SubmitToken is issued
// 2. the request runs (here via submit(), or elsewhere via dispatch())
// 3. settle() -> Result or Error panel, but only for the newest token
//
// Submitting again while a request is in flight supersedes it: the old
// token stops being current, so its answer is dropped whenever it lands.
// The panel therefore always shows exactly one request's outcome.
//
// Rust concepts:
// - Generics + traits: FormController<R> works for every response shape
// - PhantomData: Remembers R without storing a value of it
// - BoxFuture: An owned, type-erased future another task can await
// =============================================================================

use std::marker::PhantomData;

use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use tracing::{debug, info};

use super::accordion::{Accordion, Activation};
use super::render::CheckResponse;
use super::state::{ResultPanel, ViewState};
use crate::api::{ApiClient, ApiError};

/// Outcome of one check request: typed response plus raw payload
pub type Outcome<R> = Result<(R, Value), ApiError>;

/// Identifies one submission of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitToken(u64);

#[derive(Debug)]
pub struct FormController<R: CheckResponse> {
    client: ApiClient,
    state: ViewState,
    issued: u64,
    current: Option<SubmitToken>,
    _shape: PhantomData<fn() -> R>,
}

impl<R: CheckResponse> FormController<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: ViewState::Idle,
            issued: 0,
            current: None,
            _shape: PhantomData,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Token of the request the form is waiting on, if any
    pub fn in_flight(&self) -> Option<SubmitToken> {
        self.current
    }

    /// Starts a submission: shows Loading and drops whatever was displayed.
    pub fn begin(&mut self, url: &str) -> SubmitToken {
        self.issued += 1;
        let token = SubmitToken(self.issued);

        if let Some(previous) = self.current.replace(token) {
            debug!(check = R::NAME, superseded = previous.0, "Submission superseded");
        }
        self.state = ViewState::Loading {
            url: url.to_string(),
        };
        token
    }

    /// Applies a finished request to the panel.
    ///
    /// Returns false (and changes nothing) when `token` has been superseded.
    pub fn settle(&mut self, token: SubmitToken, outcome: Outcome<R>) -> bool {
        if self.current != Some(token) {
            debug!(check = R::NAME, token = token.0, "Ignoring stale response");
            return false;
        }
        self.current = None;

        let url = match &self.state {
            ViewState::Loading { url } => url.clone(),
            _ => String::new(),
        };

        self.state = match outcome {
            Ok((response, raw)) => {
                let flagged = response.flagged();
                info!(check = R::NAME, url = %url, flagged, "Check completed");
                ViewState::Result(ResultPanel {
                    url,
                    flagged,
                    accordion: Accordion::new(response.sections()),
                    raw,
                })
            }
            Err(err) => {
                info!(check = R::NAME, url = %url, status = ?err.status(), error = %err, "Check failed");
                ViewState::error(url, err.to_string())
            }
        };
        debug!(check = R::NAME, state = self.state.name(), "Panel settled");
        true
    }

    /// Begins a submission and hands back the request as an owned future.
    ///
    /// The caller drives the future and feeds its output to `settle`.
    pub fn dispatch(&mut self, url: &str) -> (SubmitToken, BoxFuture<'static, Outcome<R>>) {
        let token = self.begin(url);
        let client = self.client.clone();
        let url = url.to_string();
        let request = async move { client.check::<R>(R::ENDPOINT, &url).await }.boxed();
        (token, request)
    }

    /// Submits `url` and waits for the panel to settle.
    pub async fn submit(&mut self, url: &str) -> &ViewState {
        let (token, request) = self.dispatch(url);
        let outcome = request.await;
        self.settle(token, outcome);
        &self.state
    }

    /// Forwards a header activation to the result accordion.
    ///
    /// Returns `None` when no result is shown or nothing toggled.
    pub fn activate(&mut self, index: usize, key: Activation) -> Option<bool> {
        match &mut self.state {
            ViewState::Result(panel) => panel.accordion.activate(index, key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClickbaitResult, FakeNewsResult, LinkCheckResult};
    use crate::config::ClientConfig;
    use crate::testing::{closed_port_url, json_route, serve};
    use serde_json::json;

    fn form<R: CheckResponse>(base_url: &str) -> FormController<R> {
        FormController::new(ApiClient::new(&ClientConfig::new(base_url)).unwrap())
    }

    fn clickbait(is_clickbait: bool, title: &str) -> Outcome<ClickbaitResult> {
        let raw = json!({"is_clickbait": is_clickbait, "title": title});
        Ok((serde_json::from_value(raw.clone()).unwrap(), raw))
    }

    fn panel_title(state: &ViewState) -> String {
        match state {
            ViewState::Result(panel) => panel.raw["title"].as_str().unwrap_or_default().to_string(),
            other => panic!("expected result, got {}", other.name()),
        }
    }

    #[tokio::test]
    async fn test_submit_renders_result() {
        let base = serve(vec![json_route(
            "/check-clickbait",
            200,
            json!({"is_clickbait": true, "title": "X"}),
        )])
        .await;
        let mut form = form::<ClickbaitResult>(&base);
        assert_eq!(form.state().name(), "idle");

        match form.submit("http://example.com/a").await {
            ViewState::Result(panel) => {
                assert!(panel.flagged);
                assert_eq!(panel.url, "http://example.com/a");
                assert_eq!(panel.accordion.sections()[0].id, "clickbait-status");
            }
            other => panic!("expected result, got {}", other.name()),
        }
        assert!(form.in_flight().is_none());
    }

    #[tokio::test]
    async fn test_submit_renders_error_detail() {
        let base = serve(vec![json_route(
            "/check-fake-news",
            500,
            json!({"detail": "Error processing request: timeout"}),
        )])
        .await;
        let mut form = form::<FakeNewsResult>(&base);

        match form.submit("http://example.com/a").await {
            ViewState::Error { message, .. } => {
                assert_eq!(message, "Error processing request: timeout")
            }
            other => panic!("expected error, got {}", other.name()),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_renders_error() {
        let mut form = form::<LinkCheckResult>(&closed_port_url().await);

        match form.submit("http://example.com/a").await {
            ViewState::Error { message, .. } => assert!(message.starts_with("Network error")),
            other => panic!("expected error, got {}", other.name()),
        }
    }

    #[tokio::test]
    async fn test_resubmit_after_error_goes_back_to_loading() {
        let mut form = form::<ClickbaitResult>(&closed_port_url().await);
        form.submit("http://example.com/a").await;
        assert_eq!(form.state().name(), "error");

        let token = form.begin("http://example.com/b");
        assert_eq!(
            form.state(),
            &ViewState::Loading {
                url: "http://example.com/b".to_string()
            }
        );
        assert!(form.settle(token, clickbait(false, "B")));
        assert_eq!(panel_title(form.state()), "B");
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        let mut form = FormController::<ClickbaitResult>::new(client);

        let first = form.begin("http://example.com/a");
        let second = form.begin("http://example.com/b");

        assert!(!form.settle(first, clickbait(true, "A")));
        assert_eq!(form.state().name(), "loading");

        assert!(form.settle(second, clickbait(false, "B")));
        assert_eq!(panel_title(form.state()), "B");

        // A late answer for the first submission cannot overwrite the panel
        assert!(!form.settle(first, clickbait(true, "A")));
        assert_eq!(panel_title(form.state()), "B");
    }

    #[tokio::test]
    async fn test_double_submit_shows_latest_only() {
        let base = serve(vec![json_route(
            "/check-clickbait",
            200,
            json!({"is_clickbait": false, "title": "same"}),
        )])
        .await;
        let mut form = form::<ClickbaitResult>(&base);

        let (first, first_request) = form.dispatch("http://example.com/a");
        let (second, second_request) = form.dispatch("http://example.com/b");
        let (first_outcome, second_outcome) = tokio::join!(first_request, second_request);

        // The superseded request resolves last and must not win
        assert!(form.settle(second, second_outcome));
        assert!(!form.settle(first, first_outcome));

        match form.state() {
            ViewState::Result(panel) => assert_eq!(panel.url, "http://example.com/b"),
            other => panic!("expected result, got {}", other.name()),
        }
    }

    #[test]
    fn test_activate_needs_a_result() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        let mut form = FormController::<ClickbaitResult>::new(client);
        assert_eq!(form.activate(0, Activation::Click), None);

        let token = form.begin("http://example.com/a");
        form.settle(token, clickbait(true, "A"));
        assert_eq!(form.activate(0, Activation::Enter), Some(false));
        assert_eq!(form.activate(0, Activation::Space), Some(true));
    }
}
