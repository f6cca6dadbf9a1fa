// src/view/state.rs
// =============================================================================
// What a form is currently showing.
//
// Idle, loading, result and error are mutually exclusive, so they are one
// enum rather than four visibility flags that could disagree.
// =============================================================================

use serde::Serialize;
use serde_json::Value;

use super::accordion::Accordion;

/// Shown when an error carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Idle,
    Loading { url: String },
    Result(ResultPanel),
    Error { url: String, message: String },
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading { .. } => "loading",
            ViewState::Result(_) => "result",
            ViewState::Error { .. } => "error",
        }
    }

    /// Process exit code for this state: 0 clean, 1 flagged, 2 failed
    pub fn exit_code(&self) -> i32 {
        match self {
            ViewState::Result(panel) if panel.flagged => 1,
            ViewState::Error { .. } => 2,
            _ => 0,
        }
    }

    /// Error state with the fallback applied to an empty message
    pub fn error(url: String, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        ViewState::Error { url, message }
    }
}

/// A rendered successful response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPanel {
    /// URL the user submitted
    pub url: String,
    /// Whether the check found a problem
    pub flagged: bool,
    pub accordion: Accordion,
    /// Payload exactly as the service sent it
    #[serde(skip)]
    pub raw: Value,
}
