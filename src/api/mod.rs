// src/api/mod.rs
// =============================================================================
// Everything that talks to the remote analysis service.
//
// Submodules:
// - client: One POST per check, JSON in and JSON out
// - error: The single error type a call can fail with
// - types: Request/response shapes for each endpoint
// =============================================================================

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    AnalyzeResult, ClickbaitResult, Endpoint, FakeNewsResult, LinkCheckResult,
    SensitiveLanguageResult,
};
