// src/api/types.rs
// =============================================================================
// Request and response shapes of the content-analysis service.
//
// The service does not promise a schema: fields come and go between
// revisions, and Python happily sends `null` where we'd expect a list. So
// every field here is optional or defaulted, a value of the wrong type is
// treated as missing, and rendering decides what a missing value looks like
// (usually "N/A"). A 2xx payload never fails to decode because of one field.
//
// Rust concepts:
// - #[serde(default)]: Missing fields take their Default value
// - deserialize_with: Custom decoding for a single field
// - DeserializeOwned: "can be decoded from an owned serde_json::Value"
// =============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Every endpoint accepts the same body: `{"url": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckRequest {
    pub url: String,
}

/// Remote endpoints we know how to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Clickbait,
    FakeNews,
    Link,
    HateSpeech,
    Analyze,
}

impl Endpoint {
    /// Path relative to the configured base URL
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Clickbait => "/check-clickbait",
            Endpoint::FakeNews => "/check-fake-news",
            Endpoint::Link => "/check-link",
            Endpoint::HateSpeech => "/check-hatespeech",
            Endpoint::Analyze => "/analyze",
        }
    }
}

// Keeps a field only when it has the expected type. A missing field, `null`
// and a wrongly typed value all come out as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// `lenient` for fields with a natural default: flags, lists, nested results.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

// Parallel arrays: each element decodes on its own so indexes stay aligned.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items: Vec<Value> = or_default(deserializer)?;
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).ok())
        .collect())
}

// Plain lists: elements of the wrong shape are dropped.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_items(deserializer)?.into_iter().flatten().collect())
}

/// Response of `POST /check-clickbait`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClickbaitResult {
    #[serde(deserialize_with = "or_default")]
    pub is_clickbait: bool,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub similarity_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub model_prediction: Option<ModelPrediction>,
}

/// The classifier's own opinion, next to the similarity heuristic
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelPrediction {
    #[serde(deserialize_with = "or_default")]
    pub is_clickbait: bool,
    #[serde(deserialize_with = "lenient")]
    pub probability: Option<f64>,
    #[serde(deserialize_with = "lenient_list")]
    pub clickbait_words: Vec<String>,
}

/// Response of `POST /check-fake-news`
///
/// `similar_titles`, `similarity_scores` and `urls` are parallel arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FakeNewsResult {
    #[serde(deserialize_with = "or_default")]
    pub is_fake: bool,
    #[serde(deserialize_with = "lenient")]
    pub input_title: Option<String>,
    #[serde(deserialize_with = "lenient_items")]
    pub similar_titles: Vec<Option<String>>,
    #[serde(deserialize_with = "lenient_items")]
    pub similarity_scores: Vec<Option<f64>>,
    #[serde(deserialize_with = "lenient_items")]
    pub urls: Vec<Option<String>>,
    #[serde(deserialize_with = "lenient")]
    pub explanation: Option<String>,
}

/// Response of `POST /check-link`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkCheckResult {
    #[serde(deserialize_with = "or_default")]
    pub is_suspicious: bool,
    #[serde(deserialize_with = "lenient")]
    pub redirected_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub reason: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub redirect_chain: Vec<RedirectStep>,
}

/// One hop in the redirect chain the service followed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RedirectStep {
    #[serde(deserialize_with = "lenient")]
    pub step: Option<u32>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// Response of `POST /check-hatespeech`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SensitiveLanguageResult {
    #[serde(deserialize_with = "or_default")]
    pub detected: bool,
    #[serde(deserialize_with = "lenient")]
    pub main_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub conclusion: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub confidence: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub content_snippet: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub criteria: Vec<Criterion>,
    #[serde(deserialize_with = "lenient_list")]
    pub detected_labels: Vec<DetectedLabel>,
}

/// One toxicity criterion and the probability the model assigned to it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Criterion {
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub probability: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectedLabel {
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub probability: Option<f64>,
}

/// Response of `POST /analyze`: all four checks in one payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyzeResult {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub results: AnalyzeResults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyzeResults {
    #[serde(deserialize_with = "or_default")]
    pub link_check: LinkCheckResult,
    #[serde(deserialize_with = "or_default")]
    pub clickbait: ClickbaitResult,
    #[serde(deserialize_with = "or_default")]
    pub sensitive_language: SensitiveLanguageResult,
    #[serde(deserialize_with = "or_default")]
    pub fake_news: FakeNewsResult,
}
