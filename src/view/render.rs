// src/view/render.rs
// =============================================================================
// Maps each response shape onto accordion sections.
//
// There is exactly one render routine per shape. The single-check forms and
// the pipeline form both go through these, so a clickbait result looks the
// same whichever way it was requested.
// =============================================================================

use serde::de::DeserializeOwned;

use super::accordion::{or_na, percent, Block, Section, TableRow, Tone, NOT_AVAILABLE};
use crate::api::{
    AnalyzeResult, ClickbaitResult, Endpoint, FakeNewsResult, LinkCheckResult,
    SensitiveLanguageResult,
};

/// A response shape that a form can request and render.
pub trait CheckResponse: DeserializeOwned + Send + 'static {
    /// Endpoint that produces this shape
    const ENDPOINT: Endpoint;

    /// Human-readable check name, used in the pipeline's risk label
    const NAME: &'static str;

    /// Whether the check found a problem
    fn flagged(&self) -> bool;

    /// Sections to show in the result panel
    fn sections(&self) -> Vec<Section>;
}

impl CheckResponse for ClickbaitResult {
    const ENDPOINT: Endpoint = Endpoint::Clickbait;
    const NAME: &'static str = "Clickbait";

    fn flagged(&self) -> bool {
        self.is_clickbait
    }

    fn sections(&self) -> Vec<Section> {
        let prediction = self.model_prediction.as_ref();
        let words = prediction
            .map(|p| p.clickbait_words.clone())
            .unwrap_or_default();

        vec![
            Section::new(
                "clickbait-status",
                "Clickbait Check",
                vec![
                    Block::status(
                        if self.is_clickbait { "Clickbait Detected" } else { "Not Clickbait" },
                        self.is_clickbait,
                    ),
                    Block::field("Title", or_na(self.title.as_deref())),
                    Block::field("Confidence", percent(prediction.and_then(|p| p.probability), 1)),
                    Block::field("Similarity", percent(self.similarity_score, 0)),
                ],
            ),
            Section::new(
                "clickbait-details",
                "Details",
                vec![
                    Block::field("Summary", or_na(self.summary.as_deref())),
                    Block::list("Clickbait Words", words, NOT_AVAILABLE),
                    Block::field("Explanation", or_na(self.explanation.as_deref())),
                ],
            ),
        ]
    }
}

impl CheckResponse for FakeNewsResult {
    const ENDPOINT: Endpoint = Endpoint::FakeNews;
    const NAME: &'static str = "Fake News";

    fn flagged(&self) -> bool {
        self.is_fake
    }

    fn sections(&self) -> Vec<Section> {
        vec![
            Section::new(
                "fake-news-status",
                "Fake News Check",
                vec![
                    Block::status(
                        if self.is_fake { "Potential Fake News" } else { "No Fake News Indicators" },
                        self.is_fake,
                    ),
                    Block::field("Input Title", or_na(self.input_title.as_deref())),
                    Block::field("Explanation", or_na(self.explanation.as_deref())),
                ],
            ),
            Section::new(
                "fake-news-similar",
                "Similar Articles",
                vec![Block::list(
                    "Similar Articles",
                    similar_articles(self),
                    "No similar articles found.",
                )],
            ),
        ]
    }
}

// "<title> (Score: 0.87)", followed by the article URL when there is one.
// Scores and URLs are paired with titles by index and may run short.
fn similar_articles(result: &FakeNewsResult) -> Vec<String> {
    result
        .similar_titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let score = result
                .similarity_scores
                .get(i)
                .copied()
                .flatten()
                .map(|s| format!("{:.2}", s))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            let line = format!("{} (Score: {})", or_na(title.as_deref()), score);

            match result.urls.get(i).and_then(|u| u.as_deref()) {
                Some(url) if !url.trim().is_empty() => format!("{} - {}", line, url.trim()),
                _ => line,
            }
        })
        .collect()
}

impl CheckResponse for LinkCheckResult {
    const ENDPOINT: Endpoint = Endpoint::Link;
    const NAME: &'static str = "Suspicious Link";

    fn flagged(&self) -> bool {
        self.is_suspicious
    }

    fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::new(
            "link-status",
            "Link Check",
            vec![
                Block::status(
                    if self.is_suspicious { "Suspicious Link" } else { "Link Appears Safe" },
                    self.is_suspicious,
                ),
                Block::field("Redirected URL", or_na(self.redirected_url.as_deref())),
                Block::field("Reason", or_na(self.reason.as_deref())),
                Block::field("Explanation", or_na(self.explanation.as_deref())),
            ],
        )];

        // Safe links get the compact view: no redirect table at all
        if self.is_suspicious && !self.redirect_chain.is_empty() {
            let rows = self
                .redirect_chain
                .iter()
                .map(|hop| TableRow {
                    cells: vec![
                        hop.step.map(|s| s.to_string()).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                        or_na(hop.kind.as_deref()),
                        or_na(hop.url.as_deref()),
                    ],
                    highlight: None,
                })
                .collect();

            sections.push(Section::new(
                "link-redirects",
                "Redirect Chain",
                vec![Block::table(&["Step", "Type", "URL"], rows)],
            ));
        }

        sections
    }
}

impl SensitiveLanguageResult {
    /// `main_label` when the service found something, else its conclusion
    pub fn label(&self) -> String {
        let main = self.main_label.as_deref().filter(|l| !l.trim().is_empty());
        or_na(main.or(self.conclusion.as_deref()))
    }
}

impl CheckResponse for SensitiveLanguageResult {
    const ENDPOINT: Endpoint = Endpoint::HateSpeech;
    const NAME: &'static str = "Sensitive Language";

    fn flagged(&self) -> bool {
        self.detected
    }

    fn sections(&self) -> Vec<Section> {
        let rows = self
            .criteria
            .iter()
            .map(|criterion| TableRow {
                cells: vec![
                    or_na(criterion.label.as_deref()),
                    or_na(criterion.description.as_deref()),
                    percent(criterion.probability, 2),
                ],
                highlight: criterion.probability.map(|p| Tone::from_flag(p > 0.5)),
            })
            .collect();

        let detected = self
            .detected_labels
            .iter()
            .map(|d| format!("{} ({})", or_na(d.label.as_deref()), percent(d.probability, 1)))
            .collect();

        vec![
            Section::new(
                "sensitive-status",
                "Status",
                vec![
                    Block::status(
                        if self.detected { "Sensitive Content Detected" } else { "Content Appropriate" },
                        self.detected,
                    ),
                    Block::field("Label", self.label()),
                    Block::field("Confidence", percent(self.confidence, 1)),
                    Block::field("Page Title", or_na(self.title.as_deref())),
                    Block::field("Snippet", or_na(self.content_snippet.as_deref())),
                    Block::field("Explanation", or_na(self.explanation.as_deref())),
                ],
            ),
            Section::new(
                "sensitive-criteria",
                "Criteria Analysis",
                vec![
                    Block::table(&["Criteria", "Description", "Probability"], rows),
                    Block::list("Labels Above Threshold", detected, "None"),
                ],
            ),
        ]
    }
}

impl AnalyzeResult {
    /// Names of the checks that flagged the content, in display order
    pub fn issues(&self) -> Vec<&'static str> {
        let results = &self.results;
        [
            (results.link_check.flagged(), LinkCheckResult::NAME),
            (results.clickbait.flagged(), ClickbaitResult::NAME),
            (results.sensitive_language.flagged(), SensitiveLanguageResult::NAME),
            (results.fake_news.flagged(), FakeNewsResult::NAME),
        ]
        .into_iter()
        .filter_map(|(flagged, name)| flagged.then_some(name))
        .collect()
    }

    /// "Low Risk", or "High Risk (<triggered checks>)"
    pub fn trust_level(&self) -> String {
        let issues = self.issues();
        if issues.is_empty() {
            "Low Risk".to_string()
        } else {
            format!("High Risk ({})", issues.join(", "))
        }
    }
}

impl CheckResponse for AnalyzeResult {
    const ENDPOINT: Endpoint = Endpoint::Analyze;
    const NAME: &'static str = "Pipeline";

    fn flagged(&self) -> bool {
        !self.issues().is_empty()
    }

    fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::new(
            "summary",
            "Summary",
            vec![
                Block::field("URL", or_na(self.url.as_deref())),
                Block::status(self.trust_level(), self.flagged()),
            ],
        )];

        let results = &self.results;
        sections.extend(results.link_check.sections());
        sections.extend(results.clickbait.sections());
        sections.extend(results.sensitive_language.sections());
        sections.extend(results.fake_news.sections());
        sections
    }
}
