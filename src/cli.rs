// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Global options configure the connection to the analysis service; each
// subcommand is one form: submit a URL, print the panel, exit.
// =============================================================================

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(
    name = "trustlens",
    version = "0.1.0",
    about = "Check a URL for clickbait, fake news, suspicious links and sensitive language",
    long_about = "trustlens sends a URL to a content-analysis service and prints what each \
                  detector found. Exit code 0 means nothing was flagged, 1 means at least one \
                  check flagged the content, 2 means the check could not be completed."
)]
pub struct Cli {
    /// Base URL of the analysis service, including any path prefix (e.g. http://host:8000/v1)
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up on a request after this many seconds (default: no limit)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Print the service's JSON payload instead of the rendered panel
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone());
        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a page's headline is clickbait
    ///
    /// Example: trustlens clickbait https://example.com/article
    Clickbait { url: String },

    /// Compare a page's headline against credible sources
    FakeNews { url: String },

    /// Check a link for redirects and known-dangerous patterns
    Link { url: String },

    /// Check a page for hateful or otherwise sensitive language
    Sensitive { url: String },

    /// Run all four checks at once and print an overall trust level
    Analyze { url: String },

    /// Keep a form open: every line on stdin is submitted as a URL
    ///
    /// Commands: `:toggle N` clicks section N's header, `:key N Enter` sends it
    /// a key press, `:show` prints the panel again, `:quit` exits.
    Interactive {
        #[arg(value_enum)]
        check: CheckKind,
    },
}

/// Which form an interactive session drives
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckKind {
    Clickbait,
    FakeNews,
    Link,
    Sensitive,
    Analyze,
}
