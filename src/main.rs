// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout stays clean for --json)
// 3. Build the API client from the configured base URL
// 4. Run the requested form and print its panel
// 5. Exit with proper code (0 = nothing flagged, 1 = flagged, 2 = error)
// =============================================================================

mod api;         // src/api/ - talks to the analysis service
mod cli;         // src/cli.rs - command-line parsing
mod config;      // src/config.rs - client settings
mod interactive; // src/interactive.rs - stdin-driven form
mod output;      // src/output.rs - printing panels
mod view;        // src/view/ - forms, panels and rendering

#[cfg(test)]
mod testing;     // src/testing.rs - stub analysis service for tests

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::{
    AnalyzeResult, ApiClient, ClickbaitResult, FakeNewsResult, LinkCheckResult,
    SensitiveLanguageResult,
};
use cli::{CheckKind, Cli, Commands};
use view::{CheckResponse, FormController};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.client_config();
    let client = ApiClient::new(&config).context("Cannot use the configured analysis service")?;
    tracing::debug!(base_url = %client.base_url(), "API client ready");

    match cli.command {
        Commands::Clickbait { url } => check_once::<ClickbaitResult>(client, &url, cli.json).await,
        Commands::FakeNews { url } => check_once::<FakeNewsResult>(client, &url, cli.json).await,
        Commands::Link { url } => check_once::<LinkCheckResult>(client, &url, cli.json).await,
        Commands::Sensitive { url } => {
            check_once::<SensitiveLanguageResult>(client, &url, cli.json).await
        }
        Commands::Analyze { url } => check_once::<AnalyzeResult>(client, &url, cli.json).await,
        Commands::Interactive { check } => match check {
            CheckKind::Clickbait => interact::<ClickbaitResult>(client, cli.json).await,
            CheckKind::FakeNews => interact::<FakeNewsResult>(client, cli.json).await,
            CheckKind::Link => interact::<LinkCheckResult>(client, cli.json).await,
            CheckKind::Sensitive => interact::<SensitiveLanguageResult>(client, cli.json).await,
            CheckKind::Analyze => interact::<AnalyzeResult>(client, cli.json).await,
        },
    }
}

// Submits one URL, prints the settled panel, and maps it to an exit code
async fn check_once<R: CheckResponse>(client: ApiClient, url: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Running {} check on: {}", R::NAME.to_lowercase(), url);
    }

    let mut form = FormController::<R>::new(client);
    let state = form.submit(url).await;

    output::print_state(state, json)?;
    Ok(state.exit_code())
}

async fn interact<R: CheckResponse>(client: ApiClient, json: bool) -> Result<i32> {
    interactive::run_interactive(FormController::<R>::new(client), json).await
}

// Logs go to stderr. RUST_LOG overrides the default level.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
