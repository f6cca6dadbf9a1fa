// src/interactive.rs
// =============================================================================
// A long-lived form driven from stdin.
//
// How it works:
// 1. Each non-command line is submitted as a URL
// 2. The request runs on its own tokio task and reports back over a channel
// 3. A newer submission aborts the older task; if the older answer still
//    arrives, the form ignores it because its token is no longer current
//
// Only this loop touches the form, so no locks are needed.
// =============================================================================

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::output::print_state;
use crate::view::{Activation, CheckResponse, FormController, Outcome, SubmitToken};

/// What one stdin line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    /// Activate section N (1-based, as printed)
    Activate(usize, Activation),
    Show,
    Quit,
    Blank,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Blank;
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Submit(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let index = parts.next().and_then(|n| n.parse::<usize>().ok());
    let key = parts.next();

    match (name, index, key) {
        ("quit" | "q", _, _) => Command::Quit,
        ("show", _, _) => Command::Show,
        ("toggle" | "click", Some(n), None) if n > 0 => Command::Activate(n, Activation::Click),
        ("key", Some(n), Some(key)) if n > 0 => Command::Activate(n, Activation::from_key(key)),
        _ => Command::Unknown(line.to_string()),
    }
}

/// Runs the session on stdin until `:quit` or end of input.
///
/// Returns the exit code of whatever the panel shows at the end.
pub async fn run_interactive<R: CheckResponse>(mut form: FormController<R>, json: bool) -> Result<i32> {
    drive(&mut form, tokio::io::stdin(), json).await?;
    Ok(form.state().exit_code())
}

// Feeds `input` to the form line by line.
async fn drive<R, I>(form: &mut FormController<R>, input: I, json: bool) -> Result<()>
where
    R: CheckResponse,
    I: AsyncRead + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<(SubmitToken, Outcome<R>)>();
    let mut lines = BufReader::new(input).lines();
    let mut in_flight: Option<JoinHandle<()>> = None;
    let mut input_open = true;

    print_state(form.state(), json)?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    // End of input: let the pending request (if any) finish first
                    input_open = false;
                    if form.in_flight().is_none() {
                        break;
                    }
                    continue;
                };

                match parse_command(&line) {
                    Command::Submit(url) => {
                        if let Some(task) = in_flight.take() {
                            task.abort();
                        }
                        let (token, request) = form.dispatch(&url);
                        let tx = tx.clone();
                        in_flight = Some(tokio::spawn(async move {
                            // The receiver only goes away when the session ends
                            let _ = tx.send((token, request.await));
                        }));
                        print_state(form.state(), json)?;
                    }
                    Command::Activate(n, key) => match form.activate(n - 1, key) {
                        Some(_) => print_state(form.state(), json)?,
                        None => eprintln!("Section {} did not toggle", n),
                    },
                    Command::Show => print_state(form.state(), json)?,
                    Command::Quit => break,
                    Command::Blank => {}
                    Command::Unknown(text) => eprintln!("Unknown command: {}", text),
                }
            }
            Some((token, outcome)) = rx.recv() => {
                if form.settle(token, outcome) {
                    in_flight = None;
                    print_state(form.state(), json)?;
                } else {
                    debug!("Dropped a superseded response");
                }
                if !input_open && form.in_flight().is_none() {
                    break;
                }
            }
        }
    }

    if let Some(task) = in_flight {
        task.abort();
    }
    Ok(())
}
