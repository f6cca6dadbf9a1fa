// src/output.rs
// =============================================================================
// Prints a form's panel either as text or as the service's raw JSON.
//
// Panels go to stdout; errors always go to stderr so `--json` output stays
// machine-readable.
// =============================================================================

use anyhow::Result;
use serde_json::json;

use crate::view::{render_state, ViewState};

pub fn print_state(state: &ViewState, json: bool) -> Result<()> {
    if json {
        print_json(state)
    } else {
        match state {
            ViewState::Error { .. } => eprint!("{}", render_state(state)),
            _ => print!("{}", render_state(state)),
        }
        Ok(())
    }
}

fn print_json(state: &ViewState) -> Result<()> {
    match state {
        ViewState::Result(panel) => {
            println!("{}", serde_json::to_string_pretty(&panel.raw)?);
        }
        ViewState::Error { url, message } => {
            let error = json!({ "url": url, "error": message });
            eprintln!("{}", serde_json::to_string_pretty(&error)?);
        }
        // Nothing to report yet
        ViewState::Idle | ViewState::Loading { .. } => {}
    }
    Ok(())
}
