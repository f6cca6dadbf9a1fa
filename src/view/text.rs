// src/view/text.rs
// =============================================================================
// Plain-text rendering of a form's panel for the terminal.
//
// Collapsed sections print their header only. Headers are numbered from 1,
// which is what the interactive `:toggle N` command expects.
// =============================================================================

use std::fmt::Write;

use super::accordion::{Block, Section, TableRow, Tone};
use super::state::ViewState;

pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Idle => "Enter a URL to check.\n".to_string(),
        ViewState::Loading { url } => format!("⏳ Checking {}...\n", url),
        ViewState::Error { message, .. } => format!("❌ Error: {}\n", message),
        ViewState::Result(panel) => {
            let mut out = format!("🔍 Results for {}\n\n", panel.url);
            for (i, section) in panel.accordion.sections().iter().enumerate() {
                render_section(&mut out, i + 1, section);
            }
            out
        }
    }
}

fn render_section(out: &mut String, number: usize, section: &Section) {
    let marker = if section.expanded { "▼" } else { "▶" };
    // Writing into a String cannot fail
    let _ = writeln!(out, "{} [{}] {}", marker, number, section.title);

    if section.expanded {
        for block in &section.blocks {
            render_block(out, block);
        }
    }
    out.push('\n');
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Status { text, tone } => {
            let icon = match tone {
                Tone::Danger => "🚨",
                Tone::Safe => "✅",
            };
            let _ = writeln!(out, "    {} {}", icon, text);
        }
        Block::Field { label, value } => {
            let _ = writeln!(out, "    {}: {}", label, value);
        }
        Block::List { label, items, empty } => {
            let _ = writeln!(out, "    {}:", label);
            if items.is_empty() {
                let _ = writeln!(out, "      {}", empty);
            }
            for item in items {
                let _ = writeln!(out, "      - {}", item);
            }
        }
        Block::Table { headers, rows } => render_table(out, headers, rows),
    }
}

fn render_table(out: &mut String, headers: &[String], rows: &[TableRow]) {
    // Column width = longest cell in that column, header included
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let _ = writeln!(out, "      {}", line(headers));
    let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    let _ = writeln!(out, "      {}", "-".repeat(total));

    for row in rows {
        let flag = match row.highlight {
            Some(Tone::Danger) => "! ",
            _ => "  ",
        };
        let _ = writeln!(out, "    {}{}", flag, line(&row.cells).trim_end());
    }
}
