// src/view/accordion.rs
// =============================================================================
// Collapsible result sections.
//
// An Accordion is plain data: a list of sections, each open or closed. A new
// result builds a brand new Accordion, so nothing from the previous render
// survives (no stale handlers to re-wire). Activating a header flips exactly
// that section and leaves the others alone.
//
// Rust concepts:
// - Enums with data: Block holds different kinds of section content
// - &mut self: Methods that change the accordion in place
// =============================================================================

use serde::Serialize;

/// Placeholder for any missing or blank value
pub const NOT_AVAILABLE: &str = "N/A";

/// Colour hint for status lines and table rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Safe,
    Danger,
}

impl Tone {
    pub fn from_flag(flagged: bool) -> Self {
        if flagged {
            Tone::Danger
        } else {
            Tone::Safe
        }
    }
}

/// One piece of content inside a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Headline verdict, e.g. "Clickbait Detected"
    Status { text: String, tone: Tone },
    /// "Label: value"
    Field { label: String, value: String },
    /// Bullet list; `empty` is shown instead when there are no items
    List {
        label: String,
        items: Vec<String>,
        empty: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<TableRow>,
    },
}

impl Block {
    pub fn status(text: impl Into<String>, flagged: bool) -> Self {
        Block::Status {
            text: text.into(),
            tone: Tone::from_flag(flagged),
        }
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Block::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn list(label: impl Into<String>, items: Vec<String>, empty: impl Into<String>) -> Self {
        Block::List {
            label: label.into(),
            items,
            empty: empty.into(),
        }
    }

    pub fn table(headers: &[&str], rows: Vec<TableRow>) -> Self {
        Block::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Set when the row should stand out (e.g. probability above 50%)
    pub highlight: Option<Tone>,
}

/// Keys a focused accordion header reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Click,
    Enter,
    Space,
    Other,
}

impl Activation {
    /// Maps a key name ("Enter", "Space", " ", ...) to an activation
    pub fn from_key(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Activation::Enter,
            "space" | " " => Activation::Space,
            "click" => Activation::Click,
            _ => Activation::Other,
        }
    }

    fn toggles(self) -> bool {
        matches!(self, Activation::Click | Activation::Enter | Activation::Space)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Stable identifier, e.g. "clickbait-status"
    pub id: String,
    pub title: String,
    /// Mirrors the header's `aria-expanded` attribute
    pub expanded: bool,
    pub blocks: Vec<Block>,
}

impl Section {
    /// Sections start open, matching a freshly rendered result
    pub fn new(id: impl Into<String>, title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            expanded: true,
            blocks,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Accordion {
    sections: Vec<Section>,
}

impl Accordion {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Handles an activation on header `index`.
    ///
    /// Returns the section's new expanded state, or `None` when the index
    /// is out of range or the key does not toggle.
    pub fn activate(&mut self, index: usize, key: Activation) -> Option<bool> {
        if !key.toggles() {
            return None;
        }
        let section = self.sections.get_mut(index)?;
        section.expanded = !section.expanded;
        Some(section.expanded)
    }
}

/// Returns the text, or "N/A" when it is missing or blank.
pub fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a 0..1 ratio as a percentage with `decimals` places, or "N/A".
pub fn percent(ratio: Option<f64>, decimals: usize) -> String {
    match ratio {
        Some(r) if r.is_finite() => format!("{:.*}%", decimals, r * 100.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}
