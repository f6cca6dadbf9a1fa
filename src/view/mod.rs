// src/view/mod.rs
// =============================================================================
// Forms, their panels, and how each response shape is rendered.
//
// Submodules:
// - accordion: Collapsible sections and the blocks inside them
// - controller: The idle -> loading -> result | error state machine
// - render: One render routine per response shape (shared by all forms)
// - state: The ViewState enum a form exposes
// - text: Turns a ViewState into terminal output
// =============================================================================

mod accordion;
mod controller;
mod render;
mod state;
mod text;

pub use accordion::Activation;
pub use controller::{FormController, Outcome, SubmitToken};
pub use render::CheckResponse;
pub use state::ViewState;
pub use text::render_state;
