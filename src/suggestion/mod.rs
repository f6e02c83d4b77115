//! Suggestion panel
//!
//! Single-shot fetch of the least-crowded restaurant, rendered as one of
//! three fixed fragments. The fetch fires once when the page loads and the
//! panel settles at most once.

mod fetch;
mod render;
mod state;
mod types;

pub use fetch::{FetchOutcome, spawn_fetch};
pub use render::render_suggestion;
pub use state::{PanelPhase, SuggestionPanel};
pub use types::{SuggestionResult, decode_suggestion};
