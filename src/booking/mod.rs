//! Booking form
//!
//! An ordered list of form controls, focus handling, and the reservation
//! submission the confirmation guard protects.

mod events;
mod render;
mod state;
mod submit;

pub use events::{FormReaction, handle_form_key};
pub use render::render_form;
pub use state::{Control, FormState, InputControl, SelectControl};
pub use submit::{SubmitOutcome, spawn_submit};
