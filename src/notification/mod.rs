//! Notification module for crowdless
//!
//! Transient flash messages in the page footer, mirroring the service's
//! web alert categories. The booking outcome is the main producer.

mod render;
mod state;

pub use render::render_notification;
pub use state::{FlashLevel, NotificationState};
