//! # crowdless
//!
//! Terminal booking page for a restaurant reservation service. When the
//! page loads it fires a single background fetch of the least-crowded
//! suggestion and renders one of three styled fragments, puts focus on the
//! first booking-form control, and guards the reservation submit behind a
//! modal confirmation dialog.

pub mod app;
pub mod booking;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod notification;
pub mod suggestion;
pub mod widgets;
