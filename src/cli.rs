//! Command-line arguments
//!
//! Everything here is an override; the config file provides defaults and
//! the page works with no arguments at all.

use std::path::PathBuf;

use clap::Parser;

/// Terminal booking page with a live least-crowded suggestion
#[derive(Debug, Parser)]
#[command(name = "crowdless", version, about)]
pub struct Cli {
    /// Base URL of the reservation service
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Restaurant to book a table at; without it the page has no booking form
    #[arg(long, value_name = "ID")]
    pub restaurant: Option<u32>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Render the page without the suggestion panel
    #[arg(long)]
    pub no_suggestion: bool,
}
