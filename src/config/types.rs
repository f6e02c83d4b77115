// Configuration type definitions

use serde::Deserialize;

/// Reservation service connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL the page fetches from and submits to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
        }
    }
}

/// Which optional page elements are rendered
///
/// The page tolerates either element being absent, the same way the web
/// page tolerated a missing container or form.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Whether the suggestion panel is part of the page
    #[serde(default = "default_true")]
    pub suggestion_panel: bool,

    /// Restaurant the booking form posts to; absent means no form
    #[serde(default)]
    pub restaurant_id: Option<u32>,
}

fn default_true() -> bool {
    true
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            suggestion_panel: true,
            restaurant_id: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub page: PageConfig,
}
