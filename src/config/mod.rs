//! Configuration loading
//!
//! Defaults < config file < command line. A missing config file is normal
//! (the page runs with defaults); a malformed one is an error.

mod types;

pub use types::{Config, PageConfig, ServerConfig};

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::AppError;

/// Default config file location: `<config_dir>/crowdless/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("crowdless").join("config.toml"))
}

/// Load the config file (if any) and apply CLI overrides.
pub fn load(cli: &Cli) -> Result<Config, AppError> {
    let path = cli.config.clone().or_else(default_config_path);

    let mut config = match path {
        Some(path) if path.exists() => read_file(&path)?,
        _ => Config::default(),
    };

    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
    }
    if let Some(restaurant_id) = cli.restaurant {
        config.page.restaurant_id = Some(restaurant_id);
    }
    if cli.no_suggestion {
        config.page.suggestion_panel = false;
    }

    Ok(config)
}

fn read_file(path: &Path) -> Result<Config, AppError> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|err| AppError::InvalidConfig {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli_from(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("crowdless").chain(args.iter().copied()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let cli = cli_from(&["--config", "/nonexistent/crowdless.toml"]);
        let config = load(&cli).unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert!(config.page.suggestion_panel);
    }

    #[test]
    fn test_file_values_are_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbase_url = \"http://10.0.0.2:5000\"").unwrap();

        let cli = cli_from(&["--config", file.path().to_str().unwrap()]);
        let config = load(&cli).unwrap();
        assert_eq!(config.server.base_url, "http://10.0.0.2:5000");
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbase_url = \"http://10.0.0.2:5000\"\n[page]\nrestaurant_id = 1"
        )
        .unwrap();

        let cli = cli_from(&[
            "--config",
            file.path().to_str().unwrap(),
            "--server",
            "http://10.0.0.9:5000",
            "--restaurant",
            "4",
            "--no-suggestion",
        ]);
        let config = load(&cli).unwrap();
        assert_eq!(config.server.base_url, "http://10.0.0.9:5000");
        assert_eq!(config.page.restaurant_id, Some(4));
        assert!(!config.page.suggestion_panel);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nbase_url = ").unwrap();

        let cli = cli_from(&["--config", file.path().to_str().unwrap()]);
        let result = load(&cli);
        assert!(matches!(result, Err(AppError::InvalidConfig { .. })));
    }
}
