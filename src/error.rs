use thiserror::Error;

/// Custom error types for crowdless
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
