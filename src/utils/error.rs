//! Error types for Playdeck
//!
//! This module defines custom error types used throughout the crate.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling in the demo driver.

use thiserror::Error;

/// Main error type for Playdeck
#[derive(Error, Debug)]
pub enum PlayerError {
    /// A required control element is absent from the hosting page
    #[error("Missing control element: {0}")]
    MissingControl(String),

    /// Source catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Media handle errors
    #[error("Media error: {0}")]
    Media(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for Results in Playdeck
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Extension trait for converting other errors to PlayerError
pub trait IntoPlayerError<T> {
    /// Convert this error into a PlayerError with the given context
    fn catalog_err(self, context: &str) -> Result<T>;
    fn media_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoPlayerError<T> for std::result::Result<T, E> {
    fn catalog_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Catalog(format!("{}: {}", context, e)))
    }

    fn media_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Media(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Config(format!("{}: {}", context, e)))
    }
}
