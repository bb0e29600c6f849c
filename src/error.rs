//! Crate-level error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::manifest::ManifestError;

/// Main error type for toolkit and widget operations
#[derive(Error, Debug)]
pub enum KitError {
    /// The native widget cannot be constructed in this build
    #[error("Not available in this build: {0}")]
    Unsupported(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Library manifest discovery failed
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Result type alias for toolkit operations
pub type KitResult<T> = Result<T, KitError>;
