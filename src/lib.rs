//! Price-Scout: a price comparison backend with link verification
//!
//! This crate builds simulated retailer listings for a product query, checks
//! that each retailer is reachable over HTTP, and picks the cheapest verified
//! listing. The request shell in [`server`] exposes it as a small JSON API.

pub mod catalog;
pub mod config;
pub mod server;
pub mod verifier;

use thiserror::Error;

/// Main error type for Price-Scout startup and serving
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Price-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{best_deal, Catalog, Listing, Price, RetailerDescriptor};
pub use config::Config;
pub use verifier::{LinkVerifier, VerificationResult, Verify};
