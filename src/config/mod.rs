//! Configuration module for Price-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All sections are optional, so an empty file yields the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use price_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("price-scout.toml")).unwrap();
//! println!("Verifier timeout: {}s", config.verifier.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_retailers, Config, PricingConfig, RetailerEntry, ServerConfig, VerifierConfig,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
