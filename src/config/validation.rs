use crate::config::types::{Config, PricingConfig, RetailerEntry, VerifierConfig};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_verifier_config(&config.verifier)?;
    validate_pricing_config(&config.pricing)?;
    validate_retailers(&config.retailers)?;
    Ok(())
}

/// Validates verifier configuration
fn validate_verifier_config(config: &VerifierConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.max_redirects > 50 {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= 50, got {}",
            config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates pricing configuration
fn validate_pricing_config(config: &PricingConfig) -> Result<(), ConfigError> {
    for (field, value) in [
        ("base_price", config.base_price),
        ("step_up", config.step_up),
        ("step_down", config.step_down),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Validation(format!(
                "{} must be a finite, non-negative number, got {}",
                field, value
            )));
        }
    }

    if config.currency.trim().is_empty() {
        return Err(ConfigError::Validation(
            "currency cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the retailer list
fn validate_retailers(retailers: &[RetailerEntry]) -> Result<(), ConfigError> {
    if retailers.is_empty() {
        return Err(ConfigError::Validation(
            "at least one retailer must be configured".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in retailers {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "retailer name cannot be empty".to_string(),
            ));
        }

        if !seen.insert(entry.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate retailer name '{}'",
                entry.name
            )));
        }

        let url = Url::parse(&entry.base_url).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid base URL '{}': {}", entry.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Base URL '{}' must use http or https",
                entry.base_url
            )));
        }
    }

    Ok(())
}
