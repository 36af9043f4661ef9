//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{PortalError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_backend_config(&settings.backend)?;
    validate_pricing_config(&settings.pricing)?;
    validate_admin_config(&settings.admin)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend configuration
fn validate_backend_config(config: &super::BackendConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(PortalError::Config(
            "Backend URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PortalError::Config(
            format!("Backend URL must use http or https, got {}", parsed.scheme())
        ));
    }

    if config.anon_key.is_empty() {
        return Err(PortalError::Config(
            "Backend anon key is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(PortalError::Config(
            "Backend timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate pricing configuration
fn validate_pricing_config(config: &super::PricingConfig) -> Result<()> {
    if config.currency_prefix.trim().is_empty() {
        return Err(PortalError::Config(
            "Currency prefix is required".to_string()
        ));
    }

    Ok(())
}

/// Validate back office configuration
fn validate_admin_config(config: &super::AdminConfig) -> Result<()> {
    if config.page_size == 0 {
        return Err(PortalError::Config(
            "Page size must be greater than 0".to_string()
        ));
    }

    if config.login_max_attempts == 0 {
        return Err(PortalError::Config(
            "Login attempts must be greater than 0".to_string()
        ));
    }

    if config.login_window_seconds == 0 {
        return Err(PortalError::Config(
            "Login window must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PortalError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PortalError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_path.is_empty() {
        return Err(PortalError::Config(
            "Log file path is required".to_string()
        ));
    }

    Ok(())
}
