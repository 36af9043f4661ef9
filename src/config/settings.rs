//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub backend: BackendConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

/// Hosted backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key sent with every request
    pub anon_key: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_application_name")]
    pub application_name: String,
}

/// Pricing display configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    pub currency_prefix: String,
}

/// Back office configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Rows per page in dashboard tables
    pub page_size: usize,
    pub login_max_attempts: u32,
    pub login_window_seconds: u64,
    /// Role required in the signed-in user's metadata, if any
    pub required_role: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub newsletter: bool,
    pub registration_open: bool,
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_application_name() -> String {
    "training-portal".to_string()
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Environment variables use the `PORTAL` prefix and `__` as the section
    /// separator, e.g. `PORTAL__BACKEND__ANON_KEY`.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_sources(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit file, still honoring environment overrides
    pub fn from_file(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        Self::from_sources(config::File::from(path))
    }

    fn from_sources(file: config::File<config::FileSourceFile, config::FileFormat>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("PORTAL").prefix_separator("__").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PortalError> {
        super::validation::validate_settings(self)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency_prefix: "R$".to_string(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            login_max_attempts: 5,
            login_window_seconds: 300,
            required_role: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: "logs/training-portal.log".to_string(),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            newsletter: true,
            registration_open: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                url: "http://localhost:54321".to_string(),
                anon_key: String::new(),
                timeout_seconds: default_timeout_seconds(),
                application_name: default_application_name(),
            },
            pricing: PricingConfig::default(),
            admin: AdminConfig::default(),
            logging: LoggingConfig::default(),
            features: FeaturesConfig::default(),
        }
    }
}
