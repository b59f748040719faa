//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `mail` - SMTP transport credentials and notification addresses
//! - `otp` - OTP lifetime and sweep interval
//! - `server` - HTTP server, CORS, and Content-Security-Policy configuration
//!
//! Every section is loaded through a lookup function so that tests can feed
//! variables without touching the process environment.

pub mod environment;
pub mod mail;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use environment::{Environment, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use otp::OtpConfig;
pub use server::{CorsConfig, CspConfig, ServerConfig};

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Missing required setting: {key}")]
    Missing { key: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Content-Security-Policy configuration
    #[serde(default)]
    pub csp: CspConfig,

    /// Mail transport configuration
    pub mail: MailConfig,

    /// OTP lifecycle configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            csp: CspConfig::default(),
            mail: MailConfig::default(),
            otp: OtpConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "ENVIRONMENT".to_string(),
                value,
            })?,
            None => Environment::Development,
        };

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            cors: CorsConfig::from_lookup(&lookup)?,
            csp: CspConfig::from_lookup(&lookup),
            mail: MailConfig::from_lookup(&lookup)?,
            otp: OtpConfig::from_lookup(&lookup)?,
            logging: LoggingConfig::from_lookup(&lookup, environment),
        })
    }

    /// Check that the configuration can actually run the service
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mail.validate()?;
        self.otp.validate()
    }
}

/// Read a variable, treating empty strings as unset
pub(crate) fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Read and parse a variable, falling back to `default` when unset
pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match non_empty(lookup, key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        None => Ok(default),
    }
}
