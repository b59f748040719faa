//! Shared utilities and common types for the Anant Polymers backend
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - The `{ success, message }` response envelope used by every endpoint
//! - Form validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, CspConfig, Environment, LoggingConfig, MailConfig,
    MailProvider, OtpConfig, ServerConfig,
};
pub use types::FormResponse;
pub use utils::validation;
