//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Anant Polymers
//! website backend. It provides concrete implementations of the ports that
//! `ap_core` defines.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: the in-process OTP record store
//! - **Email**: SMTP delivery through lettre and a logging mock for development

// Re-export core types for convenience
pub use ap_core::errors::*;

/// Cache module - in-memory OTP storage
pub mod cache;

/// Email module - mail transport implementations
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport error
    #[error("Mail service error: {0}")]
    Mail(String),
}
