//! # Anant Polymers Core
//!
//! Core business logic and domain layer for the website backend.
//! This crate contains the OTP record entity, the OTP lifecycle and contact
//! form services, repository and mailer interfaces, and the error types that
//! the API layer maps onto HTTP responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{ContactSubmission, EnquirySubmission, OtpRecord};
pub use domain::value_objects::EmailMessage;
pub use errors::{DomainError, DomainResult, OtpError};
pub use repositories::OtpRepository;
pub use services::{
    ContactService, IssuedOtp, MailServiceTrait, NotificationConfig, OtpService, OtpServiceConfig,
    OtpSweepService, SweepResult,
};
