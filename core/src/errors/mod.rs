//! Domain-specific error types and error handling.

use thiserror::Error;

/// Ways an OTP lookup, verification, or consumption can be rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    /// No record with that id (never issued, consumed, swept, or expired earlier)
    #[error("OTP record not found")]
    NotFound,

    /// The record was found past its deadline and has been removed
    #[error("OTP has expired")]
    Expired,

    /// The supplied code differs from the issued one
    #[error("OTP code mismatch")]
    Mismatch,

    /// The record exists but was never verified
    #[error("OTP not verified")]
    NotVerified,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Mail delivery failed: {message}")]
    Delivery { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Otp(#[from] OtpError),
}

impl DomainError {
    /// The OTP rejection carried by this error, if any
    pub fn otp(&self) -> Option<OtpError> {
        match self {
            DomainError::Otp(err) => Some(*err),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
