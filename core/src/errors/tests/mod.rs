//! Unit tests for domain error types

use crate::errors::{DomainError, OtpError};

#[test]
fn test_otp_error_bridges_into_domain_error() {
    let error: DomainError = OtpError::Expired.into();
    assert_eq!(error.otp(), Some(OtpError::Expired));
    assert_eq!(error.to_string(), "OTP has expired");
}

#[test]
fn test_server_side_errors() {
    let delivery = DomainError::Delivery {
        message: "connection refused".to_string(),
    };
    assert!(delivery.otp().is_none());
    assert!(delivery.to_string().contains("connection refused"));

    let internal = DomainError::Internal {
        message: "lock poisoned".to_string(),
    };
    assert!(internal.otp().is_none());
}

#[test]
fn test_validation_message() {
    let error = DomainError::Validation {
        message: "Email is required".to_string(),
    };
    assert_eq!(error.to_string(), "Validation error: Email is required");
}
