//! Business services containing domain logic and use cases.

pub mod contact;
pub mod notification;
pub mod otp;

// Re-export commonly used types
pub use contact::{ContactService, MailServiceTrait, NotificationConfig};
pub use otp::{IssuedOtp, OtpService, OtpServiceConfig, OtpSweepService, SweepResult};
