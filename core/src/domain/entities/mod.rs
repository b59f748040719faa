//! Domain entities representing core business objects.

pub mod otp_record;
pub mod submission;

// Re-export commonly used types
pub use otp_record::{OtpRecord, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
pub use submission::{ContactSubmission, EnquirySubmission};
