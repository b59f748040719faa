//! Form submissions received from the website

use serde::{Deserialize, Serialize};

/// A contact form submission, only accepted behind a verified OTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A product enquiry, accepted without OTP verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquirySubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub product: String,
    pub message: String,
}
