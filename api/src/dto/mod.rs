pub mod contact;
pub mod otp;

pub use contact::{SubmitContactRequest, SubmitEnquiryRequest};
pub use otp::{SendOtpRequest, VerifyOtpRequest};
