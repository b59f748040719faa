//! Route handlers for the website form endpoints
//!
//! - `otp` - issuing and verifying email OTPs
//! - `contact` - the OTP-gated contact form and the product enquiry form

pub mod contact;
pub mod otp;

use std::sync::Arc;

use ap_core::repositories::OtpRepository;
use ap_core::services::contact::{ContactService, MailServiceTrait};

/// Application state that holds shared services
pub struct AppState<R, M>
where
    R: OtpRepository,
    M: MailServiceTrait,
{
    pub contact_service: Arc<ContactService<R, M>>,
}

impl<R, M> AppState<R, M>
where
    R: OtpRepository,
    M: MailServiceTrait,
{
    pub fn new(contact_service: Arc<ContactService<R, M>>) -> Self {
        Self { contact_service }
    }
}
