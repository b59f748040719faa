//! Contact form service module
//!
//! Request-level flows behind the website forms: issuing and checking an
//! email OTP, the OTP-gated contact form, and the ungated product enquiry.

mod config;
mod service;
mod traits;


pub use config::NotificationConfig;
pub use service::ContactService;
pub use traits::MailServiceTrait;
