//! Email notifications sent by the contact form flows

mod templates;

pub use templates::{enquiry_notification, escape_html, otp_email, contact_notification};
