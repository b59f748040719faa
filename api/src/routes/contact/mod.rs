//! Contact and enquiry route handlers

pub mod submit_contact;
pub mod submit_enquiry;

pub use submit_contact::submit_contact;
pub use submit_enquiry::submit_enquiry;
