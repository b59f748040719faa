//! Value objects representing immutable domain concepts.

pub mod email_message;

// Re-export commonly used types
pub use email_message::EmailMessage;
