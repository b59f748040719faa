//! Email Service Module
//!
//! Mail transport implementations behind `ap_core`'s `MailServiceTrait`.
//!
//! ## Features
//!
//! - **SMTP**: delivery through a lettre async relay with a bounded timeout
//! - **Mock Implementation**: log output and message capture for development
//!   and tests

pub mod mock_mail;
pub mod smtp;

pub use mock_mail::MockMailService;
pub use smtp::{SmtpMailConfig, SmtpMailService};

use ap_core::services::contact::MailServiceTrait;
use ap_shared::config::{MailConfig, MailProvider};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create a mail service based on configuration
///
/// # Arguments
///
/// * `config` - Mail configuration containing provider settings
///
/// # Returns
///
/// A boxed mail service implementation, or a configuration error when SMTP
/// is selected without usable credentials
pub fn create_mail_service(
    config: &MailConfig,
) -> Result<Box<dyn MailServiceTrait>, InfrastructureError> {
    match config.provider {
        MailProvider::Mock => {
            tracing::warn!("Using mock mail service - emails will be logged, not sent");
            Ok(Box::new(MockMailService::new()))
        }
        MailProvider::Smtp => {
            let smtp_config = SmtpMailConfig::try_from(config)?;
            Ok(Box::new(SmtpMailService::new(smtp_config)?))
        }
    }
}
