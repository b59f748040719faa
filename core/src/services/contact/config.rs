//! Configuration for outgoing notifications

use ap_shared::config::MailConfig;

/// Sender and recipient addresses used by the contact flows
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Sender of OTP emails
    pub otp_sender: String,
    /// Sender of contact and enquiry notifications
    pub notification_sender: String,
    /// Inbox that receives contact and enquiry notifications
    pub sales_recipient: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self::from(&MailConfig::default())
    }
}

impl From<&MailConfig> for NotificationConfig {
    fn from(config: &MailConfig) -> Self {
        Self {
            otp_sender: config.otp_sender.clone(),
            notification_sender: config.notification_sender.clone(),
            sales_recipient: config.sales_recipient.clone(),
        }
    }
}
