//! Trait for mail transport integration

use async_trait::async_trait;

use crate::domain::value_objects::email_message::EmailMessage;

/// Trait for mail transport integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Deliver a rendered email, returning a transport message id
    ///
    /// Implementations bound their own duration; a stalled transport is
    /// reported as an `Err`.
    async fn send_mail(&self, message: &EmailMessage) -> Result<String, String>;

    /// Name of the transport, for logs
    fn provider_name(&self) -> &str;
}

#[async_trait]
impl MailServiceTrait for Box<dyn MailServiceTrait> {
    async fn send_mail(&self, message: &EmailMessage) -> Result<String, String> {
        (**self).send_mail(message).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}
