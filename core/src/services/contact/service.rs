//! Main contact form service implementation

use std::sync::Arc;

use uuid::Uuid;

use ap_shared::utils::validation::{all_present, is_present, is_valid_email, mask_email};

use crate::domain::entities::submission::{ContactSubmission, EnquirySubmission};
use crate::domain::value_objects::email_message::EmailMessage;
use crate::errors::{DomainError, DomainResult, OtpError};
use crate::repositories::OtpRepository;
use crate::services::notification::{contact_notification, enquiry_notification, otp_email};
use crate::services::otp::OtpService;

use super::config::NotificationConfig;
use super::traits::MailServiceTrait;

/// Contact form service combining the OTP lifecycle with mail delivery
pub struct ContactService<R: OtpRepository, M: MailServiceTrait> {
    /// OTP lifecycle service
    otp_service: Arc<OtpService<R>>,
    /// Mail transport
    mail_service: Arc<M>,
    /// Sender and recipient addresses
    config: NotificationConfig,
}

impl<R: OtpRepository, M: MailServiceTrait> ContactService<R, M> {
    /// Create a new contact service
    ///
    /// # Arguments
    ///
    /// * `otp_service` - OTP lifecycle service
    /// * `mail_service` - Mail transport implementation
    /// * `config` - Notification addresses
    pub fn new(
        otp_service: Arc<OtpService<R>>,
        mail_service: Arc<M>,
        config: NotificationConfig,
    ) -> Self {
        Self {
            otp_service,
            mail_service,
            config,
        }
    }

    /// Issue an OTP and email it to `email`
    ///
    /// If delivery fails the record stays in the store until it expires or
    /// is swept; the caller is not given its id.
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The id the client must present on later calls
    /// * `Err(DomainError::Validation)` - Missing or malformed address
    /// * `Err(DomainError::Delivery)` - The mail transport failed
    pub async fn issue_otp(&self, email: &str) -> DomainResult<Uuid> {
        if !is_present(Some(email)) {
            return Err(DomainError::Validation {
                message: "Email is required".to_string(),
            });
        }
        if !is_valid_email(email) {
            return Err(DomainError::Validation {
                message: "Please provide a valid email address".to_string(),
            });
        }

        let issued = self.otp_service.create(email).await?;
        let message = otp_email(
            &self.config,
            email,
            &issued.code,
            self.otp_service.config().expiration_minutes,
        );

        self.deliver(&message, "otp").await?;
        Ok(issued.id)
    }

    /// Check the code the visitor typed in
    pub async fn verify_otp(&self, otp_id: &str, code: &str) -> DomainResult<()> {
        if !all_present(&[Some(otp_id), Some(code)]) {
            return Err(DomainError::Validation {
                message: "OTP ID and OTP are required".to_string(),
            });
        }

        let id = parse_otp_id(otp_id)?;
        self.otp_service.verify(&id, code).await
    }

    /// Forward a contact submission once its OTP has been verified
    ///
    /// The record is deleted only after the notification has been accepted
    /// by the transport, so a failed delivery can be retried with the same
    /// `otp_id`. Two concurrent submissions for one id may both be delivered.
    pub async fn submit_contact(&self, otp_id: &str, form: ContactSubmission) -> DomainResult<()> {
        if !all_present(&[
            Some(otp_id),
            Some(form.name.as_str()),
            Some(form.email.as_str()),
            Some(form.subject.as_str()),
            Some(form.message.as_str()),
        ]) {
            return Err(DomainError::Validation {
                message: "All fields are required".to_string(),
            });
        }

        let id = parse_otp_id(otp_id)?;
        self.otp_service.ensure_consumable(&id).await?;

        let message = contact_notification(&self.config, &form);
        self.deliver(&message, "contact").await?;

        self.otp_service.discard(&id).await?;
        tracing::info!(
            otp_id = %id,
            sender = %mask_email(&form.email),
            event = "contact_submitted",
            "Contact form submitted"
        );
        Ok(())
    }

    /// Forward a product enquiry; no OTP is involved
    pub async fn submit_enquiry(&self, form: EnquirySubmission) -> DomainResult<()> {
        if !all_present(&[
            Some(form.name.as_str()),
            Some(form.email.as_str()),
            Some(form.phone.as_str()),
            Some(form.product.as_str()),
            Some(form.message.as_str()),
        ]) {
            return Err(DomainError::Validation {
                message: "All fields are required".to_string(),
            });
        }

        let message = enquiry_notification(&self.config, &form);
        self.deliver(&message, "enquiry").await?;

        tracing::info!(
            sender = %mask_email(&form.email),
            product = %form.product,
            event = "enquiry_submitted",
            "Enquiry submitted"
        );
        Ok(())
    }

    async fn deliver(&self, message: &EmailMessage, kind: &str) -> DomainResult<()> {
        match self.mail_service.send_mail(message).await {
            Ok(message_id) => {
                tracing::info!(
                    kind = kind,
                    recipient = %mask_email(&message.to),
                    message_id = %message_id,
                    provider = self.mail_service.provider_name(),
                    event = "mail_sent",
                    "Email delivered to transport"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    kind = kind,
                    recipient = %mask_email(&message.to),
                    provider = self.mail_service.provider_name(),
                    error = %e,
                    event = "mail_failed",
                    "Email delivery failed"
                );
                Err(DomainError::Delivery { message: e })
            }
        }
    }
}

/// An id that is not a UUID cannot name a live record
fn parse_otp_id(otp_id: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(otp_id).map_err(|_| DomainError::Otp(OtpError::NotFound))
}
