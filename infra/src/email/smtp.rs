//! SMTP-based email sender for production

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, info};

use ap_core::domain::value_objects::email_message::EmailMessage;
use ap_core::services::contact::MailServiceTrait;
use ap_shared::config::MailConfig;

use crate::InfrastructureError;

/// Port that expects STARTTLS instead of implicit TLS
const STARTTLS_PORT: u16 = 587;

/// Connection settings for the SMTP relay
#[derive(Debug, Clone)]
pub struct SmtpMailConfig {
    /// SMTP server host (e.g., "smtp.gmail.com")
    pub host: String,
    /// SMTP server port (465 for TLS, 587 for STARTTLS)
    pub port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password (or app password)
    pub password: String,
    /// Upper bound for one SMTP exchange
    pub timeout: Duration,
}

impl TryFrom<&MailConfig> for SmtpMailConfig {
    type Error = InfrastructureError;

    fn try_from(config: &MailConfig) -> Result<Self, Self::Error> {
        let username = config
            .username
            .clone()
            .ok_or_else(|| InfrastructureError::Config("EMAIL_USER is not set".to_string()))?;
        let password = config
            .password
            .clone()
            .ok_or_else(|| InfrastructureError::Config("EMAIL_PASS is not set".to_string()))?;

        Ok(Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            username,
            password,
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }
}

/// SMTP email sender
///
/// The transport is built once at startup and pooled; building does not
/// contact the server.
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    timeout: Duration,
}

impl SmtpMailService {
    /// Create a new SMTP email sender
    pub fn new(config: SmtpMailConfig) -> Result<Self, InfrastructureError> {
        let creds = Credentials::new(config.username, config.password);

        let builder = if config.port == STARTTLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        }
        .map_err(|e| InfrastructureError::Mail(format!("Failed to create SMTP transport: {}", e)))?;

        let transport = builder
            .port(config.port)
            .credentials(creds)
            .timeout(Some(config.timeout))
            .build();

        info!(host = %config.host, port = config.port, "SMTP transport configured");

        Ok(Self {
            transport,
            timeout: config.timeout,
        })
    }

    pub(crate) fn build_message(message: &EmailMessage) -> Result<Message, String> {
        Message::builder()
            .from(
                message
                    .from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {}", e))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|e| format!("Invalid recipient address: {}", e))?)
            .subject(&message.subject)
            .message_id(None)
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())
            .map_err(|e| format!("Failed to build email: {}", e))
    }
}

#[async_trait]
impl MailServiceTrait for SmtpMailService {
    async fn send_mail(&self, message: &EmailMessage) -> Result<String, String> {
        let email = Self::build_message(message)?;
        let message_id = email
            .headers()
            .get_raw("Message-ID")
            .unwrap_or_default()
            .to_string();

        // The transport timeout covers each command; this bounds the whole exchange
        let response = tokio::time::timeout(self.timeout * 2, self.transport.send(email))
            .await
            .map_err(|_| format!("SMTP send timed out after {:?}", self.timeout * 2))?
            .map_err(|e| format!("SMTP send failed: {}", e))?;

        debug!(
            message_id = %message_id,
            code = %response.code(),
            reply = %response.message().collect::<Vec<&str>>().join(" "),
            "SMTP server accepted message"
        );
        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "smtp"
    }
}
