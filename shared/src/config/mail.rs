//! Mail transport configuration module

use serde::{Deserialize, Serialize};

use super::{non_empty, parse_or, ConfigError};

/// Which mail transport backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Real delivery over SMTP
    Smtp,
    /// Log messages instead of sending them (development)
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smtp" | "gmail" => Ok(MailProvider::Smtp),
            "mock" | "console" => Ok(MailProvider::Mock),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Transport provider
    pub provider: MailProvider,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP port (465 for implicit TLS)
    pub smtp_port: u16,

    /// SMTP username (`EMAIL_USER`)
    #[serde(default)]
    pub username: Option<String>,

    /// SMTP password or app password (`EMAIL_PASS`)
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// Upper bound for a single SMTP exchange, in seconds
    pub timeout_seconds: u64,

    /// Sender address for OTP emails
    pub otp_sender: String,

    /// Sender address for contact and enquiry notifications
    pub notification_sender: String,

    /// Inbox that receives contact and enquiry notifications
    pub sales_recipient: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Smtp,
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 465,
            username: None,
            password: None,
            timeout_seconds: 10,
            otp_sender: String::from("admin@anantpolymers.com"),
            notification_sender: String::from("noreply@anantpolymers.com"),
            sales_recipient: String::from("sales@anantpolymers.com"),
        }
    }
}

impl MailConfig {
    /// Whether both SMTP credentials are present
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// SMTP delivery cannot work without credentials
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider != MailProvider::Smtp {
            return Ok(());
        }
        if self.username.is_none() {
            return Err(ConfigError::Missing {
                key: "EMAIL_USER".to_string(),
            });
        }
        if self.password.is_none() {
            return Err(ConfigError::Missing {
                key: "EMAIL_PASS".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let provider = match non_empty(lookup, "MAIL_PROVIDER") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MAIL_PROVIDER".to_string(),
                value,
            })?,
            None => defaults.provider,
        };

        Ok(Self {
            provider,
            smtp_host: non_empty(lookup, "SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: parse_or(lookup, "SMTP_PORT", defaults.smtp_port)?,
            username: non_empty(lookup, "EMAIL_USER"),
            password: non_empty(lookup, "EMAIL_PASS"),
            timeout_seconds: parse_or(lookup, "SMTP_TIMEOUT_SECS", defaults.timeout_seconds)?,
            otp_sender: non_empty(lookup, "OTP_SENDER").unwrap_or(defaults.otp_sender),
            notification_sender: non_empty(lookup, "NOTIFICATION_SENDER")
                .unwrap_or(defaults.notification_sender),
            sales_recipient: non_empty(lookup, "SALES_RECIPIENT")
                .unwrap_or(defaults.sales_recipient),
        })
    }
}
