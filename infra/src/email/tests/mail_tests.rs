//! Tests for the mail service implementations

use ap_core::domain::value_objects::email_message::EmailMessage;
use ap_core::services::contact::MailServiceTrait;
use ap_shared::config::{MailConfig, MailProvider};

use crate::email::{create_mail_service, MockMailService, SmtpMailConfig, SmtpMailService};
use crate::InfrastructureError;

fn otp_message(to: &str, code: &str) -> EmailMessage {
    EmailMessage::new(
        "admin@anantpolymers.com",
        to,
        "OTP Verification - Anant Polymers Contact Form",
        format!(
            "<h1 style=\"letter-spacing: 5px;\">{}</h1><p>valid for 10 minutes</p><p>Phone: +91 79902 46779</p>",
            code
        ),
    )
}

#[tokio::test]
async fn test_mock_records_messages() {
    let service = MockMailService::new();

    let id = service.send_mail(&otp_message("a@x.com", "482913")).await.unwrap();

    assert!(id.starts_with("mock-"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(service.last_otp_code("a@x.com"), Some("482913".to_string()));
    assert!(service.last_otp_code("b@x.com").is_none());
}

#[tokio::test]
async fn test_otp_code_ignores_other_digit_runs() {
    let service = MockMailService::new();
    let message = EmailMessage::new(
        "admin@anantpolymers.com",
        "a@x.com",
        "OTP Verification - Anant Polymers Contact Form",
        "<p>Ahmedabad 380015, ref 123456</p><h1 style=\"letter-spacing: 5px;\">482913</h1>",
    );

    service.send_mail(&message).await.unwrap();

    assert_eq!(service.last_otp_code("a@x.com"), Some("482913".to_string()));
}

#[tokio::test]
async fn test_mock_simulated_failure() {
    let service = MockMailService::new();
    service.set_simulate_failure(true);

    assert!(service.send_mail(&otp_message("a@x.com", "482913")).await.is_err());
    assert_eq!(service.get_message_count(), 0);
    assert!(service.sent_messages().is_empty());
}

#[tokio::test]
async fn test_mock_clones_share_state() {
    let service = MockMailService::new();
    let clone = service.clone();

    clone.send_mail(&otp_message("a@x.com", "111111")).await.unwrap();

    assert_eq!(service.get_message_count(), 1);
}

#[test]
fn test_smtp_config_requires_credentials() {
    let config = MailConfig::default();

    let result = SmtpMailConfig::try_from(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));

    let config = MailConfig {
        username: Some("forms@anantpolymers.com".to_string()),
        password: Some("app-password".to_string()),
        timeout_seconds: 5,
        ..Default::default()
    };
    let smtp = SmtpMailConfig::try_from(&config).unwrap();
    assert_eq!(smtp.host, "smtp.gmail.com");
    assert_eq!(smtp.port, 465);
    assert_eq!(smtp.timeout.as_secs(), 5);
}

#[test]
fn test_smtp_message_carries_message_id() {
    let email = SmtpMailService::build_message(&otp_message("a@x.com", "482913")).unwrap();

    let message_id = email.headers().get_raw("Message-ID").unwrap();
    assert!(message_id.starts_with('<'));
    assert!(message_id.ends_with('>'));
}

#[test]
fn test_smtp_message_rejects_bad_recipient() {
    let result = SmtpMailService::build_message(&otp_message("not an address", "482913"));
    assert!(result.unwrap_err().contains("Invalid recipient address"));
}

#[test]
fn test_create_mail_service_selects_provider() {
    let mock = MailConfig {
        provider: MailProvider::Mock,
        ..Default::default()
    };
    assert_eq!(create_mail_service(&mock).unwrap().provider_name(), "mock");

    assert!(create_mail_service(&MailConfig::default()).is_err());
}

#[tokio::test]
async fn test_create_smtp_service_without_connecting() {
    let config = MailConfig {
        username: Some("forms@anantpolymers.com".to_string()),
        password: Some("app-password".to_string()),
        ..Default::default()
    };

    let service = create_mail_service(&config).unwrap();
    assert_eq!(service.provider_name(), "smtp");
}
