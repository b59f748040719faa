//! Mock Mail Service Implementation
//!
//! Logs emails instead of sending them. Used for local development
//! (`MAIL_PROVIDER=mock`) and by the API integration tests, which read the
//! captured messages back to learn the issued codes.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use ap_core::domain::value_objects::email_message::EmailMessage;
use ap_core::services::contact::MailServiceTrait;

/// Mock mail service for development and testing
///
/// This implementation:
/// - Logs each email (including its body) at info level
/// - Keeps every accepted message for inspection
/// - Generates mock message IDs
/// - Can be switched into a failing mode
#[derive(Clone, Default)]
pub struct MockMailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Messages accepted so far
    messages: Arc<Mutex<Vec<EmailMessage>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
}

impl MockMailService {
    /// Create a new mock mail service
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Every message accepted so far, oldest first
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Most recent message addressed to `to`
    pub fn last_message_to(&self, to: &str) -> Option<EmailMessage> {
        self.sent_messages().into_iter().rev().find(|m| m.to == to)
    }

    /// Extract the 6-digit code from the latest OTP email sent to `to`
    pub fn last_otp_code(&self, to: &str) -> Option<String> {
        let message = self.last_message_to(to)?;
        extract_code(&message.html)
    }
}

/// A 6-digit code standing alone as an element's text, as the OTP email renders it
static OTP_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(\d{6})<").expect("OTP code pattern is valid"));

fn extract_code(html: &str) -> Option<String> {
    OTP_CODE_REGEX
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_mail(&self, message: &EmailMessage) -> Result<String, String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(to = %message.to, "Mock mail service: simulated failure");
            return Err("Simulated mail failure".to_string());
        }

        let message_id = format!("mock-{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            message_id = %message_id,
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            count,
            "Mock email"
        );
        info!("Mock email body:\n{}", message.html);

        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.clone());
        }

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
