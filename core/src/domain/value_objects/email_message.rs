//! Outbound email value object

use serde::{Deserialize, Serialize};

/// A fully rendered HTML email ready for a mail transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Sender address
    pub from: String,

    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// HTML body
    pub html: String,
}

impl EmailMessage {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }
}
