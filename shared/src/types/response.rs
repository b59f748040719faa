//! API response types

use serde::{Deserialize, Serialize};

/// Response envelope used by every form endpoint
///
/// The website front-end reads `success`, `message`, and, after requesting an
/// OTP, `otpId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Identifier of a freshly issued OTP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp_id: Option<String>,
}

impl FormResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            otp_id: None,
        }
    }

    /// Create a failure response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            otp_id: None,
        }
    }

    /// Attach the OTP identifier the client must hold for later calls
    pub fn with_otp_id(mut self, otp_id: impl Into<String>) -> Self {
        self.otp_id = Some(otp_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_otp_id_serializes_camel_case() {
        let response = FormResponse::success("OTP sent successfully").with_otp_id("abc");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "OTP sent successfully",
                "otpId": "abc"
            })
        );
    }

    #[test]
    fn test_failure_omits_otp_id() {
        let json = serde_json::to_value(FormResponse::failure("Invalid OTP")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("otpId").is_none());
    }
}
