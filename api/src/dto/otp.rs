use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/send-otp`
///
/// Fields are optional at the serde level so that a missing field produces
/// the form's own message rather than a body parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    /// Address the code is sent to
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

/// Body of `POST /api/verify-otp`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    /// Identifier returned by send-otp
    #[validate(required, length(min = 1))]
    pub otp_id: Option<String>,

    /// The code from the email, compared exactly as sent
    #[validate(required, length(min = 1))]
    pub otp: Option<String>,
}
