use serde::{Deserialize, Serialize};
use validator::Validate;

use ap_core::domain::entities::submission::{ContactSubmission, EnquirySubmission};

/// Body of `POST /api/submit-contact`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactRequest {
    #[validate(required, length(min = 1))]
    pub otp_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl SubmitContactRequest {
    /// Split into the OTP id and the submission, with absent fields as empty
    pub fn into_parts(self) -> (String, ContactSubmission) {
        (
            self.otp_id.unwrap_or_default(),
            ContactSubmission {
                name: self.name.unwrap_or_default(),
                email: self.email.unwrap_or_default(),
                subject: self.subject.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
            },
        )
    }
}

/// Body of `POST /api/submit-enquiry`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEnquiryRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
    #[validate(required, length(min = 1))]
    pub product: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl From<SubmitEnquiryRequest> for EnquirySubmission {
    fn from(request: SubmitEnquiryRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            product: request.product.unwrap_or_default(),
            message: request.message.unwrap_or_default(),
        }
    }
}
