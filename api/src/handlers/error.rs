//! Mapping of domain errors onto the form endpoints' HTTP responses
//!
//! Every endpoint answers with a [`FormResponse`]. Client-side problems map
//! to 400 with a message specific to the endpoint; transport failures map
//! to 500 with the endpoint's delivery message; anything else is logged in
//! full and reported as "Internal server error".

use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};

use ap_core::errors::{DomainError, OtpError};
use ap_shared::types::FormResponse;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// The form endpoint a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEndpoint {
    SendOtp,
    VerifyOtp,
    SubmitContact,
    SubmitEnquiry,
}

impl FormEndpoint {
    /// Route name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            FormEndpoint::SendOtp => "send-otp",
            FormEndpoint::VerifyOtp => "verify-otp",
            FormEndpoint::SubmitContact => "submit-contact",
            FormEndpoint::SubmitEnquiry => "submit-enquiry",
        }
    }

    /// The 400 message used when required fields are missing
    pub fn missing_fields_message(&self) -> &'static str {
        match self {
            FormEndpoint::SendOtp => "Email is required",
            FormEndpoint::VerifyOtp => "OTP ID and OTP are required",
            FormEndpoint::SubmitContact | FormEndpoint::SubmitEnquiry => "All fields are required",
        }
    }

    fn delivery_failure_message(&self) -> &'static str {
        match self {
            FormEndpoint::SendOtp => "Failed to send OTP email",
            FormEndpoint::SubmitContact => "Failed to submit contact form",
            FormEndpoint::SubmitEnquiry => "Failed to submit enquiry",
            FormEndpoint::VerifyOtp => INTERNAL_SERVER_ERROR,
        }
    }

    fn otp_rejection_message(&self, error: OtpError) -> Option<&'static str> {
        match (self, error) {
            (FormEndpoint::VerifyOtp, OtpError::Expired)
            | (FormEndpoint::SubmitContact, OtpError::Expired) => Some("OTP has expired"),
            (FormEndpoint::VerifyOtp, OtpError::Mismatch) => Some("Invalid OTP"),
            (FormEndpoint::VerifyOtp, _) => Some("Invalid or expired OTP"),
            (FormEndpoint::SubmitContact, _) => Some("OTP not verified"),
            _ => None,
        }
    }
}

/// Build the failure response for `error` on `endpoint`
pub fn error_response(endpoint: FormEndpoint, error: &DomainError) -> HttpResponse {
    if let Some(otp_error) = error.otp() {
        return match endpoint.otp_rejection_message(otp_error) {
            Some(message) => {
                log::warn!("[{}] OTP rejected: {}", endpoint.name(), otp_error);
                HttpResponse::BadRequest().json(FormResponse::failure(message))
            }
            None => internal_error(endpoint, error),
        };
    }

    match error {
        DomainError::Validation { message } => {
            log::warn!("[{}] Rejected request: {}", endpoint.name(), message);
            HttpResponse::BadRequest().json(FormResponse::failure(message.as_str()))
        }
        DomainError::Delivery { message } => {
            log::error!("[{}] Mail delivery failed: {}", endpoint.name(), message);
            HttpResponse::InternalServerError()
                .json(FormResponse::failure(endpoint.delivery_failure_message()))
        }
        DomainError::Otp(_) | DomainError::Internal { .. } => internal_error(endpoint, error),
    }
}

fn internal_error(endpoint: FormEndpoint, error: &DomainError) -> HttpResponse {
    log::error!("[{}] Internal error: {:?}", endpoint.name(), error);
    HttpResponse::InternalServerError().json(FormResponse::failure(INTERNAL_SERVER_ERROR))
}

/// Error handler for `web::JsonConfig` so malformed bodies get the form envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Malformed JSON body on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(FormResponse::failure(INVALID_REQUEST_BODY));
    actix_web::error::InternalError::from_response(err, response).into()
}
