use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::otp::SendOtpRequest;
use crate::handlers::error::{error_response, FormEndpoint};
use crate::routes::AppState;

use ap_core::repositories::OtpRepository;
use ap_core::services::contact::MailServiceTrait;
use ap_shared::types::FormResponse;
use ap_shared::utils::validation::mask_email;

/// Handler for POST /api/send-otp
///
/// Issues a 6-digit code, emails it, and returns the id the client must send
/// back with the code.
///
/// # Request Body
///
/// ```json
/// { "email": "visitor@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "OTP sent successfully",
///     "otpId": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// ## Errors
/// - 400 "Email is required" / "Please provide a valid email address"
/// - 500 "Failed to send OTP email"
/// - 500 "Internal server error"
pub async fn send_otp<R, M>(
    state: web::Data<AppState<R, M>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    R: OtpRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let request = request.into_inner();

    if request.validate().is_err() {
        log::warn!("[send-otp] Missing email");
        return HttpResponse::BadRequest()
            .json(FormResponse::failure(FormEndpoint::SendOtp.missing_fields_message()));
    }

    let email = request.email.unwrap_or_default();
    log::info!("[send-otp] OTP requested for {}", mask_email(&email));

    match state.contact_service.issue_otp(&email).await {
        Ok(otp_id) => HttpResponse::Ok()
            .json(FormResponse::success("OTP sent successfully").with_otp_id(otp_id.to_string())),
        Err(error) => error_response(FormEndpoint::SendOtp, &error),
    }
}
