use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::otp::VerifyOtpRequest;
use crate::handlers::error::{error_response, FormEndpoint};
use crate::routes::AppState;

use ap_core::repositories::OtpRepository;
use ap_core::services::contact::MailServiceTrait;
use ap_shared::types::FormResponse;

/// Handler for POST /api/verify-otp
///
/// # Request Body
///
/// ```json
/// { "otpId": "550e8400-e29b-41d4-a716-446655440000", "otp": "482913" }
/// ```
///
/// ## Errors
/// - 400 "OTP ID and OTP are required"
/// - 400 "Invalid or expired OTP" - unknown id
/// - 400 "OTP has expired" - the record is removed
/// - 400 "Invalid OTP" - wrong code; the record stays usable
pub async fn verify_otp<R, M>(
    state: web::Data<AppState<R, M>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    R: OtpRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let request = request.into_inner();

    if request.validate().is_err() {
        log::warn!("[verify-otp] Missing otpId or otp");
        return HttpResponse::BadRequest()
            .json(FormResponse::failure(FormEndpoint::VerifyOtp.missing_fields_message()));
    }

    let otp_id = request.otp_id.unwrap_or_default();
    let code = request.otp.unwrap_or_default();

    match state.contact_service.verify_otp(&otp_id, &code).await {
        Ok(()) => {
            log::info!("[verify-otp] OTP {} verified", otp_id);
            HttpResponse::Ok().json(FormResponse::success("OTP verified successfully"))
        }
        Err(error) => error_response(FormEndpoint::VerifyOtp, &error),
    }
}
