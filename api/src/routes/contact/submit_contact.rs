use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::contact::SubmitContactRequest;
use crate::handlers::error::{error_response, FormEndpoint};
use crate::routes::AppState;

use ap_core::repositories::OtpRepository;
use ap_core::services::contact::MailServiceTrait;
use ap_shared::types::FormResponse;

/// Handler for POST /api/submit-contact
///
/// Requires an `otpId` that has been verified. The OTP is retired only
/// after the notification email has been handed to the mail transport, so a
/// 500 response can be retried with the same `otpId`.
///
/// # Request Body
///
/// ```json
/// {
///     "otpId": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "Visitor",
///     "email": "visitor@example.com",
///     "subject": "Pricing",
///     "message": "Hello"
/// }
/// ```
///
/// ## Errors
/// - 400 "All fields are required"
/// - 400 "OTP not verified"
/// - 400 "OTP has expired"
/// - 500 "Failed to submit contact form"
pub async fn submit_contact<R, M>(
    state: web::Data<AppState<R, M>>,
    request: web::Json<SubmitContactRequest>,
) -> HttpResponse
where
    R: OtpRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let request = request.into_inner();

    if request.validate().is_err() {
        log::warn!("[submit-contact] Missing fields");
        return HttpResponse::BadRequest()
            .json(FormResponse::failure(FormEndpoint::SubmitContact.missing_fields_message()));
    }

    let (otp_id, form) = request.into_parts();

    match state.contact_service.submit_contact(&otp_id, form).await {
        Ok(()) => HttpResponse::Ok().json(FormResponse::success("Contact form submitted successfully")),
        Err(error) => error_response(FormEndpoint::SubmitContact, &error),
    }
}
