use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::contact::SubmitEnquiryRequest;
use crate::handlers::error::{error_response, FormEndpoint};
use crate::routes::AppState;

use ap_core::repositories::OtpRepository;
use ap_core::services::contact::MailServiceTrait;
use ap_shared::types::FormResponse;

/// Handler for POST /api/submit-enquiry
///
/// Product enquiries from the website popup. No OTP is involved.
pub async fn submit_enquiry<R, M>(
    state: web::Data<AppState<R, M>>,
    request: web::Json<SubmitEnquiryRequest>,
) -> HttpResponse
where
    R: OtpRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let request = request.into_inner();

    if request.validate().is_err() {
        log::warn!("[submit-enquiry] Missing fields");
        return HttpResponse::BadRequest()
            .json(FormResponse::failure(FormEndpoint::SubmitEnquiry.missing_fields_message()));
    }

    match state.contact_service.submit_enquiry(request.into()).await {
        Ok(()) => HttpResponse::Ok().json(FormResponse::success("Enquiry submitted successfully")),
        Err(error) => error_response(FormEndpoint::SubmitEnquiry, &error),
    }
}
