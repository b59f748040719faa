//! Application factory
//!
//! Assembles the middleware stack and the form routes around a shared
//! [`AppState`]. Used by `main` and by the integration tests.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::handlers::error::json_error_handler;
use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::contact::{submit_contact, submit_enquiry};
use crate::routes::otp::{send_otp, verify_otp};
use crate::routes::AppState;

use ap_core::repositories::OtpRepository;
use ap_core::services::contact::MailServiceTrait;
use ap_shared::config::AppConfig;
use ap_shared::types::FormResponse;

/// Create and configure the application with all dependencies
pub fn create_app<R, M>(
    app_state: web::Data<AppState<R, M>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: OtpRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let cors = create_cors(&config.cors);
    let security = SecurityMiddleware::new(config.csp.clone(), config.environment);

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Registration order is inverse to execution: security runs first
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/send-otp", web::post().to(send_otp::<R, M>))
                .route("/verify-otp", web::post().to(verify_otp::<R, M>))
                .route("/submit-contact", web::post().to(submit_contact::<R, M>))
                .route("/submit-enquiry", web::post().to(submit_enquiry::<R, M>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "anant-polymers-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(FormResponse::failure("Not found"))
}
