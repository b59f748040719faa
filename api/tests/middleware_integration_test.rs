//! Integration tests for CORS and Security middleware

use std::sync::Arc;

use actix_web::{http::header, test, web, App, HttpMessage, HttpRequest, HttpResponse};

use ap_api::middleware::cors::create_cors;
use ap_api::middleware::security::{CspNonce, SecurityMiddleware};
use ap_api::{create_app, AppState};
use ap_core::services::contact::{ContactService, NotificationConfig};
use ap_core::services::otp::{OtpService, OtpServiceConfig};
use ap_infra::cache::InMemoryOtpRepository;
use ap_infra::email::MockMailService;
use ap_shared::config::{AppConfig, CorsConfig, CspConfig, Environment};

async fn nonce_handler(req: HttpRequest) -> HttpResponse {
    let nonce = req
        .extensions()
        .get::<CspNonce>()
        .map(|n| n.as_str().to_string())
        .unwrap_or_default();
    HttpResponse::Ok().body(nonce)
}

async fn ok_handler() -> HttpResponse {
    HttpResponse::Ok().finish()
}

fn app_state() -> web::Data<AppState<InMemoryOtpRepository, MockMailService>> {
    let otp_service = Arc::new(OtpService::new(
        Arc::new(InMemoryOtpRepository::new()),
        OtpServiceConfig::default(),
    ));
    let contact_service = Arc::new(ContactService::new(
        otp_service,
        Arc::new(MockMailService::new()),
        NotificationConfig::default(),
    ));
    web::Data::new(AppState::new(contact_service))
}

fn csp_header<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::CONTENT_SECURITY_POLICY)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn test_nonce_is_exposed_to_handlers_and_header() {
    let app = test::init_service(
        App::new()
            .wrap(SecurityMiddleware::new(CspConfig::default(), Environment::Development))
            .route("/page", web::get().to(nonce_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/page").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let policy = csp_header(&resp);
    let body = test::read_body(resp).await;
    let nonce = std::str::from_utf8(&body).unwrap();

    assert!(!nonce.is_empty());
    assert!(policy.contains(&format!("'nonce-{}'", nonce)));
}

#[actix_web::test]
async fn test_each_response_gets_a_fresh_nonce() {
    let app = test::init_service(create_app(app_state(), &AppConfig::default())).await;

    let first = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let second = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    let first = csp_header(&first);
    let second = csp_header(&second);
    assert!(first.starts_with("default-src 'self'"));
    assert!(first.contains("'nonce-"));
    assert_ne!(first, second);
}

#[actix_web::test]
async fn test_security_headers_development() {
    let app = test::init_service(create_app(app_state(), &AppConfig::default())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key(header::CONTENT_SECURITY_POLICY));
    assert!(!resp.headers().contains_key(header::STRICT_TRANSPORT_SECURITY));
    assert!(!resp.headers().contains_key(header::X_FRAME_OPTIONS));
}

#[actix_web::test]
async fn test_security_headers_production() {
    let config = AppConfig {
        environment: Environment::Production,
        ..AppConfig::default()
    };
    let app = test::init_service(create_app(app_state(), &config)).await;

    // Error responses carry the headers too
    let req = test::TestRequest::get().uri("/missing").to_request();
    let resp = test::call_service(&app, req).await;
    let headers = resp.headers();

    assert_eq!(
        headers.get(header::STRICT_TRANSPORT_SECURITY).unwrap(),
        "max-age=31536000; includeSubDomains"
    );
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "SAMEORIGIN");
    assert_eq!(
        headers.get(header::REFERRER_POLICY).unwrap(),
        "strict-origin-when-cross-origin"
    );
    assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
}

#[actix_web::test]
async fn test_permissive_cors_allows_any_origin() {
    let app = test::init_service(create_app(app_state(), &AppConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://preview.anantpolymers.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[actix_web::test]
async fn test_restricted_cors_preflight() {
    let cors = create_cors(&CorsConfig {
        allowed_origins: vec!["https://anantpolymers.com".to_string()],
        ..CorsConfig::default()
    });
    let app = test::init_service(
        App::new()
            .wrap(cors)
            .route("/api/send-otp", web::post().to(ok_handler)),
    )
    .await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/send-otp")
        .insert_header((header::ORIGIN, "https://anantpolymers.com"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://anantpolymers.com"
    );
}
