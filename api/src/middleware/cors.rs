//! CORS middleware configuration for cross-origin requests.
//!
//! The website is served from a different origin than this API, so browsers
//! need CORS headers on every form submission. With no `ALLOWED_ORIGINS`
//! configured the policy is permissive (any origin); otherwise only the
//! listed origins are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ap_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (unset = any origin)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.is_permissive() {
        create_permissive_cors(config.max_age)
    } else {
        create_restricted_cors(config)
    }
}

/// Any origin, method and requested header is accepted. Credentials are not
/// allowed.
fn create_permissive_cors(max_age: usize) -> Cors {
    log::info!("Configuring permissive CORS (any origin)");

    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(max_age)
}

/// Only the configured origins may call the form endpoints.
fn create_restricted_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for {} allowed origin(s)", config.allowed_origins.len());

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
