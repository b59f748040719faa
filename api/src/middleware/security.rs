//! Security middleware for Content-Security-Policy and hardening headers.
//!
//! Every request gets a fresh nonce (16 random bytes, base64) that is stored
//! in the request extensions as [`CspNonce`] and embedded in the
//! `Content-Security-Policy` response header, so inline scripts rendered with
//! that nonce are allowed while any other inline script is blocked.
//!
//! In production the usual hardening headers are added as well:
//! - Strict Transport Security (HSTS)
//! - MIME sniffing and clickjacking protection
//! - Referrer policy

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
    Error, HttpMessage,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures_util::future::LocalBoxFuture;
use rand::{rngs::OsRng, RngCore};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use ap_shared::config::{CspConfig, Environment};

/// Number of random bytes in a CSP nonce
const NONCE_BYTES: usize = 16;

/// The nonce generated for the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Generate a fresh nonce from the OS CSPRNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(STANDARD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Security middleware factory
pub struct SecurityMiddleware {
    /// Source lists for the CSP directives
    csp: Rc<CspConfig>,
    /// Whether to add the production hardening headers
    add_security_headers: bool,
}

impl SecurityMiddleware {
    /// Creates a security middleware for the given environment
    pub fn new(csp: CspConfig, environment: Environment) -> Self {
        let add_security_headers = environment.is_production();

        log::info!(
            "Security middleware configured: environment={}, add_headers={}",
            environment,
            add_security_headers
        );

        Self {
            csp: Rc::new(csp),
            add_security_headers,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            csp: Rc::clone(&self.csp),
            add_security_headers: self.add_security_headers,
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    csp: Rc<CspConfig>,
    add_security_headers: bool,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let csp = Rc::clone(&self.csp);
        let add_security_headers = self.add_security_headers;

        Box::pin(async move {
            let nonce = CspNonce::generate();
            let policy = build_content_security_policy(&csp, nonce.as_str());
            req.extensions_mut().insert(nonce);

            let mut response = service.call(req).await?;

            match HeaderValue::from_str(&policy) {
                Ok(value) => {
                    response
                        .headers_mut()
                        .insert(header::CONTENT_SECURITY_POLICY, value);
                }
                Err(e) => log::error!("Invalid Content-Security-Policy value: {}", e),
            }

            if add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

/// Render the policy for one response
pub fn build_content_security_policy(csp: &CspConfig, nonce: &str) -> String {
    fn directive(name: &str, fixed: &[&str], extra: &[String]) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(1 + fixed.len() + extra.len());
        parts.push(name);
        parts.extend_from_slice(fixed);
        parts.extend(extra.iter().map(String::as_str));
        parts.join(" ")
    }

    let nonce_source = format!("'nonce-{}'", nonce);

    [
        "default-src 'self'".to_string(),
        directive("script-src", &["'self'", nonce_source.as_str()], &csp.script_sources),
        directive("style-src", &["'self'", "'unsafe-inline'"], &csp.style_sources),
        directive("font-src", &["'self'"], &csp.font_sources),
        "img-src 'self' data: https:".to_string(),
        directive("connect-src", &["'self'"], &csp.connect_sources),
        "base-uri 'self'".to_string(),
        "form-action 'self'".to_string(),
        "frame-ancestors 'self'".to_string(),
        "object-src 'none'".to_string(),
        "script-src-attr 'none'".to_string(),
        "upgrade-insecure-requests".to_string(),
    ]
    .join("; ")
}

/// Adds hardening headers to the response
fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    // Enforce HTTPS for 1 year, including subdomains
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    );

    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
}
