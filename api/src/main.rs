use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use ap_api::{create_app, AppState};
use ap_core::services::contact::{ContactService, MailServiceTrait, NotificationConfig};
use ap_core::services::otp::{OtpService, OtpServiceConfig, OtpSweepService};
use ap_infra::cache::InMemoryOtpRepository;
use ap_infra::email::create_mail_service;
use ap_shared::config::{AppConfig, MailProvider};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Reads `.env` before the process environment
    let config = AppConfig::from_env().context("failed to load configuration")?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting Anant Polymers API Server ({})", config.environment);

    if config.mail.provider == MailProvider::Smtp && !config.mail.has_credentials() {
        warn!("EMAIL_USER / EMAIL_PASS are not set; email delivery is unavailable");
    }
    config.validate().context("invalid configuration")?;

    let mail_service: Arc<Box<dyn MailServiceTrait>> = Arc::new(
        create_mail_service(&config.mail).context("failed to create mail service")?,
    );
    info!("Mail provider: {}", mail_service.provider_name());

    let otp_repository = Arc::new(InMemoryOtpRepository::new());
    let otp_service = Arc::new(OtpService::new(
        otp_repository,
        OtpServiceConfig::from(&config.otp),
    ));
    let contact_service = Arc::new(ContactService::new(
        Arc::clone(&otp_service),
        mail_service,
        NotificationConfig::from(&config.mail),
    ));

    Arc::new(OtpSweepService::new(otp_service)).start_background_task();

    let app_state = web::Data::new(AppState::new(contact_service));

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    info!("Server will bind to: {}", bind_address);

    let server_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &server_config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
