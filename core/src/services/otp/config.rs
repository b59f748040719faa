//! Configuration for the OTP service

use ap_shared::config::OtpConfig;

use crate::domain::entities::otp_record::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the OTP service and its sweeper
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before an issued OTP expires
    pub expiration_minutes: i64,
    /// How often to sweep expired records (in seconds)
    pub sweep_interval_seconds: u64,
    /// Whether to run the background sweep
    pub sweep_enabled: bool,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            sweep_interval_seconds: 300, // Every 5 minutes
            sweep_enabled: true,
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            expiration_minutes: config.expiration_minutes,
            sweep_interval_seconds: config.sweep_interval_seconds,
            sweep_enabled: true,
        }
    }
}
