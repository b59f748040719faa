//! OTP lifecycle configuration module

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError};

/// OTP lifetime and housekeeping settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes before an issued OTP expires
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,

    /// Seconds between sweeps of expired OTP records
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiration_minutes: default_expiration_minutes(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl OtpConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expiration_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "OTP_EXPIRATION_MINUTES".to_string(),
                value: self.expiration_minutes.to_string(),
            });
        }
        if self.sweep_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "OTP_SWEEP_INTERVAL_SECS".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            expiration_minutes: parse_or(
                lookup,
                "OTP_EXPIRATION_MINUTES",
                default_expiration_minutes(),
            )?,
            sweep_interval_seconds: parse_or(
                lookup,
                "OTP_SWEEP_INTERVAL_SECS",
                default_sweep_interval_seconds(),
            )?,
        })
    }
}

fn default_expiration_minutes() -> i64 {
    10
}

fn default_sweep_interval_seconds() -> u64 {
    5 * 60
}
