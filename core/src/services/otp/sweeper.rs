//! Background sweep of expired OTP records
//!
//! Expired records are already rejected and removed on access; the sweep
//! only keeps abandoned records from accumulating in memory.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::errors::DomainError;
use crate::repositories::OtpRepository;

use super::service::OtpService;

/// Service for periodically removing expired OTP records
pub struct OtpSweepService<R: OtpRepository + 'static> {
    otp_service: Arc<OtpService<R>>,
}

impl<R: OtpRepository + 'static> OtpSweepService<R> {
    /// Create a new sweep service
    pub fn new(otp_service: Arc<OtpService<R>>) -> Self {
        Self { otp_service }
    }

    /// Run a single sweep cycle
    ///
    /// # Returns
    /// * `Ok(SweepResult)` - Summary of the sweep
    /// * `Err(DomainError)` - If the store could not be swept
    pub async fn run_sweep(&self) -> Result<SweepResult, DomainError> {
        if !self.otp_service.config().sweep_enabled {
            return Ok(SweepResult::default());
        }

        let removed = self.otp_service.sweep().await?;
        let remaining = self.otp_service.pending_count().await?;

        if removed > 0 {
            info!(
                removed,
                remaining,
                event = "otp_sweep",
                "Removed expired OTP records"
            );
        } else {
            debug!(remaining, event = "otp_sweep", "No expired OTP records");
        }

        Ok(SweepResult { removed, remaining })
    }

    /// Start the sweep as a background task
    ///
    /// This spawns a tokio task that sweeps at the configured interval. The
    /// first tick fires immediately.
    pub fn start_background_task(self: Arc<Self>) {
        let config = self.otp_service.config();
        if !config.sweep_enabled {
            warn!("OTP sweep service is disabled");
            return;
        }

        let interval_seconds = config.sweep_interval_seconds;
        let interval = std::time::Duration::from_secs(interval_seconds);

        tokio::spawn(async move {
            info!(
                "OTP sweep service started - will run every {} seconds",
                interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_sweep().await {
                    error!("OTP sweep cycle failed: {}", e);
                }
            }
        });
    }
}

/// Result of a sweep cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Number of expired records removed
    pub removed: usize,
    /// Number of records left in the store
    pub remaining: usize,
}
