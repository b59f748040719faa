//! Main OTP service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use ap_shared::utils::validation::mask_email;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::{DomainError, DomainResult, OtpError};
use crate::repositories::OtpRepository;

use super::config::OtpServiceConfig;

/// The outcome of issuing an OTP: the id handed to the client and the code
/// that goes into the email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedOtp {
    pub id: Uuid,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// OTP lifecycle service backed by an [`OtpRepository`]
///
/// Every public operation has an `*_at` twin that takes the current instant
/// explicitly; the plain versions call it with `Utc::now()`.
pub struct OtpService<R: OtpRepository> {
    repository: Arc<R>,
    config: OtpServiceConfig,
}

impl<R: OtpRepository> OtpService<R> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `repository` - Storage for OTP records
    /// * `config` - Service configuration
    pub fn new(repository: Arc<R>, config: OtpServiceConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a new OTP for `destination`
    pub async fn create(&self, destination: &str) -> DomainResult<IssuedOtp> {
        self.create_at(destination, Utc::now()).await
    }

    /// Issue a new OTP for `destination` as of `now`
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedOtp)` - The new id and code
    /// * `Err(DomainError::Internal)` - The store rejected the record (e.g. id collision)
    pub async fn create_at(&self, destination: &str, now: DateTime<Utc>) -> DomainResult<IssuedOtp> {
        let record = OtpRecord::issued_at(
            destination.to_string(),
            now,
            self.config.expiration_minutes,
        );
        let record = self.repository.create(record).await?;

        tracing::info!(
            otp_id = %record.id,
            destination = %mask_email(&record.destination),
            expires_at = %record.expires_at,
            event = "otp_issued",
            "OTP record created"
        );

        Ok(IssuedOtp {
            id: record.id,
            code: record.code,
            expires_at: record.expires_at,
        })
    }

    /// Fetch a record without any expiry handling
    pub async fn lookup(&self, id: &Uuid) -> DomainResult<OtpRecord> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::Otp(OtpError::NotFound))
    }

    /// Check a submitted code
    pub async fn verify(&self, id: &Uuid, code: &str) -> DomainResult<()> {
        self.verify_at(id, code, Utc::now()).await
    }

    /// Check a submitted code as of `now`
    ///
    /// A correct code marks the record verified; repeating a correct verify
    /// succeeds again. A wrong code changes nothing. An expired record is
    /// deleted and reported as [`OtpError::Expired`].
    pub async fn verify_at(&self, id: &Uuid, code: &str, now: DateTime<Utc>) -> DomainResult<()> {
        let record = self.lookup(id).await?;

        if record.is_expired_at(now) {
            self.expire(&record).await?;
            return Err(OtpError::Expired.into());
        }

        if !record.matches_code(code) {
            tracing::warn!(
                otp_id = %id,
                event = "otp_mismatch",
                "OTP verification failed: code mismatch"
            );
            return Err(OtpError::Mismatch.into());
        }

        // Deleted between lookup and update: treat as gone
        if !self.repository.mark_verified(id).await? {
            return Err(OtpError::NotFound.into());
        }

        tracing::info!(otp_id = %id, event = "otp_verified", "OTP verified");
        Ok(())
    }

    /// Remove and return a verified record
    pub async fn consume(&self, id: &Uuid) -> DomainResult<OtpRecord> {
        self.consume_at(id, Utc::now()).await
    }

    /// Remove and return a verified record as of `now`
    ///
    /// Exactly one caller can consume a given record; any later caller sees
    /// [`OtpError::NotFound`]. An unverified record is left in place.
    pub async fn consume_at(&self, id: &Uuid, now: DateTime<Utc>) -> DomainResult<OtpRecord> {
        let record = self.ensure_consumable_at(id, now).await?;

        if !self.repository.delete(id).await? {
            return Err(OtpError::NotFound.into());
        }

        tracing::info!(otp_id = %id, event = "otp_consumed", "OTP consumed");
        Ok(record)
    }

    /// Run the consumption checks without removing the record
    pub async fn ensure_consumable(&self, id: &Uuid) -> DomainResult<OtpRecord> {
        self.ensure_consumable_at(id, Utc::now()).await
    }

    /// Run the consumption checks as of `now` without removing the record
    ///
    /// The verified flag is checked first, so an unverified record is never
    /// deleted here even past its deadline (the sweep removes it). An
    /// expired verified record is deleted.
    pub async fn ensure_consumable_at(
        &self,
        id: &Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<OtpRecord> {
        let record = self.lookup(id).await?;

        if !record.verified {
            return Err(OtpError::NotVerified.into());
        }

        if record.is_expired_at(now) {
            self.expire(&record).await?;
            return Err(OtpError::Expired.into());
        }

        Ok(record)
    }

    /// Delete a record once the flow that needed it has finished
    ///
    /// Returns whether the record was still present.
    pub async fn discard(&self, id: &Uuid) -> DomainResult<bool> {
        let removed = self.repository.delete(id).await?;
        tracing::debug!(otp_id = %id, removed, event = "otp_discarded", "OTP discarded");
        Ok(removed)
    }

    /// Remove every expired record
    pub async fn sweep(&self) -> DomainResult<usize> {
        self.sweep_at(Utc::now()).await
    }

    /// Remove every record expired as of `now`
    pub async fn sweep_at(&self, now: DateTime<Utc>) -> DomainResult<usize> {
        self.repository.delete_expired(now).await
    }

    /// Number of records currently held
    pub async fn pending_count(&self) -> DomainResult<usize> {
        self.repository.count().await
    }

    async fn expire(&self, record: &OtpRecord) -> DomainResult<()> {
        self.repository.delete(&record.id).await?;
        tracing::info!(
            otp_id = %record.id,
            expired_at = %record.expires_at,
            event = "otp_expired",
            "Expired OTP removed on access"
        );
        Ok(())
    }
}
