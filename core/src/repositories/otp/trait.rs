//! OTP repository trait defining the interface for short-lived OTP storage.
//!
//! Records live for minutes, so implementations are expected to be in-memory.
//! Each method is a single atomic step on the underlying map; multi-step
//! lifecycle decisions belong to `OtpService`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::DomainError;

/// Repository trait for OTP record storage
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use chrono::{DateTime, Utc};
/// use uuid::Uuid;
/// use ap_core::repositories::OtpRepository;
/// use ap_core::domain::entities::otp_record::OtpRecord;
/// use ap_core::errors::DomainError;
///
/// struct NullOtpRepository;
///
/// #[async_trait]
/// impl OtpRepository for NullOtpRepository {
///     async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
///         Ok(record)
///     }
///     async fn find_by_id(&self, _id: &Uuid) -> Result<Option<OtpRecord>, DomainError> {
///         Ok(None)
///     }
///     async fn mark_verified(&self, _id: &Uuid) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///     async fn delete(&self, _id: &Uuid) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///     async fn delete_expired(&self, _now: DateTime<Utc>) -> Result<usize, DomainError> {
///         Ok(0)
///     }
///     async fn count(&self) -> Result<usize, DomainError> {
///         Ok(0)
///     }
/// }
/// ```
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Store a freshly issued record
    ///
    /// # Returns
    /// * `Ok(OtpRecord)` - The stored record
    /// * `Err(DomainError::Internal)` - A record with the same id already exists
    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError>;

    /// Find a record by id, regardless of expiry
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<OtpRecord>, DomainError>;

    /// Set `verified = true` on an existing record
    ///
    /// Returns `false` when the record is gone; a deleted record is never
    /// recreated by this call.
    async fn mark_verified(&self, id: &Uuid) -> Result<bool, DomainError>;

    /// Remove a record, returning whether it was present
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;

    /// Remove every record whose deadline is strictly before `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records removed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Number of records currently held
    async fn count(&self) -> Result<usize, DomainError>;
}
