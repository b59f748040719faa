//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// Mock OTP repository for testing
pub struct MockOtpRepository {
    records: Arc<RwLock<HashMap<Uuid, OtpRecord>>>,
    should_fail: AtomicBool,
    delete_calls: AtomicUsize,
}

impl MockOtpRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            should_fail: AtomicBool::new(false),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent call fail with an internal error
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Number of `delete` calls observed, whether or not anything was removed
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Insert a record directly, bypassing the duplicate check
    pub async fn insert(&self, record: OtpRecord) {
        self.records.write().await.insert(record.id, record);
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Mock OTP store failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockOtpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        self.check_failure()?;
        let mut records = self.records.write().await;

        if records.contains_key(&record.id) {
            return Err(DomainError::Internal {
                message: format!("Duplicate OTP id {}", record.id),
            });
        }

        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<OtpRecord>, DomainError> {
        self.check_failure()?;
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn mark_verified(&self, id: &Uuid) -> Result<bool, DomainError> {
        self.check_failure()?;
        let mut records = self.records.write().await;
        match records.get_mut(id) {
            Some(record) => {
                record.mark_verified();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        self.check_failure()?;
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.write().await.remove(id).is_some())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        self.check_failure()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        Ok(before - records.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.check_failure()?;
        Ok(self.records.read().await.len())
    }
}
