//! In-memory OTP storage
//!
//! A `HashMap<Uuid, OtpRecord>` behind a `tokio::sync::RwLock`. Every trait
//! method takes the lock once, so each map mutation is atomic with respect
//! to the others. Nothing survives a restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use ap_core::domain::entities::otp_record::OtpRecord;
use ap_core::errors::DomainError;
use ap_core::repositories::OtpRepository;

/// Process-local OTP record store
#[derive(Clone, Default)]
pub struct InMemoryOtpRepository {
    records: Arc<RwLock<HashMap<Uuid, OtpRecord>>>,
}

impl InMemoryOtpRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepository {
    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.id) {
            return Err(DomainError::Internal {
                message: format!("OTP id collision: {}", record.id),
            });
        }

        records.insert(record.id, record.clone());
        debug!(otp_id = %record.id, size = records.len(), "OTP record stored");
        Ok(record)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<OtpRecord>, DomainError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn mark_verified(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        Ok(match records.get_mut(id) {
            Some(record) => {
                record.mark_verified();
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        Ok(self.records.write().await.remove(id).is_some())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        Ok(before - records.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}
