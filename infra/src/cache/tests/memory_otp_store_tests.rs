//! Tests for the in-memory OTP store

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use ap_core::domain::entities::otp_record::OtpRecord;
use ap_core::errors::DomainError;
use ap_core::repositories::OtpRepository;

use crate::cache::InMemoryOtpRepository;

fn fresh_record() -> OtpRecord {
    OtpRecord::issued_at("a@x.com".to_string(), Utc::now(), 10)
}

#[tokio::test]
async fn test_create_find_delete() {
    let store = InMemoryOtpRepository::new();
    let record = fresh_record();

    store.create(record.clone()).await.unwrap();
    assert_eq!(store.find_by_id(&record.id).await.unwrap(), Some(record.clone()));
    assert_eq!(store.count().await.unwrap(), 1);

    assert!(store.delete(&record.id).await.unwrap());
    assert!(!store.delete(&record.id).await.unwrap());
    assert!(store.find_by_id(&record.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_id_rejected() {
    let store = InMemoryOtpRepository::new();
    let record = fresh_record();

    store.create(record.clone()).await.unwrap();
    let result = store.create(record).await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_mark_verified_never_recreates() {
    let store = InMemoryOtpRepository::new();
    let record = fresh_record();
    store.create(record.clone()).await.unwrap();

    assert!(store.mark_verified(&record.id).await.unwrap());
    assert!(store.find_by_id(&record.id).await.unwrap().unwrap().verified);

    store.delete(&record.id).await.unwrap();
    assert!(!store.mark_verified(&record.id).await.unwrap());
    assert_eq!(store.count().await.unwrap(), 0);
    assert!(!store.mark_verified(&Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_delete_expired() {
    let store = InMemoryOtpRepository::new();
    let now = Utc::now();
    let stale = OtpRecord::issued_at("a@x.com".to_string(), now - Duration::minutes(11), 10);
    let boundary = OtpRecord::issued_at("b@x.com".to_string(), now - Duration::minutes(10), 10);
    let fresh = OtpRecord::issued_at("c@x.com".to_string(), now, 10);
    for record in [stale.clone(), boundary.clone(), fresh.clone()] {
        store.create(record).await.unwrap();
    }

    assert_eq!(store.delete_expired(now).await.unwrap(), 1);
    assert!(store.find_by_id(&stale.id).await.unwrap().is_none());
    assert!(store.find_by_id(&boundary.id).await.unwrap().is_some());
    assert!(store.find_by_id(&fresh.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_concurrent_deletes_have_one_winner() {
    let store = Arc::new(InMemoryOtpRepository::new());
    let record = fresh_record();
    store.create(record.clone()).await.unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let id = record.id;
            tokio::spawn(async move { store.delete(&id).await.unwrap() })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}

#[tokio::test]
async fn test_clones_share_storage() {
    let store = InMemoryOtpRepository::new();
    let clone = store.clone();
    let record = fresh_record();

    store.create(record.clone()).await.unwrap();
    assert!(clone.find_by_id(&record.id).await.unwrap().is_some());
}
