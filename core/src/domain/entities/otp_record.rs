//! OTP record entity for email-based contact form verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the OTP code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for OTP records (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Smallest code that can be issued (codes never start with 0)
const CODE_MIN: u32 = 100_000;

/// One past the largest code that can be issued
const CODE_MAX_EXCLUSIVE: u32 = 1_000_000;

/// One pending verification attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Opaque identifier the client presents on later calls
    pub id: Uuid,

    /// The 6-digit code delivered by email
    pub code: String,

    /// Email address the code was sent to
    pub destination: String,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// The record is invalid strictly after this instant
    pub expires_at: DateTime<Utc>,

    /// Set once by a successful verification, never cleared
    pub verified: bool,
}

impl OtpRecord {
    /// Creates a new unverified record issued at `now`
    ///
    /// # Arguments
    ///
    /// * `destination` - The email address the code will be sent to
    /// * `now` - Issue time
    /// * `expiration_minutes` - Number of minutes until the record expires
    pub fn issued_at(destination: String, now: DateTime<Utc>, expiration_minutes: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: Self::generate_code(),
            destination,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            verified: false,
        }
    }

    /// Generates a 6-digit code uniformly over 100000..=999999 from the OS CSPRNG
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(CODE_MIN..CODE_MAX_EXCLUSIVE);
        code.to_string()
    }

    /// Checks if the record has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Exact, constant-time comparison against the issued code
    ///
    /// No trimming or normalization is applied to `candidate`.
    pub fn matches_code(&self, candidate: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Marks the record as verified
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_record() -> OtpRecord {
        OtpRecord::issued_at("a@x.com".to_string(), Utc::now(), DEFAULT_EXPIRATION_MINUTES)
    }

    #[test]
    fn test_new_record() {
        let record = fresh_record();

        assert_eq!(record.destination, "a@x.com");
        assert_eq!(record.code.len(), CODE_LENGTH);
        assert!(!record.verified);
        assert!(!record.is_expired_at(record.created_at));
        assert_eq!(
            record.expires_at - record.created_at,
            Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
        );
    }

    #[test]
    fn test_generate_code_range() {
        for _ in 0..1000 {
            let code = OtpRecord::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("Generated code should be a valid number");
            assert!((CODE_MIN..CODE_MAX_EXCLUSIVE).contains(&num));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<Uuid> = (0..100)
            .map(|_| fresh_record().id)
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_expiry_is_strictly_after_deadline() {
        let now = Utc::now();
        let record = OtpRecord::issued_at("a@x.com".to_string(), now, 10);

        assert!(!record.is_expired_at(record.expires_at));
        assert!(record.is_expired_at(record.expires_at + Duration::milliseconds(1)));
    }

    #[test]
    fn test_mark_verified_keeps_deadline() {
        let now = Utc::now();
        let mut record = OtpRecord::issued_at("a@x.com".to_string(), now, 10);
        let deadline = record.expires_at;

        record.mark_verified();

        assert!(record.verified);
        assert_eq!(record.expires_at, deadline);
        assert!(record.is_expired_at(now + Duration::minutes(11)));
    }

    #[test]
    fn test_matches_code_is_exact() {
        let mut record = fresh_record();
        record.code = "123456".to_string();

        assert!(record.matches_code("123456"));
        assert!(!record.matches_code("654321"));
        assert!(!record.matches_code(" 123456"));
        assert!(!record.matches_code("12345"));
        assert!(!record.matches_code(""));
    }
}
