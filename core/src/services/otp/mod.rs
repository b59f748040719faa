//! OTP lifecycle module
//!
//! This module owns every state transition of an [`OtpRecord`]:
//! - issuing a record with a fresh code and id
//! - verifying a submitted code before the deadline
//! - consuming a verified record exactly once
//! - sweeping expired records on a background interval
//!
//! [`OtpRecord`]: crate::domain::entities::otp_record::OtpRecord

mod config;
mod service;
mod sweeper;


pub use config::OtpServiceConfig;
pub use service::{IssuedOtp, OtpService};
pub use sweeper::{OtpSweepService, SweepResult};
