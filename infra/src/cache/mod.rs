//! Cache module for short-lived OTP records
//!
//! Records only need to survive for minutes and are never shared between
//! instances, so they are kept in process memory.

pub mod memory_otp_store;

#[cfg(test)]
mod tests;

pub use memory_otp_store::InMemoryOtpRepository;
