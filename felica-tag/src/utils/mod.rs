//! Utilities for felica-tag: small, reusable helpers used across the crate.
//!
//! Currently hex formatting for logging and display, and hex parsing for
//! fixtures.

pub mod hex;

// Re-export the helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
