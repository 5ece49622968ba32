//! Utilities for libultralight: small, reusable helpers used across the crate.
//!
//! Currently only hex formatting for frame traces and test fixtures.

/// Hex formatting and parsing.
pub mod hex;

pub use hex::*;
