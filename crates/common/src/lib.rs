//! Common implementations and shared functionality for the pqlat library
//!
//! This crate provides the zeroizing containers used for seeds, padded
//! plaintext buffers and intermediate polynomials, and the small word-sized
//! modular arithmetic helpers shared by the resultant and NTT code.

pub mod math_common;
pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretVec};
