//! Security primitives for handling sensitive material
//!
//! Secrets are wiped by RAII: every container here zeroizes on drop, so early
//! returns and `?` propagation clean up the same way a normal exit does.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretVec};
