//! Public API traits and types for the pqlat library
//!
//! This crate provides the public API surface shared by every pqlat crate:
//! the error taxonomy, the validation helpers built on it, and the scheme
//! traits implemented by the NTRU and Ring-LWE constructions.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{Pke, Serialize, SerializeSecret, Signature};

// Re-export trait modules for direct access
pub use traits::{pke, serialize, signature};
