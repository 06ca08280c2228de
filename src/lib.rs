//! # pqlat
//!
//! Lattice-based public key cryptography: NTRUEncrypt (IEEE P1363.1) and
//! Ring-LWE encryption and signatures, plus Winternitz one-time signatures.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqlat = "0.3"
//! ```
//!
//! ## Features
//!
//! - `ntru` (default): NTRUEncrypt
//! - `rlwe` (default): Ring-LWE encryption and signatures
//! - `gmss` (default): Winternitz one-time signatures
//! - `parallel` (default): two-task NTRU key generation on rayon
//! - `serde`: serialization of parameter objects
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqlat-params`]: parameter set catalog
//! - [`pqlat-algorithms`]: polynomial engine, seed expansion, digests and random engines
//! - [`pqlat-pke`]: the encryption and signature schemes

// Core re-exports (always available)
pub use pqlat_api as api;
pub use pqlat_common as common;
pub use pqlat_internal as internal;
pub use pqlat_params as params;

// Feature-gated re-exports
#[cfg(any(feature = "ntru", feature = "rlwe", feature = "gmss"))]
pub use pqlat_algorithms as algorithms;

#[cfg(any(feature = "ntru", feature = "rlwe", feature = "gmss"))]
pub use pqlat_pke as pke;

/// Common imports for pqlat users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, Serialize, SerializeSecret, Signature};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretVec};

    #[cfg(feature = "ntru")]
    pub use crate::pke::ntru::{
        NtruEncrypt, NtruKeyGenerator, NtruKeyPair, NtruParameters, NtruPrivateKey, NtruPublicKey,
    };

    #[cfg(feature = "rlwe")]
    pub use crate::pke::rlwe::{
        RlweEncrypt, RlweKeyGenerator, RlweKeyPair, RlweParameters, RlweSign, RlweSignParameters,
    };

    #[cfg(feature = "gmss")]
    pub use crate::pke::gmss::{WotsParameters, WotsPublicKey, WotsSigningKey};
}
