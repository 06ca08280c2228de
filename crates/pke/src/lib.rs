//! Lattice public key encryption and signatures for the pqlat library
//!
//! [`ntru`] implements NTRUEncrypt as specified by IEEE P1363.1; [`rlwe`]
//! provides Ring-LWE encryption and a GLP-style signature over the same
//! polynomial engine. Each scheme is usable through its own stateful cipher
//! or through the `Pke` and `Signature` traits of `pqlat-api`. [`gmss`]
//! holds Winternitz one-time signatures.
#![forbid(unsafe_code)]

pub mod error;

#[cfg(feature = "gmss")]
pub mod gmss;

#[cfg(feature = "ntru")]
pub mod ntru;

#[cfg(feature = "rlwe")]
pub mod rlwe;

pub use error::{Error, Result};

#[cfg(feature = "gmss")]
pub use gmss::{WotsParameters, WotsPublicKey, WotsSigningKey};

#[cfg(feature = "ntru")]
pub use ntru::{NtruEncrypt, NtruKeyGenerator, NtruKeyPair, NtruParameters};

#[cfg(feature = "rlwe")]
pub use rlwe::{RlweEncrypt, RlweKeyGenerator, RlweKeyPair, RlweParameters, RlweSign};
