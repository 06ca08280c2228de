//! Hash-based one-time signatures of the GMSS family
//!
//! Only the Winternitz one-time layer is provided. A key signs one message;
//! many-time use needs a Merkle tree over a sequence of these keys.

mod ots;
mod params;

pub use ots::{WotsPublicKey, WotsSigningKey};
pub use params::WotsParameters;
