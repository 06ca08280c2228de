//! Flat byte encodings of keys
//!
//! Header integers are little-endian and polynomial coefficients are
//! bit-packed at a width fixed by the parameter set.

use crate::Result;
use zeroize::Zeroizing;

/// Key material that may be published
pub trait Serialize: Sized {
    /// Parse an encoding, checking its header against its length
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    fn to_bytes(&self) -> Vec<u8>;
}

/// Key material that must not outlive its use
pub trait SerializeSecret: Sized {
    /// Parse an encoding; the caller owns zeroizing `bytes`
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Encoding wiped from memory when dropped
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
