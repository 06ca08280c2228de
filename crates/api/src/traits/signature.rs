//! Randomized lattice signatures
//!
//! Rejection sampling draws fresh masks until a response falls inside the
//! public bound, so signing takes the caller's RNG and two signatures of
//! one message differ.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A signature scheme bound to one cataloged parameter set
pub trait Signature {
    type PublicKey: Clone;

    /// Wiped on drop; export goes through the scheme's own encoding
    type SecretKey: Zeroize;

    type SignatureData: Clone;

    /// Catalog name of the parameter set
    fn name() -> &'static str;

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Sign `message`, retrying rejected masks up to the scheme's cap
    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// `InvalidSignature` for any malformed or non-verifying input
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
