//! Public key encryption over a fixed parameter set

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A lattice encryption scheme bound to one cataloged parameter set
///
/// Ciphertexts have a fixed length for the set; plaintexts up to the
/// set's message maximum are padded before encryption, so the ciphertext
/// does not reveal the plaintext length.
pub trait Pke {
    type PublicKey: Clone;

    /// Whatever decryption needs; for NTRU this is the whole key pair
    type SecretKey: Zeroize;

    type Ciphertext: AsRef<[u8]> + Clone;

    /// Catalog name of the parameter set
    fn name() -> &'static str;

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypt `plaintext` to `pk_recipient`
    ///
    /// Fails with `MessageTooLong` past the message maximum and with
    /// `InvalidKey` when the key belongs to another parameter set.
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Recover the plaintext
    ///
    /// Integrity failures surface as `DecryptionFailed`, `InvalidEncoding`
    /// or `MessageTooLong`.
    fn decrypt(sk_recipient: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<Vec<u8>>;
}
