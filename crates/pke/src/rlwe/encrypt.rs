//! Ring-LWE encryption and decryption
//!
//! c1 = a e1 + e2, c2 = p e1 + e3 + floor(q/2) m, with m one bit per
//! coefficient. Decryption computes c1 r2 + c2 = m floor(q/2) + small noise
//! and rounds each coefficient to the nearer of 0 and q/2.

use pqlat_algorithms::poly::encode::{pack_bits, packed_len, unpack_bits};
use pqlat_algorithms::poly::sampling::sample_cbd;
use pqlat_algorithms::poly::NttContext;
use pqlat_algorithms::prng::{Prng, RandomEngine};
use pqlat_common::EphemeralSecret;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::keys::{RlweKeyPair, RlwePrivateKey, RlwePublicKey};
use super::params::RlweParameters;
use super::ring::add_mod;
use crate::error::{Error, Result};

enum CipherState {
    Uninitialized,
    Encrypt(RlwePublicKey),
    Decrypt(RlwePrivateKey),
}

/// Ring-LWE cipher bound to one parameter set
///
/// Same life cycle as [`NtruEncrypt`](crate::ntru::NtruEncrypt): initialize
/// for one direction, then call [`encrypt`](Self::encrypt) or
/// [`decrypt`](Self::decrypt).
pub struct RlweEncrypt {
    params: RlweParameters,
    state: CipherState,
    rng: Prng,
}

impl RlweEncrypt {
    pub fn new(params: RlweParameters) -> Self {
        Self {
            params,
            state: CipherState::Uninitialized,
            rng: RandomEngine::ChaCha20.instantiate(),
        }
    }

    pub fn with_rng(mut self, rng: Prng) -> Self {
        self.rng = rng;
        self
    }

    pub fn params(&self) -> &RlweParameters {
        &self.params
    }

    pub fn message_max(&self) -> usize {
        self.params.message_max()
    }

    pub fn init_encrypt(&mut self, public: RlwePublicKey) -> Result<()> {
        if !public_matches(&public, &self.params) {
            return Err(Error::InvalidKey {
                context: "RlweEncrypt::init_encrypt",
                message: "public key does not match the parameters".into(),
            });
        }
        self.state = CipherState::Encrypt(public);
        Ok(())
    }

    /// Prepare for decryption; only the private half of `pair` is kept
    pub fn init_decrypt(&mut self, pair: RlweKeyPair) -> Result<()> {
        if !private_matches(&pair.private, &self.params) {
            return Err(Error::InvalidKey {
                context: "RlweEncrypt::init_decrypt",
                message: "private key does not match the parameters".into(),
            });
        }
        self.state = CipherState::Decrypt(pair.private);
        Ok(())
    }

    pub fn encrypt(&mut self, message: &[u8]) -> Result<Vec<u8>> {
        match &self.state {
            CipherState::Encrypt(public) => {
                encrypt_with(&self.params, public, message, &mut self.rng)
            }
            _ => Err(Error::NotInitialized {
                context: "RlweEncrypt::encrypt",
                operation: "encryption",
            }),
        }
    }

    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match &self.state {
            CipherState::Decrypt(private) => decrypt_with(&self.params, private, ciphertext),
            _ => Err(Error::NotInitialized {
                context: "RlweEncrypt::decrypt",
                operation: "decryption",
            }),
        }
    }
}

impl core::fmt::Debug for RlweEncrypt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = match self.state {
            CipherState::Uninitialized => "uninitialized",
            CipherState::Encrypt(_) => "encrypt",
            CipherState::Decrypt(_) => "decrypt",
        };
        f.debug_struct("RlweEncrypt")
            .field("params", &self.params)
            .field("state", &state)
            .finish()
    }
}

pub(crate) fn public_matches(public: &RlwePublicKey, params: &RlweParameters) -> bool {
    public.n() == params.n() && public.p.len() == params.n() && public.q() == params.q()
}

pub(crate) fn private_matches(private: &RlwePrivateKey, params: &RlweParameters) -> bool {
    private.n() == params.n() && private.q() == params.q()
}

/// len || message || 0*, read as N bits, least significant bit first
fn message_bits(params: &RlweParameters, message: &[u8]) -> Result<Zeroizing<Vec<u32>>> {
    let max = params.message_max();
    if message.len() > max {
        return Err(Error::MessageTooLong {
            context: "RlweEncrypt::encrypt",
            max,
            actual: message.len(),
        });
    }
    let mut block = Zeroizing::new(vec![0u8; params.n() / 8]);
    block[0] = message.len() as u8;
    block[1..1 + message.len()].copy_from_slice(message);

    let half = params.q() / 2;
    Ok(Zeroizing::new(
        (0..params.n())
            .map(|i| ((block[i / 8] >> (i % 8)) & 1) as u32 * half)
            .collect(),
    ))
}

/// Noise polynomial lifted into `[0, q)`
fn noise<R: RngCore + CryptoRng + ?Sized>(
    ntt: &NttContext,
    params: &RlweParameters,
    rng: &mut R,
) -> Result<Zeroizing<Vec<u32>>> {
    let e = Zeroizing::new(sample_cbd(params.n(), params.eta(), rng)?);
    Ok(Zeroizing::new(ntt.reduce_signed(&e)))
}

pub(crate) fn encrypt_with<R: RngCore + CryptoRng + ?Sized>(
    params: &RlweParameters,
    public: &RlwePublicKey,
    message: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    let m = message_bits(params, message)?;
    let ntt = params.ntt()?;
    let q = params.q();

    let e1 = noise(&ntt, params, rng)?;
    let e2 = noise(&ntt, params, rng)?;
    let e3 = noise(&ntt, params, rng)?;

    let c1 = add_mod(&ntt.multiply(&public.a, &e1)?, &e2, q);
    let c2 = add_mod(&add_mod(&ntt.multiply(&public.p, &e1)?, &e3, q), &m, q);

    let bits = params.log_q();
    let mut out = pack_bits(&c1, bits);
    out.extend_from_slice(&pack_bits(&c2, bits));
    Ok(out)
}

pub(crate) fn decrypt_with(
    params: &RlweParameters,
    private: &RlwePrivateKey,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    const CONTEXT: &str = "RlweEncrypt::decrypt";
    let (n, q) = (params.n(), params.q());
    if ciphertext.len() != params.ciphertext_len() {
        return Err(Error::InvalidLength {
            context: CONTEXT,
            expected: params.ciphertext_len(),
            actual: ciphertext.len(),
        });
    }

    let bits = params.log_q();
    let half = ciphertext.len() / 2;
    debug_assert_eq!(half, packed_len(n, bits));
    let parse = |data: &[u8]| -> Result<Vec<u32>> {
        let values = unpack_bits(data, n, bits).map_err(|_| Error::InvalidEncoding {
            context: CONTEXT,
            reason: "malformed polynomial",
        })?;
        if values.iter().any(|&v| v >= q) {
            return Err(Error::InvalidEncoding {
                context: CONTEXT,
                reason: "coefficient not below q",
            });
        }
        Ok(values)
    };
    let c1 = parse(&ciphertext[..half])?;
    let c2 = parse(&ciphertext[half..])?;

    let ntt = params.ntt()?;
    let r2 = Zeroizing::new(ntt.reduce_signed(&private.r2));
    let d = Zeroizing::new(add_mod(&ntt.multiply(&c1, &r2)?, &c2, q));

    let (low, high) = (q / 4, 3 * (q / 4));
    let mut block = EphemeralSecret::new(vec![0u8; n / 8]);
    for (i, &x) in d.iter().enumerate() {
        if x > low && x < high {
            block[i / 8] |= 1 << (i % 8);
        }
    }

    let len = block[0] as usize;
    if len > params.message_max() {
        return Err(Error::InvalidEncoding {
            context: CONTEXT,
            reason: "message length out of range",
        });
    }
    if block[1 + len..].iter().any(|&b| b != 0) {
        return Err(Error::InvalidEncoding {
            context: CONTEXT,
            reason: "nonzero padding",
        });
    }
    Ok(block[1..1 + len].to_vec())
}
