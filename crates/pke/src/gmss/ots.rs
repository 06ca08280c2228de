//! Winternitz one-time signatures
//!
//! The private key is `chains()` seeds derived from one secret seed. Each
//! chain is hashed `d` times for a base-2^w digit `d` of H(message) or of the
//! checksum `sum(2^w - 1 - d)`; the verifier finishes every chain and hashes
//! the tops into the public key.

use pqlat_algorithms::hash::DigestEngine;
use pqlat_api::error::Error as CoreError;
use pqlat_api::{Serialize, SerializeSecret};
use pqlat_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::params::WotsParameters;
use crate::error::{Error, Result};

/// Next pseudorandom element: `out = H(state)`, then
/// `state = state + out + 1` as little-endian integers
fn next_seed(engine: &mut DigestEngine, state: &mut [u8]) -> Zeroizing<Vec<u8>> {
    engine.update(state);
    let out = Zeroizing::new(engine.finalize_reset());
    let mut carry = 1u16;
    for (s, o) in state.iter_mut().zip(out.iter()) {
        let sum = *s as u16 + *o as u16 + carry;
        *s = sum as u8;
        carry = sum >> 8;
    }
    out
}

/// Hash `element` in place `steps` times
fn walk(engine: &mut DigestEngine, element: &mut Vec<u8>, steps: u32) {
    for _ in 0..steps {
        engine.update(element);
        let next = engine.finalize_reset();
        element.zeroize();
        *element = next;
    }
}

/// Base-2^w digits of H(message) followed by the checksum digits, most
/// significant first
fn digits(params: &WotsParameters, message: &[u8]) -> Vec<u32> {
    let w = params.w();
    let hash = params.digest().digest(message);

    let mut out = Vec::with_capacity(params.chains());
    let (mut acc, mut acc_bits) = (0u32, 0u32);
    for byte in hash {
        acc = (acc << 8) | byte as u32;
        acc_bits += 8;
        while acc_bits >= w {
            acc_bits -= w;
            out.push((acc >> acc_bits) & params.chain_len());
        }
        acc &= (1 << acc_bits) - 1;
    }
    if acc_bits > 0 {
        out.push((acc << (w - acc_bits)) & params.chain_len());
    }

    let checksum: u64 = out.iter().map(|&d| (params.chain_len() - d) as u64).sum();
    let checksum_chunks = params.checksum_chunks();
    for i in (0..checksum_chunks).rev() {
        out.push(((checksum >> (i as u32 * w)) & params.chain_len() as u64) as u32);
    }
    out
}

impl WotsParameters {
    /// Public key implied by `signature` on `message`
    pub fn recover_public_key(&self, message: &[u8], signature: &[u8]) -> Result<WotsPublicKey> {
        if signature.len() != self.signature_len() {
            return Err(Error::InvalidSignature {
                context: "WotsParameters::recover_public_key",
            });
        }
        let mut engine = self.digest().engine();
        let mut tops = Vec::with_capacity(self.signature_len());
        for (chunk, d) in signature
            .chunks(self.element_len())
            .zip(digits(self, message))
        {
            let mut element = chunk.to_vec();
            walk(&mut engine, &mut element, self.chain_len() - d);
            tops.extend_from_slice(&element);
        }
        engine.update(&tops);
        Ok(WotsPublicKey {
            params: *self,
            root: engine.finalize_reset(),
        })
    }
}

/// Hash of the chain tops
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WotsPublicKey {
    params: WotsParameters,
    root: Vec<u8>,
}

impl WotsPublicKey {
    pub fn params(&self) -> &WotsParameters {
        &self.params
    }

    pub fn root(&self) -> &[u8] {
        &self.root
    }

    /// Check `signature` on `message`; any mismatch is `InvalidSignature`
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let recovered = self.params.recover_public_key(message, signature)?;
        if !ct_eq(&recovered.root, &self.root) {
            return Err(Error::InvalidSignature {
                context: "WotsPublicKey::verify",
            });
        }
        Ok(())
    }

    /// OID || root
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.root.len());
        out.extend_from_slice(&self.params.oid());
        out.extend_from_slice(&self.root);
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let params = read_oid(data, "WotsPublicKey::from_bytes")?;
        let root = data[4..].to_vec();
        Ok(Self { params, root })
    }
}

impl Serialize for WotsPublicKey {
    fn from_bytes(bytes: &[u8]) -> pqlat_api::Result<Self> {
        WotsPublicKey::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        WotsPublicKey::to_bytes(self)
    }
}

/// Parameters named by a leading OID, with exactly one element after it
fn read_oid(data: &[u8], context: &'static str) -> Result<WotsParameters> {
    if data.len() < 4 {
        return Err(Error::InvalidLength {
            context,
            expected: 4,
            actual: data.len(),
        });
    }
    let params = WotsParameters::from_oid([data[0], data[1], data[2], data[3]])?;
    if data.len() != 4 + params.element_len() {
        return Err(Error::InvalidLength {
            context,
            expected: 4 + params.element_len(),
            actual: data.len(),
        });
    }
    Ok(params)
}

/// Secret seed for one signature
///
/// [`sign`](Self::sign) takes the key by value so it cannot sign twice.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct WotsSigningKey {
    #[zeroize(skip)]
    params: WotsParameters,
    seed: Vec<u8>,
}

impl WotsSigningKey {
    pub fn generate<R>(params: WotsParameters, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut seed = vec![0u8; params.element_len()];
        rng.fill_bytes(&mut seed);
        Self { params, seed }
    }

    pub fn from_seed(params: WotsParameters, seed: &[u8]) -> Result<Self> {
        if seed.len() != params.element_len() {
            return Err(Error::InvalidLength {
                context: "WotsSigningKey::from_seed",
                expected: params.element_len(),
                actual: seed.len(),
            });
        }
        Ok(Self {
            params,
            seed: seed.to_vec(),
        })
    }

    pub fn params(&self) -> &WotsParameters {
        &self.params
    }

    /// Each private element hashed to the top of its chain
    pub fn public_key(&self) -> WotsPublicKey {
        let mut engine = self.params.digest().engine();
        let mut state = Zeroizing::new(self.seed.clone());
        let mut tops = Vec::with_capacity(self.params.signature_len());
        for _ in 0..self.params.chains() {
            let mut element = next_seed(&mut engine, &mut state).to_vec();
            walk(&mut engine, &mut element, self.params.chain_len());
            tops.extend_from_slice(&element);
        }
        engine.update(&tops);
        WotsPublicKey {
            params: self.params,
            root: engine.finalize_reset(),
        }
    }

    /// Sign `message`, consuming the key
    pub fn sign(self, message: &[u8]) -> Vec<u8> {
        let mut engine = self.params.digest().engine();
        let mut state = Zeroizing::new(self.seed.clone());
        let mut out = Vec::with_capacity(self.params.signature_len());
        for d in digits(&self.params, message) {
            let mut element = next_seed(&mut engine, &mut state).to_vec();
            walk(&mut engine, &mut element, d);
            out.extend_from_slice(&element);
        }
        out
    }

    /// OID || seed
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(Vec::with_capacity(4 + self.seed.len()));
        out.extend_from_slice(&self.params.oid());
        out.extend_from_slice(&self.seed);
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let params = read_oid(data, "WotsSigningKey::from_bytes")?;
        Self::from_seed(params, &data[4..])
    }
}

impl core::fmt::Debug for WotsSigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WotsSigningKey")
            .field("params", &self.params)
            .field("seed", &"[REDACTED]")
            .finish()
    }
}

impl SerializeSecret for WotsSigningKey {
    fn from_bytes(bytes: &[u8]) -> pqlat_api::Result<Self> {
        WotsSigningKey::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}
