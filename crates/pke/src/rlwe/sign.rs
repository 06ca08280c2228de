//! Ring-LWE signatures with rejection sampling (GLP)
//!
//! Keys are ternary s1, s2 with t = a s1 + s2. A signature on m is
//! (seed, z1, z2) where seed = H(a y1 + y2 || m), c is the sparse ternary
//! challenge derived from seed and z_i = s_i c + y_i. Signatures whose z
//! would leak s are discarded and signing starts over with fresh y.

use core::marker::PhantomData;

use pqlat_algorithms::mgf::{IgfParams, IndexGenerator};
use pqlat_algorithms::poly::encode::{pack_bits, packed_len, unpack_bits};
use pqlat_algorithms::poly::sampling::{sample_bounded, sample_uniform};
use pqlat_algorithms::poly::{NttContext, SparseTernaryPolynomial};
use pqlat_api::error::{Result as ApiResult, ResultExt};
use pqlat_api::Signature;
use pqlat_internal::constant_time::ct_eq;
use pqlat_params::pqc::rlwe::{self as catalog, RlweSignParamSet};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::keys::{RlweSignPublicKey, RlweSignSecretKey};
use super::params::RlweSignParameters;
use super::ring::{add_mod, sub_mod};
use crate::error::{Error, Result};

/// Default cap on rejected signing attempts
pub const MAX_SIGN_ATTEMPTS: usize = 1000;

/// Digest blocks precomputed by the challenge index generator
const CHALLENGE_MIN_CALLS: usize = 2;

/// Signer and verifier for one parameter set
#[derive(Debug, Clone)]
pub struct RlweSign {
    params: RlweSignParameters,
    ntt: NttContext,
    max_attempts: usize,
}

impl RlweSign {
    pub fn new(params: RlweSignParameters) -> Result<Self> {
        Ok(Self {
            ntt: params.ntt()?,
            params,
            max_attempts: MAX_SIGN_ATTEMPTS,
        })
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn params(&self) -> &RlweSignParameters {
        &self.params
    }

    /// Fresh (t, (s1, s2)) key pair
    pub fn generate_keypair<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(RlweSignPublicKey, RlweSignSecretKey)> {
        let (n, q) = (self.params.n(), self.params.q());
        let a = sample_uniform(n, q, rng);
        let s1 = sample_bounded(n, 1, rng);
        let s2 = sample_bounded(n, 1, rng);

        let as1 = self
            .ntt
            .multiply(&a, &Zeroizing::new(self.ntt.reduce_signed(&s1)))?;
        let t = add_mod(&as1, &Zeroizing::new(self.ntt.reduce_signed(&s2)), q);

        let public = RlweSignPublicKey { a, t, q };
        let secret = RlweSignSecretKey {
            s1,
            s2,
            public: public.clone(),
        };
        Ok((public, secret))
    }

    pub fn sign<R: RngCore + CryptoRng + ?Sized>(
        &self,
        message: &[u8],
        secret: &RlweSignSecretKey,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        const CONTEXT: &str = "RlweSign::sign";
        if !self.key_matches(&secret.public) || secret.n() != self.params.n() {
            return Err(Error::InvalidKey {
                context: CONTEXT,
                message: "signing key does not match the parameters".into(),
            });
        }
        let (n, q) = (self.params.n(), self.params.q());
        let bound = self.params.z_bound() as i32;
        let s1 = Zeroizing::new(self.ntt.reduce_signed(&secret.s1));
        let s2 = Zeroizing::new(self.ntt.reduce_signed(&secret.s2));

        for _ in 0..self.max_attempts {
            let y1 = Zeroizing::new(sample_bounded(n, self.params.k(), rng));
            let y2 = Zeroizing::new(sample_bounded(n, self.params.k(), rng));

            let ay1 = self
                .ntt
                .multiply(&secret.public.a, &Zeroizing::new(self.ntt.reduce_signed(&y1)))?;
            let w = add_mod(&ay1, &self.ntt.reduce_signed(&y2), q);
            let seed = self.challenge_seed(&w, message);
            let c = self.ntt.reduce_signed(&self.challenge(&seed)?);

            let z1 = Zeroizing::new(self.masked(&s1, &c, &y1)?);
            let z2 = Zeroizing::new(self.masked(&s2, &c, &y2)?);
            if z1.iter().chain(z2.iter()).any(|z| z.abs() > bound) {
                continue;
            }

            let bits = self.params.z_bits();
            let mut out = seed;
            for z in [&z1, &z2] {
                let shifted: Vec<u32> = z.iter().map(|&v| (v + bound) as u32).collect();
                out.extend_from_slice(&pack_bits(&shifted, bits));
            }
            return Ok(out);
        }
        Err(Error::RetryLimit {
            context: CONTEXT,
            attempts: self.max_attempts,
        })
    }

    /// Check `signature` on `message`; any mismatch is `InvalidSignature`
    pub fn verify(
        &self,
        message: &[u8],
        signature: &[u8],
        public: &RlweSignPublicKey,
    ) -> Result<()> {
        const CONTEXT: &str = "RlweSign::verify";
        if !self.key_matches(public) {
            return Err(Error::InvalidKey {
                context: CONTEXT,
                message: "verification key does not match the parameters".into(),
            });
        }
        let invalid = Error::InvalidSignature { context: CONTEXT };
        if signature.len() != self.params.signature_len() {
            return Err(invalid);
        }

        let (n, q) = (self.params.n(), self.params.q());
        let bound = self.params.z_bound();
        let bits = self.params.z_bits();
        let seed_len = self.params.digest().output_size();
        let z_len = packed_len(n, bits);
        let (seed, rest) = signature.split_at(seed_len);

        let mut z = Vec::with_capacity(2);
        for chunk in rest.chunks(z_len) {
            let values = match unpack_bits(chunk, n, bits) {
                Ok(values) => values,
                Err(_) => return Err(invalid),
            };
            if values.iter().any(|&v| v > 2 * bound) {
                return Err(invalid);
            }
            let centered: Vec<i32> = values.iter().map(|&v| v as i32 - bound as i32).collect();
            z.push(self.ntt.reduce_signed(&centered));
        }

        let c = self.ntt.reduce_signed(&self.challenge(seed)?);
        let az1 = self.ntt.multiply(&public.a, &z[0])?;
        let tc = self.ntt.multiply(&public.t, &c)?;
        let w = sub_mod(&add_mod(&az1, &z[1], q), &tc, q);

        if ct_eq(seed, self.challenge_seed(&w, message)) {
            Ok(())
        } else {
            Err(invalid)
        }
    }

    fn key_matches(&self, public: &RlweSignPublicKey) -> bool {
        public.n() == self.params.n()
            && public.t.len() == self.params.n()
            && public.q() == self.params.q()
    }

    /// H(w packed at log q bits || message)
    fn challenge_seed(&self, w: &[u32], message: &[u8]) -> Vec<u8> {
        let mut engine = self.params.digest().engine();
        engine.update(&pack_bits(w, self.params.log_q()));
        engine.update(message);
        engine.finalize_reset()
    }

    /// Sparse ternary challenge with weight/2 ones and weight/2 negative ones
    fn challenge(&self, seed: &[u8]) -> Result<Vec<i32>> {
        let igf = IgfParams {
            n: self.params.n(),
            c: self.params.c(),
            min_calls: CHALLENGE_MIN_CALLS,
            hash_seed: true,
            digest: self.params.digest(),
        };
        let mut ig = IndexGenerator::new(seed, &igf)?;
        let half = self.params.weight() / 2;
        let c = SparseTernaryPolynomial::generate_blinding(&mut ig, self.params.n(), half)?;
        Ok(c.to_integer_polynomial().coeffs)
    }

    /// s c + y over the integers; |s c| <= weight so centering is exact
    fn masked(&self, s: &[u32], c: &[u32], y: &[i32]) -> Result<Vec<i32>> {
        let sc = Zeroizing::new(self.ntt.center(&self.ntt.multiply(s, c)?));
        Ok(sc.iter().zip(y).map(|(&a, &b)| a + b).collect())
    }
}

/// A cataloged signature parameter set usable as a type parameter
pub trait RlweSignVariant {
    const PARAMS: RlweSignParamSet;
}

/// [`RlweSign`] behind the [`Signature`] trait
#[derive(Debug, Clone, Copy, Default)]
pub struct RlweSignature<V: RlweSignVariant>(PhantomData<V>);

/// Encoded signature: seed || z1 || z2
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlweSignatureData(pub Vec<u8>);

impl AsRef<[u8]> for RlweSignatureData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<V: RlweSignVariant> RlweSignature<V> {
    pub fn signer() -> ApiResult<RlweSign> {
        Ok(RlweSign::new(RlweSignParameters::new(&V::PARAMS)?)?)
    }
}

impl<V: RlweSignVariant> Signature for RlweSignature<V> {
    type PublicKey = RlweSignPublicKey;
    type SecretKey = RlweSignSecretKey;
    type SignatureData = RlweSignatureData;

    fn name() -> &'static str {
        V::PARAMS.name
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        Ok(Self::signer()?.generate_keypair(rng)?)
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        Ok(RlweSignatureData(Self::signer()?.sign(message, secret_key, rng)?))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        Self::signer()?
            .verify(message, signature.as_ref(), public_key)
            .with_context(Self::name())
    }
}

/// N = 512, q = 8383489
#[derive(Debug, Clone, Copy, Default)]
pub struct Sign512;

impl RlweSignVariant for Sign512 {
    const PARAMS: RlweSignParamSet = catalog::RLWE_SIGN_512;
}

pub type RlweSign512 = RlweSignature<Sign512>;
