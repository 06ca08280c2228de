//! Ring-LWE encryption key generation

use pqlat_algorithms::poly::sampling::{sample_cbd, sample_uniform};
use pqlat_algorithms::prng::RandomEngine;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::keys::{RlweKeyPair, RlwePrivateKey, RlwePublicKey};
use super::params::RlweParameters;
use super::ring::sub_mod;
use crate::error::Result;

/// Generates (a, p = r1 - a r2) / r2 key pairs
#[derive(Debug, Clone)]
pub struct RlweKeyGenerator {
    params: RlweParameters,
}

impl RlweKeyGenerator {
    pub fn new(params: RlweParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RlweParameters {
        &self.params
    }

    /// Generate a key pair from an entropy-seeded ChaCha20 generator
    pub fn generate(&self) -> Result<RlweKeyPair> {
        self.generate_with_rng(&mut RandomEngine::ChaCha20.instantiate())
    }

    pub fn generate_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<RlweKeyPair> {
        let (n, q, eta) = (self.params.n(), self.params.q(), self.params.eta());
        let ntt = self.params.ntt()?;

        let a = sample_uniform(n, q, rng);
        let r1 = Zeroizing::new(sample_cbd(n, eta, rng)?);
        let r2 = sample_cbd(n, eta, rng)?;

        let ar2 = ntt.multiply(&a, &Zeroizing::new(ntt.reduce_signed(&r2)))?;
        let p = sub_mod(&ntt.reduce_signed(&r1), &ar2, q);

        Ok(RlweKeyPair {
            public: RlwePublicKey { a, p, q },
            private: RlwePrivateKey { r2, q },
        })
    }
}
