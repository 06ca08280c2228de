//! `Pke` implementations for the cataloged Ring-LWE parameter sets

use core::marker::PhantomData;

use pqlat_api::error::{validate, Result as ApiResult, ResultExt};
use pqlat_api::Pke;
use pqlat_params::pqc::rlwe::{self as catalog, RlweParamSet};
use rand::{CryptoRng, RngCore};

use super::encrypt::{decrypt_with, encrypt_with, private_matches, public_matches};
use super::keygen::RlweKeyGenerator;
use super::keys::{RlwePrivateKey, RlwePublicKey};
use super::params::RlweParameters;

pub trait RlweVariant {
    const PARAMS: RlweParamSet;
}

/// Ring-LWE encryption over the parameter set `V`
#[derive(Debug, Clone, Copy, Default)]
pub struct Rlwe<V: RlweVariant>(PhantomData<V>);

/// c1 || c2
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlweCiphertext(pub Vec<u8>);

impl AsRef<[u8]> for RlweCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for RlweCiphertext {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl<V: RlweVariant> Rlwe<V> {
    pub fn params() -> ApiResult<RlweParameters> {
        Ok(RlweParameters::new(&V::PARAMS)?)
    }
}

impl<V: RlweVariant> Pke for Rlwe<V> {
    type PublicKey = RlwePublicKey;
    type SecretKey = RlwePrivateKey;
    type Ciphertext = RlweCiphertext;

    fn name() -> &'static str {
        V::PARAMS.name
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let pair = RlweKeyGenerator::new(Self::params()?).generate_with_rng(rng)?;
        Ok((pair.public, pair.private))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        let params = Self::params()?;
        validate::key(
            public_matches(pk_recipient, &params),
            "Rlwe::encrypt",
            "public key does not match the parameters",
        )?;
        validate::message_length("Rlwe::encrypt", plaintext.len(), params.message_max())?;
        encrypt_with(&params, pk_recipient, plaintext, rng)
            .map(RlweCiphertext)
            .with_context("Rlwe::encrypt")
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Vec<u8>> {
        let params = Self::params()?;
        validate::key(
            private_matches(sk_recipient, &params),
            "Rlwe::decrypt",
            "private key does not match the parameters",
        )?;
        validate::length("Rlwe::decrypt", ciphertext.as_ref().len(), params.ciphertext_len())?;
        decrypt_with(&params, sk_recipient, ciphertext.as_ref()).with_context("Rlwe::decrypt")
    }
}

/// N = 256, q = 7681
#[derive(Debug, Clone, Copy, Default)]
pub struct Ring256;

impl RlweVariant for Ring256 {
    const PARAMS: RlweParamSet = catalog::RLWE_256;
}

/// N = 512, q = 12289
#[derive(Debug, Clone, Copy, Default)]
pub struct Ring512;

impl RlweVariant for Ring512 {
    const PARAMS: RlweParamSet = catalog::RLWE_512;
}

pub type Rlwe256 = Rlwe<Ring256>;
pub type Rlwe512 = Rlwe<Ring512>;
