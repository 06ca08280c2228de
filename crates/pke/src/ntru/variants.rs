//! `Pke` implementations for the cataloged NTRU parameter sets

use core::marker::PhantomData;

use pqlat_api::error::{validate, Error as CoreError, Result as ApiResult, ResultExt};
use pqlat_api::Pke;
use pqlat_params::pqc::ntru::{self as catalog, NtruParamSet};
use rand::{CryptoRng, RngCore};

use super::encrypt::{decrypt_with, encrypt_with, MAX_ENCRYPT_ATTEMPTS};
use super::keygen::NtruKeyGenerator;
use super::keys::{NtruKeyPair, NtruPublicKey};
use super::params::NtruParameters;

/// A cataloged parameter set usable as a type parameter
pub trait NtruVariant {
    const PARAMS: NtruParamSet;
}

/// NTRUEncrypt over the parameter set `V`
///
/// The secret key is the full key pair: decryption rebuilds the blinding
/// polynomial from the public key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ntru<V: NtruVariant>(PhantomData<V>);

/// Fixed-length NTRU ciphertext
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NtruCiphertext(pub Vec<u8>);

impl AsRef<[u8]> for NtruCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for NtruCiphertext {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl<V: NtruVariant> Ntru<V> {
    pub fn params() -> ApiResult<NtruParameters> {
        Ok(NtruParameters::new(&V::PARAMS)?)
    }
}

impl<V: NtruVariant> Pke for Ntru<V> {
    type PublicKey = NtruPublicKey;
    type SecretKey = NtruKeyPair;
    type Ciphertext = NtruCiphertext;

    fn name() -> &'static str {
        V::PARAMS.name
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let pair = NtruKeyGenerator::new(Self::params()?).generate_with_rng(rng)?;
        let public = pair.public().cloned().ok_or(CoreError::InvalidKey {
            context: "Ntru::keypair",
            message: "generated pair has no public key".into(),
        })?;
        Ok((public, pair))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        let params = Self::params()?;
        validate::key(
            pk_recipient.matches(&params),
            "Ntru::encrypt",
            "public key does not match the parameters",
        )?;
        validate::message_length("Ntru::encrypt", plaintext.len(), params.message_max())?;
        encrypt_with(&params, pk_recipient, plaintext, rng, MAX_ENCRYPT_ATTEMPTS)
            .map(NtruCiphertext)
            .with_context("Ntru::encrypt")
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Vec<u8>> {
        let params = Self::params()?;
        let (public, private) = match (sk_recipient.public(), sk_recipient.private()) {
            (Some(public), Some(private))
                if public.matches(&params) && private.matches(&params) =>
            {
                (public, private)
            }
            _ => {
                return Err(CoreError::InvalidKey {
                    context: "Ntru::decrypt",
                    message: "key pair is incomplete or does not match the parameters".into(),
                })
            }
        };
        validate::length("Ntru::decrypt", ciphertext.as_ref().len(), params.ciphertext_len())?;
        decrypt_with(&params, public, private, ciphertext.as_ref()).with_context("Ntru::decrypt")
    }
}

macro_rules! ntru_variant {
    ($(#[$doc:meta])* $marker:ident, $alias:ident, $set:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $marker;

        impl NtruVariant for $marker {
            const PARAMS: NtruParamSet = $set;
        }

        $(#[$doc])*
        pub type $alias = Ntru<$marker>;
    };
}

ntru_variant!(
    /// EES1087EP2, 256-bit security
    Ees1087ep2,
    NtruEes1087ep2,
    catalog::EES1087EP2
);
ntru_variant!(
    /// EES1171EP1, 256-bit security
    Ees1171ep1,
    NtruEes1171ep1,
    catalog::EES1171EP1
);
ntru_variant!(
    /// EES1499EP1, 256-bit security
    Ees1499ep1,
    NtruEes1499ep1,
    catalog::EES1499EP1
);
ntru_variant!(
    /// APR2011-439, 128-bit security
    Apr2011_439,
    NtruApr2011_439,
    catalog::APR2011_439
);
ntru_variant!(
    /// APR2011-439 with product-form polynomials
    Apr2011_439Fast,
    NtruApr2011_439Fast,
    catalog::APR2011_439_FAST
);
ntru_variant!(
    /// APR2011-743, 256-bit security
    Apr2011_743,
    NtruApr2011_743,
    catalog::APR2011_743
);
ntru_variant!(
    /// APR2011-743 with product-form polynomials
    Apr2011_743Fast,
    NtruApr2011_743Fast,
    catalog::APR2011_743_FAST
);
ntru_variant!(
    /// Insecure N = 107 ring for tests and benchmarks
    Toy107,
    NtruToy107,
    catalog::TOY_107
);
