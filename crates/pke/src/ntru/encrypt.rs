//! NTRUEncrypt (SVES) encryption and decryption
//!
//! A message m is padded to b || len || m || 0* and read as a ternary
//! polynomial. The blinding polynomial r is derived from the message, the
//! padding and the public key, so decryption can rebuild r and reject any
//! ciphertext that was not produced by encryption of the recovered message.

use pqlat_algorithms::mgf::{generate_mask, IndexGenerator};
use pqlat_algorithms::poly::{
    DenseTernaryPolynomial, IntegerPolynomial, Polynomial, ProductFormPolynomial,
    SparseTernaryPolynomial,
};
use pqlat_algorithms::prng::Prng;
use pqlat_common::SecretVec;
use pqlat_internal::constant_time::ct_eq_coeffs;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::keys::{NtruKeyPair, NtruPrivateKey, NtruPublicKey};
use super::params::{NtruParameters, PolyType};
use crate::error::{Error, Result};

/// Cap on the balance rejection loop
pub const MAX_ENCRYPT_ATTEMPTS: usize = 1000;

enum CipherState {
    Uninitialized,
    Encrypt(NtruPublicKey),
    Decrypt {
        public: NtruPublicKey,
        private: NtruPrivateKey,
    },
}

/// NTRUEncrypt cipher bound to one parameter set
///
/// Initialize with [`init_encrypt`](Self::init_encrypt) or
/// [`init_decrypt`](Self::init_decrypt) before use. An instance is not meant
/// to be shared between threads; separate instances may share keys.
pub struct NtruEncrypt {
    params: NtruParameters,
    state: CipherState,
    rng: Prng,
    uniform_errors: bool,
    max_attempts: usize,
}

impl NtruEncrypt {
    /// An uninitialized cipher using the parameter set's random engine
    pub fn new(params: NtruParameters) -> Self {
        let rng = params.random_engine().instantiate();
        Self {
            params,
            state: CipherState::Uninitialized,
            rng,
            uniform_errors: false,
            max_attempts: MAX_ENCRYPT_ATTEMPTS,
        }
    }

    /// Cap the balance rejection loop at `max_attempts` paddings
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replace the random engine
    pub fn with_rng(mut self, rng: Prng) -> Self {
        self.rng = rng;
        self
    }

    /// Report every decryption integrity failure as `DecryptionFailed`
    ///
    /// Off by default: balance failures are `DecryptionFailed`, padding and
    /// blinding mismatches are `InvalidEncoding`.
    pub fn with_uniform_errors(mut self, uniform: bool) -> Self {
        self.uniform_errors = uniform;
        self
    }

    pub fn params(&self) -> &NtruParameters {
        &self.params
    }

    /// Longest plaintext in bytes
    pub fn message_max(&self) -> usize {
        self.params.message_max()
    }

    /// Prepare for encryption under `public`
    pub fn init_encrypt(&mut self, public: NtruPublicKey) -> Result<()> {
        if !public.matches(&self.params) {
            return Err(Error::InvalidKey {
                context: "NtruEncrypt::init_encrypt",
                message: "public key does not match the parameters".into(),
            });
        }
        self.state = CipherState::Encrypt(public);
        Ok(())
    }

    /// Prepare for decryption; both halves of `pair` are required
    pub fn init_decrypt(&mut self, pair: NtruKeyPair) -> Result<()> {
        let (public, private) = match pair.into_parts() {
            (Some(public), Some(private)) => (public, private),
            _ => {
                return Err(Error::InvalidKey {
                    context: "NtruEncrypt::init_decrypt",
                    message: "decryption needs both the public and the private key".into(),
                })
            }
        };
        if !public.matches(&self.params) || !private.matches(&self.params) {
            return Err(Error::InvalidKey {
                context: "NtruEncrypt::init_decrypt",
                message: "key pair does not match the parameters".into(),
            });
        }
        self.state = CipherState::Decrypt { public, private };
        Ok(())
    }

    pub fn encrypt(&mut self, message: &[u8]) -> Result<Vec<u8>> {
        match &self.state {
            CipherState::Encrypt(public) => {
                encrypt_with(&self.params, public, message, &mut self.rng, self.max_attempts)
            }
            _ => Err(Error::NotInitialized {
                context: "NtruEncrypt::encrypt",
                operation: "encryption",
            }),
        }
    }

    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match &self.state {
            CipherState::Decrypt { public, private } => {
                let result = decrypt_with(&self.params, public, private, ciphertext);
                if self.uniform_errors {
                    result.map_err(|e| e.uniform("NtruEncrypt::decrypt"))
                } else {
                    result
                }
            }
            _ => Err(Error::NotInitialized {
                context: "NtruEncrypt::decrypt",
                operation: "decryption",
            }),
        }
    }
}

impl core::fmt::Debug for NtruEncrypt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = match self.state {
            CipherState::Uninitialized => "uninitialized",
            CipherState::Encrypt(_) => "encrypt",
            CipherState::Decrypt { .. } => "decrypt",
        };
        f.debug_struct("NtruEncrypt")
            .field("params", &self.params)
            .field("state", &state)
            .field("uniform_errors", &self.uniform_errors)
            .finish()
    }
}

/// sData = OID || m || b || first Db/8 bytes of the encoded public key
fn blinding_seed(params: &NtruParameters, message: &[u8], b: &[u8], h_trunc: &[u8]) -> SecretVec {
    let mut seed = SecretVec::with_capacity(4 + message.len() + b.len() + h_trunc.len());
    seed.extend_from_slice(&params.oid());
    seed.extend_from_slice(message);
    seed.extend_from_slice(b);
    seed.extend_from_slice(h_trunc);
    seed
}

/// Blinding polynomial r for a seed, shaped like the private polynomial
fn blinding_polynomial(params: &NtruParameters, seed: &[u8]) -> Result<Polynomial> {
    let n = params.n();
    let mut ig = IndexGenerator::new(seed, &params.igf_params())?;
    Ok(match params.poly_type() {
        PolyType::Product => {
            let (dr1, dr2, dr3) = params.dr_product();
            ProductFormPolynomial::generate_blinding(&mut ig, n, dr1, dr2, dr3)?.into()
        }
        PolyType::Simple if params.sparse() => {
            SparseTernaryPolynomial::generate_blinding(&mut ig, n, params.dr())?.into()
        }
        PolyType::Simple => {
            DenseTernaryPolynomial::generate_blinding(&mut ig, n, params.dr())?.into()
        }
    })
}

/// Ternary mask from R mod 4
fn mask_for(params: &NtruParameters, r: &IntegerPolynomial) -> IntegerPolynomial {
    generate_mask(
        &r.to_binary4(),
        params.n(),
        params.min_calls_mask(),
        params.hash_seed(),
        params.digest(),
    )
}

/// Each of -1, 0 and 1 occurs at least `dm0` times
fn is_balanced(p: &IntegerPolynomial, dm0: usize) -> bool {
    p.count(-1) >= dm0 && p.count(0) >= dm0 && p.count(1) >= dm0
}

fn truncated_public_key(params: &NtruParameters, public: &NtruPublicKey) -> Vec<u8> {
    let mut h = public.h().to_binary(params.q());
    h.truncate(params.db() / 8);
    h
}

/// Encrypt `message` under `public`, drawing padding from `rng`
pub(crate) fn encrypt_with<R: RngCore + CryptoRng + ?Sized>(
    params: &NtruParameters,
    public: &NtruPublicKey,
    message: &[u8],
    rng: &mut R,
    max_attempts: usize,
) -> Result<Vec<u8>> {
    let max = params.message_max();
    if message.len() > max {
        return Err(Error::MessageTooLong {
            context: "NtruEncrypt::encrypt",
            max,
            actual: message.len(),
        });
    }

    let q = params.q() as i32;
    let bl = params.db() / 8;
    let h_trunc = truncated_public_key(params, public);

    for _ in 0..max_attempts {
        let mut b = Zeroizing::new(vec![0u8; bl]);
        rng.fill_bytes(&mut b);

        let mut buf = Zeroizing::new(vec![0u8; params.buffer_len()]);
        buf[..bl].copy_from_slice(&b);
        buf[bl] = message.len() as u8;
        buf[bl + 1..bl + 1 + message.len()].copy_from_slice(message);
        let mut m_trin = Zeroizing::new(IntegerPolynomial::from_binary3_sves(
            &buf,
            params.n(),
            params.skip_first(),
        ));

        let seed = blinding_seed(params, message, &b, &h_trunc);
        let r = Zeroizing::new(blinding_polynomial(params, seed.as_slice())?);
        let big_r = r.mult_mod(public.h(), q)?;

        let mask = mask_for(params, &big_r);
        m_trin.add(&mask);
        m_trin.mod3();

        if params.skip_first() {
            if m_trin.sum_coeffs().unsigned_abs() > params.max_m1() as u64 {
                continue;
            }
            m_trin.coeffs[0] = 0;
        }
        if !is_balanced(&m_trin, params.dm0()) {
            continue;
        }

        let mut e = big_r;
        e.add(&m_trin);
        e.mod_positive(q);
        return Ok(e.to_binary(params.q()));
    }

    Err(Error::RetryLimit {
        context: "NtruEncrypt::encrypt",
        attempts: max_attempts,
    })
}

/// Decrypt and verify `ciphertext`
pub(crate) fn decrypt_with(
    params: &NtruParameters,
    public: &NtruPublicKey,
    private: &NtruPrivateKey,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    const CONTEXT: &str = "NtruEncrypt::decrypt";

    let expected = params.ciphertext_len();
    if ciphertext.len() != expected {
        return Err(Error::InvalidLength {
            context: CONTEXT,
            expected,
            actual: ciphertext.len(),
        });
    }
    let q = params.q() as i32;
    let e = IntegerPolynomial::from_binary(ciphertext, params.n(), params.q()).map_err(|_| {
        Error::InvalidEncoding {
            context: CONTEXT,
            reason: "malformed ciphertext",
        }
    })?;

    // a = f * e, with f = 1 + 3T under fast_fp
    let mut a = Zeroizing::new(private.t().mult_mod(&e, q)?);
    if private.fast_fp() {
        a.mult_scalar(3);
        a.add(&e);
    }
    a.mod_center(q);
    a.mod3();
    let ci = if private.fast_fp() {
        a
    } else {
        let mut ci = Zeroizing::new(a.mult(private.fp())?);
        ci.mod3();
        ci
    };

    if !is_balanced(&ci, params.dm0()) {
        return Err(Error::DecryptionFailed {
            context: CONTEXT,
            reason: "recovered polynomial is unbalanced",
        });
    }

    let mut c_r = e;
    c_r.sub(&ci);
    c_r.mod_positive(q);

    let mask = mask_for(params, &c_r);
    let mut cm = ci;
    cm.sub(&mask);
    cm.mod3();
    if params.skip_first() {
        cm.coeffs[0] = 0;
    }

    let buf = Zeroizing::new(cm.to_binary3_sves(params.skip_first()).map_err(|_| {
        Error::InvalidEncoding {
            context: CONTEXT,
            reason: "message polynomial has no SVES encoding",
        }
    })?);

    let bl = params.db() / 8;
    let b = &buf[..bl];
    let len = buf[bl] as usize;
    let max = params.message_max();
    if len > max {
        return Err(Error::MessageTooLong {
            context: CONTEXT,
            max,
            actual: len,
        });
    }
    let message = &buf[bl + 1..bl + 1 + len];
    if buf[bl + 1 + len..].iter().any(|&x| x != 0) {
        return Err(Error::InvalidEncoding {
            context: CONTEXT,
            reason: "nonzero padding",
        });
    }

    let h_trunc = truncated_public_key(params, public);
    let seed = blinding_seed(params, message, b, &h_trunc);
    let r = Zeroizing::new(blinding_polynomial(params, seed.as_slice())?);
    let c_r_check = r.mult_mod(public.h(), q)?;
    if !ct_eq_coeffs(&c_r_check.coeffs, &c_r.coeffs) {
        return Err(Error::InvalidEncoding {
            context: CONTEXT,
            reason: "blinding polynomial mismatch",
        });
    }

    Ok(message.to_vec())
}
