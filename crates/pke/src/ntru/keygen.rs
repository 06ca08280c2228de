//! NTRU key generation
//!
//! The private half (T, f^-1 mod 3, f^-1 mod q) and g are sampled from two
//! independent branches of the caller's generator, so running the halves
//! concurrently or one after the other yields the same key pair.

use pqlat_algorithms::poly::{
    DenseTernaryPolynomial, IntegerPolynomial, Polynomial, ProductFormPolynomial,
    SparseTernaryPolynomial,
};
use pqlat_algorithms::prng::{branch, BranchRng, PassphrasePrng};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::keys::{NtruKeyPair, NtruPrivateKey, NtruPublicKey};
use super::params::{NtruParameters, PolyType};
use crate::error::{Error, Result};

/// Default cap on resampling rounds for f and for g
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Key generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Derive f and g on two rayon tasks (needs the `parallel` feature)
    pub parallel: bool,
    /// Resampling rounds before giving up on f or g
    pub max_attempts: usize,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(_parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

/// The private half of a key before h is known
struct PrivateHalf {
    t: Polynomial,
    fp: IntegerPolynomial,
    fq: Zeroizing<IntegerPolynomial>,
}

/// Generates NTRU key pairs for one parameter set
#[derive(Debug, Clone)]
pub struct NtruKeyGenerator {
    params: NtruParameters,
    config: KeyGenConfig,
}

impl NtruKeyGenerator {
    pub fn new(params: NtruParameters) -> Self {
        Self::with_config(params, KeyGenConfig::default())
    }

    pub fn with_config(params: NtruParameters, config: KeyGenConfig) -> Self {
        Self { params, config }
    }

    pub fn params(&self) -> &NtruParameters {
        &self.params
    }

    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Generate a key pair from the parameter set's own random engine
    pub fn generate(&self) -> Result<NtruKeyPair> {
        let mut rng = self.params.random_engine().instantiate();
        self.generate_with(&mut rng)
    }

    /// Generate a key pair from any cryptographic generator
    pub fn generate_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<NtruKeyPair> {
        let mut stream = branch(rng);
        self.generate_with(&mut stream)
    }

    /// Reproducible key pair derived from a passphrase and salt
    ///
    /// PBKDF2 with the parameter set's digest seeds the generator, so the
    /// same inputs always give the same keys.
    pub fn generate_from_passphrase(&self, passphrase: &[u8], salt: &[u8]) -> Result<NtruKeyPair> {
        let mut rng = PassphrasePrng::new(self.params.digest(), passphrase, salt);
        self.generate_with(&mut rng)
    }

    /// Generate a key pair drawing f and g from two branches of `rng`
    pub fn generate_with<R: BranchRng>(&self, rng: &mut R) -> Result<NtruKeyPair> {
        let mut f_rng = rng.branch();
        let mut g_rng = rng.branch();

        let (private, g) = join(
            self.config.parallel,
            || self.derive_private(&mut f_rng),
            || self.derive_g(&mut g_rng),
        );
        let private = private?;
        let g = g?;

        let q = self.params.q() as i32;
        let mut h = g.mult_mod(&private.fq, q)?;
        h.mult_scalar(3);
        h.mod_positive(q);

        let public = NtruPublicKey::new(h, self.params.q())?;
        let private = NtruPrivateKey::from_parts(private.t, private.fp, &self.params);
        Ok(NtruKeyPair::new(public, private))
    }

    fn sample_t<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Polynomial> {
        let p = &self.params;
        let n = p.n();
        Ok(match p.poly_type() {
            PolyType::Product => {
                let df3_neg = if p.fast_fp() { p.df3() } else { p.df3() - 1 };
                ProductFormPolynomial::generate_random(n, p.df1(), p.df2(), p.df3(), df3_neg, rng)?
                    .into()
            }
            PolyType::Simple => {
                let neg = if p.fast_fp() { p.df() } else { p.df() - 1 };
                if p.sparse() {
                    SparseTernaryPolynomial::generate_random(n, p.df(), neg, rng)?.into()
                } else {
                    DenseTernaryPolynomial::generate_random(n, p.df(), neg, rng)?.into()
                }
            }
        })
    }

    /// Sample T until f is invertible mod 3 (unless fast_fp) and mod q
    fn derive_private<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<PrivateHalf> {
        let n = self.params.n();
        let q = self.params.q() as i32;

        for _ in 0..self.config.max_attempts {
            let t = self.sample_t(rng)?;
            let mut f = Zeroizing::new(t.to_integer_polynomial()?);

            let fp = if self.params.fast_fp() {
                f.mult_scalar(3);
                f.coeffs[0] += 1;
                IntegerPolynomial::one(n)
            } else {
                match f.invert_f3() {
                    Some(fp) => fp,
                    None => continue,
                }
            };

            let fq = match f.invert_fq(q) {
                Some(fq) => Zeroizing::new(fq),
                None => continue,
            };
            return Ok(PrivateHalf { t, fp, fq });
        }

        Err(Error::Exhausted {
            context: "NtruKeyGenerator: f",
            attempts: self.config.max_attempts,
        })
    }

    /// Sample g with N/3 ones and N/3 - 1 negative ones until invertible mod 2
    fn derive_g<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<Zeroizing<IntegerPolynomial>> {
        let n = self.params.n();
        let dg = self.params.dg();

        for _ in 0..self.config.max_attempts {
            let g = DenseTernaryPolynomial::generate_random(n, dg, dg - 1, rng)?;
            let g = Zeroizing::new(g.to_integer_polynomial());
            if g.invert_f2().is_some() {
                return Ok(g);
            }
        }

        Err(Error::Exhausted {
            context: "NtruKeyGenerator: g",
            attempts: self.config.max_attempts,
        })
    }
}
