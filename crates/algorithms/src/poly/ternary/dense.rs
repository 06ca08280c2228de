//! Ternary polynomials stored as full coefficient arrays

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{blinding_coeffs, random_coeffs};
use crate::error::{validate, Result};
use crate::mgf::IndexGenerator;
use crate::poly::integer::IntegerPolynomial;

/// Coefficient array confined to `{-1, 0, 1}`
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct DenseTernaryPolynomial {
    coeffs: IntegerPolynomial,
}

impl DenseTernaryPolynomial {
    /// Wrap coefficients, which must all be in `{-1, 0, 1}`
    pub fn new(coeffs: IntegerPolynomial) -> Result<Self> {
        for &c in &coeffs.coeffs {
            validate::ternary("DenseTernaryPolynomial", c)?;
        }
        Ok(Self { coeffs })
    }

    /// `ones` +1 and `neg_ones` -1 at random positions
    pub fn generate_random<R: RngCore + CryptoRng + ?Sized>(
        n: usize,
        ones: usize,
        neg_ones: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self {
            coeffs: IntegerPolynomial::from_coeffs(random_coeffs(n, ones, neg_ones, rng)?),
        })
    }

    /// `dr` +1 and `dr` -1 at positions drawn from `ig`
    pub fn generate_blinding(ig: &mut IndexGenerator, n: usize, dr: usize) -> Result<Self> {
        Ok(Self {
            coeffs: IntegerPolynomial::from_coeffs(blinding_coeffs(ig, n, dr)?),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn coeffs(&self) -> &[i32] {
        &self.coeffs.coeffs
    }

    /// Product with `b` through the Karatsuba path
    pub fn mult(&self, b: &IntegerPolynomial) -> Result<IntegerPolynomial> {
        self.coeffs.mult(b)
    }

    /// Product with `b` in Z_q[x]/(x^N - 1), coefficients in `[0, q)`
    pub fn mult_mod(&self, b: &IntegerPolynomial, q: i32) -> Result<IntegerPolynomial> {
        self.coeffs.mult_mod(b, q)
    }

    pub fn to_integer_polynomial(&self) -> IntegerPolynomial {
        self.coeffs.clone()
    }

    /// Tight ternary encoding
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        self.coeffs.to_binary3_tight()
    }

    pub fn from_binary(data: &[u8], n: usize) -> Result<Self> {
        Ok(Self {
            coeffs: IntegerPolynomial::from_binary3_tight(data, n)?,
        })
    }
}

impl core::fmt::Debug for DenseTernaryPolynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DenseTernaryPolynomial")
            .field("n", &self.len())
            .field("coeffs", &"[REDACTED]")
            .finish()
    }
}
