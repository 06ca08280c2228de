//! Product-form polynomials f1 * f2 + f3

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::SparseTernaryPolynomial;
use crate::error::{Error, Result};
use crate::mgf::IndexGenerator;
use crate::poly::integer::IntegerPolynomial;

/// Three sparse ternary factors standing for f1 * f2 + f3
///
/// The composite is generally not ternary and is never stored expanded.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct ProductFormPolynomial {
    f1: SparseTernaryPolynomial,
    f2: SparseTernaryPolynomial,
    f3: SparseTernaryPolynomial,
}

impl ProductFormPolynomial {
    pub fn new(
        f1: SparseTernaryPolynomial,
        f2: SparseTernaryPolynomial,
        f3: SparseTernaryPolynomial,
    ) -> Result<Self> {
        if f1.len() != f2.len() || f1.len() != f3.len() {
            return Err(Error::polynomial(
                "ProductFormPolynomial",
                "factors have different ring degrees",
            ));
        }
        Ok(Self { f1, f2, f3 })
    }

    /// Random factors with weights (df1, df1), (df2, df2), (df3_ones, df3_neg_ones)
    pub fn generate_random<R: RngCore + CryptoRng + ?Sized>(
        n: usize,
        df1: usize,
        df2: usize,
        df3_ones: usize,
        df3_neg_ones: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let f1 = SparseTernaryPolynomial::generate_random(n, df1, df1, rng)?;
        let f2 = SparseTernaryPolynomial::generate_random(n, df2, df2, rng)?;
        let f3 = SparseTernaryPolynomial::generate_random(n, df3_ones, df3_neg_ones, rng)?;
        Ok(Self { f1, f2, f3 })
    }

    /// Blinding factors drawn in order f1, f2, f3 from one index stream
    pub fn generate_blinding(
        ig: &mut IndexGenerator,
        n: usize,
        dr1: usize,
        dr2: usize,
        dr3: usize,
    ) -> Result<Self> {
        let f1 = SparseTernaryPolynomial::generate_blinding(ig, n, dr1)?;
        let f2 = SparseTernaryPolynomial::generate_blinding(ig, n, dr2)?;
        let f3 = SparseTernaryPolynomial::generate_blinding(ig, n, dr3)?;
        Ok(Self { f1, f2, f3 })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.f1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.f1.is_empty()
    }

    pub fn factors(
        &self,
    ) -> (
        &SparseTernaryPolynomial,
        &SparseTernaryPolynomial,
        &SparseTernaryPolynomial,
    ) {
        (&self.f1, &self.f2, &self.f3)
    }

    /// f1 * (f2 * b) + f3 * b
    pub fn mult(&self, b: &IntegerPolynomial) -> Result<IntegerPolynomial> {
        let mut c = self.f1.mult(&self.f2.mult(b)?)?;
        c.add(&self.f3.mult(b)?);
        Ok(c)
    }

    /// Product with `b` in Z_q[x]/(x^N - 1), coefficients in `[0, q)`
    pub fn mult_mod(&self, b: &IntegerPolynomial, q: i32) -> Result<IntegerPolynomial> {
        let mut c = self.mult(b)?;
        c.mod_positive(q);
        Ok(c)
    }

    /// Expanded coefficients of f1 * f2 + f3
    pub fn to_integer_polynomial(&self) -> Result<IntegerPolynomial> {
        let mut c = self.f1.mult(&self.f2.to_integer_polynomial())?;
        c.add(&self.f3.to_integer_polynomial());
        Ok(c)
    }

    /// Concatenated sparse encodings of f1, f2, f3
    pub fn to_binary(&self) -> Vec<u8> {
        let mut out = self.f1.to_binary();
        out.extend_from_slice(&self.f2.to_binary());
        out.extend_from_slice(&self.f3.to_binary());
        out
    }

    pub fn from_binary(data: &[u8], n: usize) -> Result<Self> {
        let (f1, used1) = SparseTernaryPolynomial::read_binary(data, n)?;
        let (f2, used2) = SparseTernaryPolynomial::read_binary(&data[used1..], n)?;
        let (f3, used3) = SparseTernaryPolynomial::read_binary(&data[used1 + used2..], n)?;
        let used = used1 + used2 + used3;
        if used != data.len() {
            return Err(Error::Length {
                context: "ProductFormPolynomial::from_binary",
                expected: used,
                actual: data.len(),
            });
        }
        Ok(Self { f1, f2, f3 })
    }
}

impl core::fmt::Debug for ProductFormPolynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductFormPolynomial")
            .field("n", &self.len())
            .field("factors", &"[REDACTED]")
            .finish()
    }
}
