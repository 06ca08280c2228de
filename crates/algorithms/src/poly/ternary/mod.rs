//! Ternary polynomials
//!
//! Private and blinding polynomials take one of three representations,
//! dispatched through the closed [`Polynomial`] enum.

mod dense;
mod product_form;
mod sparse;

pub use dense::DenseTernaryPolynomial;
pub use product_form::ProductFormPolynomial;
pub use sparse::{SparseTernaryPolynomial, BITS_PER_INDEX};

use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use super::integer::IntegerPolynomial;
use crate::error::{Error, Result};
use crate::mgf::IndexGenerator;

/// A private or blinding polynomial
#[derive(Clone, PartialEq, Eq)]
pub enum Polynomial {
    Sparse(SparseTernaryPolynomial),
    Dense(DenseTernaryPolynomial),
    ProductForm(ProductFormPolynomial),
}

impl Polynomial {
    /// Ring degree N
    pub fn len(&self) -> usize {
        match self {
            Polynomial::Sparse(p) => p.len(),
            Polynomial::Dense(p) => p.len(),
            Polynomial::ProductForm(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Product with `b` in Z[x]/(x^N - 1)
    pub fn mult(&self, b: &IntegerPolynomial) -> Result<IntegerPolynomial> {
        match self {
            Polynomial::Sparse(p) => p.mult(b),
            Polynomial::Dense(p) => p.mult(b),
            Polynomial::ProductForm(p) => p.mult(b),
        }
    }

    /// Product with `b` in Z_q[x]/(x^N - 1), coefficients in `[0, q)`
    pub fn mult_mod(&self, b: &IntegerPolynomial, q: i32) -> Result<IntegerPolynomial> {
        let mut c = self.mult(b)?;
        c.mod_positive(q);
        Ok(c)
    }

    /// Materialize the coefficient vector
    pub fn to_integer_polynomial(&self) -> Result<IntegerPolynomial> {
        match self {
            Polynomial::Sparse(p) => Ok(p.to_integer_polynomial()),
            Polynomial::Dense(p) => Ok(p.to_integer_polynomial()),
            Polynomial::ProductForm(p) => p.to_integer_polynomial(),
        }
    }
}

impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        match self {
            Polynomial::Sparse(p) => p.zeroize(),
            Polynomial::Dense(p) => p.zeroize(),
            Polynomial::ProductForm(p) => p.zeroize(),
        }
    }
}

impl core::fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kind = match self {
            Polynomial::Sparse(_) => "Sparse",
            Polynomial::Dense(_) => "Dense",
            Polynomial::ProductForm(_) => "ProductForm",
        };
        write!(f, "Polynomial::{}(n={}, [REDACTED])", kind, self.len())
    }
}

impl From<SparseTernaryPolynomial> for Polynomial {
    fn from(p: SparseTernaryPolynomial) -> Self {
        Polynomial::Sparse(p)
    }
}

impl From<DenseTernaryPolynomial> for Polynomial {
    fn from(p: DenseTernaryPolynomial) -> Self {
        Polynomial::Dense(p)
    }
}

impl From<ProductFormPolynomial> for Polynomial {
    fn from(p: ProductFormPolynomial) -> Self {
        Polynomial::ProductForm(p)
    }
}

fn check_counts(context: &'static str, n: usize, ones: usize, neg_ones: usize) -> Result<()> {
    if ones + neg_ones > n {
        return Err(Error::param(
            context,
            format!("{} nonzero coefficients do not fit in N = {}", ones + neg_ones, n),
        ));
    }
    Ok(())
}

/// Coefficients with `ones` +1 and `neg_ones` -1 at uniformly drawn positions
pub(crate) fn random_coeffs<R: RngCore + CryptoRng + ?Sized>(
    n: usize,
    ones: usize,
    neg_ones: usize,
    rng: &mut R,
) -> Result<Vec<i32>> {
    check_counts("ternary weight", n, ones, neg_ones)?;
    let mut coeffs = vec![0i32; n];
    for (value, count) in [(1, ones), (-1, neg_ones)] {
        let mut placed = 0;
        while placed < count {
            let i = rng.gen_range(0..n);
            if coeffs[i] == 0 {
                coeffs[i] = value;
                placed += 1;
            }
        }
    }
    Ok(coeffs)
}

/// Coefficients with `dr` +1 and `dr` -1 at positions from an index generator
pub(crate) fn blinding_coeffs(ig: &mut IndexGenerator, n: usize, dr: usize) -> Result<Vec<i32>> {
    check_counts("blinding weight", n, dr, dr)?;
    if ig.n() != n {
        return Err(Error::param("N", "index generator has a different ring degree"));
    }
    let mut coeffs = vec![0i32; n];
    for value in [1, -1] {
        let mut placed = 0;
        while placed < dr {
            let i = ig.next_index();
            if coeffs[i] == 0 {
                coeffs[i] = value;
                placed += 1;
            }
        }
    }
    Ok(coeffs)
}

#[cfg(test)]
mod tests;
