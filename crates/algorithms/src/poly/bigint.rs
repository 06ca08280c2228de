//! Polynomials with arbitrary precision integer coefficients

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use super::integer::IntegerPolynomial;
use super::karatsuba::{fold_cyclic, mult_recursive};
use crate::error::{Error, Result};

/// A polynomial in Z[x]/(x^N - 1) with `BigInt` coefficients
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigIntPolynomial {
    pub coeffs: Vec<BigInt>,
}

impl BigIntPolynomial {
    /// The zero polynomial of length `n`
    pub fn new(n: usize) -> Self {
        Self {
            coeffs: vec![BigInt::zero(); n],
        }
    }

    pub fn from_coeffs(coeffs: Vec<BigInt>) -> Self {
        Self { coeffs }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Add `b`; a longer `b` extends this polynomial
    pub fn add(&mut self, b: &BigIntPolynomial) {
        if b.len() > self.len() {
            self.coeffs.resize(b.len(), BigInt::zero());
        }
        for (a, x) in self.coeffs.iter_mut().zip(&b.coeffs) {
            *a += x;
        }
    }

    /// Subtract `b`; a longer `b` extends this polynomial
    pub fn sub(&mut self, b: &BigIntPolynomial) {
        if b.len() > self.len() {
            self.coeffs.resize(b.len(), BigInt::zero());
        }
        for (a, x) in self.coeffs.iter_mut().zip(&b.coeffs) {
            *a -= x;
        }
    }

    pub fn mult_scalar(&mut self, k: &BigInt) {
        for c in &mut self.coeffs {
            *c *= k;
        }
    }

    /// Product in Z[x]/(x^N - 1)
    pub fn mult(&self, b: &BigIntPolynomial) -> Result<BigIntPolynomial> {
        if self.len() != b.len() {
            return Err(Error::Length {
                context: "BigIntPolynomial::mult",
                expected: self.len(),
                actual: b.len(),
            });
        }
        let full = mult_recursive(&self.coeffs, &b.coeffs);
        Ok(Self {
            coeffs: fold_cyclic(full, self.len()),
        })
    }

    /// Reduce into `[0, m)`
    pub fn mod_positive(&mut self, m: &BigInt) {
        for c in &mut self.coeffs {
            *c = c.mod_floor(m);
        }
    }

    /// Reduce into `(-m/2, m/2]`
    pub fn mod_center(&mut self, m: &BigInt) {
        let half: BigInt = m / 2;
        for c in &mut self.coeffs {
            *c = c.mod_floor(m);
            if *c > half {
                *c -= m;
            }
        }
    }

    /// Divide by `d`, rounding half away from zero
    pub fn div_round(&mut self, d: &BigInt) -> Result<()> {
        if d.is_zero() {
            return Err(Error::param("divisor", "must be nonzero"));
        }
        for c in &mut self.coeffs {
            *c = div_round(c, d);
        }
        Ok(())
    }

    /// Largest coefficient magnitude
    pub fn max_abs_coeff(&self) -> BigInt {
        self.coeffs
            .iter()
            .map(|c| c.abs())
            .max()
            .unwrap_or_else(BigInt::zero)
    }

    /// Narrow to `i32` coefficients, failing if any does not fit
    pub fn to_integer_polynomial(&self) -> Result<IntegerPolynomial> {
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| {
                c.to_i32().ok_or(Error::Processing {
                    operation: "BigIntPolynomial::to_integer_polynomial",
                    details: "coefficient does not fit in 32 bits",
                })
            })
            .collect::<Result<Vec<i32>>>()?;
        Ok(IntegerPolynomial::from_coeffs(coeffs))
    }
}

impl From<&IntegerPolynomial> for BigIntPolynomial {
    fn from(p: &IntegerPolynomial) -> Self {
        Self {
            coeffs: p.coeffs.iter().map(|&c| BigInt::from(c)).collect(),
        }
    }
}

/// `n / d` rounded half away from zero
pub(crate) fn div_round(n: &BigInt, d: &BigInt) -> BigInt {
    let negative = n.is_negative() != d.is_negative();
    let (q, r) = n.abs().div_rem(&d.abs());
    let q = if r * 2 >= d.abs() { q + 1 } else { q };
    if negative {
        -q
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: &[i64]) -> BigIntPolynomial {
        BigIntPolynomial::from_coeffs(v.iter().map(|&x| BigInt::from(x)).collect())
    }

    #[test]
    fn test_mult_matches_integer_path() {
        let a = IntegerPolynomial::from_coeffs((0..50).map(|i| (i * 7) % 13 - 6).collect());
        let b = IntegerPolynomial::from_coeffs((0..50).map(|i| (i * 5) % 3 - 1).collect());
        let expected = BigIntPolynomial::from(&a.mult(&b).unwrap());
        let got = BigIntPolynomial::from(&a).mult(&BigIntPolynomial::from(&b)).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_div_round() {
        let mut p = big(&[5, -5, 4, -4, 7]);
        p.div_round(&BigInt::from(2)).unwrap();
        assert_eq!(p, big(&[3, -3, 2, -2, 4]));
        assert!(p.div_round(&BigInt::zero()).is_err());
    }

    #[test]
    fn test_mod_center_and_narrowing() {
        let mut p = big(&[9, 10, -1, 20]);
        p.mod_center(&BigInt::from(10));
        assert_eq!(p, big(&[-1, 0, -1, 0]));
        assert_eq!(p.max_abs_coeff(), BigInt::from(1));
        assert_eq!(p.to_integer_polynomial().unwrap().coeffs, vec![-1, 0, -1, 0]);

        let huge = big(&[i64::MAX]);
        assert!(huge.to_integer_polynomial().is_err());
    }
}
