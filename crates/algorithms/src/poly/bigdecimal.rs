//! Fixed-point decimal polynomials
//!
//! Every coefficient is `mantissa / 10^scale` with one scale per polynomial.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use super::bigint::{div_round, BigIntPolynomial};
use super::karatsuba::{fold_cyclic, mult_recursive};
use crate::error::{Error, Result};

/// A polynomial in Q[x]/(x^N - 1) with decimal fixed-point coefficients
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigDecimalPolynomial {
    pub mantissas: Vec<BigInt>,
    pub scale: u32,
}

fn pow10(places: u32) -> BigInt {
    BigInt::from(10u32).pow(places)
}

impl BigDecimalPolynomial {
    /// Exact conversion from an integer polynomial
    pub fn from_integer(p: &BigIntPolynomial) -> Self {
        Self {
            mantissas: p.coeffs.clone(),
            scale: 0,
        }
    }

    /// `num / den` rounded to `places` decimal places
    pub fn from_ratio(num: &BigIntPolynomial, den: &BigInt, places: u32) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::param("denominator", "must be nonzero"));
        }
        let unit = pow10(places);
        Ok(Self {
            mantissas: num.coeffs.iter().map(|c| div_round(&(c * &unit), den)).collect(),
            scale: places,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mantissas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mantissas.is_empty()
    }

    /// Change the number of decimal places, rounding half away from zero
    pub fn rescale(&mut self, places: u32) {
        if places >= self.scale {
            let k = pow10(places - self.scale);
            for m in &mut self.mantissas {
                *m *= &k;
            }
        } else {
            let k = pow10(self.scale - places);
            for m in &mut self.mantissas {
                *m = div_round(m, &k);
            }
        }
        self.scale = places;
    }

    /// Add `b`; a longer `b` extends this polynomial
    pub fn add(&mut self, b: &BigDecimalPolynomial) {
        let mut b = b.clone();
        let scale = self.scale.max(b.scale);
        self.rescale(scale);
        b.rescale(scale);
        if b.len() > self.len() {
            self.mantissas.resize(b.len(), BigInt::zero());
        }
        for (a, x) in self.mantissas.iter_mut().zip(&b.mantissas) {
            *a += x;
        }
    }

    /// Divide every coefficient by two without losing precision
    pub fn halve(&mut self) {
        // m / 2 = 5m / 10
        for m in &mut self.mantissas {
            *m *= 5;
        }
        self.scale += 1;
    }

    /// Product with an integer polynomial, scale unchanged
    pub fn mult(&self, b: &BigIntPolynomial) -> Result<BigDecimalPolynomial> {
        if self.len() != b.len() {
            return Err(Error::Length {
                context: "BigDecimalPolynomial::mult",
                expected: self.len(),
                actual: b.len(),
            });
        }
        let full = mult_recursive(&self.mantissas, &b.coeffs);
        Ok(Self {
            mantissas: fold_cyclic(full, self.len()),
            scale: self.scale,
        })
    }

    /// Product of two decimal polynomials, rounded to the larger scale
    pub fn mult_decimal(&self, b: &BigDecimalPolynomial) -> Result<BigDecimalPolynomial> {
        if self.len() != b.len() {
            return Err(Error::Length {
                context: "BigDecimalPolynomial::mult_decimal",
                expected: self.len(),
                actual: b.len(),
            });
        }
        let full = mult_recursive(&self.mantissas, &b.mantissas);
        let mut product = Self {
            mantissas: fold_cyclic(full, self.len()),
            scale: self.scale + b.scale,
        };
        product.rescale(self.scale.max(b.scale));
        Ok(product)
    }

    /// Round every coefficient to the nearest integer, half away from zero
    pub fn round(&self) -> BigIntPolynomial {
        let unit = pow10(self.scale);
        BigIntPolynomial::from_coeffs(self.mantissas.iter().map(|m| div_round(m, &unit)).collect())
    }

    /// Approximate coefficient values
    pub fn to_f64(&self) -> Vec<f64> {
        let unit = 10f64.powi(self.scale as i32);
        self.mantissas
            .iter()
            .map(|m| m.to_f64().unwrap_or(f64::NAN) / unit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: &[i64]) -> BigIntPolynomial {
        BigIntPolynomial::from_coeffs(v.iter().map(|&x| BigInt::from(x)).collect())
    }

    #[test]
    fn test_ratio_and_round() {
        let p = BigDecimalPolynomial::from_ratio(&big(&[1, -2, 5]), &BigInt::from(3), 4).unwrap();
        assert_eq!(p.mantissas, big(&[3333, -6667, 16667]).coeffs);
        assert_eq!(p.round(), big(&[0, -1, 2]));
        assert!(BigDecimalPolynomial::from_ratio(&big(&[1]), &BigInt::zero(), 2).is_err());
    }

    #[test]
    fn test_halve_and_add() {
        let mut p = BigDecimalPolynomial::from_integer(&big(&[3, -1]));
        p.halve();
        assert_eq!(p.to_f64(), vec![1.5, -0.5]);

        let q = BigDecimalPolynomial::from_ratio(&big(&[1, 1]), &BigInt::from(4), 2).unwrap();
        p.add(&q);
        assert_eq!(p.scale, 2);
        assert_eq!(p.round(), big(&[2, 0]));
    }

    #[test]
    fn test_mult_decimal() {
        let half = BigDecimalPolynomial::from_ratio(&big(&[1, 0, 0]), &BigInt::from(2), 3).unwrap();
        let x = BigDecimalPolynomial::from_integer(&big(&[0, 4, 0]));
        let product = half.mult_decimal(&x).unwrap();
        assert_eq!(product.scale, 3);
        assert_eq!(product.round(), big(&[0, 2, 0]));
    }
}
