//! Polynomials with integer coefficients in Z[x]/(x^N - 1)
//!
//! Arithmetic mutates in place. Multiplication returns a new polynomial; call
//! sites that need the old value clone it first.

use zeroize::Zeroize;

use super::encode;
use super::karatsuba::{fold_cyclic, mult_recursive};
use crate::error::{Error, Result};
use pqlat_common::math_common::ceil_log2;

/// A polynomial of fixed length N with `i32` coefficients
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct IntegerPolynomial {
    pub coeffs: Vec<i32>,
}

impl IntegerPolynomial {
    /// The zero polynomial of length `n`
    pub fn new(n: usize) -> Self {
        Self { coeffs: vec![0; n] }
    }

    /// Wrap a coefficient vector
    pub fn from_coeffs(coeffs: Vec<i32>) -> Self {
        Self { coeffs }
    }

    /// The constant polynomial 1 of length `n`
    pub fn one(n: usize) -> Self {
        let mut p = Self::new(n);
        if n > 0 {
            p.coeffs[0] = 1;
        }
        p
    }

    /// Ring degree N
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Add `b`; a longer `b` extends this polynomial
    pub fn add(&mut self, b: &IntegerPolynomial) {
        if b.len() > self.len() {
            self.coeffs.resize(b.len(), 0);
        }
        for (a, &x) in self.coeffs.iter_mut().zip(&b.coeffs) {
            *a = a.wrapping_add(x);
        }
    }

    /// Add `b` and reduce mod `q`
    pub fn add_mod(&mut self, b: &IntegerPolynomial, q: i32) {
        self.add(b);
        self.mod_q(q);
    }

    /// Subtract `b`; a longer `b` extends this polynomial
    pub fn sub(&mut self, b: &IntegerPolynomial) {
        if b.len() > self.len() {
            self.coeffs.resize(b.len(), 0);
        }
        for (a, &x) in self.coeffs.iter_mut().zip(&b.coeffs) {
            *a = a.wrapping_sub(x);
        }
    }

    /// Subtract `b` and reduce mod `q`
    pub fn sub_mod(&mut self, b: &IntegerPolynomial, q: i32) {
        self.sub(b);
        self.mod_q(q);
    }

    /// Subtract `k` from every coefficient
    pub fn sub_scalar(&mut self, k: i32) {
        for c in &mut self.coeffs {
            *c -= k;
        }
    }

    /// Multiply every coefficient by `k`
    pub fn mult_scalar(&mut self, k: i32) {
        for c in &mut self.coeffs {
            *c = c.wrapping_mul(k);
        }
    }

    /// Truncating remainder; results keep the sign of the coefficient
    ///
    /// # Panics
    ///
    /// Panics if `q` is not positive.
    pub fn mod_q(&mut self, q: i32) {
        assert!(q > 0, "modulus must be positive");
        for c in &mut self.coeffs {
            *c %= q;
        }
    }

    /// Reduce into `[0, q)`; `q` must be positive
    pub fn mod_positive(&mut self, q: i32) {
        assert!(q > 0, "modulus must be positive");
        for c in &mut self.coeffs {
            *c = c.rem_euclid(q);
        }
    }

    /// Lift negative coefficients into `[0, q)`; positive ones are kept
    pub fn ensure_positive(&mut self, q: i32) {
        for c in &mut self.coeffs {
            if *c < 0 {
                *c = c.rem_euclid(q);
            }
        }
    }

    /// Reduce into `[-q/2, q/2]`
    pub fn center0(&mut self, q: i32) {
        let half = q / 2;
        for c in &mut self.coeffs {
            *c %= q;
            if *c < -half {
                *c += q;
            }
            if *c > half {
                *c -= q;
            }
        }
    }

    /// Reduce into `(-q/2, q/2]`
    pub fn mod_center(&mut self, q: i32) {
        let half = q / 2;
        for c in &mut self.coeffs {
            *c = c.rem_euclid(q);
            if *c > half {
                *c -= q;
            }
        }
    }

    /// Reduce into `{-1, 0, 1}`
    pub fn mod3(&mut self) {
        for c in &mut self.coeffs {
            *c = c.rem_euclid(3);
            if *c == 2 {
                *c = -1;
            }
        }
    }

    /// Divide by `k`, rounding half away from zero
    ///
    /// # Panics
    ///
    /// Panics if `k` is not positive.
    pub fn divide(&mut self, k: i32) {
        assert!(k > 0, "divisor must be positive");
        let half = k / 2;
        for c in &mut self.coeffs {
            *c = if *c >= 0 {
                (*c + half) / k
            } else {
                (*c - half) / k
            };
        }
    }

    /// Sum of all coefficients
    pub fn sum_coeffs(&self) -> i64 {
        self.coeffs.iter().map(|&c| c as i64).sum()
    }

    /// Number of coefficients equal to `value`
    pub fn count(&self, value: i32) -> usize {
        self.coeffs.iter().filter(|&&c| c == value).count()
    }

    /// Index of the highest nonzero coefficient, 0 for the zero polynomial
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0).unwrap_or(0)
    }

    /// True if every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// True for the constant polynomial 1
    pub fn equals_one(&self) -> bool {
        match self.coeffs.split_first() {
            Some((&first, rest)) => first == 1 && rest.iter().all(|&c| c == 0),
            None => false,
        }
    }

    /// True if every coefficient is in `{-1, 0, 1}`
    pub fn is_ternary(&self) -> bool {
        self.coeffs.iter().all(|c| (-1..=1).contains(c))
    }

    /// Squared norm after centering around the widest gap mod `q`
    ///
    /// The coefficients are first rotated so that the largest empty interval
    /// of the residues mod `q` straddles the wrap point, then the variance-like
    /// quantity `sum(c^2) - sum(c)^2 / N` is returned.
    pub fn centered_norm_sq(&self, q: i32) -> i64 {
        let n = self.len() as i64;
        if n == 0 {
            return 0;
        }
        let mut p = self.clone();
        p.shift_gap(q);

        let mut sum = 0i64;
        let mut sq_sum = 0i64;
        for &c in &p.coeffs {
            sum += c as i64;
            sq_sum += (c as i64) * (c as i64);
        }
        sq_sum - sum * sum / n
    }

    fn shift_gap(&mut self, q: i32) {
        self.center0(q);

        let mut sorted = self.coeffs.clone();
        sorted.sort_unstable();

        let mut max_range = 0;
        let mut max_range_start = 0;
        for w in sorted.windows(2) {
            let range = w[1] - w[0];
            if range > max_range {
                max_range = range;
                max_range_start = w[0];
            }
        }

        let (p_min, p_max) = match (sorted.first(), sorted.last()) {
            (Some(&a), Some(&b)) => (a, b),
            _ => return,
        };
        let wrap_gap = q - p_max + p_min;
        let shift = if wrap_gap > max_range {
            (p_max + p_min) / 2
        } else {
            max_range_start + max_range / 2 + q / 2
        };
        self.sub_scalar(shift);
        self.center0(q);
    }

    /// Product in Z[x]/(x^N - 1)
    ///
    /// Intermediate sums are carried in `i64`; the result wraps to `i32`.
    pub fn mult(&self, b: &IntegerPolynomial) -> Result<IntegerPolynomial> {
        let full = self.full_product(b)?;
        Ok(Self {
            coeffs: fold_cyclic(full, self.len())
                .into_iter()
                .map(|c| c as i32)
                .collect(),
        })
    }

    /// Product in Z_q[x]/(x^N - 1), coefficients in `[0, q)`
    pub fn mult_mod(&self, b: &IntegerPolynomial, q: i32) -> Result<IntegerPolynomial> {
        let full = self.full_product(b)?;
        let q = q as i64;
        Ok(Self {
            coeffs: fold_cyclic(full, self.len())
                .into_iter()
                .map(|c| c.rem_euclid(q) as i32)
                .collect(),
        })
    }

    fn full_product(&self, b: &IntegerPolynomial) -> Result<Vec<i64>> {
        if self.len() != b.len() {
            return Err(Error::Length {
                context: "IntegerPolynomial::mult",
                expected: self.len(),
                actual: b.len(),
            });
        }
        let a: Vec<i64> = self.coeffs.iter().map(|&c| c as i64).collect();
        let b: Vec<i64> = b.coeffs.iter().map(|&c| c as i64).collect();
        Ok(mult_recursive(&a, &b))
    }

    /// Fixed-width base-q encoding, `ceil(N * log2(q) / 8)` bytes
    ///
    /// Coefficients are reduced into `[0, q)` first.
    pub fn to_binary(&self, q: u32) -> Vec<u8> {
        let bits = ceil_log2(q as u64);
        let values: Vec<u32> = self
            .coeffs
            .iter()
            .map(|&c| c.rem_euclid(q as i32) as u32)
            .collect();
        encode::pack_bits(&values, bits)
    }

    /// Decode `n` coefficients from the base-q encoding
    pub fn from_binary(data: &[u8], n: usize, q: u32) -> Result<Self> {
        let bits = ceil_log2(q as u64);
        let values = encode::unpack_bits(data, n, bits)?;
        if values.iter().any(|&v| v >= q) {
            return Err(Error::Encoding {
                context: "IntegerPolynomial::from_binary",
                details: "coefficient not below the modulus",
            });
        }
        Ok(Self {
            coeffs: values.into_iter().map(|v| v as i32).collect(),
        })
    }

    /// Tight ternary encoding (base 3, big-endian)
    pub fn to_binary3_tight(&self) -> Result<Vec<u8>> {
        encode::encode_tight_ternary(&self.coeffs)
    }

    /// Decode `n` ternary coefficients from the tight encoding
    pub fn from_binary3_tight(data: &[u8], n: usize) -> Result<Self> {
        Ok(Self {
            coeffs: encode::decode_tight_ternary(data, n)?,
        })
    }

    /// SVES ternary encoding, three bits per coefficient pair
    pub fn to_binary3_sves(&self, skip_first: bool) -> Result<Vec<u8>> {
        encode::encode_sves(&self.coeffs, skip_first)
    }

    /// Decode an SVES buffer into `n` ternary coefficients
    pub fn from_binary3_sves(data: &[u8], n: usize, skip_first: bool) -> Self {
        Self {
            coeffs: encode::decode_sves(data, n, skip_first),
        }
    }

    /// Two bits per coefficient, the residue mod 4
    pub fn to_binary4(&self) -> Vec<u8> {
        encode::encode_mod4(&self.coeffs)
    }
}

impl core::fmt::Debug for IntegerPolynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntegerPolynomial")
            .field("n", &self.len())
            .field("coeffs", &"[REDACTED]")
            .finish()
    }
}

impl From<Vec<i32>> for IntegerPolynomial {
    fn from(coeffs: Vec<i32>) -> Self {
        Self { coeffs }
    }
}

impl AsRef<[i32]> for IntegerPolynomial {
    fn as_ref(&self) -> &[i32] {
        &self.coeffs
    }
}
