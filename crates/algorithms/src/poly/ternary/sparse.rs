//! Ternary polynomials stored as index lists

use byteorder::{ByteOrder, LittleEndian};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{blinding_coeffs, random_coeffs};
use crate::error::{validate, Error, Result};
use crate::mgf::IndexGenerator;
use crate::poly::encode::{pack_bits, packed_len, unpack_bits};
use crate::poly::integer::IntegerPolynomial;

/// Bits per packed index; N is at most 2^11
pub const BITS_PER_INDEX: u32 = 11;

/// Ascending, disjoint positions of the +1 and -1 coefficients
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct SparseTernaryPolynomial {
    n: usize,
    ones: Vec<usize>,
    neg_ones: Vec<usize>,
}

impl SparseTernaryPolynomial {
    /// Build from index lists in any order
    pub fn new(n: usize, mut ones: Vec<usize>, mut neg_ones: Vec<usize>) -> Result<Self> {
        ones.sort_unstable();
        neg_ones.sort_unstable();

        let mut seen = vec![false; n];
        for &i in ones.iter().chain(&neg_ones) {
            if i >= n {
                return Err(Error::polynomial(
                    "SparseTernaryPolynomial",
                    format!("index {} out of range for N = {}", i, n),
                ));
            }
            if seen[i] {
                return Err(Error::polynomial(
                    "SparseTernaryPolynomial",
                    format!("index {} appears twice", i),
                ));
            }
            seen[i] = true;
        }
        Ok(Self { n, ones, neg_ones })
    }

    /// Build from coefficients, which must all be in `{-1, 0, 1}`
    pub fn from_coeffs(p: &IntegerPolynomial) -> Result<Self> {
        let mut ones = Vec::new();
        let mut neg_ones = Vec::new();
        for (i, &c) in p.coeffs.iter().enumerate() {
            match c {
                1 => ones.push(i),
                -1 => neg_ones.push(i),
                0 => {}
                _ => validate::ternary("SparseTernaryPolynomial", c)?,
            }
        }
        Ok(Self {
            n: p.len(),
            ones,
            neg_ones,
        })
    }

    /// `ones` +1 and `neg_ones` -1 at random positions
    pub fn generate_random<R: RngCore + CryptoRng + ?Sized>(
        n: usize,
        ones: usize,
        neg_ones: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let coeffs = random_coeffs(n, ones, neg_ones, rng)?;
        Self::from_coeffs(&IntegerPolynomial::from_coeffs(coeffs))
    }

    /// `dr` +1 and `dr` -1 at positions drawn from `ig`
    pub fn generate_blinding(ig: &mut IndexGenerator, n: usize, dr: usize) -> Result<Self> {
        let coeffs = blinding_coeffs(ig, n, dr)?;
        Self::from_coeffs(&IntegerPolynomial::from_coeffs(coeffs))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn ones(&self) -> &[usize] {
        &self.ones
    }

    pub fn neg_ones(&self) -> &[usize] {
        &self.neg_ones
    }

    /// Product with `b`: one rotated copy of `b` per nonzero coefficient
    pub fn mult(&self, b: &IntegerPolynomial) -> Result<IntegerPolynomial> {
        let n = self.n;
        if b.len() != n {
            return Err(Error::Length {
                context: "SparseTernaryPolynomial::mult",
                expected: n,
                actual: b.len(),
            });
        }

        let mut c = vec![0i32; n];
        for &i in &self.ones {
            let (lo, hi) = c.split_at_mut(i);
            for (x, &y) in hi.iter_mut().zip(&b.coeffs[..n - i]) {
                *x = x.wrapping_add(y);
            }
            for (x, &y) in lo.iter_mut().zip(&b.coeffs[n - i..]) {
                *x = x.wrapping_add(y);
            }
        }
        for &i in &self.neg_ones {
            let (lo, hi) = c.split_at_mut(i);
            for (x, &y) in hi.iter_mut().zip(&b.coeffs[..n - i]) {
                *x = x.wrapping_sub(y);
            }
            for (x, &y) in lo.iter_mut().zip(&b.coeffs[n - i..]) {
                *x = x.wrapping_sub(y);
            }
        }
        Ok(IntegerPolynomial::from_coeffs(c))
    }

    /// Product with `b` in Z_q[x]/(x^N - 1), coefficients in `[0, q)`
    pub fn mult_mod(&self, b: &IntegerPolynomial, q: i32) -> Result<IntegerPolynomial> {
        let mut c = self.mult(b)?;
        c.mod_positive(q);
        Ok(c)
    }

    pub fn to_integer_polynomial(&self) -> IntegerPolynomial {
        let mut coeffs = vec![0i32; self.n];
        for &i in &self.ones {
            coeffs[i] = 1;
        }
        for &i in &self.neg_ones {
            coeffs[i] = -1;
        }
        IntegerPolynomial::from_coeffs(coeffs)
    }

    /// Encoded length in bytes
    pub fn encoded_len(&self) -> usize {
        4 + packed_len(self.ones.len(), BITS_PER_INDEX)
            + packed_len(self.neg_ones.len(), BITS_PER_INDEX)
    }

    /// `count(ones) || count(neg_ones)` as u16 LE, then each list at 11 bits
    pub fn to_binary(&self) -> Vec<u8> {
        let mut out = vec![0u8; 4];
        LittleEndian::write_u16(&mut out[0..2], self.ones.len() as u16);
        LittleEndian::write_u16(&mut out[2..4], self.neg_ones.len() as u16);
        out.reserve(self.encoded_len() - 4);
        let ones: Vec<u32> = self.ones.iter().map(|&i| i as u32).collect();
        let neg_ones: Vec<u32> = self.neg_ones.iter().map(|&i| i as u32).collect();
        out.extend_from_slice(&pack_bits(&ones, BITS_PER_INDEX));
        out.extend_from_slice(&pack_bits(&neg_ones, BITS_PER_INDEX));
        out
    }

    /// Decode one polynomial from the front of `data`, returning bytes used
    pub fn read_binary(data: &[u8], n: usize) -> Result<(Self, usize)> {
        if data.len() < 4 {
            return Err(Error::Length {
                context: "SparseTernaryPolynomial::from_binary",
                expected: 4,
                actual: data.len(),
            });
        }
        let num_ones = LittleEndian::read_u16(&data[0..2]) as usize;
        let num_neg_ones = LittleEndian::read_u16(&data[2..4]) as usize;
        if num_ones + num_neg_ones > n {
            return Err(Error::polynomial(
                "SparseTernaryPolynomial::from_binary",
                "more nonzero coefficients than N",
            ));
        }

        let ones_len = packed_len(num_ones, BITS_PER_INDEX);
        let neg_len = packed_len(num_neg_ones, BITS_PER_INDEX);
        let total = 4 + ones_len + neg_len;
        if data.len() < total {
            return Err(Error::Length {
                context: "SparseTernaryPolynomial::from_binary",
                expected: total,
                actual: data.len(),
            });
        }

        let ones = unpack_bits(&data[4..4 + ones_len], num_ones, BITS_PER_INDEX)?;
        let neg_ones = unpack_bits(&data[4 + ones_len..total], num_neg_ones, BITS_PER_INDEX)?;
        let poly = Self::new(
            n,
            ones.into_iter().map(|i| i as usize).collect(),
            neg_ones.into_iter().map(|i| i as usize).collect(),
        )?;
        Ok((poly, total))
    }

    /// Decode from exactly `data`
    pub fn from_binary(data: &[u8], n: usize) -> Result<Self> {
        let (poly, used) = Self::read_binary(data, n)?;
        if used != data.len() {
            return Err(Error::Length {
                context: "SparseTernaryPolynomial::from_binary",
                expected: used,
                actual: data.len(),
            });
        }
        Ok(poly)
    }
}

impl core::fmt::Debug for SparseTernaryPolynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SparseTernaryPolynomial")
            .field("n", &self.n)
            .field("indices", &"[REDACTED]")
            .finish()
    }
}
