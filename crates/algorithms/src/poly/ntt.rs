//! Negacyclic number theoretic transform over Z_q[x]/(x^N + 1)
//!
//! Twiddles are powers of a primitive 2N-th root of unity psi, found at
//! construction by searching for an element with psi^N = -1. The forward
//! transform is Cooley-Tukey with bit-reversed output, the inverse is
//! Gentleman-Sande taking bit-reversed input, so pointwise products need no
//! reordering.

use primality_test::is_prime;

use crate::error::{validate, Error, Result};
use pqlat_common::math_common::mod_pow;

#[inline(always)]
fn pow_mod(base: u32, exp: u64, q: u32) -> u32 {
    mod_pow(base as u64, exp, q as u64) as u32
}

#[inline(always)]
fn mul_mod(a: u32, b: u32, q: u32) -> u32 {
    ((a as u64 * b as u64) % q as u64) as u32
}

#[inline(always)]
fn add_mod(a: u32, b: u32, q: u32) -> u32 {
    let t = a + b;
    if t >= q {
        t - q
    } else {
        t
    }
}

#[inline(always)]
fn sub_mod(a: u32, b: u32, q: u32) -> u32 {
    if a >= b {
        a - b
    } else {
        a + q - b
    }
}

fn bit_reverse(mut x: usize, bits: u32) -> usize {
    let mut r = 0;
    for _ in 0..bits {
        r = (r << 1) | (x & 1);
        x >>= 1;
    }
    r
}

/// Precomputed twiddles for one (N, q) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NttContext {
    n: usize,
    q: u32,
    psi_rev: Vec<u32>,
    psi_inv_rev: Vec<u32>,
    n_inv: u32,
}

impl NttContext {
    /// Build the context; N must be a power of two and q a prime with q = 1 mod 2N
    pub fn new(n: usize, q: u32) -> Result<Self> {
        validate::parameter(n >= 2 && n.is_power_of_two(), "N", "must be a power of two")?;
        validate::parameter(q < 1 << 30 && is_prime(q as u64), "q", "must be a prime below 2^30")?;
        let two_n = 2 * n as u64;
        validate::parameter((q as u64 - 1) % two_n == 0, "q", "must be 1 mod 2N")?;

        let psi = Self::find_root(n, q).ok_or(Error::Processing {
            operation: "NttContext::new",
            details: "no primitive 2N-th root of unity",
        })?;
        let psi_inv = pow_mod(psi, two_n - 1, q);

        let bits = n.trailing_zeros();
        let mut psi_rev = vec![0u32; n];
        let mut psi_inv_rev = vec![0u32; n];
        for (i, (f, b)) in psi_rev.iter_mut().zip(psi_inv_rev.iter_mut()).enumerate() {
            let e = bit_reverse(i, bits) as u64;
            *f = pow_mod(psi, e, q);
            *b = pow_mod(psi_inv, e, q);
        }
        let n_inv = pow_mod(n as u32 % q, q as u64 - 2, q);

        Ok(Self {
            n,
            q,
            psi_rev,
            psi_inv_rev,
            n_inv,
        })
    }

    // psi = g^((q-1)/2N) is a primitive 2N-th root exactly when psi^N = -1
    fn find_root(n: usize, q: u32) -> Option<u32> {
        let exp = (q as u64 - 1) / (2 * n as u64);
        (2..q)
            .map(|g| pow_mod(g, exp, q))
            .find(|&psi| pow_mod(psi, n as u64, q) == q - 1)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn modulus(&self) -> u32 {
        self.q
    }

    /// Forward transform in place; input coefficients in `[0, q)`
    pub fn forward(&self, a: &mut [u32]) -> Result<()> {
        self.check_len(a.len())?;
        let q = self.q;
        let mut t = self.n;
        let mut m = 1;
        while m < self.n {
            t /= 2;
            for i in 0..m {
                let j1 = 2 * i * t;
                let s = self.psi_rev[m + i];
                for j in j1..j1 + t {
                    let u = a[j];
                    let v = mul_mod(a[j + t], s, q);
                    a[j] = add_mod(u, v, q);
                    a[j + t] = sub_mod(u, v, q);
                }
            }
            m *= 2;
        }
        Ok(())
    }

    /// Inverse transform in place
    pub fn inverse(&self, a: &mut [u32]) -> Result<()> {
        self.check_len(a.len())?;
        let q = self.q;
        let mut t = 1;
        let mut m = self.n;
        while m > 1 {
            let h = m / 2;
            let mut j1 = 0;
            for i in 0..h {
                let s = self.psi_inv_rev[h + i];
                for j in j1..j1 + t {
                    let u = a[j];
                    let v = a[j + t];
                    a[j] = add_mod(u, v, q);
                    a[j + t] = mul_mod(sub_mod(u, v, q), s, q);
                }
                j1 += 2 * t;
            }
            t *= 2;
            m = h;
        }
        for x in a.iter_mut() {
            *x = mul_mod(*x, self.n_inv, q);
        }
        Ok(())
    }

    /// Pointwise product of two transformed vectors
    pub fn pointwise(&self, a: &[u32], b: &[u32]) -> Result<Vec<u32>> {
        self.check_len(a.len())?;
        self.check_len(b.len())?;
        Ok(a.iter().zip(b).map(|(&x, &y)| mul_mod(x, y, self.q)).collect())
    }

    /// Product in Z_q[x]/(x^N + 1) of two coefficient vectors in `[0, q)`
    pub fn multiply(&self, a: &[u32], b: &[u32]) -> Result<Vec<u32>> {
        let mut fa = a.to_vec();
        let mut fb = b.to_vec();
        self.forward(&mut fa)?;
        self.forward(&mut fb)?;
        let mut c = self.pointwise(&fa, &fb)?;
        self.inverse(&mut c)?;
        Ok(c)
    }

    /// Lift signed coefficients into `[0, q)`
    pub fn reduce_signed(&self, a: &[i32]) -> Vec<u32> {
        a.iter()
            .map(|&x| (x as i64).rem_euclid(self.q as i64) as u32)
            .collect()
    }

    /// Map `[0, q)` to `(-q/2, q/2]`
    pub fn center(&self, a: &[u32]) -> Vec<i32> {
        let half = self.q / 2;
        a.iter()
            .map(|&x| {
                if x > half {
                    x as i32 - self.q as i32
                } else {
                    x as i32
                }
            })
            .collect()
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.n {
            return Err(Error::Length {
                context: "NttContext",
                expected: self.n,
                actual: len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
