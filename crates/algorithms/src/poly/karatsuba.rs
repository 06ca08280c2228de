//! Recursive three-multiplication polynomial product
//!
//! Operands are split into a low half of `n / 2` coefficients and a high half
//! of the rest. The three sub-products c1 = lo*lo, c2 = hi*hi and
//! c3 = (lo+hi)*(lo+hi) combine as c1 + x^n1 (c3 - c1 - c2) + x^2n1 c2.

use core::ops::{AddAssign, SubAssign};

use num_bigint::BigInt;
use num_traits::Zero;

/// Operand length at or below which the schoolbook product is used
pub const SCHOOLBOOK_THRESHOLD: usize = 32;

/// Coefficient ring for the recursive product
pub trait Coefficient:
    Clone + Zero + for<'a> AddAssign<&'a Self> + for<'a> SubAssign<&'a Self>
{
    /// Product of two coefficients
    fn mul_ref(&self, other: &Self) -> Self;
}

impl Coefficient for i64 {
    #[inline(always)]
    fn mul_ref(&self, other: &Self) -> Self {
        self.wrapping_mul(*other)
    }
}

impl Coefficient for BigInt {
    #[inline(always)]
    fn mul_ref(&self, other: &Self) -> Self {
        self * other
    }
}

/// Quadratic product, `a.len() + b.len() - 1` terms
pub fn schoolbook<T: Coefficient>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut c = vec![T::zero(); a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            c[i + j] += &ai.mul_ref(bj);
        }
    }
    c
}

/// Full product of two equal-length operands, `2n - 1` terms
pub fn mult_recursive<T: Coefficient>(a: &[T], b: &[T]) -> Vec<T> {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    if n <= SCHOOLBOOK_THRESHOLD {
        return schoolbook(a, b);
    }

    let n1 = n / 2;
    let (a_lo, a_hi) = a.split_at(n1);
    let (b_lo, b_hi) = b.split_at(n1);

    let c1 = mult_recursive(a_lo, b_lo);
    let c2 = mult_recursive(a_hi, b_hi);
    let c3 = mult_recursive(&fold_halves(a_lo, a_hi), &fold_halves(b_lo, b_hi));

    let mut c = vec![T::zero(); 2 * n - 1];
    for (i, v) in c1.iter().enumerate() {
        c[i] += v;
    }
    for (i, mut v) in c3.into_iter().enumerate() {
        if let Some(x) = c1.get(i) {
            v -= x;
        }
        if let Some(x) = c2.get(i) {
            v -= x;
        }
        c[n1 + i] += &v;
    }
    for (i, v) in c2.iter().enumerate() {
        c[2 * n1 + i] += v;
    }
    c
}

/// `lo + hi`, padded to the (longer) length of `hi`
fn fold_halves<T: Coefficient>(lo: &[T], hi: &[T]) -> Vec<T> {
    let mut sum = hi.to_vec();
    for (s, l) in sum.iter_mut().zip(lo) {
        *s += l;
    }
    sum
}

/// Reduce a full product modulo x^n - 1
pub fn fold_cyclic<T: Coefficient>(full: Vec<T>, n: usize) -> Vec<T> {
    let mut out = vec![T::zero(); n];
    for (i, v) in full.iter().enumerate() {
        out[i % n] += v;
    }
    out
}

/// Reduce a full product modulo x^n + 1
pub fn fold_negacyclic<T: Coefficient>(full: Vec<T>, n: usize) -> Vec<T> {
    let mut out = vec![T::zero(); n];
    for (i, v) in full.iter().enumerate() {
        if (i / n) % 2 == 0 {
            out[i % n] += v;
        } else {
            out[i % n] -= v;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_recursive_matches_schoolbook() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for n in [1usize, 2, 31, 32, 33, 64, 107, 439] {
            let a: Vec<i64> = (0..n).map(|_| rng.gen_range(-1024..1024)).collect();
            let b: Vec<i64> = (0..n).map(|_| rng.gen_range(-1..=1)).collect();
            assert_eq!(mult_recursive(&a, &b), schoolbook(&a, &b), "n = {}", n);
        }
    }

    #[test]
    fn test_bigint_product() {
        let a: Vec<BigInt> = (1..=40).map(BigInt::from).collect();
        let b: Vec<BigInt> = (1..=40).map(|x| BigInt::from(x) * BigInt::from(u64::MAX)).collect();
        assert_eq!(mult_recursive(&a, &b), schoolbook(&a, &b));
    }

    #[test]
    fn test_folds() {
        // (1 + x)^2 = 1 + 2x + x^2
        let full = vec![1i64, 2, 1];
        assert_eq!(fold_cyclic(full.clone(), 2), vec![2, 2]);
        assert_eq!(fold_negacyclic(full, 2), vec![0, 2]);
    }
}
