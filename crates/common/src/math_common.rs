//! Common word-sized modular arithmetic
//!
//! All moduli here fit comfortably in 32 bits, so intermediate products are
//! computed in 64 bits without overflow.

/// Perform modular exponentiation (a^b mod m)
///
/// Implements the square-and-multiply algorithm.
pub fn mod_pow(a: u64, b: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = a % m;
    let mut exp = b;

    while exp > 0 {
        if exp % 2 == 1 {
            result = (result * base) % m;
        }

        exp >>= 1;
        base = (base * base) % m;
    }

    result
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        return a;
    }

    gcd(b, a % b)
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// `a` may be negative; the result lies in `[0, m)`.
pub fn mod_inv(a: i64, m: i64) -> Option<i64> {
    if m <= 1 {
        return None;
    }

    let a = a.rem_euclid(m);
    if a == 0 {
        return None;
    }

    let (mut old_r, mut r) = (a, m);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }

    Some(old_s.rem_euclid(m))
}

/// Integer base-2 logarithm, rounded up
pub fn ceil_log2(x: u64) -> u32 {
    if x <= 1 {
        0
    } else {
        64 - (x - 1).leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(3, 4, 7), 4);
        assert_eq!(mod_pow(2, 0, 13), 1);
        assert_eq!(mod_pow(5, 3, 1), 0);
    }

    #[test]
    fn test_mod_inv() {
        assert_eq!(mod_inv(3, 7), Some(5));
        assert_eq!(mod_inv(-3, 7), Some(2));
        assert_eq!(mod_inv(4, 8), None);
        assert_eq!(mod_inv(0, 11), None);
    }

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(2048), 11);
        assert_eq!(ceil_log2(7681), 13);
        assert_eq!(ceil_log2(12289), 14);
        assert_eq!(ceil_log2(1), 0);
    }

    proptest! {
        #[test]
        fn prop_mod_inv_is_inverse(
            a in 1i64..100_000,
            p in prop::sample::select(vec![4507i64, 7681, 12289, 65537]),
        ) {
            prop_assume!(a % p != 0);
            let inv = mod_inv(a, p).unwrap();
            prop_assert_eq!((a * inv).rem_euclid(p), 1);
        }
    }
}
