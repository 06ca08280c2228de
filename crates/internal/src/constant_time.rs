//! Constant-time comparisons

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Slices of different length compare unequal immediately; the length is public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time comparison of two coefficient vectors
pub fn ct_eq_coeffs(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut acc = Choice::from(1u8);
    for (x, y) in a.iter().zip(b.iter()) {
        acc &= x.ct_eq(y);
    }
    acc.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2]));
    }

    #[test]
    fn test_ct_eq_coeffs() {
        assert!(ct_eq_coeffs(&[-1, 0, 2047], &[-1, 0, 2047]));
        assert!(!ct_eq_coeffs(&[-1, 0, 2047], &[1, 0, 2047]));
        assert!(!ct_eq_coeffs(&[0], &[0, 0]));
    }
}
