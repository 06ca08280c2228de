//! MGF-TP-1 trinary mask generation

use zeroize::Zeroizing;

use super::expand_block;
use crate::hash::Digests;
use crate::poly::IntegerPolynomial;

/// Expand `seed` into a ternary polynomial of length `n`
///
/// Each digest byte below 243 = 3^5 yields five base-3 digits, least
/// significant first, each shifted to `{-1, 0, 1}`. Bytes at or above 243 are
/// skipped. After the initial `min_calls` blocks are used up, further blocks
/// are produced one at a time.
pub fn generate_mask(
    seed: &[u8],
    n: usize,
    min_calls: usize,
    hash_seed: bool,
    digest: Digests,
) -> IntegerPolynomial {
    let mut engine = digest.engine();
    let z = if hash_seed {
        engine.update(seed);
        Zeroizing::new(engine.finalize_reset())
    } else {
        Zeroizing::new(seed.to_vec())
    };

    let mut buf = Zeroizing::new(Vec::with_capacity(min_calls * digest.output_size()));
    let mut counter = 0u32;
    while (counter as usize) < min_calls {
        buf.extend_from_slice(&expand_block(&mut engine, &z, counter));
        counter += 1;
    }

    let mut coeffs = vec![0i32; n];
    let mut cur = 0usize;
    while cur < n {
        for &byte in buf.iter() {
            if byte >= 243 {
                continue;
            }
            let mut o = byte as i32;
            for _ in 0..4 {
                coeffs[cur] = o % 3 - 1;
                cur += 1;
                if cur == n {
                    return IntegerPolynomial::from_coeffs(coeffs);
                }
                o /= 3;
            }
            coeffs[cur] = o - 1;
            cur += 1;
            if cur == n {
                return IntegerPolynomial::from_coeffs(coeffs);
            }
        }
        buf = Zeroizing::new(expand_block(&mut engine, &z, counter));
        counter += 1;
    }
    IntegerPolynomial::from_coeffs(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_is_ternary_and_deterministic() {
        let a = generate_mask(b"mask seed", 1087, 14, true, Digests::Sha512);
        let b = generate_mask(b"mask seed", 1087, 14, true, Digests::Sha512);
        assert_eq!(a, b);
        assert_eq!(a.len(), 1087);
        assert!(a.is_ternary());
    }

    #[test]
    fn test_mask_refills_past_initial_blocks() {
        // One SHA-256 block yields at most 160 trits
        let m = generate_mask(b"x", 400, 1, false, Digests::Sha256);
        assert!(m.is_ternary());
        let values = [-1, 0, 1];
        assert!(values.iter().all(|v| m.count(*v) > 50));
    }

    #[test]
    fn test_first_trits_match_first_byte() {
        let mut input = b"abc".to_vec();
        input.extend_from_slice(&[0, 0, 0, 0]);
        let block = Digests::Sha256.digest(&input);
        let first = block.iter().copied().find(|&b| b < 243).unwrap() as i32;

        let m = generate_mask(b"abc", 5, 1, false, Digests::Sha256);
        let mut o = first;
        let mut expected = Vec::new();
        for _ in 0..4 {
            expected.push(o % 3 - 1);
            o /= 3;
        }
        expected.push(o - 1);
        assert_eq!(m.coeffs, expected);
    }
}
