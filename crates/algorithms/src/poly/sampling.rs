//! Samplers for Ring-LWE secrets, noise and masks

use rand::{CryptoRng, Rng, RngCore};

use crate::error::{Error, Result};

/// `n` coefficients uniform in `[0, q)` by rejection sampling
pub fn sample_uniform<R: RngCore + CryptoRng + ?Sized>(n: usize, q: u32, rng: &mut R) -> Vec<u32> {
    // Largest multiple of q that fits in 32 bits
    let threshold = ((1u64 << 32) / q as u64) * q as u64;
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let sample = rng.next_u32() as u64;
        if sample < threshold {
            out.push((sample % q as u64) as u32);
        }
    }
    out
}

/// `n` coefficients from the centered binomial distribution CBD(eta)
///
/// Each sample is the popcount of eta random bits minus that of eta more.
pub fn sample_cbd<R: RngCore + CryptoRng + ?Sized>(
    n: usize,
    eta: usize,
    rng: &mut R,
) -> Result<Vec<i32>> {
    if eta == 0 || eta > 16 {
        return Err(Error::param("eta", format!("must be in [1, 16], got {}", eta)));
    }

    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let bits = rng.next_u32();
        let a = (bits & ((1u32 << eta) - 1)).count_ones() as i32;
        let b = ((bits >> eta) & ((1u32 << eta) - 1)).count_ones() as i32;
        out.push(a - b);
    }
    Ok(out)
}

/// `n` coefficients uniform in `[-bound, bound]`
pub fn sample_bounded<R: RngCore + CryptoRng + ?Sized>(
    n: usize,
    bound: u32,
    rng: &mut R,
) -> Vec<i32> {
    let bound = bound as i32;
    (0..n).map(|_| rng.gen_range(-bound..=bound)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_uniform_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let v = sample_uniform(1024, 7681, &mut rng);
        assert_eq!(v.len(), 1024);
        assert!(v.iter().all(|&x| x < 7681));
        assert!(v.iter().any(|&x| x > 7000));
    }

    #[test]
    fn test_cbd_range_and_mean() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let v = sample_cbd(4096, 2, &mut rng).unwrap();
        assert!(v.iter().all(|&x| (-2..=2).contains(&x)));
        let mean: f64 = v.iter().map(|&x| x as f64).sum::<f64>() / v.len() as f64;
        assert!(mean.abs() < 0.1);

        assert!(sample_cbd(16, 0, &mut rng).is_err());
        assert!(sample_cbd(16, 17, &mut rng).is_err());
    }

    #[test]
    fn test_bounded() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let v = sample_bounded(2048, 3, &mut rng);
        assert!(v.iter().all(|&x| (-3..=3).contains(&x)));
        assert!(v.contains(&-3) && v.contains(&3));
    }
}
