use super::*;
use crate::poly::karatsuba::{fold_negacyclic, schoolbook};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn negacyclic_reference(a: &[u32], b: &[u32], q: u32) -> Vec<u32> {
    let a: Vec<i64> = a.iter().map(|&x| x as i64).collect();
    let b: Vec<i64> = b.iter().map(|&x| x as i64).collect();
    fold_negacyclic(schoolbook(&a, &b), a.len())
        .into_iter()
        .map(|x| x.rem_euclid(q as i64) as u32)
        .collect()
}

#[test]
fn test_round_trip() {
    let ctx = NttContext::new(256, 7681).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let original: Vec<u32> = (0..256).map(|_| rng.gen_range(0..7681)).collect();
    let mut a = original.clone();
    ctx.forward(&mut a).unwrap();
    assert_ne!(a, original);
    ctx.inverse(&mut a).unwrap();
    assert_eq!(a, original);
}

#[test]
fn test_multiply_matches_schoolbook() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    for (n, q) in [(256usize, 7681u32), (512, 12289), (512, 8_383_489)] {
        let ctx = NttContext::new(n, q).unwrap();
        let a: Vec<u32> = (0..n).map(|_| rng.gen_range(0..q)).collect();
        let b: Vec<u32> = (0..n).map(|_| rng.gen_range(0..q)).collect();
        assert_eq!(ctx.multiply(&a, &b).unwrap(), negacyclic_reference(&a, &b, q));
    }
}

#[test]
fn test_x_to_the_n_is_minus_one() {
    let ctx = NttContext::new(256, 7681).unwrap();
    let mut x = vec![0u32; 256];
    x[255] = 1;
    let mut y = vec![0u32; 256];
    y[1] = 1;
    let product = ctx.multiply(&x, &y).unwrap();
    assert_eq!(product[0], 7680);
    assert!(product[1..].iter().all(|&c| c == 0));
}

#[test]
fn test_invalid_parameters() {
    assert!(NttContext::new(100, 7681).is_err());
    assert!(NttContext::new(256, 7680).is_err());
    // 17 is prime but not 1 mod 512
    assert!(NttContext::new(256, 17).is_err());
    let ctx = NttContext::new(256, 7681).unwrap();
    assert!(ctx.forward(&mut [0u32; 8]).is_err());
}

#[test]
fn test_center() {
    let ctx = NttContext::new(256, 7681).unwrap();
    assert_eq!(ctx.center(&[0, 3840, 3841, 7680]), vec![0, 3840, -3840, -1]);
    assert_eq!(ctx.reduce_signed(&[-1, 7681, 5]), vec![7680, 0, 5]);
}
