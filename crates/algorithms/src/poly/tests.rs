use super::*;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn poly(c: &[i32]) -> IntegerPolynomial {
    IntegerPolynomial::from_coeffs(c.to_vec())
}

fn naive_cyclic(a: &IntegerPolynomial, b: &IntegerPolynomial) -> Vec<i64> {
    let n = a.len();
    let mut c = vec![0i64; n];
    for i in 0..n {
        for j in 0..n {
            c[(i + j) % n] += a.coeffs[i] as i64 * b.coeffs[j] as i64;
        }
    }
    c
}

fn random_ternary(n: usize, rng: &mut ChaCha20Rng) -> IntegerPolynomial {
    IntegerPolynomial::from_coeffs((0..n).map(|_| rng.gen_range(-1..=1)).collect())
}

#[test]
fn test_add_sub_extend() {
    let mut a = poly(&[1, 2]);
    a.add(&poly(&[1, 1, 1]));
    assert_eq!(a.coeffs, vec![2, 3, 1]);
    a.sub(&poly(&[2, 3, 1, 4]));
    assert_eq!(a.coeffs, vec![0, 0, 0, -4]);
    a.add_mod(&poly(&[5]), 3);
    assert_eq!(a.coeffs, vec![2, 0, 0, -1]);
}

#[test]
fn test_reductions() {
    let mut a = poly(&[-1024, 1024, 1025, 3000, -3000]);
    a.center0(2048);
    assert_eq!(a.coeffs, vec![-1024, 1024, -1023, 952, -952]);

    let mut b = poly(&[-1024, 1024, 2047, -1]);
    b.mod_center(2048);
    assert_eq!(b.coeffs, vec![1024, 1024, -1, -1]);

    let mut c = poly(&[5, -5, 3, -1]);
    c.mod3();
    assert_eq!(c.coeffs, vec![-1, 1, 0, -1]);

    let mut d = poly(&[-1, 2049, -2049]);
    d.mod_positive(2048);
    assert_eq!(d.coeffs, vec![2047, 1, 2047]);

    let mut e = poly(&[-1, 2049, -5]);
    e.mod_q(2048);
    assert_eq!(e.coeffs, vec![-1, 1, -5]);
    e.ensure_positive(2048);
    assert_eq!(e.coeffs, vec![2047, 1, 2043]);
}

#[test]
fn test_divide_rounds_half_away_from_zero() {
    let mut a = poly(&[4, 5, -4, -5, 1, -1]);
    a.divide(3);
    assert_eq!(a.coeffs, vec![1, 2, -1, -2, 0, 0]);

    let mut b = poly(&[1, -1, 3, -3]);
    b.divide(2);
    assert_eq!(b.coeffs, vec![1, -1, 2, -2]);
}

#[test]
fn test_mod_center_is_half_open() {
    // -q/2 moves to +q/2, which changes the mod 3 residue when q is not a multiple of 3
    let mut a = poly(&[-1024, 1024, -1023]);
    a.mod_center(2048);
    assert_eq!(a.coeffs, vec![1024, 1024, -1023]);
    a.mod3();
    assert_eq!(a.coeffs, vec![1, 1, 0]);

    let mut b = poly(&[-1024]);
    b.center0(2048);
    b.mod3();
    assert_eq!(b.coeffs, vec![-1]);
}

#[test]
#[should_panic(expected = "divisor must be positive")]
fn test_divide_by_zero_is_rejected() {
    poly(&[4, -4]).divide(0);
}

#[test]
#[should_panic(expected = "modulus must be positive")]
fn test_zero_modulus_is_rejected() {
    poly(&[4, -4]).mod_q(0);
}

#[test]
fn test_diagnostics() {
    let a = poly(&[1, 0, -1, 1, 0]);
    assert_eq!(a.sum_coeffs(), 1);
    assert_eq!(a.count(0), 2);
    assert_eq!(a.degree(), 3);
    assert!(!a.equals_one());
    assert!(IntegerPolynomial::one(5).equals_one());
    assert!(IntegerPolynomial::new(5).is_zero());
    assert_eq!(IntegerPolynomial::new(5).degree(), 0);
}

#[test]
fn test_centered_norm_sq() {
    assert_eq!(poly(&[1, -1, 1, -1]).centered_norm_sq(2048), 4);
    // 1000 and -1000 sit 48 apart across the wrap point
    assert_eq!(poly(&[1000, -1000]).centered_norm_sq(2048), 1152);
}

#[test]
fn test_mult_matches_naive() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for n in [3usize, 32, 33, 107, 439] {
        let a = IntegerPolynomial::from_coeffs((0..n).map(|_| rng.gen_range(0..2048)).collect());
        let b = random_ternary(n, &mut rng);
        let expected = naive_cyclic(&a, &b);
        assert_eq!(
            a.mult(&b).unwrap().coeffs,
            expected.iter().map(|&x| x as i32).collect::<Vec<_>>()
        );
        assert_eq!(
            a.mult_mod(&b, 2048).unwrap().coeffs,
            expected.iter().map(|&x| x.rem_euclid(2048) as i32).collect::<Vec<_>>()
        );
    }
    assert!(poly(&[1, 2]).mult(&poly(&[1, 2, 3])).is_err());
}

#[test]
fn test_inverse_mod_small_primes() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    for (p, n) in [(2, 11usize), (3, 11), (2, 107), (3, 107)] {
        let mut invertible = 0;
        for _ in 0..50 {
            let f = random_ternary(n, &mut rng);
            let inv = if p == 2 { f.invert_f2() } else { f.invert_f3() };
            if let Some(inv) = inv {
                assert!(inv.coeffs.iter().all(|&c| (0..p).contains(&c)));
                assert!(f.mult_mod(&inv, p).unwrap().equals_one());
                invertible += 1;
            }
        }
        assert!(invertible > 0, "p = {}, n = {}", p, n);
    }
}

#[test]
fn test_inverse_mod_q() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let mut found = 0;
    for _ in 0..20 {
        let f = random_ternary(107, &mut rng);
        if let Some(fq) = f.invert_fq(2048) {
            assert!(f.mult_mod(&fq, 2048).unwrap().equals_one());
            found += 1;
        }
    }
    assert!(found > 0);
}

#[test]
fn test_non_invertible() {
    // 1 + x vanishes at x = 1, a root of x^3 - 1, over every field
    let f = poly(&[1, 1, 0]);
    assert!(f.invert_f2().is_none());
    assert!(IntegerPolynomial::new(7).invert_f3().is_none());
    assert!(IntegerPolynomial::new(7).invert_fq(2048).is_none());
}

fn assert_cofactor(f: &IntegerPolynomial, r: &Resultant) {
    let product = r.rho.mult(&BigIntPolynomial::from(f)).unwrap();
    for (i, c) in product.coeffs.iter().enumerate() {
        let expected = if i == 0 { r.res.clone() } else { BigInt::zero() };
        assert!((c - expected).mod_floor(&r.modulus).is_zero(), "coefficient {}", i);
    }
}

#[test]
fn test_resultant_hand_computed() {
    // res(1 + x, x^3 - 1) = 2 and (1 - x + x^2)(1 + x) = 1 + x^3 = 2
    let f = poly(&[1, 1, 0]);
    let r = f.resultant().unwrap();
    assert_eq!(r.res.abs(), BigInt::from(2));
    assert_cofactor(&f, &r);

    let rho: Vec<BigInt> = [1, -1, 1].iter().map(|&x| BigInt::from(x) * r.res.signum()).collect();
    assert_eq!(r.rho.coeffs, rho);

    let inverse = r.rational_inverse(6).unwrap();
    let one = inverse.mult(&BigIntPolynomial::from(&f)).unwrap().round();
    assert_eq!(one.to_integer_polynomial().unwrap(), IntegerPolynomial::one(3));
}

#[test]
fn test_resultant_random() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for n in [5usize, 7, 11, 17] {
        let f = random_ternary(n, &mut rng);
        let r = f.resultant().unwrap();
        assert_cofactor(&f, &r);
    }
}

#[test]
fn test_resultant_zero() {
    // x^2 - 1 = (x - 1)(x + 1)
    let f = poly(&[1, 1]);
    let r = f.resultant_with(2).unwrap();
    assert!(r.res.is_zero());
    assert!(r.rational_inverse(4).is_err());
    assert!(f.resultant_with(0).is_err());
}

#[test]
fn test_resultant_mod_prime() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let f = random_ternary(11, &mut rng);
    let m = f.resultant_mod(4507);
    assert_eq!(m.modulus, BigInt::from(4507));
    let product = m.rho.mult(&BigIntPolynomial::from(&f)).unwrap();
    for (i, c) in product.coeffs.iter().enumerate() {
        let expected = if i == 0 { m.res.clone() } else { BigInt::zero() };
        assert!((c - expected).mod_floor(&m.modulus).is_zero());
    }
}

#[test]
fn test_encoders_through_polynomial() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let a = IntegerPolynomial::from_coeffs((0..107).map(|_| rng.gen_range(0..2048)).collect());
    let bytes = a.to_binary(2048);
    assert_eq!(bytes.len(), (107 * 11 + 7) / 8);
    assert_eq!(IntegerPolynomial::from_binary(&bytes, 107, 2048).unwrap(), a);

    let t = random_ternary(107, &mut rng);
    let tight = t.to_binary3_tight().unwrap();
    assert_eq!(IntegerPolynomial::from_binary3_tight(&tight, 107).unwrap(), t);

    let mut s = random_ternary(108, &mut rng);
    // make every pair legal
    for i in (0..108).step_by(2) {
        if s.coeffs[i] == -1 && s.coeffs[i + 1] == -1 {
            s.coeffs[i + 1] = 0;
        }
    }
    let sves = s.to_binary3_sves(false).unwrap();
    assert_eq!(sves.len(), encode::sves_len(108));
    assert_eq!(IntegerPolynomial::from_binary3_sves(&sves, 108, false), s);
}
