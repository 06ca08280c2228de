use super::*;
use crate::hash::Digests;
use crate::mgf::IgfParams;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn random_dense(n: usize, rng: &mut ChaCha20Rng) -> IntegerPolynomial {
    IntegerPolynomial::from_coeffs((0..n).map(|_| rng.gen_range(0..2048)).collect())
}

#[test]
fn test_non_ternary_rejected() {
    let bad = IntegerPolynomial::from_coeffs(vec![0, 1, 2, -1]);
    assert!(matches!(
        SparseTernaryPolynomial::from_coeffs(&bad),
        Err(Error::InvalidPolynomial { .. })
    ));
    assert!(matches!(
        DenseTernaryPolynomial::new(bad),
        Err(Error::InvalidPolynomial { .. })
    ));
    assert!(SparseTernaryPolynomial::new(4, vec![1, 2], vec![2]).is_err());
    assert!(SparseTernaryPolynomial::new(4, vec![4], vec![]).is_err());
}

#[test]
fn test_sparse_dense_product_agree() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for n in [11usize, 107, 439] {
        let sparse =
            SparseTernaryPolynomial::generate_random(n, n / 3, n / 3 - 1, &mut rng).unwrap();
        let dense = sparse.to_integer_polynomial();
        for _ in 0..4 {
            let x = random_dense(n, &mut rng);
            assert_eq!(sparse.mult(&x).unwrap(), dense.mult(&x).unwrap());
            assert_eq!(
                sparse.mult_mod(&x, 2048).unwrap(),
                dense.mult_mod(&x, 2048).unwrap()
            );
        }
    }
}

#[test]
fn test_product_form_matches_expansion() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let pf = ProductFormPolynomial::generate_random(107, 4, 4, 5, 4, &mut rng).unwrap();
    let expanded = pf.to_integer_polynomial().unwrap();
    let x = random_dense(107, &mut rng);
    assert_eq!(pf.mult(&x).unwrap(), expanded.mult(&x).unwrap());

    let p = Polynomial::from(pf);
    assert_eq!(p.mult_mod(&x, 2048).unwrap(), expanded.mult_mod(&x, 2048).unwrap());
}

#[test]
fn test_generated_weights() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let d = DenseTernaryPolynomial::generate_random(107, 15, 14, &mut rng).unwrap();
    let p = d.to_integer_polynomial();
    assert_eq!(p.count(1), 15);
    assert_eq!(p.count(-1), 14);

    assert!(SparseTernaryPolynomial::generate_random(10, 6, 5, &mut rng).is_err());
}

#[test]
fn test_blinding_is_deterministic() {
    let params = IgfParams {
        n: 107,
        c: 8,
        min_calls: 4,
        hash_seed: true,
        digest: Digests::Sha256,
    };
    let mut a = IndexGenerator::new(b"blinding", &params).unwrap();
    let mut b = IndexGenerator::new(b"blinding", &params).unwrap();
    let ra = SparseTernaryPolynomial::generate_blinding(&mut a, 107, 15).unwrap();
    let rb = DenseTernaryPolynomial::generate_blinding(&mut b, 107, 15).unwrap();
    assert_eq!(ra.to_integer_polynomial(), rb.to_integer_polynomial());
    assert_eq!(ra.ones().len(), 15);
    assert_eq!(ra.neg_ones().len(), 15);
}

#[test]
fn test_binary_encodings() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let sparse = SparseTernaryPolynomial::generate_random(439, 9, 8, &mut rng).unwrap();
    let bytes = sparse.to_binary();
    assert_eq!(bytes.len(), sparse.encoded_len());
    assert_eq!(SparseTernaryPolynomial::from_binary(&bytes, 439).unwrap(), sparse);

    let pf = ProductFormPolynomial::generate_random(439, 9, 8, 5, 5, &mut rng).unwrap();
    assert_eq!(ProductFormPolynomial::from_binary(&pf.to_binary(), 439).unwrap(), pf);

    let dense = DenseTernaryPolynomial::generate_random(107, 20, 20, &mut rng).unwrap();
    let bytes = dense.to_binary().unwrap();
    assert_eq!(DenseTernaryPolynomial::from_binary(&bytes, 107).unwrap(), dense);

    let mut truncated = pf.to_binary();
    truncated.pop();
    assert!(ProductFormPolynomial::from_binary(&truncated, 439).is_err());
}

#[test]
fn test_debug_redacts_coefficients() {
    let sparse = SparseTernaryPolynomial::new(5, vec![1], vec![3]).unwrap();
    let rendered = format!("{:?}", Polynomial::from(sparse));
    assert_eq!(rendered, "Polynomial::Sparse(n=5, [REDACTED])");
}
