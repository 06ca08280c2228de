//! Property-based tests for the lattice schemes

use pqlat_algorithms::mgf::{IgfParams, IndexGenerator};
use pqlat_algorithms::poly::{IntegerPolynomial, ProductFormPolynomial};
use pqlat_algorithms::Digests;
use pqlat_params::pqc::ntru as catalog;
use pqlat_params::pqc::rlwe as rlwe_catalog;
use pqlat_pke::ntru::NtruParameters;
use pqlat_pke::rlwe::{RlweEncrypt, RlweKeyGenerator, RlweParameters};
use pqlat_tests::{ntru_ciphers, ntru_keypair, ntru_params, prng, rng};
use proptest::prelude::*;

fn coefficients(n: usize, q: i32) -> impl Strategy<Value = IntegerPolynomial> {
    prop::collection::vec(0..q, n).prop_map(IntegerPolynomial::from_coeffs)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ntru_round_trip(
        message in prop::collection::vec(any::<u8>(), 0..=10),
        key_seed in any::<u64>(),
        enc_seed in any::<u64>(),
    ) {
        let params = ntru_params(&catalog::TOY_107);
        let pair = ntru_keypair(params, key_seed);
        let (mut enc, mut dec) = ntru_ciphers(params, &pair, enc_seed);
        let ct = enc.encrypt(&message).unwrap();
        prop_assert_eq!(dec.decrypt(&ct).unwrap(), message);
    }

    #[test]
    fn ntru_fast_fp_round_trip(
        message in prop::collection::vec(any::<u8>(), 0..=10),
        key_seed in any::<u64>(),
    ) {
        let params = ntru_params(&catalog::TOY_107_FAST);
        let pair = ntru_keypair(params, key_seed);
        let (mut enc, mut dec) = ntru_ciphers(params, &pair, key_seed.wrapping_add(1));
        let ct = enc.encrypt(&message).unwrap();
        prop_assert_eq!(dec.decrypt(&ct).unwrap(), message);
    }

    #[test]
    fn ntru_tamper_detected(
        key_seed in any::<u64>(),
        position in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let params = ntru_params(&catalog::TOY_107);
        let pair = ntru_keypair(params, key_seed);
        let (mut enc, mut dec) = ntru_ciphers(params, &pair, key_seed ^ 0xA5);
        let mut ct = enc.encrypt(b"fuzz").unwrap();
        let i = position.index(ct.len());
        ct[i] ^= flip;
        let err = dec.decrypt(&ct).unwrap_err();
        prop_assert!(err.is_integrity_failure());
    }

    #[test]
    fn key_inverses(key_seed in any::<u64>()) {
        let params = ntru_params(&catalog::TOY_107);
        let pair = ntru_keypair(params, key_seed);
        let private = pair.private().unwrap();
        let f = private.effective_f().unwrap();

        let mut one = f.mult(private.fp()).unwrap();
        one.mod3();
        prop_assert!(one.equals_one());

        // f h = 3 g mod q, so f h is 0 or +-3 after centering
        let mut fh = f.mult_mod(pair.public().unwrap().h(), 2048).unwrap();
        fh.center0(2048);
        prop_assert!(fh.coeffs.iter().all(|c| [-3, 0, 3].contains(c)));
    }

    #[test]
    fn params_wire_round_trip(set in prop::sample::select(catalog::ALL.to_vec())) {
        let params = NtruParameters::new(&set).unwrap();
        prop_assert_eq!(NtruParameters::from_bytes(&params.to_bytes()).unwrap(), params);
    }

    #[test]
    fn multiplication_commutes(a in coefficients(107, 2048), b in coefficients(107, 2048)) {
        prop_assert_eq!(a.mult_mod(&b, 2048).unwrap(), b.mult_mod(&a, 2048).unwrap());
    }

    #[test]
    fn product_form_mult_matches_expansion(x in coefficients(107, 2048), seed in any::<u64>()) {
        let t = ProductFormPolynomial::generate_random(107, 4, 4, 5, 5, &mut rng(seed)).unwrap();
        prop_assert_eq!(
            t.mult_mod(&x, 2048).unwrap(),
            t.to_integer_polynomial().unwrap().mult_mod(&x, 2048).unwrap()
        );
    }

    #[test]
    fn index_generator_is_deterministic(seed in prop::collection::vec(any::<u8>(), 1..64)) {
        let params = IgfParams {
            n: 107,
            c: 8,
            min_calls: 2,
            hash_seed: true,
            digest: Digests::Sha256,
        };
        let mut a = IndexGenerator::new(&seed, &params).unwrap();
        let mut b = IndexGenerator::new(&seed, &params).unwrap();
        for _ in 0..10 * 107 {
            let i = a.next_index();
            prop_assert!(i < 107);
            prop_assert_eq!(i, b.next_index());
        }
    }

    #[test]
    fn rlwe_round_trip(
        message in prop::collection::vec(any::<u8>(), 0..=31),
        key_seed in any::<u64>(),
    ) {
        let params = RlweParameters::new(&rlwe_catalog::RLWE_256).unwrap();
        let pair = RlweKeyGenerator::new(params).generate_with_rng(&mut rng(key_seed)).unwrap();
        let mut enc = RlweEncrypt::new(params).with_rng(prng(key_seed.wrapping_add(1)));
        enc.init_encrypt(pair.public.clone()).unwrap();
        let mut dec = RlweEncrypt::new(params);
        dec.init_decrypt(pair).unwrap();
        let ct = enc.encrypt(&message).unwrap();
        prop_assert_eq!(dec.decrypt(&ct).unwrap(), message);
    }
}
