//! End-to-end checks across the pqlat crates

use pqlat_algorithms::poly::{IntegerPolynomial, SparseTernaryPolynomial};
use pqlat_api::error::Error as CoreError;
use pqlat_api::{Pke, Serialize, Signature};
use pqlat_common::math_common::{ceil_log2, gcd, mod_inv, mod_pow};
use pqlat_internal::constant_time::{ct_eq, ct_eq_coeffs};
use pqlat_params::pqc::gmss as gmss_catalog;
use pqlat_params::pqc::ntru as catalog;
use pqlat_params::pqc::rlwe as rlwe_catalog;
use pqlat_pke::gmss::{WotsParameters, WotsPublicKey, WotsSigningKey};
use pqlat_pke::ntru::{
    NtruCiphertext, NtruEncrypt, NtruKeyGenerator, NtruKeyPair, NtruParameters, NtruPrivateKey,
    NtruPublicKey, NtruToy107,
};
use pqlat_pke::rlwe::{Rlwe512, RlweSign512};
use pqlat_tests::{ntru_ciphers, ntru_keypair, ntru_params, prng, rng};

#[test]
fn test_constant_time_compare() {
    assert!(ct_eq([1u8, 2, 3, 4], [1u8, 2, 3, 4]));
    assert!(!ct_eq([1u8, 2, 3, 4], [1u8, 2, 3, 5]));
    assert!(!ct_eq([1u8, 2, 3, 4], [1u8, 2, 3]));

    assert!(ct_eq_coeffs(&[1, -1, 0], &[1, -1, 0]));
    assert!(!ct_eq_coeffs(&[1, -1, 0], &[1, 1, 0]));
}

#[test]
fn test_word_arithmetic() {
    assert_eq!(mod_pow(2, 10, 1000), 24);
    assert_eq!(gcd(12, 8), 4);
    assert_eq!(mod_inv(3, 14), Some(5));
    assert_eq!(mod_inv(4, 8), None);
    assert_eq!(ceil_log2(2048), 11);
    assert_eq!(ceil_log2(2049), 12);
}

#[test]
fn test_sparse_multiplication_matches_dense_path() {
    let mut r = rng(1);
    let sparse = SparseTernaryPolynomial::generate_random(107, 15, 14, &mut r).unwrap();
    let x = IntegerPolynomial::from_coeffs((0..107).map(|i| (i * 37 % 2048) as i32).collect());

    let via_sparse = sparse.mult_mod(&x, 2048).unwrap();
    let via_dense = sparse.to_integer_polynomial().mult_mod(&x, 2048).unwrap();
    assert_eq!(via_sparse, via_dense);
}

#[test]
fn test_ntru_scenario_single_byte() {
    let params = ntru_params(&catalog::TOY_107);
    let pair = ntru_keypair(params, 2);
    let (mut enc, mut dec) = ntru_ciphers(params, &pair, 3);

    let first = enc.encrypt(&[0x41]).unwrap();
    let second = enc.encrypt(&[0x41]).unwrap();
    assert_ne!(first, second);
    assert_eq!(dec.decrypt(&first).unwrap(), vec![0x41]);
    assert_eq!(dec.decrypt(&second).unwrap(), vec![0x41]);
}

#[test]
fn test_ntru_catalog_round_trip() {
    for set in [catalog::APR2011_439_FAST, catalog::APR2011_743, catalog::EES1087EP2] {
        let params = ntru_params(&set);
        let pair = ntru_keypair(params, 4);
        let (mut enc, mut dec) = ntru_ciphers(params, &pair, 5);

        let message: Vec<u8> = (0..params.message_max()).map(|i| i as u8).collect();
        let ct = enc.encrypt(&message).unwrap();
        assert_eq!(ct.len(), params.ciphertext_len(), "{}", set.name);
        assert_eq!(dec.decrypt(&ct).unwrap(), message, "{}", set.name);
        assert_eq!(dec.decrypt(&enc.encrypt(b"").unwrap()).unwrap(), b"", "{}", set.name);
    }
}

#[test]
fn test_ntru_through_wire_formats() {
    // Parameters and both keys cross a byte boundary before use
    let params = ntru_params(&catalog::APR2011_439);
    let params = NtruParameters::from_bytes(&params.to_bytes()).unwrap();
    let pair = ntru_keypair(params, 6);

    let public_bytes = pair.public().unwrap().to_bytes();
    assert_eq!(public_bytes.len(), params.public_key_len());
    let private_bytes = pair.private().unwrap().to_bytes().unwrap();

    let mut enc = NtruEncrypt::new(params).with_rng(prng(7));
    enc.init_encrypt(NtruPublicKey::from_bytes(&public_bytes).unwrap())
        .unwrap();
    let ct = enc.encrypt(b"over the wire").unwrap();

    let restored = NtruKeyPair::new(
        NtruPublicKey::from_bytes(&public_bytes).unwrap(),
        NtruPrivateKey::from_bytes(&private_bytes).unwrap(),
    );
    assert_eq!(&restored, &pair);
    let mut dec = NtruEncrypt::new(params);
    dec.init_decrypt(restored).unwrap();
    assert_eq!(dec.decrypt(&ct).unwrap(), b"over the wire");
}

#[test]
fn test_ntru_single_byte_flips_rejected() {
    let params = ntru_params(&catalog::TOY_107);
    let pair = ntru_keypair(params, 8);
    let (mut enc, mut dec) = ntru_ciphers(params, &pair, 9);
    let ct = enc.encrypt(b"tamper").unwrap();

    for i in 0..ct.len() {
        let mut bad = ct.clone();
        bad[i] ^= 0x5A;
        let err = dec.decrypt(&bad).unwrap_err();
        assert!(err.is_integrity_failure(), "byte {}: {:?}", i, err);
    }
}

#[test]
fn test_passphrase_keys() {
    let params = ntru_params(&catalog::APR2011_439_FAST);
    let generator = NtruKeyGenerator::new(params);
    let a = generator.generate_from_passphrase(b"correct horse", b"salt").unwrap();
    let b = generator.generate_from_passphrase(b"correct horse", b"salt").unwrap();
    let c = generator.generate_from_passphrase(b"correct horse", b"pepper").unwrap();

    assert_eq!(a.public().unwrap().to_bytes(), b.public().unwrap().to_bytes());
    assert_ne!(a.public().unwrap().to_bytes(), c.public().unwrap().to_bytes());
}

#[test]
fn test_errors_cross_the_api_boundary() {
    let mut r = rng(10);
    let (pk, sk) = NtruToy107::keypair(&mut r).unwrap();

    match NtruToy107::encrypt(&pk, &[0u8; 11], &mut r) {
        Err(CoreError::MessageTooLong { max, actual, .. }) => assert_eq!((max, actual), (10, 11)),
        other => panic!("unexpected {:?}", other),
    }

    let ct = NtruToy107::encrypt(&pk, b"api", &mut r).unwrap();
    let short: NtruCiphertext = ct.0[..ct.0.len() - 1].to_vec().into();
    assert!(matches!(
        NtruToy107::decrypt(&sk, &short),
        Err(CoreError::InvalidLength { .. })
    ));
    assert_eq!(NtruToy107::decrypt(&sk, &ct).unwrap(), b"api");
    assert_eq!(<NtruPublicKey as Serialize>::to_bytes(&pk), pk.to_bytes());
}

#[test]
fn test_rlwe_schemes_through_traits() {
    let mut r = rng(11);
    let (pk, sk) = Rlwe512::keypair(&mut r).unwrap();
    let ct = Rlwe512::encrypt(&pk, b"ring", &mut r).unwrap();
    assert_eq!(Rlwe512::decrypt(&sk, &ct).unwrap(), b"ring");

    let (vk, signing) = RlweSign512::keypair(&mut r).unwrap();
    let sig = RlweSign512::sign(b"ring", &signing, &mut r).unwrap();
    RlweSign512::verify(b"ring", &sig, &vk).unwrap();
    assert_eq!(RlweSign512::name(), rlwe_catalog::RLWE_SIGN_512.name);
}

#[test]
fn test_one_time_signature_across_the_wire() {
    let params = WotsParameters::new(&gmss_catalog::WOTS_SHA256_W4).unwrap();
    let sk = WotsSigningKey::generate(params, &mut rng(12));
    let pk_bytes = sk.public_key().to_bytes();
    let sig = sk.sign(b"release 1.0");

    let pk = <WotsPublicKey as Serialize>::from_bytes(&pk_bytes).unwrap();
    pk.verify(b"release 1.0", &sig).unwrap();
    match pk.verify(b"release 1.1", &sig) {
        Err(e) => assert!(matches!(CoreError::from(e), CoreError::InvalidSignature { .. })),
        Ok(()) => panic!("altered message verified"),
    }
}
