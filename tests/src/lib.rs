//! Shared fixtures for the pqlat integration tests

use pqlat_algorithms::prng::Prng;
use pqlat_params::pqc::ntru::NtruParamSet;
use pqlat_pke::ntru::{NtruEncrypt, NtruKeyGenerator, NtruKeyPair, NtruParameters};
use rand::SeedableRng;
use rand_chacha::{ChaCha20Rng, ChaChaRng};

/// Deterministic generator for a test case
pub fn rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Deterministic cipher engine for a test case
pub fn prng(seed: u64) -> Prng {
    Prng::ChaCha20(Box::new(ChaCha20Rng::seed_from_u64(seed)))
}

/// Validated parameters for a catalog set
pub fn ntru_params(set: &NtruParamSet) -> NtruParameters {
    NtruParameters::new(set).expect("catalog parameters validate")
}

/// Key pair from a seeded generator
pub fn ntru_keypair(params: NtruParameters, seed: u64) -> NtruKeyPair {
    NtruKeyGenerator::new(params)
        .generate_with_rng(&mut rng(seed))
        .expect("key generation succeeds")
}

/// An encrypting and a decrypting cipher for `pair`
pub fn ntru_ciphers(
    params: NtruParameters,
    pair: &NtruKeyPair,
    seed: u64,
) -> (NtruEncrypt, NtruEncrypt) {
    let mut enc = NtruEncrypt::new(params).with_rng(prng(seed));
    enc.init_encrypt(pair.public().expect("public half").clone())
        .expect("public key matches");
    let mut dec = NtruEncrypt::new(params).with_rng(prng(seed ^ 1));
    dec.init_decrypt(pair.clone()).expect("key pair matches");
    (enc, dec)
}
