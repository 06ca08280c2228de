//! Constants for Ring-LWE encryption and GLP-style signatures

use super::DIGEST_SHA256;

/// Object identifier family tag shared by every Ring-LWE parameter set
pub const RLWE_OID_TAG: u8 = 0x03;

/// Ring-LWE encryption parameter set over Z_q[x]/(x^n + 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RlweParamSet {
    /// Human readable name
    pub name: &'static str,

    /// Object identifier, first byte is [`RLWE_OID_TAG`]
    pub oid: [u8; 4],

    /// Ring degree (power of two)
    pub n: usize,

    /// Prime modulus, q = 1 mod 2n
    pub q: u32,

    /// Centered binomial noise parameter
    pub eta: usize,
}

/// n = 256, q = 7681
pub const RLWE_256: RlweParamSet = RlweParamSet {
    name: "RLWE_256",
    oid: [RLWE_OID_TAG, 1, 1, 0],
    n: 256,
    q: 7681,
    eta: 2,
};

/// n = 512, q = 12289
pub const RLWE_512: RlweParamSet = RlweParamSet {
    name: "RLWE_512",
    oid: [RLWE_OID_TAG, 1, 2, 0],
    n: 512,
    q: 12289,
    eta: 2,
};

/// GLP-style signature parameter set over Z_q[x]/(x^n + 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RlweSignParamSet {
    /// Human readable name
    pub name: &'static str,

    /// Object identifier, first byte is [`RLWE_OID_TAG`]
    pub oid: [u8; 4],

    /// Ring degree (power of two)
    pub n: usize,

    /// Prime modulus, q = 1 mod 2n
    pub q: u32,

    /// Masking range: y is uniform in [-k, k]
    pub k: u32,

    /// Number of nonzero challenge coefficients (half +1, half -1)
    pub weight: usize,

    /// Bits read per challenge index
    pub c: u32,

    /// Digest selector for the challenge hash
    pub digest: i32,
}

/// n = 512, q = 8383489, k = 2^14
pub const RLWE_SIGN_512: RlweSignParamSet = RlweSignParamSet {
    name: "RLWE_SIGN_512",
    oid: [RLWE_OID_TAG, 2, 1, 0],
    n: 512,
    q: 8_383_489,
    k: 1 << 14,
    weight: 32,
    c: 9,
    digest: DIGEST_SHA256,
};
