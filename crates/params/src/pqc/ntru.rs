//! Constants for NTRUEncrypt (IEEE P1363.1)

use super::{DIGEST_SHA256, DIGEST_SHA512, ENGINE_CHACHA20};

/// Object identifier family tag shared by every NTRU parameter set
pub const NTRU_OID_TAG: u8 = 0x02;

/// Polynomial type selector: one ternary polynomial
pub const POLY_TYPE_SIMPLE: i32 = 0;
/// Polynomial type selector: product form f1*f2 + f3
pub const POLY_TYPE_PRODUCT: i32 = 1;

/// NTRUEncrypt parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NtruParamSet {
    /// Human readable name
    pub name: &'static str,

    /// Object identifier, first byte is [`NTRU_OID_TAG`]
    pub oid: [u8; 4],

    /// Ring degree
    pub n: usize,

    /// Large modulus (power of two)
    pub q: u32,

    /// Number of ones in the private polynomial (simple type)
    pub df: usize,

    /// Product form factor weights
    pub df1: usize,
    pub df2: usize,
    pub df3: usize,

    /// Bits of random padding
    pub db: usize,

    /// Minimum count of each of -1, 0, 1 in the masked message
    pub dm0: usize,

    /// Bound on the masked message coefficient sum (0 disables the check)
    pub max_m1: usize,

    /// Bits read per index by the index generator
    pub c: u32,

    /// Minimum digest calls for the index generator
    pub min_calls_r: usize,

    /// Minimum digest calls for the mask generator
    pub min_calls_mask: usize,

    /// Hash the seed before expanding it
    pub hash_seed: bool,

    /// Store private polynomials as index lists
    pub sparse: bool,

    /// f = 1 + 3T, making the inverse mod 3 trivial
    pub fast_fp: bool,

    /// [`POLY_TYPE_SIMPLE`] or [`POLY_TYPE_PRODUCT`]
    pub poly_type: i32,

    /// Digest selector
    pub digest: i32,

    /// Random engine selector
    pub random_engine: i32,
}

/// EES1087EP2, 256-bit security, optimized for key size
pub const EES1087EP2: NtruParamSet = NtruParamSet {
    name: "EES1087EP2",
    oid: [NTRU_OID_TAG, 6, 3, 0],
    n: 1087,
    q: 2048,
    df: 120,
    df1: 0,
    df2: 0,
    df3: 0,
    db: 256,
    dm0: 120,
    max_m1: 0,
    c: 13,
    min_calls_r: 25,
    min_calls_mask: 14,
    hash_seed: true,
    sparse: true,
    fast_fp: false,
    poly_type: POLY_TYPE_SIMPLE,
    digest: DIGEST_SHA512,
    random_engine: ENGINE_CHACHA20,
};

/// EES1171EP1, 256-bit security, key size and speed tradeoff
pub const EES1171EP1: NtruParamSet = NtruParamSet {
    name: "EES1171EP1",
    oid: [NTRU_OID_TAG, 6, 4, 0],
    n: 1171,
    q: 2048,
    df: 106,
    df1: 0,
    df2: 0,
    df3: 0,
    db: 256,
    dm0: 106,
    max_m1: 0,
    c: 13,
    min_calls_r: 20,
    min_calls_mask: 15,
    hash_seed: true,
    sparse: true,
    fast_fp: false,
    poly_type: POLY_TYPE_SIMPLE,
    digest: DIGEST_SHA512,
    random_engine: ENGINE_CHACHA20,
};

/// EES1499EP1, 256-bit security, optimized for speed
pub const EES1499EP1: NtruParamSet = NtruParamSet {
    name: "EES1499EP1",
    oid: [NTRU_OID_TAG, 6, 5, 0],
    n: 1499,
    q: 2048,
    df: 79,
    df1: 0,
    df2: 0,
    df3: 0,
    db: 256,
    dm0: 79,
    max_m1: 0,
    c: 13,
    min_calls_r: 17,
    min_calls_mask: 19,
    hash_seed: true,
    sparse: true,
    fast_fp: false,
    poly_type: POLY_TYPE_SIMPLE,
    digest: DIGEST_SHA512,
    random_engine: ENGINE_CHACHA20,
};

/// APR2011-439, 128-bit security
pub const APR2011_439: NtruParamSet = NtruParamSet {
    name: "APR2011_439",
    oid: [NTRU_OID_TAG, 7, 101, 0],
    n: 439,
    q: 2048,
    df: 146,
    df1: 0,
    df2: 0,
    df3: 0,
    db: 128,
    dm0: 130,
    max_m1: 0,
    c: 9,
    min_calls_r: 32,
    min_calls_mask: 9,
    hash_seed: true,
    sparse: true,
    fast_fp: false,
    poly_type: POLY_TYPE_SIMPLE,
    digest: DIGEST_SHA256,
    random_engine: ENGINE_CHACHA20,
};

/// APR2011-439 with product-form private and blinding polynomials
pub const APR2011_439_FAST: NtruParamSet = NtruParamSet {
    name: "APR2011_439_FAST",
    oid: [NTRU_OID_TAG, 7, 101, 1],
    n: 439,
    q: 2048,
    df: 0,
    df1: 9,
    df2: 8,
    df3: 5,
    db: 128,
    dm0: 130,
    max_m1: 0,
    c: 9,
    min_calls_r: 32,
    min_calls_mask: 9,
    hash_seed: true,
    sparse: true,
    fast_fp: true,
    poly_type: POLY_TYPE_PRODUCT,
    digest: DIGEST_SHA256,
    random_engine: ENGINE_CHACHA20,
};

/// APR2011-743, 256-bit security
pub const APR2011_743: NtruParamSet = NtruParamSet {
    name: "APR2011_743",
    oid: [NTRU_OID_TAG, 7, 105, 0],
    n: 743,
    q: 2048,
    df: 248,
    df1: 0,
    df2: 0,
    df3: 0,
    db: 256,
    dm0: 220,
    max_m1: 0,
    c: 10,
    min_calls_r: 27,
    min_calls_mask: 14,
    hash_seed: true,
    sparse: false,
    fast_fp: false,
    poly_type: POLY_TYPE_SIMPLE,
    digest: DIGEST_SHA512,
    random_engine: ENGINE_CHACHA20,
};

/// APR2011-743 with product-form private and blinding polynomials
pub const APR2011_743_FAST: NtruParamSet = NtruParamSet {
    name: "APR2011_743_FAST",
    oid: [NTRU_OID_TAG, 7, 105, 1],
    n: 743,
    q: 2048,
    df: 0,
    df1: 11,
    df2: 11,
    df3: 15,
    db: 256,
    dm0: 220,
    max_m1: 0,
    c: 10,
    min_calls_r: 27,
    min_calls_mask: 14,
    hash_seed: true,
    sparse: true,
    fast_fp: true,
    poly_type: POLY_TYPE_PRODUCT,
    digest: DIGEST_SHA512,
    random_engine: ENGINE_CHACHA20,
};

/// Insecure N = 107 ring for tests and benchmarks
///
/// Decryption cannot fail: the worst-case coefficient of f*e stays below q/2.
pub const TOY_107: NtruParamSet = NtruParamSet {
    name: "TOY_107",
    oid: [NTRU_OID_TAG, 0, 0, 1],
    n: 107,
    q: 2048,
    df: 15,
    df1: 0,
    df2: 0,
    df3: 0,
    db: 64,
    dm0: 20,
    max_m1: 0,
    c: 8,
    min_calls_r: 4,
    min_calls_mask: 4,
    hash_seed: true,
    sparse: true,
    fast_fp: false,
    poly_type: POLY_TYPE_SIMPLE,
    digest: DIGEST_SHA256,
    random_engine: ENGINE_CHACHA20,
};

/// Insecure N = 107 product-form ring for tests
pub const TOY_107_FAST: NtruParamSet = NtruParamSet {
    name: "TOY_107_FAST",
    oid: [NTRU_OID_TAG, 0, 0, 2],
    n: 107,
    q: 2048,
    df: 0,
    df1: 4,
    df2: 4,
    df3: 5,
    db: 64,
    dm0: 20,
    max_m1: 0,
    c: 8,
    min_calls_r: 4,
    min_calls_mask: 4,
    hash_seed: true,
    sparse: true,
    fast_fp: true,
    poly_type: POLY_TYPE_PRODUCT,
    digest: DIGEST_SHA256,
    random_engine: ENGINE_CHACHA20,
};

/// Every production parameter set, in catalog order
pub const ALL: [NtruParamSet; 7] = [
    EES1087EP2,
    EES1171EP1,
    EES1499EP1,
    APR2011_439,
    APR2011_439_FAST,
    APR2011_743,
    APR2011_743_FAST,
];
