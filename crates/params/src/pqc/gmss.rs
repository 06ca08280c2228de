//! Constants for Winternitz one-time signatures of the GMSS family

use super::{DIGEST_SHA256, DIGEST_SHA512};

/// Object identifier family tag shared by every one-time signature set
pub const GMSS_OID_TAG: u8 = 0x04;

/// Winternitz one-time signature parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WotsParamSet {
    /// Human readable name
    pub name: &'static str,

    /// Object identifier, first byte is [`GMSS_OID_TAG`]
    pub oid: [u8; 4],

    /// Winternitz parameter: message bits signed per hash chain (1..=8)
    pub w: u32,

    /// Digest identifier, also fixes the seed and chain element size
    pub digest: i32,
}

/// SHA-256, two bits per chain
pub const WOTS_SHA256_W2: WotsParamSet = WotsParamSet {
    name: "WOTS_SHA256_W2",
    oid: [GMSS_OID_TAG, 1, 2, 0],
    w: 2,
    digest: DIGEST_SHA256,
};

/// SHA-256, four bits per chain
pub const WOTS_SHA256_W4: WotsParamSet = WotsParamSet {
    name: "WOTS_SHA256_W4",
    oid: [GMSS_OID_TAG, 1, 4, 0],
    w: 4,
    digest: DIGEST_SHA256,
};

/// SHA-256, one byte per chain
pub const WOTS_SHA256_W8: WotsParamSet = WotsParamSet {
    name: "WOTS_SHA256_W8",
    oid: [GMSS_OID_TAG, 1, 8, 0],
    w: 8,
    digest: DIGEST_SHA256,
};

/// SHA-512, four bits per chain
pub const WOTS_SHA512_W4: WotsParamSet = WotsParamSet {
    name: "WOTS_SHA512_W4",
    oid: [GMSS_OID_TAG, 2, 4, 0],
    w: 4,
    digest: DIGEST_SHA512,
};

pub const ALL: [WotsParamSet; 4] = [WOTS_SHA256_W2, WOTS_SHA256_W4, WOTS_SHA256_W8, WOTS_SHA512_W4];
