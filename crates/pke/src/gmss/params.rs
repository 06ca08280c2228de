//! Winternitz parameter objects

use pqlat_algorithms::Digests;
use pqlat_common::math_common::ceil_log2;
use pqlat_params::pqc::gmss::{self as catalog, WotsParamSet, GMSS_OID_TAG};

use crate::error::{Error, Result};

/// Validated one-time signature parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WotsParameters {
    oid: [u8; 4],
    w: u32,
    digest: Digests,
}

impl WotsParameters {
    pub fn new(set: &WotsParamSet) -> Result<Self> {
        const CONTEXT: &str = "WotsParameters";
        if set.oid[0] != GMSS_OID_TAG {
            return Err(Error::InvalidParameter {
                context: CONTEXT,
                message: format!("OID family tag {:#04x} is not GMSS", set.oid[0]),
            });
        }
        if set.w == 0 || set.w > 8 {
            return Err(Error::InvalidParameter {
                context: CONTEXT,
                message: format!("w = {} outside [1, 8]", set.w),
            });
        }
        Ok(Self {
            oid: set.oid,
            w: set.w,
            digest: Digests::from_id(set.digest)?,
        })
    }

    /// Catalog entry carrying `oid`
    pub fn from_oid(oid: [u8; 4]) -> Result<Self> {
        let set = catalog::ALL
            .iter()
            .find(|set| set.oid == oid)
            .ok_or_else(|| Error::InvalidParameter {
                context: "WotsParameters::from_oid",
                message: format!("unknown OID {:02x?}", oid),
            })?;
        Self::new(set)
    }

    pub fn oid(&self) -> [u8; 4] {
        self.oid
    }

    /// Bits signed per hash chain
    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn digest(&self) -> Digests {
        self.digest
    }

    /// Chain element and seed size in bytes
    pub fn element_len(&self) -> usize {
        self.digest.output_size()
    }

    /// Steps from a private element to the top of its chain
    pub fn chain_len(&self) -> u32 {
        (1 << self.w) - 1
    }

    /// Chains covering the message digest, `ceil(8 m / w)`
    pub fn message_chunks(&self) -> usize {
        (8 * self.element_len()).div_ceil(self.w as usize)
    }

    /// Chains covering the checksum of the message chunks
    pub fn checksum_chunks(&self) -> usize {
        let max_checksum = self.message_chunks() as u64 * self.chain_len() as u64;
        let bits = ceil_log2(max_checksum + 1) as usize;
        bits.div_ceil(self.w as usize)
    }

    pub fn chains(&self) -> usize {
        self.message_chunks() + self.checksum_chunks()
    }

    pub fn signature_len(&self) -> usize {
        self.chains() * self.element_len()
    }
}
