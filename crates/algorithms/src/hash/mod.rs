//! Digest collaborators
//!
//! Parameter sets select their digest by integer identifier. The engine is a
//! closed enum over the `sha2` implementations so callers can hold one value
//! without boxing.

use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};

/// Digest selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Digests {
    /// SHA-256, 32-byte output
    Sha256,
    /// SHA-512, 64-byte output
    Sha512,
}

impl Digests {
    /// Resolve a digest identifier
    pub fn from_id(id: i32) -> Result<Self> {
        match id {
            pqlat_params::pqc::DIGEST_SHA256 => Ok(Digests::Sha256),
            pqlat_params::pqc::DIGEST_SHA512 => Ok(Digests::Sha512),
            _ => Err(Error::UnsupportedEngine {
                context: "digest",
                id,
            }),
        }
    }

    /// Wire identifier of this digest
    pub fn id(self) -> i32 {
        match self {
            Digests::Sha256 => pqlat_params::pqc::DIGEST_SHA256,
            Digests::Sha512 => pqlat_params::pqc::DIGEST_SHA512,
        }
    }

    /// Output size in bytes
    pub fn output_size(self) -> usize {
        match self {
            Digests::Sha256 => 32,
            Digests::Sha512 => 64,
        }
    }

    /// Fresh engine for this digest
    pub fn engine(self) -> DigestEngine {
        match self {
            Digests::Sha256 => DigestEngine::Sha256(Sha256::new()),
            Digests::Sha512 => DigestEngine::Sha512(Sha512::new()),
        }
    }

    /// One-shot digest of `data`
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        let mut engine = self.engine();
        engine.update(data);
        engine.finalize_reset()
    }
}

/// Incremental digest state
#[derive(Clone)]
pub enum DigestEngine {
    Sha256(Sha256),
    Sha512(Sha512),
}

impl DigestEngine {
    /// Absorb more input
    pub fn update(&mut self, data: &[u8]) {
        match self {
            DigestEngine::Sha256(h) => h.update(data),
            DigestEngine::Sha512(h) => h.update(data),
        }
    }

    /// Produce the digest and reset the state for reuse
    pub fn finalize_reset(&mut self) -> Vec<u8> {
        match self {
            DigestEngine::Sha256(h) => h.finalize_reset().to_vec(),
            DigestEngine::Sha512(h) => h.finalize_reset().to_vec(),
        }
    }

    /// Output size in bytes
    pub fn output_size(&self) -> usize {
        self.algorithm().output_size()
    }

    /// Selector this engine was built from
    pub fn algorithm(&self) -> Digests {
        match self {
            DigestEngine::Sha256(_) => Digests::Sha256,
            DigestEngine::Sha512(_) => Digests::Sha512,
        }
    }
}

impl core::fmt::Debug for DigestEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("DigestEngine").field(&self.algorithm()).finish()
    }
}
