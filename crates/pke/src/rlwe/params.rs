//! Ring-LWE parameter objects

use pqlat_algorithms::poly::encode::packed_len;
use pqlat_algorithms::poly::NttContext;
use pqlat_algorithms::Digests;
use pqlat_common::math_common::ceil_log2;
use pqlat_params::pqc::rlwe::{RlweParamSet, RlweSignParamSet, RLWE_OID_TAG};

use crate::error::{Error, Result};

fn check_ring(context: &'static str, oid: [u8; 4], n: usize, q: u32) -> Result<()> {
    if oid[0] != RLWE_OID_TAG {
        return Err(Error::InvalidParameter {
            context,
            message: format!("OID family tag {:#04x} is not Ring-LWE", oid[0]),
        });
    }
    if n != 256 && n != 512 {
        return Err(Error::InvalidParameter {
            context,
            message: format!("N = {} is not 256 or 512", n),
        });
    }
    // q must be an NTT-friendly prime
    NttContext::new(n, q)?;
    Ok(())
}

/// Validated Ring-LWE encryption parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlweParameters {
    oid: [u8; 4],
    n: usize,
    q: u32,
    eta: usize,
}

impl RlweParameters {
    pub fn new(set: &RlweParamSet) -> Result<Self> {
        check_ring("RlweParameters", set.oid, set.n, set.q)?;
        if set.eta == 0 || set.eta > 16 {
            return Err(Error::InvalidParameter {
                context: "RlweParameters",
                message: format!("eta = {} outside [1, 16]", set.eta),
            });
        }
        Ok(Self {
            oid: set.oid,
            n: set.n,
            q: set.q,
            eta: set.eta,
        })
    }

    pub fn oid(&self) -> [u8; 4] {
        self.oid
    }

    /// Ring degree N
    pub fn n(&self) -> usize {
        self.n
    }

    /// Prime modulus q
    pub fn q(&self) -> u32 {
        self.q
    }

    /// Centered binomial noise parameter
    pub fn eta(&self) -> usize {
        self.eta
    }

    /// Longest plaintext in bytes: one bit per coefficient, less the length byte
    pub fn message_max(&self) -> usize {
        self.n / 8 - 1
    }

    pub fn log_q(&self) -> u32 {
        ceil_log2(self.q as u64)
    }

    /// Ciphertext length: c1 and c2 in base q
    pub fn ciphertext_len(&self) -> usize {
        2 * packed_len(self.n, self.log_q())
    }

    /// Fresh NTT tables for this ring
    pub fn ntt(&self) -> Result<NttContext> {
        Ok(NttContext::new(self.n, self.q)?)
    }
}

/// Validated parameters for the Ring-LWE signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlweSignParameters {
    oid: [u8; 4],
    n: usize,
    q: u32,
    k: u32,
    weight: usize,
    c: u32,
    digest: Digests,
}

impl RlweSignParameters {
    pub fn new(set: &RlweSignParamSet) -> Result<Self> {
        check_ring("RlweSignParameters", set.oid, set.n, set.q)?;
        let fail = |message: String| {
            Err(Error::InvalidParameter {
                context: "RlweSignParameters",
                message,
            })
        };
        if set.weight == 0 || set.weight % 2 != 0 || set.weight > set.n {
            return fail(format!("challenge weight {} is not even and at most N", set.weight));
        }
        if set.k as usize <= set.weight || 2 * set.k as u64 >= set.q as u64 {
            return fail(format!("masking range {} does not fit q = {}", set.k, set.q));
        }
        if set.c == 0 || set.c > 31 || (1u64 << set.c) < set.n as u64 {
            return fail(format!("c = {} cannot index N = {}", set.c, set.n));
        }
        Ok(Self {
            oid: set.oid,
            n: set.n,
            q: set.q,
            k: set.k,
            weight: set.weight,
            c: set.c,
            digest: Digests::from_id(set.digest)?,
        })
    }

    pub fn oid(&self) -> [u8; 4] {
        self.oid
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    /// Masking range: y is uniform in `[-k, k]`
    pub fn k(&self) -> u32 {
        self.k
    }

    /// Nonzero challenge coefficients
    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn c(&self) -> u32 {
        self.c
    }

    pub fn digest(&self) -> Digests {
        self.digest
    }

    /// Largest accepted |z| coefficient
    pub fn z_bound(&self) -> u32 {
        self.k - self.weight as u32
    }

    /// Bits per packed z coefficient
    pub fn z_bits(&self) -> u32 {
        ceil_log2(2 * self.z_bound() as u64 + 1)
    }

    pub fn log_q(&self) -> u32 {
        ceil_log2(self.q as u64)
    }

    /// Signature length: challenge seed, z1 and z2
    pub fn signature_len(&self) -> usize {
        self.digest.output_size() + 2 * packed_len(self.n, self.z_bits())
    }

    pub fn ntt(&self) -> Result<NttContext> {
        Ok(NttContext::new(self.n, self.q)?)
    }
}
