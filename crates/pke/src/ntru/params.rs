//! NTRUEncrypt parameter objects

use byteorder::{ByteOrder, LittleEndian};
use pqlat_algorithms::mgf::IgfParams;
use pqlat_algorithms::poly::encode::{packed_len, sves_len};
use pqlat_algorithms::{Digests, RandomEngine};
use pqlat_common::math_common::ceil_log2;
use pqlat_params::pqc::ntru::{NtruParamSet, NTRU_OID_TAG, POLY_TYPE_PRODUCT, POLY_TYPE_SIMPLE};

use crate::error::{Error, Result};

/// Encoded length of a parameter object
pub const PARAMS_BYTES: usize = 67;

/// Largest ring degree an 11-bit sparse index can address
const MAX_N: usize = 1 << 11;
const MAX_Q: u32 = 1 << 15;

/// Shape of the private and blinding polynomials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolyType {
    /// One ternary polynomial
    Simple,
    /// f1 * f2 + f3
    Product,
}

impl PolyType {
    pub fn from_id(id: i32) -> Result<Self> {
        match id {
            POLY_TYPE_SIMPLE => Ok(PolyType::Simple),
            POLY_TYPE_PRODUCT => Ok(PolyType::Product),
            _ => Err(Error::InvalidParameter {
                context: "NtruParameters",
                message: format!("unknown polynomial type {}", id),
            }),
        }
    }

    pub fn id(self) -> i32 {
        match self {
            PolyType::Simple => POLY_TYPE_SIMPLE,
            PolyType::Product => POLY_TYPE_PRODUCT,
        }
    }
}

/// Validated NTRUEncrypt parameters
///
/// Derived quantities (`dg`, the blinding weights, `message_max` and the
/// encoding lengths) are computed from the stored fields and cannot be set.
/// Parameters hold no secret material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NtruParameters {
    oid: [u8; 4],
    n: usize,
    q: u32,
    df: usize,
    df1: usize,
    df2: usize,
    df3: usize,
    db: usize,
    dm0: usize,
    max_m1: usize,
    c: u32,
    min_calls_r: usize,
    min_calls_mask: usize,
    hash_seed: bool,
    sparse: bool,
    fast_fp: bool,
    poly_type: PolyType,
    digest: Digests,
    random_engine: RandomEngine,
}

impl NtruParameters {
    /// Resolve and validate a catalog entry
    pub fn new(set: &NtruParamSet) -> Result<Self> {
        let params = Self {
            oid: set.oid,
            n: set.n,
            q: set.q,
            df: set.df,
            df1: set.df1,
            df2: set.df2,
            df3: set.df3,
            db: set.db,
            dm0: set.dm0,
            max_m1: set.max_m1,
            c: set.c,
            min_calls_r: set.min_calls_r,
            min_calls_mask: set.min_calls_mask,
            hash_seed: set.hash_seed,
            sparse: set.sparse,
            fast_fp: set.fast_fp,
            poly_type: PolyType::from_id(set.poly_type)?,
            digest: Digests::from_id(set.digest)?,
            random_engine: RandomEngine::from_id(set.random_engine)?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the internal consistency of every field
    pub fn validate(&self) -> Result<()> {
        let fail = |message: String| {
            Err(Error::InvalidParameter {
                context: "NtruParameters",
                message,
            })
        };

        if self.oid[0] != NTRU_OID_TAG {
            return fail(format!("OID family tag {:#04x} is not NTRU", self.oid[0]));
        }
        if self.n < 11 || self.n > MAX_N {
            return fail(format!("N = {} outside [11, {}]", self.n, MAX_N));
        }
        if !self.q.is_power_of_two() || self.q < 4 || self.q > MAX_Q {
            return fail(format!("q = {} is not a power of two in [4, 2^15]", self.q));
        }
        match self.poly_type {
            PolyType::Simple => {
                if self.df == 0 || 2 * self.df > self.n {
                    return fail(format!("Df = {} does not fit N = {}", self.df, self.n));
                }
            }
            PolyType::Product => {
                let weights = [self.df1, self.df2, self.df3];
                if weights.iter().any(|&d| d == 0 || 2 * d > self.n) {
                    return fail(format!(
                        "product form weights {:?} do not fit N = {}",
                        weights, self.n
                    ));
                }
            }
        }
        if self.db == 0 || self.db % 8 != 0 {
            return fail(format!("Db = {} is not a positive multiple of 8", self.db));
        }
        if self.db / 8 > self.public_key_poly_len() {
            return fail("Db exceeds the public key encoding".into());
        }
        if 3 * self.dm0 > self.n {
            return fail(format!("Dm0 = {} exceeds N / 3", self.dm0));
        }
        if self.c == 0 || self.c > 31 || (1u64 << self.c) < self.n as u64 {
            return fail(format!("c = {} cannot index N = {}", self.c, self.n));
        }
        if self.min_calls_r == 0 || self.min_calls_mask == 0 {
            return fail("minimum digest calls must be positive".into());
        }
        if self.raw_message_max() < 1 {
            return fail("no room for a message".into());
        }
        Ok(())
    }

    pub fn oid(&self) -> [u8; 4] {
        self.oid
    }

    /// Ring degree N
    pub fn n(&self) -> usize {
        self.n
    }

    /// Large modulus q
    pub fn q(&self) -> u32 {
        self.q
    }

    pub fn df(&self) -> usize {
        self.df
    }

    pub fn df1(&self) -> usize {
        self.df1
    }

    pub fn df2(&self) -> usize {
        self.df2
    }

    pub fn df3(&self) -> usize {
        self.df3
    }

    /// Weight of g: N/3 ones and N/3 - 1 negative ones
    pub fn dg(&self) -> usize {
        self.n / 3
    }

    /// Blinding polynomial weight (simple type)
    pub fn dr(&self) -> usize {
        self.df
    }

    /// Blinding factor weights (product form)
    pub fn dr_product(&self) -> (usize, usize, usize) {
        (self.df1, self.df2, self.df3)
    }

    /// Random padding length in bits
    pub fn db(&self) -> usize {
        self.db
    }

    pub fn dm0(&self) -> usize {
        self.dm0
    }

    pub fn max_m1(&self) -> usize {
        self.max_m1
    }

    pub fn c(&self) -> u32 {
        self.c
    }

    pub fn min_calls_r(&self) -> usize {
        self.min_calls_r
    }

    pub fn min_calls_mask(&self) -> usize {
        self.min_calls_mask
    }

    pub fn hash_seed(&self) -> bool {
        self.hash_seed
    }

    pub fn sparse(&self) -> bool {
        self.sparse
    }

    pub fn fast_fp(&self) -> bool {
        self.fast_fp
    }

    pub fn poly_type(&self) -> PolyType {
        self.poly_type
    }

    pub fn digest(&self) -> Digests {
        self.digest
    }

    pub fn random_engine(&self) -> RandomEngine {
        self.random_engine
    }

    /// Index generator settings for the blinding polynomial
    pub fn igf_params(&self) -> IgfParams {
        IgfParams {
            n: self.n,
            c: self.c,
            min_calls: self.min_calls_r,
            hash_seed: self.hash_seed,
            digest: self.digest,
        }
    }

    /// True when coefficient 0 of the message polynomial is kept at zero
    pub(crate) fn skip_first(&self) -> bool {
        self.max_m1 > 0
    }

    fn raw_message_max(&self) -> i64 {
        let n = if self.skip_first() { self.n - 1 } else { self.n };
        (n * 3 / 2 / 8) as i64 - 1 - (self.db / 8) as i64 - 1
    }

    /// Longest plaintext in bytes
    pub fn message_max(&self) -> usize {
        self.raw_message_max().clamp(0, 255) as usize
    }

    /// Bits per coefficient in the base-q encodings
    pub fn log_q(&self) -> u32 {
        ceil_log2(self.q as u64)
    }

    /// Length of the padded plaintext buffer b || len || m || 0*
    pub fn buffer_len(&self) -> usize {
        sves_len(self.n)
    }

    fn public_key_poly_len(&self) -> usize {
        packed_len(self.n, self.log_q())
    }

    /// Ciphertext length in bytes, independent of the message length
    pub fn ciphertext_len(&self) -> usize {
        packed_len(self.n, self.log_q())
    }

    /// Encoded public key length: N, q and the base-q polynomial
    pub fn public_key_len(&self) -> usize {
        4 + self.public_key_poly_len()
    }

    /// Little-endian wire encoding
    pub fn to_bytes(&self) -> [u8; PARAMS_BYTES] {
        let mut out = [0u8; PARAMS_BYTES];
        out[..4].copy_from_slice(&self.oid);

        let words = [
            self.n as i32,
            self.q as i32,
            self.df as i32,
            self.df1 as i32,
            self.df2 as i32,
            self.df3 as i32,
            self.db as i32,
            self.dm0 as i32,
            self.max_m1 as i32,
            self.c as i32,
            self.min_calls_r as i32,
            self.min_calls_mask as i32,
        ];
        LittleEndian::write_i32_into(&words, &mut out[4..52]);

        out[52] = self.hash_seed as u8;
        out[53] = self.sparse as u8;
        out[54] = self.fast_fp as u8;

        let selectors = [
            self.poly_type.id(),
            self.digest.id(),
            self.random_engine.id(),
        ];
        LittleEndian::write_i32_into(&selectors, &mut out[55..67]);
        out
    }

    /// Decode and validate the wire encoding
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != PARAMS_BYTES {
            return Err(Error::InvalidLength {
                context: "NtruParameters::from_bytes",
                expected: PARAMS_BYTES,
                actual: data.len(),
            });
        }

        let mut words = [0i32; 12];
        LittleEndian::read_i32_into(&data[4..52], &mut words);
        if words.iter().any(|&w| w < 0) {
            return Err(Error::InvalidParameter {
                context: "NtruParameters::from_bytes",
                message: "negative field".into(),
            });
        }
        let flag = |b: u8| match b {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidParameter {
                context: "NtruParameters::from_bytes",
                message: format!("flag byte {:#04x} is not boolean", b),
            }),
        };
        let mut selectors = [0i32; 3];
        LittleEndian::read_i32_into(&data[55..67], &mut selectors);

        let mut oid = [0u8; 4];
        oid.copy_from_slice(&data[..4]);

        let params = Self {
            oid,
            n: words[0] as usize,
            q: words[1] as u32,
            df: words[2] as usize,
            df1: words[3] as usize,
            df2: words[4] as usize,
            df3: words[5] as usize,
            db: words[6] as usize,
            dm0: words[7] as usize,
            max_m1: words[8] as usize,
            c: words[9] as u32,
            min_calls_r: words[10] as usize,
            min_calls_mask: words[11] as usize,
            hash_seed: flag(data[52])?,
            sparse: flag(data[53])?,
            fast_fp: flag(data[54])?,
            poly_type: PolyType::from_id(selectors[0])?,
            digest: Digests::from_id(selectors[1])?,
            random_engine: RandomEngine::from_id(selectors[2])?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Same parameters with a different coefficient-sum bound
    ///
    /// A nonzero bound moves the message off coefficient 0.
    pub fn with_max_m1(mut self, max_m1: usize) -> Result<Self> {
        self.max_m1 = max_m1;
        self.validate()?;
        Ok(self)
    }

    /// Same parameters drawing randomness from `engine`
    pub fn with_random_engine(mut self, engine: RandomEngine) -> Self {
        self.random_engine = engine;
        self
    }
}

impl TryFrom<&NtruParamSet> for NtruParameters {
    type Error = Error;

    fn try_from(set: &NtruParamSet) -> Result<Self> {
        Self::new(set)
    }
}
