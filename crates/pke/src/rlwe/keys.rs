//! Ring-LWE key types

use byteorder::{ByteOrder, LittleEndian};
use pqlat_algorithms::poly::encode::{pack_bits, packed_len, unpack_bits};
use pqlat_api::error::Error as CoreError;
use pqlat_api::{Serialize, SerializeSecret};
use pqlat_common::math_common::ceil_log2;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

const HEADER_LEN: usize = 6;

/// N (u16) || q (u32)
fn write_header(out: &mut Vec<u8>, n: usize, q: u32) {
    let mut header = [0u8; HEADER_LEN];
    LittleEndian::write_u16(&mut header[0..2], n as u16);
    LittleEndian::write_u32(&mut header[2..6], q);
    out.extend_from_slice(&header);
}

fn read_header(data: &[u8], context: &'static str) -> Result<(usize, u32)> {
    if data.len() < HEADER_LEN {
        return Err(Error::InvalidLength {
            context,
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }
    let n = LittleEndian::read_u16(&data[0..2]) as usize;
    let q = LittleEndian::read_u32(&data[2..6]);
    if n == 0 || q < 2 {
        return Err(Error::InvalidKey {
            context,
            message: format!("bad header N = {}, q = {}", n, q),
        });
    }
    Ok((n, q))
}

/// Split `data` into `parts` base-q polynomials of `n` coefficients
fn read_polys(
    data: &[u8],
    n: usize,
    q: u32,
    parts: usize,
    context: &'static str,
) -> Result<Vec<Vec<u32>>> {
    let bits = ceil_log2(q as u64);
    let len = packed_len(n, bits);
    if data.len() != parts * len {
        return Err(Error::InvalidLength {
            context,
            expected: parts * len,
            actual: data.len(),
        });
    }
    data.chunks(len)
        .map(|chunk| {
            let values = unpack_bits(chunk, n, bits)?;
            if values.iter().any(|&v| v >= q) {
                return Err(Error::InvalidKey {
                    context,
                    message: "coefficient not below q".into(),
                });
            }
            Ok(values)
        })
        .collect()
}

/// Small signed coefficients, stored shifted by `bound` at fixed width
fn pack_small(coeffs: &[i32], bound: i32) -> Vec<u8> {
    let bits = ceil_log2(2 * bound as u64 + 1);
    let shifted: Zeroizing<Vec<u32>> =
        Zeroizing::new(coeffs.iter().map(|&c| (c + bound) as u32).collect());
    pack_bits(&shifted, bits)
}

fn unpack_small(data: &[u8], n: usize, bound: i32, context: &'static str) -> Result<Vec<i32>> {
    let bits = ceil_log2(2 * bound as u64 + 1);
    let values = Zeroizing::new(unpack_bits(data, n, bits)?);
    if values.iter().any(|&v| v > 2 * bound as u32) {
        return Err(Error::InvalidKey {
            context,
            message: "coefficient out of range".into(),
        });
    }
    Ok(values.iter().map(|&v| v as i32 - bound).collect())
}

/// Encryption public key (a, p = r1 - a r2)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlwePublicKey {
    pub(crate) a: Vec<u32>,
    pub(crate) p: Vec<u32>,
    pub(crate) q: u32,
}

impl RlwePublicKey {
    pub fn n(&self) -> usize {
        self.a.len()
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    pub fn a(&self) -> &[u32] {
        &self.a
    }

    pub fn p(&self) -> &[u32] {
        &self.p
    }

    /// N || q || a || p, polynomials in base q
    pub fn to_bytes(&self) -> Vec<u8> {
        let bits = ceil_log2(self.q as u64);
        let mut out = Vec::new();
        write_header(&mut out, self.n(), self.q);
        out.extend_from_slice(&pack_bits(&self.a, bits));
        out.extend_from_slice(&pack_bits(&self.p, bits));
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "RlwePublicKey::from_bytes";
        let (n, q) = read_header(data, CONTEXT)?;
        let mut polys = read_polys(&data[HEADER_LEN..], n, q, 2, CONTEXT)?;
        let p = polys.pop().unwrap_or_default();
        let a = polys.pop().unwrap_or_default();
        Ok(Self { a, p, q })
    }
}

impl Serialize for RlwePublicKey {
    fn from_bytes(bytes: &[u8]) -> pqlat_api::Result<Self> {
        RlwePublicKey::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        RlwePublicKey::to_bytes(self)
    }
}

/// Bound on encoded private key coefficients
const SECRET_BOUND: i32 = 16;

/// Encryption private key r2, with CBD coefficients
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RlwePrivateKey {
    pub(crate) r2: Vec<i32>,
    #[zeroize(skip)]
    pub(crate) q: u32,
}

impl RlwePrivateKey {
    pub fn n(&self) -> usize {
        self.r2.len()
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    /// N || q || r2 shifted into `[0, 32]`
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(Vec::new());
        write_header(&mut out, self.n(), self.q);
        out.extend_from_slice(&Zeroizing::new(pack_small(&self.r2, SECRET_BOUND)));
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "RlwePrivateKey::from_bytes";
        let (n, q) = read_header(data, CONTEXT)?;
        let r2 = unpack_small(&data[HEADER_LEN..], n, SECRET_BOUND, CONTEXT)?;
        Ok(Self { r2, q })
    }
}

impl core::fmt::Debug for RlwePrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RlwePrivateKey")
            .field("n", &self.n())
            .field("q", &self.q)
            .field("r2", &"[REDACTED]")
            .finish()
    }
}

impl SerializeSecret for RlwePrivateKey {
    fn from_bytes(bytes: &[u8]) -> pqlat_api::Result<Self> {
        RlwePrivateKey::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}

/// Both halves of a Ring-LWE encryption key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlweKeyPair {
    pub public: RlwePublicKey,
    pub private: RlwePrivateKey,
}

/// Signature verification key (a, t = a s1 + s2)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlweSignPublicKey {
    pub(crate) a: Vec<u32>,
    pub(crate) t: Vec<u32>,
    pub(crate) q: u32,
}

impl RlweSignPublicKey {
    pub fn n(&self) -> usize {
        self.a.len()
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    pub fn a(&self) -> &[u32] {
        &self.a
    }

    pub fn t(&self) -> &[u32] {
        &self.t
    }

    /// N || q || a || t, polynomials in base q
    pub fn to_bytes(&self) -> Vec<u8> {
        let bits = ceil_log2(self.q as u64);
        let mut out = Vec::new();
        write_header(&mut out, self.n(), self.q);
        out.extend_from_slice(&pack_bits(&self.a, bits));
        out.extend_from_slice(&pack_bits(&self.t, bits));
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "RlweSignPublicKey::from_bytes";
        let (n, q) = read_header(data, CONTEXT)?;
        let mut polys = read_polys(&data[HEADER_LEN..], n, q, 2, CONTEXT)?;
        let t = polys.pop().unwrap_or_default();
        let a = polys.pop().unwrap_or_default();
        Ok(Self { a, t, q })
    }
}

impl Serialize for RlweSignPublicKey {
    fn from_bytes(bytes: &[u8]) -> pqlat_api::Result<Self> {
        RlweSignPublicKey::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        RlweSignPublicKey::to_bytes(self)
    }
}

/// Signing key: ternary s1, s2 plus the public key they belong to
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RlweSignSecretKey {
    pub(crate) s1: Vec<i32>,
    pub(crate) s2: Vec<i32>,
    #[zeroize(skip)]
    pub(crate) public: RlweSignPublicKey,
}

impl RlweSignSecretKey {
    pub fn n(&self) -> usize {
        self.s1.len()
    }

    pub fn public_key(&self) -> &RlweSignPublicKey {
        &self.public
    }

    /// Public key encoding || s1 || s2 at two bits per coefficient
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(self.public.to_bytes());
        out.extend_from_slice(&Zeroizing::new(pack_small(&self.s1, 1)));
        out.extend_from_slice(&Zeroizing::new(pack_small(&self.s2, 1)));
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "RlweSignSecretKey::from_bytes";
        let (n, q) = read_header(data, CONTEXT)?;
        let public_len = HEADER_LEN + 2 * packed_len(n, ceil_log2(q as u64));
        let secret_len = packed_len(n, 2);
        if data.len() != public_len + 2 * secret_len {
            return Err(Error::InvalidLength {
                context: CONTEXT,
                expected: public_len + 2 * secret_len,
                actual: data.len(),
            });
        }
        let public = RlweSignPublicKey::from_bytes(&data[..public_len])?;
        let s1 = unpack_small(&data[public_len..public_len + secret_len], n, 1, CONTEXT)?;
        let s2 = unpack_small(&data[public_len + secret_len..], n, 1, CONTEXT)?;
        Ok(Self { s1, s2, public })
    }
}

impl core::fmt::Debug for RlweSignSecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RlweSignSecretKey")
            .field("n", &self.n())
            .field("s", &"[REDACTED]")
            .finish()
    }
}

impl SerializeSecret for RlweSignSecretKey {
    fn from_bytes(bytes: &[u8]) -> pqlat_api::Result<Self> {
        RlweSignSecretKey::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}
