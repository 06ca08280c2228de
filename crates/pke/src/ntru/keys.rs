//! NTRU key types and their flat encodings

use byteorder::{ByteOrder, LittleEndian};
use pqlat_algorithms::poly::{
    DenseTernaryPolynomial, IntegerPolynomial, Polynomial, ProductFormPolynomial,
    SparseTernaryPolynomial,
};
use pqlat_api::error::Error as CoreError;
use pqlat_api::{Serialize, SerializeSecret};
use zeroize::{Zeroize, Zeroizing};

use super::params::{NtruParameters, PolyType};
use crate::error::{Error, Result};

const FLAG_SPARSE: u8 = 1;
const FLAG_FAST_FP: u8 = 1 << 1;
const FLAG_PRODUCT: u8 = 1 << 2;

/// Read the N || q header shared by both key encodings
fn read_header(data: &[u8], context: &'static str) -> Result<(usize, u32)> {
    if data.len() < 4 {
        return Err(Error::InvalidLength {
            context,
            expected: 4,
            actual: data.len(),
        });
    }
    let n = LittleEndian::read_u16(&data[0..2]) as usize;
    let q = LittleEndian::read_u16(&data[2..4]) as u32;
    if n == 0 || !q.is_power_of_two() || q < 4 {
        return Err(Error::InvalidKey {
            context,
            message: format!("bad header N = {}, q = {}", n, q),
        });
    }
    Ok((n, q))
}

fn write_header(out: &mut Vec<u8>, n: usize, q: u32) {
    let mut header = [0u8; 4];
    LittleEndian::write_u16(&mut header[0..2], n as u16);
    LittleEndian::write_u16(&mut header[2..4], q as u16);
    out.extend_from_slice(&header);
}

/// Public key h = 3 g f^-1 mod q
#[derive(Clone, PartialEq, Eq)]
pub struct NtruPublicKey {
    h: IntegerPolynomial,
    q: u32,
}

impl NtruPublicKey {
    /// Wrap `h`, whose coefficients must lie in `[0, q)`
    pub fn new(h: IntegerPolynomial, q: u32) -> Result<Self> {
        if h.coeffs.iter().any(|&c| c < 0 || c as u32 >= q) {
            return Err(Error::InvalidKey {
                context: "NtruPublicKey",
                message: "coefficient outside [0, q)".into(),
            });
        }
        Ok(Self { h, q })
    }

    pub fn h(&self) -> &IntegerPolynomial {
        &self.h
    }

    pub fn n(&self) -> usize {
        self.h.len()
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    /// True if this key lives in the ring described by `params`
    pub fn matches(&self, params: &NtruParameters) -> bool {
        self.n() == params.n() && self.q == params.q()
    }

    /// N (u16) || q (u16) || h in base q
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.h.len() * 2);
        write_header(&mut out, self.n(), self.q);
        out.extend_from_slice(&self.h.to_binary(self.q));
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (n, q) = read_header(data, "NtruPublicKey::from_bytes")?;
        let h = IntegerPolynomial::from_binary(&data[4..], n, q)?;
        Ok(Self { h, q })
    }
}

impl core::fmt::Debug for NtruPublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NtruPublicKey")
            .field("n", &self.n())
            .field("q", &self.q)
            .finish()
    }
}

impl Serialize for NtruPublicKey {
    fn from_bytes(bytes: &[u8]) -> pqlat_api::Result<Self> {
        NtruPublicKey::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        NtruPublicKey::to_bytes(self)
    }
}

/// Private key: the polynomial T and the inverse of f mod 3
///
/// f is T, or 1 + 3T when `fast_fp` is set, in which case `fp` is 1.
/// Coefficients are zeroized on drop.
#[derive(Clone)]
pub struct NtruPrivateKey {
    t: Polynomial,
    fp: IntegerPolynomial,
    q: u32,
    sparse: bool,
    fast_fp: bool,
}

impl NtruPrivateKey {
    /// Build a key from T, computing the inverse of f mod 3
    pub fn new(t: Polynomial, params: &NtruParameters) -> Result<Self> {
        if t.len() != params.n() {
            return Err(Error::InvalidKey {
                context: "NtruPrivateKey",
                message: format!("T has length {}, expected {}", t.len(), params.n()),
            });
        }
        Self::with_layout(t, params.q(), params.sparse(), params.fast_fp())
    }

    fn with_layout(t: Polynomial, q: u32, sparse: bool, fast_fp: bool) -> Result<Self> {
        let fp = if fast_fp {
            IntegerPolynomial::one(t.len())
        } else {
            let f = Zeroizing::new(t.to_integer_polynomial()?);
            f.invert_f3().ok_or_else(|| Error::InvalidKey {
                context: "NtruPrivateKey",
                message: "f is not invertible mod 3".into(),
            })?
        };
        Ok(Self {
            t,
            fp,
            q,
            sparse,
            fast_fp,
        })
    }

    /// Assemble a key whose inverse was computed during generation
    pub(crate) fn from_parts(
        t: Polynomial,
        fp: IntegerPolynomial,
        params: &NtruParameters,
    ) -> Self {
        Self {
            t,
            fp,
            q: params.q(),
            sparse: params.sparse(),
            fast_fp: params.fast_fp(),
        }
    }

    pub fn t(&self) -> &Polynomial {
        &self.t
    }

    /// f^-1 mod 3
    pub fn fp(&self) -> &IntegerPolynomial {
        &self.fp
    }

    pub fn n(&self) -> usize {
        self.t.len()
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    pub fn fast_fp(&self) -> bool {
        self.fast_fp
    }

    pub fn sparse(&self) -> bool {
        self.sparse
    }

    pub fn poly_type(&self) -> PolyType {
        match self.t {
            Polynomial::ProductForm(_) => PolyType::Product,
            _ => PolyType::Simple,
        }
    }

    /// f = T, or 1 + 3T under `fast_fp`
    pub fn effective_f(&self) -> Result<IntegerPolynomial> {
        let mut f = self.t.to_integer_polynomial()?;
        if self.fast_fp {
            f.mult_scalar(3);
            f.coeffs[0] += 1;
        }
        Ok(f)
    }

    /// True if this key lives in the ring described by `params`
    pub fn matches(&self, params: &NtruParameters) -> bool {
        self.n() == params.n()
            && self.q == params.q()
            && self.fast_fp == params.fast_fp()
            && self.poly_type() == params.poly_type()
    }

    /// N (u16) || q (u16) || flags || T
    ///
    /// T is three sparse encodings in product form and the tight ternary
    /// encoding otherwise.
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        let mut out = Zeroizing::new(Vec::new());
        write_header(&mut out, self.n(), self.q);

        let mut flags = 0u8;
        if self.sparse {
            flags |= FLAG_SPARSE;
        }
        if self.fast_fp {
            flags |= FLAG_FAST_FP;
        }
        match &self.t {
            Polynomial::ProductForm(pf) => {
                out.push(flags | FLAG_PRODUCT);
                out.extend_from_slice(&Zeroizing::new(pf.to_binary()));
            }
            t => {
                out.push(flags);
                let coeffs = Zeroizing::new(t.to_integer_polynomial()?);
                out.extend_from_slice(&Zeroizing::new(coeffs.to_binary3_tight()?));
            }
        }
        Ok(out)
    }

    /// Decode a private key and recompute its inverse mod 3
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (n, q) = read_header(data, "NtruPrivateKey::from_bytes")?;
        let flags = *data.get(4).ok_or(Error::InvalidLength {
            context: "NtruPrivateKey::from_bytes",
            expected: 5,
            actual: data.len(),
        })?;
        if flags & !(FLAG_SPARSE | FLAG_FAST_FP | FLAG_PRODUCT) != 0 {
            return Err(Error::InvalidKey {
                context: "NtruPrivateKey::from_bytes",
                message: format!("unknown flags {:#04x}", flags),
            });
        }
        let sparse = flags & FLAG_SPARSE != 0;
        let fast_fp = flags & FLAG_FAST_FP != 0;
        let body = &data[5..];

        let t: Polynomial = if flags & FLAG_PRODUCT != 0 {
            ProductFormPolynomial::from_binary(body, n)?.into()
        } else {
            let coeffs = IntegerPolynomial::from_binary3_tight(body, n)?;
            if sparse {
                SparseTernaryPolynomial::from_coeffs(&coeffs)?.into()
            } else {
                DenseTernaryPolynomial::new(coeffs)?.into()
            }
        };
        Self::with_layout(t, q, sparse, fast_fp)
    }
}

impl Zeroize for NtruPrivateKey {
    fn zeroize(&mut self) {
        self.t.zeroize();
        self.fp.zeroize();
    }
}

impl Drop for NtruPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PartialEq for NtruPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        match (self.t.to_integer_polynomial(), other.t.to_integer_polynomial()) {
            (Ok(a), Ok(b)) => {
                a == b
                    && self.fp == other.fp
                    && self.q == other.q
                    && self.fast_fp == other.fast_fp
                    && self.poly_type() == other.poly_type()
            }
            _ => false,
        }
    }
}

impl core::fmt::Debug for NtruPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NtruPrivateKey")
            .field("n", &self.n())
            .field("q", &self.q)
            .field("fast_fp", &self.fast_fp)
            .field("t", &"[REDACTED]")
            .finish()
    }
}

impl SerializeSecret for NtruPrivateKey {
    fn from_bytes(bytes: &[u8]) -> pqlat_api::Result<Self> {
        NtruPrivateKey::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
            .unwrap_or_else(|_| Zeroizing::new(Vec::new()))
    }
}

/// A public key, a private key, or both
///
/// Encryption needs the public half; decryption needs both.
#[derive(Clone, Debug, PartialEq)]
pub struct NtruKeyPair {
    public: Option<NtruPublicKey>,
    private: Option<NtruPrivateKey>,
}

impl NtruKeyPair {
    pub fn new(public: NtruPublicKey, private: NtruPrivateKey) -> Self {
        Self {
            public: Some(public),
            private: Some(private),
        }
    }

    pub fn public_only(public: NtruPublicKey) -> Self {
        Self {
            public: Some(public),
            private: None,
        }
    }

    pub fn private_only(private: NtruPrivateKey) -> Self {
        Self {
            public: None,
            private: Some(private),
        }
    }

    pub fn public(&self) -> Option<&NtruPublicKey> {
        self.public.as_ref()
    }

    pub fn private(&self) -> Option<&NtruPrivateKey> {
        self.private.as_ref()
    }

    /// True when both halves are present
    pub fn is_complete(&self) -> bool {
        self.public.is_some() && self.private.is_some()
    }

    /// Split into the two halves
    pub fn into_parts(mut self) -> (Option<NtruPublicKey>, Option<NtruPrivateKey>) {
        (self.public.take(), self.private.take())
    }
}

impl Zeroize for NtruKeyPair {
    fn zeroize(&mut self) {
        if let Some(private) = self.private.as_mut() {
            private.zeroize();
        }
    }
}
