//! Array encoders for polynomial coefficients
//!
//! Bit packing is little-endian at the bit level: coefficient i occupies bits
//! `i*w .. (i+1)*w` of the output, least significant bit first.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::error::{validate, Error, Result};

/// Byte length of `count` values packed at `bits` each
#[inline]
pub fn packed_len(count: usize, bits: u32) -> usize {
    (count * bits as usize).div_ceil(8)
}

/// Pack values at a fixed bit width
///
/// Bits of a value above `bits` are dropped.
pub fn pack_bits(values: &[u32], bits: u32) -> Vec<u8> {
    let mut out = vec![0u8; packed_len(values.len(), bits)];
    let mut pos = 0usize;
    for &v in values {
        for j in 0..bits {
            if (v >> j) & 1 == 1 {
                out[pos / 8] |= 1 << (pos % 8);
            }
            pos += 1;
        }
    }
    out
}

/// Unpack `count` values of `bits` each
///
/// The input length must match exactly and the padding bits of the final byte
/// must be zero.
pub fn unpack_bits(data: &[u8], count: usize, bits: u32) -> Result<Vec<u32>> {
    validate::length("packed coefficients", data.len(), packed_len(count, bits))?;

    let mut values = Vec::with_capacity(count);
    let mut pos = 0usize;
    for _ in 0..count {
        let mut v = 0u32;
        for j in 0..bits {
            v |= (((data[pos / 8] >> (pos % 8)) & 1) as u32) << j;
            pos += 1;
        }
        values.push(v);
    }

    while pos < data.len() * 8 {
        if (data[pos / 8] >> (pos % 8)) & 1 != 0 {
            return Err(Error::Encoding {
                context: "packed coefficients",
                details: "non-zero padding bits",
            });
        }
        pos += 1;
    }
    Ok(values)
}

const TRITS_PER_CHUNK: usize = 20;
const CHUNK_RADIX: u64 = 3_486_784_401; // 3^20

/// Byte length of the tight ternary encoding of `n` trits
pub fn tight_ternary_len(n: usize) -> usize {
    let bits = BigUint::from(3u32).pow(n as u32).bits() as usize;
    bits.div_ceil(8)
}

/// Tight ternary encoding: sum of (c_i + 1) * 3^i as a big-endian integer
pub fn encode_tight_ternary(coeffs: &[i32]) -> Result<Vec<u8>> {
    let mut sum = BigUint::zero();
    let chunks: Vec<&[i32]> = coeffs.chunks(TRITS_PER_CHUNK).collect();
    for chunk in chunks.iter().rev() {
        let mut value = 0u64;
        let mut radix = 1u64;
        for &c in chunk.iter() {
            if !(-1..=1).contains(&c) {
                return Err(Error::polynomial(
                    "tight ternary",
                    format!("coefficient {} is not in {{-1, 0, 1}}", c),
                ));
            }
            value += (c + 1) as u64 * radix;
            radix *= 3;
        }
        sum = sum * BigUint::from(radix) + BigUint::from(value);
    }

    let width = tight_ternary_len(coeffs.len());
    let digits = if sum.is_zero() {
        Vec::new()
    } else {
        sum.to_bytes_be()
    };
    let mut out = vec![0u8; width];
    out[width - digits.len()..].copy_from_slice(&digits);
    Ok(out)
}

/// Decode `n` trits from the tight ternary encoding
pub fn decode_tight_ternary(data: &[u8], n: usize) -> Result<Vec<i32>> {
    let expected = tight_ternary_len(n);
    if data.len() != expected {
        return Err(Error::Length {
            context: "tight ternary",
            expected,
            actual: data.len(),
        });
    }

    let mut sum = BigUint::from_bytes_be(data);
    let mut coeffs = Vec::with_capacity(n);
    let mut remaining = n;
    while remaining > 0 {
        let take = remaining.min(TRITS_PER_CHUNK);
        let radix = if take == TRITS_PER_CHUNK {
            CHUNK_RADIX
        } else {
            3u64.pow(take as u32)
        };
        let (q, r) = sum.div_rem(&BigUint::from(radix));
        sum = q;
        let mut r = r.to_u64().unwrap_or(0);
        for _ in 0..take {
            coeffs.push((r % 3) as i32 - 1);
            r /= 3;
        }
        remaining -= take;
    }

    if !sum.is_zero() {
        return Err(Error::Encoding {
            context: "tight ternary",
            details: "value exceeds 3^N",
        });
    }
    Ok(coeffs)
}

// Three output bits per coefficient pair, indexed by (c1 + 1) * 3 + (c2 + 1)
const SVES_BIT1: [u8; 9] = [1, 1, 1, 0, 0, 0, 1, 0, 1];
const SVES_BIT2: [u8; 9] = [1, 1, 1, 1, 0, 0, 0, 1, 0];
const SVES_BIT3: [u8; 9] = [1, 0, 1, 0, 0, 1, 1, 1, 0];

// Coefficient pair for each three-bit value
const SVES_COEFF1: [i32; 8] = [0, 0, 0, 1, 1, 1, -1, -1];
const SVES_COEFF2: [i32; 8] = [0, 1, -1, 0, 1, -1, 0, 1];

/// Byte length of an SVES buffer for ring degree `n`
#[inline]
pub fn sves_len(n: usize) -> usize {
    (n * 3 / 2).div_ceil(8)
}

/// SVES ternary encoding, three bits per coefficient pair
///
/// The pair (-1, -1) has no code. An unpaired last coefficient is not encoded.
pub fn encode_sves(coeffs: &[i32], skip_first: bool) -> Result<Vec<u8>> {
    let n = coeffs.len();
    let mut out = vec![0u8; sves_len(n)];
    let mut bit = 0usize;
    let mut i = usize::from(skip_first);
    while i + 1 < n {
        let c1 = coeffs[i] + 1;
        let c2 = coeffs[i + 1] + 1;
        i += 2;
        if !(0..=2).contains(&c1) || !(0..=2).contains(&c2) {
            return Err(Error::polynomial("sves", "coefficient outside {-1, 0, 1}"));
        }
        if c1 == 0 && c2 == 0 {
            return Err(Error::Encoding {
                context: "sves",
                details: "illegal coefficient pair (-1, -1)",
            });
        }
        let t = (c1 * 3 + c2) as usize;
        for b in [SVES_BIT1[t], SVES_BIT2[t], SVES_BIT3[t]] {
            out[bit / 8] |= b << (bit % 8);
            bit += 1;
        }
    }
    Ok(out)
}

/// Decode an SVES buffer into `n` ternary coefficients
///
/// Bits past the end of `data` read as zero.
pub fn decode_sves(data: &[u8], n: usize, skip_first: bool) -> Vec<i32> {
    let get = |i: usize| -> usize {
        data.get(i / 8)
            .map(|b| ((b >> (i % 8)) & 1) as usize)
            .unwrap_or(0)
    };

    let mut coeffs = vec![0i32; n];
    let mut idx = usize::from(skip_first);
    let mut bit = 0usize;
    while bit < data.len() * 8 && idx + 1 < n {
        let t = get(bit) * 4 + get(bit + 1) * 2 + get(bit + 2);
        bit += 3;
        coeffs[idx] = SVES_COEFF1[t];
        coeffs[idx + 1] = SVES_COEFF2[t];
        idx += 2;
    }
    coeffs
}

/// Two bits per coefficient, the residue mod 4
pub fn encode_mod4(coeffs: &[i32]) -> Vec<u8> {
    let values: Vec<u32> = coeffs.iter().map(|&c| (c & 3) as u32).collect();
    pack_bits(&values, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_bits_layout() {
        // 0x7FF at 11 bits, then 1
        let packed = pack_bits(&[0x7FF, 1], 11);
        assert_eq!(packed, vec![0xFF, 0x0F, 0x00]);
        assert_eq!(unpack_bits(&packed, 2, 11).unwrap(), vec![0x7FF, 1]);
    }

    #[test]
    fn test_unpack_rejects_padding_and_length() {
        assert!(matches!(
            unpack_bits(&[0xFF, 0x0F, 0x80], 2, 11),
            Err(Error::Encoding { .. })
        ));
        assert!(matches!(
            unpack_bits(&[0xFF, 0x0F], 2, 11),
            Err(Error::Length { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn test_tight_ternary() {
        assert_eq!(tight_ternary_len(5), 1); // 3^5 = 243
        assert_eq!(tight_ternary_len(6), 2); // 3^6 = 729

        let coeffs = vec![1, -1, 0, 0, 1];
        // 2 + 0*3 + 1*9 + 1*27 + 2*81 = 200
        assert_eq!(encode_tight_ternary(&coeffs).unwrap(), vec![200]);

        let long: Vec<i32> = (0..107).map(|i| (i % 3) - 1).collect();
        let bytes = encode_tight_ternary(&long).unwrap();
        assert_eq!(bytes.len(), tight_ternary_len(107));
        assert_eq!(decode_tight_ternary(&bytes, 107).unwrap(), long);

        assert!(encode_tight_ternary(&[2]).is_err());
        // 255 > 3^5 - 1
        assert!(decode_tight_ternary(&[255], 5).is_err());
    }

    #[test]
    fn test_sves_codes() {
        // pair (1, 1) -> index 8 -> bits 1, 0, 0
        let out = encode_sves(&[1, 1, 0], false).unwrap();
        assert_eq!(out, vec![0b001]);
        assert_eq!(decode_sves(&out, 3, false), vec![1, 1, 0]);

        assert!(matches!(
            encode_sves(&[-1, -1, 0], false),
            Err(Error::Encoding { .. })
        ));
    }

    #[test]
    fn test_sves_every_code_decodes_to_legal_pair() {
        for t in 0u8..8 {
            let byte = ((t >> 2) & 1) | (((t >> 1) & 1) << 1) | ((t & 1) << 2);
            let pair = decode_sves(&[byte], 3, false);
            let reencoded = encode_sves(&pair, false).unwrap();
            assert_eq!(reencoded[0] & 0b111, byte, "code {}", t);
        }
    }

    #[test]
    fn test_sves_skip_first() {
        let coeffs = vec![0, 1, -1, 0, 1, 1, 0];
        let bytes = encode_sves(&coeffs, true).unwrap();
        assert_eq!(decode_sves(&bytes, 7, true), coeffs);
    }

    #[test]
    fn test_mod4() {
        assert_eq!(encode_mod4(&[-1, 2, 5, 0]), vec![0b00_01_10_11]);
    }
}
