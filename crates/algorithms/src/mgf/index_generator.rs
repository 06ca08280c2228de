//! IGF-2 index generator
//!
//! Reads `c`-bit chunks from the expanded seed, least significant bit first,
//! and rejects chunks at or above the largest multiple of N below 2^c so that
//! the returned indices are uniform in `[0, N)`.

use zeroize::{Zeroize, Zeroizing};

use super::expand_block;
use crate::error::{Error, Result};
use crate::hash::{DigestEngine, Digests};

/// Index generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgfParams {
    /// Ring degree; indices are drawn from `[0, n)`
    pub n: usize,
    /// Bits per candidate index
    pub c: u32,
    /// Digest blocks computed up front
    pub min_calls: usize,
    /// Hash the seed before expansion
    pub hash_seed: bool,
    pub digest: Digests,
}

/// Deterministic stream of indices in `[0, N)` derived from a seed
pub struct IndexGenerator {
    z: Zeroizing<Vec<u8>>,
    n: usize,
    c: u32,
    limit: u64,
    engine: DigestEngine,
    counter: u32,
    buf: Zeroizing<Vec<u8>>,
    bit_pos: usize,
}

impl IndexGenerator {
    /// Consume `seed` and precompute `min_calls` digest blocks
    pub fn new(seed: &[u8], params: &IgfParams) -> Result<Self> {
        if params.n == 0 {
            return Err(Error::param("N", "must be positive"));
        }
        if params.c == 0 || params.c > 31 {
            return Err(Error::param("c", "must be between 1 and 31"));
        }
        let range = 1u64 << params.c;
        if range < params.n as u64 {
            return Err(Error::param("c", "2^c must be at least N"));
        }

        let mut engine = params.digest.engine();
        let z = if params.hash_seed {
            engine.update(seed);
            Zeroizing::new(engine.finalize_reset())
        } else {
            Zeroizing::new(seed.to_vec())
        };

        let mut ig = Self {
            z,
            n: params.n,
            c: params.c,
            limit: range - range % params.n as u64,
            engine,
            counter: 0,
            buf: Zeroizing::new(Vec::new()),
            bit_pos: 0,
        };
        for _ in 0..params.min_calls {
            ig.append_block();
        }
        Ok(ig)
    }

    /// Ring degree the indices are drawn for
    pub fn n(&self) -> usize {
        self.n
    }

    /// Next index in `[0, N)`
    pub fn next_index(&mut self) -> usize {
        let c = self.c as usize;
        loop {
            while self.buf.len() * 8 - self.bit_pos < c {
                let consumed = self.bit_pos / 8;
                self.buf.drain(..consumed);
                self.bit_pos -= consumed * 8;
                self.append_block();
            }

            let mut v = 0u64;
            for j in 0..c {
                let pos = self.bit_pos + j;
                v |= (((self.buf[pos / 8] >> (pos % 8)) & 1) as u64) << j;
            }
            self.bit_pos += c;

            if v < self.limit {
                return (v % self.n as u64) as usize;
            }
        }
    }

    fn append_block(&mut self) {
        let mut block = expand_block(&mut self.engine, &self.z, self.counter);
        self.counter = self.counter.wrapping_add(1);
        self.buf.extend_from_slice(&block);
        block.zeroize();
    }
}

impl core::fmt::Debug for IndexGenerator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndexGenerator")
            .field("n", &self.n)
            .field("c", &self.c)
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n: usize, c: u32) -> IgfParams {
        IgfParams {
            n,
            c,
            min_calls: 2,
            hash_seed: true,
            digest: Digests::Sha256,
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let p = params(107, 8);
        let mut a = IndexGenerator::new(b"seed material", &p).unwrap();
        let mut b = IndexGenerator::new(b"seed material", &p).unwrap();
        for _ in 0..10 * 107 {
            assert_eq!(a.next_index(), b.next_index());
        }
    }

    #[test]
    fn test_indices_in_range_and_spread() {
        let p = params(439, 9);
        let mut ig = IndexGenerator::new(b"spread", &p).unwrap();
        let mut hit = vec![false; 439];
        for _ in 0..20 * 439 {
            let i = ig.next_index();
            assert!(i < 439);
            hit[i] = true;
        }
        assert!(hit.iter().all(|&h| h));
    }

    #[test]
    fn test_different_seed_different_stream() {
        let p = params(107, 8);
        let mut a = IndexGenerator::new(b"one", &p).unwrap();
        let mut b = IndexGenerator::new(b"two", &p).unwrap();
        let xs: Vec<usize> = (0..32).map(|_| a.next_index()).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.next_index()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_first_index_from_first_block() {
        // Without seed hashing the first chunk is the low c bits of H(Z || 0)
        let p = IgfParams {
            n: 256,
            c: 8,
            min_calls: 1,
            hash_seed: false,
            digest: Digests::Sha256,
        };
        let mut ig = IndexGenerator::new(b"z", &p).unwrap();
        let mut expected_input = b"z".to_vec();
        expected_input.extend_from_slice(&[0, 0, 0, 0]);
        let block = Digests::Sha256.digest(&expected_input);
        assert_eq!(ig.next_index(), block[0] as usize);
        assert_eq!(ig.next_index(), block[1] as usize);
    }

    #[test]
    fn test_parameter_validation() {
        assert!(IndexGenerator::new(b"s", &params(0, 8)).is_err());
        assert!(IndexGenerator::new(b"s", &params(300, 8)).is_err());
        assert!(IndexGenerator::new(b"s", &params(107, 32)).is_err());
    }
}
