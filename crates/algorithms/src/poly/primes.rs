//! Primes for the modular resultant
//!
//! A sieve of the primes from 4507 up to 50000 is built on first use. Past the
//! end of the table, iteration continues with a primality test.

use once_cell::sync::Lazy;
use primality_test::is_prime;

/// Smallest prime used by the resultant
pub const FIRST_PRIME: u32 = 4507;

const TABLE_LIMIT: usize = 50_000;

static PRIME_TABLE: Lazy<Vec<u32>> = Lazy::new(|| {
    let mut composite = vec![false; TABLE_LIMIT + 1];
    let mut primes = Vec::new();
    for i in 2..=TABLE_LIMIT {
        if composite[i] {
            continue;
        }
        if i >= FIRST_PRIME as usize {
            primes.push(i as u32);
        }
        let mut j = i * i;
        while j <= TABLE_LIMIT {
            composite[j] = true;
            j += i;
        }
    }
    primes
});

/// The precomputed primes, ascending
pub fn table() -> &'static [u32] {
    &PRIME_TABLE
}

/// Ascending primes from [`FIRST_PRIME`], unbounded
#[derive(Debug, Clone, Default)]
pub struct PrimeIterator {
    index: usize,
    candidate: u64,
}

impl PrimeIterator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for PrimeIterator {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let table = table();
        if let Some(&p) = table.get(self.index) {
            self.index += 1;
            self.candidate = p as u64 + 2;
            return Some(p);
        }
        while self.candidate <= u32::MAX as u64 {
            let c = self.candidate;
            self.candidate += 2;
            if is_prime(c) {
                return Some(c as u32);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_bounds() {
        let t = table();
        assert_eq!(t[0], 4507);
        assert_eq!(t[1], 4513);
        assert!(t.len() > 4500);
        assert_eq!(*t.last().unwrap(), 49999);
    }

    #[test]
    fn test_iterator_continues_past_table() {
        let n = table().len();
        let beyond: Vec<u32> = PrimeIterator::new().skip(n).take(3).collect();
        assert_eq!(beyond, vec![50021, 50023, 50033]);
    }
}
