//! Random engines
//!
//! Parameter sets name a random engine by identifier. Key generation may also
//! run from a passphrase: PBKDF2 stretches it into a ChaCha20 seed, and
//! independent streams of that seed feed the two halves of the generator.

use hmac::Hmac;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hash::Digests;

/// Random engine selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RandomEngine {
    /// ChaCha20 seeded from the operating system
    ChaCha20,
    /// Operating system generator used directly
    Os,
}

impl RandomEngine {
    /// Resolve a random engine identifier
    pub fn from_id(id: i32) -> Result<Self> {
        match id {
            pqlat_params::pqc::ENGINE_CHACHA20 => Ok(RandomEngine::ChaCha20),
            pqlat_params::pqc::ENGINE_OS => Ok(RandomEngine::Os),
            _ => Err(Error::UnsupportedEngine {
                context: "random engine",
                id,
            }),
        }
    }

    /// Wire identifier of this engine
    pub fn id(self) -> i32 {
        match self {
            RandomEngine::ChaCha20 => pqlat_params::pqc::ENGINE_CHACHA20,
            RandomEngine::Os => pqlat_params::pqc::ENGINE_OS,
        }
    }

    /// Instantiate the engine
    pub fn instantiate(self) -> Prng {
        match self {
            RandomEngine::ChaCha20 => Prng::ChaCha20(Box::new(ChaCha20Rng::from_entropy())),
            RandomEngine::Os => Prng::Os(OsRng),
        }
    }
}

/// A random engine chosen at runtime
pub enum Prng {
    ChaCha20(Box<ChaCha20Rng>),
    Os(OsRng),
}

impl RngCore for Prng {
    fn next_u32(&mut self) -> u32 {
        match self {
            Prng::ChaCha20(r) => r.next_u32(),
            Prng::Os(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Prng::ChaCha20(r) => r.next_u64(),
            Prng::Os(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Prng::ChaCha20(r) => r.fill_bytes(dest),
            Prng::Os(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        match self {
            Prng::ChaCha20(r) => r.try_fill_bytes(dest),
            Prng::Os(r) => r.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for Prng {}

impl core::fmt::Debug for Prng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Prng::ChaCha20(_) => f.write_str("Prng::ChaCha20"),
            Prng::Os(_) => f.write_str("Prng::Os"),
        }
    }
}

/// Generators that can split off an independent stream
pub trait BranchRng: RngCore + CryptoRng {
    /// The generator type of a branch
    type Branch: RngCore + CryptoRng + Send;

    /// Split off a new stream; successive calls give distinct streams
    fn branch(&mut self) -> Self::Branch;
}

/// Derive a ChaCha20 stream seeded from 32 bytes of `rng`
pub fn branch<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> ChaCha20Rng {
    let mut seed = Zeroizing::new([0u8; 32]);
    rng.fill_bytes(seed.as_mut());
    ChaCha20Rng::from_seed(*seed)
}

impl BranchRng for ChaCha20Rng {
    type Branch = ChaCha20Rng;

    fn branch(&mut self) -> ChaCha20Rng {
        branch(self)
    }
}

impl BranchRng for Prng {
    type Branch = ChaCha20Rng;

    fn branch(&mut self) -> ChaCha20Rng {
        branch(self)
    }
}

impl BranchRng for OsRng {
    type Branch = ChaCha20Rng;

    fn branch(&mut self) -> ChaCha20Rng {
        branch(self)
    }
}

/// Default PBKDF2 iteration count for passphrase seeding
pub const PASSPHRASE_ITERATIONS: u32 = 10_000;

/// Deterministic generator seeded from a passphrase
///
/// The same (digest, passphrase, salt) always yields the same output stream,
/// and the same sequence of branches.
pub struct PassphrasePrng {
    seed: Zeroizing<[u8; 32]>,
    rng: ChaCha20Rng,
    next_stream: u64,
}

impl PassphrasePrng {
    /// Stretch `passphrase` with PBKDF2-HMAC using the default iteration count
    pub fn new(digest: Digests, passphrase: &[u8], salt: &[u8]) -> Self {
        Self::with_iterations(digest, passphrase, salt, PASSPHRASE_ITERATIONS)
    }

    /// Stretch `passphrase` with an explicit iteration count
    pub fn with_iterations(
        digest: Digests,
        passphrase: &[u8],
        salt: &[u8],
        iterations: u32,
    ) -> Self {
        let mut seed = Zeroizing::new([0u8; 32]);
        match digest {
            Digests::Sha256 => {
                pbkdf2::pbkdf2::<Hmac<Sha256>>(passphrase, salt, iterations, seed.as_mut())
            }
            Digests::Sha512 => {
                pbkdf2::pbkdf2::<Hmac<Sha512>>(passphrase, salt, iterations, seed.as_mut())
            }
        }
        let rng = ChaCha20Rng::from_seed(*seed);
        Self {
            seed,
            rng,
            next_stream: 1,
        }
    }
}

impl RngCore for PassphrasePrng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl CryptoRng for PassphrasePrng {}

impl BranchRng for PassphrasePrng {
    type Branch = ChaCha20Rng;

    /// Same key, next unused ChaCha20 stream id
    fn branch(&mut self) -> ChaCha20Rng {
        let mut rng = ChaCha20Rng::from_seed(*self.seed);
        rng.set_stream(self.next_stream);
        self.next_stream += 1;
        rng
    }
}

impl core::fmt::Debug for PassphrasePrng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PassphrasePrng")
            .field("seed", &"[REDACTED]")
            .field("next_stream", &self.next_stream)
            .finish()
    }
}
