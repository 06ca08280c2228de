//! Constants for lattice-based schemes

pub mod gmss;
pub mod ntru;
pub mod rlwe;

/// Digest selector: SHA-256
pub const DIGEST_SHA256: i32 = 0;
/// Digest selector: SHA-512
pub const DIGEST_SHA512: i32 = 1;

/// Random engine selector: ChaCha20 stream generator
pub const ENGINE_CHACHA20: i32 = 0;
/// Random engine selector: operating system entropy
pub const ENGINE_OS: i32 = 1;
