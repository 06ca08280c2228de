//! Lattice arithmetic primitives for the pqlat library
//!
//! This crate provides the building blocks shared by the NTRU and Ring-LWE
//! schemes:
//!
//! - Polynomials over Z[x]/(x^N - 1) with recursive Karatsuba multiplication,
//!   almost-inverse inversion mod 2 and 3, Hensel lifting to mod 2^k, and a
//!   CRT-reconstructed resultant
//! - Sparse, dense and product-form ternary polynomials behind one enum
//! - The IGF-2 index generator and MGF-TP-1 mask generator of IEEE P1363.1
//! - A negacyclic number theoretic transform over Z_q[x]/(x^N + 1)
//! - The digest and random engine collaborators selected by parameter sets

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Digest collaborators
pub mod hash;
pub use hash::{DigestEngine, Digests};

// Random engines
pub mod prng;
pub use prng::{PassphrasePrng, Prng, RandomEngine};

// Polynomial engine
pub mod poly;

// Index and mask generation functions
pub mod mgf;
pub use mgf::{generate_mask, IndexGenerator};

// Re-export security types from pqlat-common
pub use pqlat_common::security::{EphemeralSecret, SecretVec};
