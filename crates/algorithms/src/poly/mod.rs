//! Polynomial engine
//!
//! Arithmetic in Z[x]/(x^N - 1) for NTRU and in Z_q[x]/(x^N + 1) for
//! Ring-LWE, with the ternary representations, arbitrary precision helpers
//! and wire encoders both need.

pub mod bigdecimal;
pub mod bigint;
pub mod encode;
pub mod integer;
mod inverse;
pub mod karatsuba;
pub mod ntt;
pub mod primes;
pub mod resultant;
pub mod sampling;
pub mod ternary;

pub use bigdecimal::BigDecimalPolynomial;
pub use bigint::BigIntPolynomial;
pub use integer::IntegerPolynomial;
pub use ntt::NttContext;
pub use resultant::{ModularResultant, Resultant, DEFAULT_AGREEMENTS};
pub use ternary::{
    DenseTernaryPolynomial, Polynomial, ProductFormPolynomial, SparseTernaryPolynomial,
};

/// Prelude for easy importing of common polynomial types
pub mod prelude {
    pub use super::encode::{sves_len, tight_ternary_len};
    pub use super::{
        BigDecimalPolynomial, BigIntPolynomial, DenseTernaryPolynomial, IntegerPolynomial,
        NttContext, Polynomial, ProductFormPolynomial, Resultant, SparseTernaryPolynomial,
    };
}

#[cfg(test)]
mod tests;
