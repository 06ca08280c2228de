//! Ring-LWE encryption and signatures
//!
//! Both schemes work in Z_q[x]/(x^N + 1) with q prime and q = 1 mod 2N, so
//! every product goes through the negacyclic NTT.

mod encrypt;
mod keygen;
mod keys;
mod params;
mod ring;
mod sign;
mod variants;

pub use encrypt::RlweEncrypt;
pub use keygen::RlweKeyGenerator;
pub use keys::{RlweKeyPair, RlwePrivateKey, RlwePublicKey, RlweSignPublicKey, RlweSignSecretKey};
pub use params::{RlweParameters, RlweSignParameters};
pub use sign::{
    RlweSign, RlweSign512, RlweSignVariant, RlweSignature, RlweSignatureData, Sign512,
    MAX_SIGN_ATTEMPTS,
};
pub use variants::{Ring256, Ring512, Rlwe, Rlwe256, Rlwe512, RlweCiphertext, RlweVariant};
