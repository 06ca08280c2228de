//! NTRUEncrypt (IEEE P1363.1)
//!
//! Parameters, keys, the key generator and the SVES cipher. Arithmetic runs
//! in Z_q[x]/(x^N - 1) with q a power of two; private and blinding
//! polynomials are ternary, stored sparse, dense or in product form as the
//! parameter set dictates.

mod encrypt;
mod keygen;
mod keys;
mod params;
mod variants;

pub use encrypt::{NtruEncrypt, MAX_ENCRYPT_ATTEMPTS};
pub use keygen::{KeyGenConfig, NtruKeyGenerator, DEFAULT_MAX_ATTEMPTS};
pub use keys::{NtruKeyPair, NtruPrivateKey, NtruPublicKey};
pub use params::{NtruParameters, PolyType, PARAMS_BYTES};
pub use variants::{
    Apr2011_439, Apr2011_439Fast, Apr2011_743, Apr2011_743Fast, Ees1087ep2, Ees1171ep1,
    Ees1499ep1, Ntru, NtruApr2011_439, NtruApr2011_439Fast, NtruApr2011_743,
    NtruApr2011_743Fast, NtruCiphertext, NtruEes1087ep2, NtruEes1171ep1, NtruEes1499ep1,
    NtruToy107, NtruVariant, Toy107,
};
