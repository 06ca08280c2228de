//! Scheme traits implemented by the lattice constructions

pub mod pke;
pub mod serialize;
pub mod signature;

pub use pke::Pke;
pub use serialize::{Serialize, SerializeSecret};
pub use signature::Signature;
