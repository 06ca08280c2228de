//! Seed expansion functions of IEEE P1363.1
//!
//! Both functions stretch a seed Z into a digest stream
//! `H(Z || 0) || H(Z || 1) || ...` with a 32-bit big-endian counter.

mod index_generator;
mod mask;

pub use index_generator::{IgfParams, IndexGenerator};
pub use mask::generate_mask;

use byteorder::{BigEndian, ByteOrder};

use crate::hash::DigestEngine;

/// One block `H(z || counter)`, counter big-endian
pub(crate) fn expand_block(engine: &mut DigestEngine, z: &[u8], counter: u32) -> Vec<u8> {
    let mut c = [0u8; 4];
    BigEndian::write_u32(&mut c, counter);
    engine.update(z);
    engine.update(&c);
    engine.finalize_reset()
}
