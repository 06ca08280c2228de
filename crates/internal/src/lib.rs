//! Internal helpers shared by the pqlat crates
//!
//! Not part of the public API; items may change between releases.

pub mod constant_time;
