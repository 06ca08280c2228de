//! Public error type shared by every pqlat crate

pub mod traits;
pub mod types;
pub mod validate;

pub use traits::ResultExt;
pub use types::{Error, Result};

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
