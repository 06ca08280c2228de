//! Conversions from crate-local results into [`Error`]

use super::types::{Error, Result};

/// Lift a crate-local result into the public error type, relabelling it
///
/// The variant and its payload survive; only the operation name or the
/// message is replaced.
pub trait ResultExt<T, E>: Sized {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;

    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_message(message))
    }
}
