//! Validation helpers producing API-level errors

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a plaintext length against a scheme maximum
#[inline(always)]
pub fn message_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::MessageTooLong {
            context,
            max,
            actual,
        });
    }
    Ok(())
}

/// Validate a key against the expected parameters
#[inline(always)]
pub fn key(condition: bool, context: &'static str, reason: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}
