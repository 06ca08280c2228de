//! Validation utilities for lattice primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a ternary coefficient
#[inline(always)]
pub fn ternary(context: &'static str, coeff: i32) -> Result<()> {
    if !(-1..=1).contains(&coeff) {
        return Err(Error::polynomial(
            context,
            format!("coefficient {} is not in {{-1, 0, 1}}", coeff),
        ));
    }
    Ok(())
}
