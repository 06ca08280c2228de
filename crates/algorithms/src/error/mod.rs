//! Error handling for lattice primitives

use std::borrow::Cow;
use std::fmt;

use pqlat_api::Error as CoreError;

/// The error type for lattice primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Coefficients violate a polynomial representation's invariant
    InvalidPolynomial {
        /// Operation that detected the violation
        context: &'static str,
        /// What was wrong
        reason: Cow<'static, str>,
    },

    /// Bytes that cannot be decoded, or a value that has no encoding
    Encoding {
        /// Codec that failed
        context: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Unknown digest or random engine identifier
    UnsupportedEngine {
        /// Selector kind
        context: &'static str,
        /// The unrecognised identifier
        id: i32,
    },

    /// Processing error during an arithmetic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an InvalidPolynomial error
    pub fn polynomial<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::InvalidPolynomial {
            context,
            reason: reason.into(),
        }
    }
}

/// Result type for lattice primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidPolynomial { context, reason } => {
                write!(f, "Invalid polynomial in {}: {}", context, reason)
            }
            Error::Encoding { context, details } => {
                write!(f, "Encoding error in {}: {}", context, details)
            }
            Error::UnsupportedEngine { context, id } => {
                write!(f, "Unsupported {} identifier {}", context, id)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidPolynomial { context, reason } => CoreError::InvalidPolynomial {
                context,
                message: reason.into_owned(),
            },
            Error::Encoding { context, details } => CoreError::InvalidEncoding {
                context,
                message: details.to_string(),
            },
            Error::UnsupportedEngine { context, id } => {
                CoreError::UnsupportedEngine { context, id }
            }
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
