//! Error handling for the lattice encryption and signature schemes

use pqlat_algorithms::error::Error as PrimitiveError;
use pqlat_api::error::Error as CoreError;
use thiserror::Error;

/// Error type for PKE and signature operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("PKE primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    #[error("PKE API error: {0}")]
    Api(#[from] CoreError),

    #[error("{context}: invalid parameter: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    #[error("{context}: invalid key: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{context}: cipher is not initialized for {operation}")]
    NotInitialized {
        context: &'static str,
        operation: &'static str,
    },

    #[error("{context}: message too long (maximum {max}, got {actual})")]
    MessageTooLong {
        context: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{context}: decryption failed: {reason}")]
    DecryptionFailed {
        context: &'static str,
        reason: &'static str,
    },

    #[error("{context}: invalid encoding: {reason}")]
    InvalidEncoding {
        context: &'static str,
        reason: &'static str,
    },

    #[error("{context}: no invertible key after {attempts} attempts")]
    Exhausted {
        context: &'static str,
        attempts: usize,
    },

    #[error("{context}: rejection sampling gave up after {attempts} attempts")]
    RetryLimit {
        context: &'static str,
        attempts: usize,
    },

    #[error("{context}: signature does not verify")]
    InvalidSignature { context: &'static str },

    #[error("{context}: serialization error: {message}")]
    Serialization {
        context: &'static str,
        message: String,
    },
}

impl Error {
    /// True for the failures a decryptor may observe on hostile input
    pub fn is_integrity_failure(&self) -> bool {
        match self {
            Error::DecryptionFailed { .. }
            | Error::InvalidEncoding { .. }
            | Error::MessageTooLong { .. } => true,
            Error::Api(e) => e.is_integrity_failure(),
            _ => false,
        }
    }

    /// Collapse every integrity failure into one `DecryptionFailed`
    pub(crate) fn uniform(self, context: &'static str) -> Self {
        if self.is_integrity_failure() {
            Error::DecryptionFailed {
                context,
                reason: "ciphertext rejected",
            }
        } else {
            self
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidParameter { context, message } => {
                CoreError::InvalidParameter { context, message }
            }
            Error::InvalidKey { context, message } => CoreError::InvalidKey { context, message },
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NotInitialized { context, operation } => CoreError::NotInitialized {
                context,
                message: format!("not initialized for {}", operation),
            },
            Error::MessageTooLong {
                context,
                max,
                actual,
            } => CoreError::MessageTooLong {
                context,
                max,
                actual,
            },
            Error::DecryptionFailed { context, reason } => CoreError::DecryptionFailed {
                context,
                message: reason.to_string(),
            },
            Error::InvalidEncoding { context, reason } => CoreError::InvalidEncoding {
                context,
                message: reason.to_string(),
            },
            Error::Exhausted { context, attempts } => {
                CoreError::KeyGenerationExhausted { context, attempts }
            }
            Error::RetryLimit { context, attempts } => CoreError::Other {
                context,
                message: format!("rejection sampling gave up after {} attempts", attempts),
            },
            Error::InvalidSignature { context } => CoreError::InvalidSignature {
                context,
                message: "signature does not verify".to_string(),
            },
            Error::Serialization { context, message } => {
                CoreError::SerializationError { context, message }
            }
        }
    }
}

/// Result type for PKE and signature operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_failures_collapse() {
        let balance = Error::DecryptionFailed {
            context: "decrypt",
            reason: "unbalanced",
        };
        let padding = Error::InvalidEncoding {
            context: "decrypt",
            reason: "nonzero padding",
        };
        let config = Error::NotInitialized {
            context: "decrypt",
            operation: "decryption",
        };

        assert_eq!(
            balance.uniform("ctx").to_string(),
            padding.uniform("ctx").to_string()
        );
        assert!(matches!(config.uniform("ctx"), Error::NotInitialized { .. }));
    }

    #[test]
    fn test_conversion_to_core() {
        let err: CoreError = Error::MessageTooLong {
            context: "encrypt",
            max: 10,
            actual: 11,
        }
        .into();
        assert!(matches!(
            err,
            CoreError::MessageTooLong {
                max: 10,
                actual: 11,
                ..
            }
        ));
        assert!(err.is_integrity_failure());

        let err: CoreError = Error::Exhausted {
            context: "keygen",
            attempts: 5,
        }
        .into();
        assert!(matches!(
            err,
            CoreError::KeyGenerationExhausted { attempts: 5, .. }
        ));

        let err: CoreError = Error::RetryLimit {
            context: "NtruEncrypt::encrypt",
            attempts: 1000,
        }
        .into();
        assert!(matches!(
            err,
            CoreError::Other {
                context: "NtruEncrypt::encrypt",
                ..
            }
        ));
        assert!(!err.is_integrity_failure());

        let err: CoreError = Error::from(PrimitiveError::param("N", "too small")).into();
        assert!(matches!(err, CoreError::InvalidParameter { .. }));
    }
}
