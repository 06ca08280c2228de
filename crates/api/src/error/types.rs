//! Error type definitions for lattice cryptographic operations

/// Primary error type for lattice cryptographic operations
///
/// Every variant names the failing operation (`context`) so that callers can
/// tell configuration mistakes apart from data-integrity failures without
/// inspecting message strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid signature error
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error (malformed OID, out-of-range N/q, bad selector)
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A ternary polynomial was built from coefficients outside {-1, 0, 1}
    InvalidPolynomial {
        context: &'static str,
        message: String,
    },

    /// Operation invoked before the cipher was set up for it
    NotInitialized {
        context: &'static str,
        message: String,
    },

    /// Plaintext (or a recovered length field) exceeds the parameter set's maximum
    MessageTooLong {
        context: &'static str,
        max: usize,
        actual: usize,
    },

    /// Decryption error
    DecryptionFailed {
        context: &'static str,
        message: String,
    },

    /// Decoded data is not a valid encoding (padding or re-encryption check)
    InvalidEncoding {
        context: &'static str,
        message: String,
    },

    /// A rejection-sampling loop ran out of attempts
    KeyGenerationExhausted {
        context: &'static str,
        attempts: usize,
    },

    /// Unknown digest or random engine identifier
    UnsupportedEngine {
        context: &'static str,
        id: i32,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for lattice cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Name of the operation that failed
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidPolynomial { context, .. }
            | Self::NotInitialized { context, .. }
            | Self::MessageTooLong { context, .. }
            | Self::DecryptionFailed { context, .. }
            | Self::InvalidEncoding { context, .. }
            | Self::KeyGenerationExhausted { context, .. }
            | Self::UnsupportedEngine { context, .. }
            | Self::SerializationError { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidPolynomial { message, .. } => Self::InvalidPolynomial { context, message },
            Self::NotInitialized { message, .. } => Self::NotInitialized { context, message },
            Self::MessageTooLong { max, actual, .. } => Self::MessageTooLong {
                context,
                max,
                actual,
            },
            Self::DecryptionFailed { message, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::KeyGenerationExhausted { attempts, .. } => {
                Self::KeyGenerationExhausted { context, attempts }
            }
            Self::UnsupportedEngine { id, .. } => Self::UnsupportedEngine { context, id },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Add a message to an existing error
    ///
    /// Variants without a message field are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidPolynomial { context, .. } => Self::InvalidPolynomial { context, message },
            Self::NotInitialized { context, .. } => Self::NotInitialized { context, message },
            Self::DecryptionFailed { context, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidEncoding { context, .. } => Self::InvalidEncoding { context, message },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
            other => other,
        }
    }

    /// True for the failures a decryptor may observe on hostile input
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            Self::DecryptionFailed { .. }
                | Self::InvalidEncoding { .. }
                | Self::MessageTooLong { .. }
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter: {}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidPolynomial { context, message } => {
                write!(f, "Invalid polynomial: {}: {}", context, message)
            }
            Self::NotInitialized { context, message } => {
                write!(f, "Not initialized: {}: {}", context, message)
            }
            Self::MessageTooLong {
                context,
                max,
                actual,
            } => {
                write!(
                    f,
                    "{}: message too long (maximum {}, got {})",
                    context, max, actual
                )
            }
            Self::DecryptionFailed { context, message } => {
                write!(f, "Decryption failed: {}: {}", context, message)
            }
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding: {}: {}", context, message)
            }
            Self::KeyGenerationExhausted { context, attempts } => {
                write!(f, "{}: gave up after {} attempts", context, attempts)
            }
            Self::UnsupportedEngine { context, id } => {
                write!(f, "{}: unsupported engine identifier {}", context, id)
            }
            Self::SerializationError { context, message } => {
                write!(f, "Serialization error: {}: {}", context, message)
            }
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
