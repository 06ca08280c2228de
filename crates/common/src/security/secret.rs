//! Secret data types with guaranteed zeroization

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Variable-size secret vector that guarantees zeroization
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new secret vector with the given data
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a secret vector from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Create a zero-filled secret vector of the given length
    pub fn zeroed(len: usize) -> Self {
        Self { data: vec![0u8; len] }
    }

    /// Create a secret vector with the specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Extend the vector with additional data
    ///
    /// Grows through a fresh allocation so the old buffer can be wiped
    /// instead of being released with its contents by `Vec`'s reallocation.
    pub fn extend_from_slice(&mut self, slice: &[u8]) {
        if self.data.capacity() - self.data.len() < slice.len() {
            let capacity = (self.data.len() + slice.len()).max(2 * self.data.capacity());
            let mut grown = Vec::with_capacity(capacity);
            grown.extend_from_slice(&self.data);
            self.data.zeroize();
            self.data = grown;
        }
        self.data.extend_from_slice(slice);
    }

    /// Truncate the vector to the specified length, wiping the tail
    pub fn truncate(&mut self, len: usize) {
        if len < self.data.len() {
            self.data[len..].zeroize();
            self.data.truncate(len);
        }
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for SecretVec {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}

/// Ephemeral secret that is automatically zeroized after use
///
/// Wraps intermediate values (coefficient vectors, recovered plaintext
/// buffers) whose lifetime ends with the enclosing operation.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Create a new ephemeral secret
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralSecret([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_vec_growth_keeps_contents() {
        let mut s = SecretVec::with_capacity(2);
        s.extend_from_slice(&[1, 2]);
        s.extend_from_slice(&[3, 4, 5]);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4, 5]);
        s.truncate(3);
        assert_eq!(s.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_debug_is_redacted() {
        let s = SecretVec::from_slice(b"passphrase");
        assert_eq!(format!("{:?}", s), "SecretVec(len=10, [REDACTED])");

        let e = EphemeralSecret::new(vec![1i32, -1, 0]);
        assert_eq!(format!("{:?}", e), "EphemeralSecret([REDACTED])");
        assert_eq!(e.len(), 3);
    }

    #[test]
    fn test_zeroized_vec() {
        let mut s = SecretVec::zeroed(4);
        s.as_mut_slice()[0] = 7;
        s.zeroize();
        assert!(s.is_empty());
    }
}
