//! Reference-counted byte buffer with copy-on-write semantics.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A reference-counted byte buffer.
///
/// Wraps `Arc<Vec<u8>>` to provide cheap cloning and shared ownership.
/// Template payloads, Merkle leaves, cached renderings and wallet key
/// material all travel as `Bytes`. Mutations trigger copy-on-write via
/// `Arc::make_mut`.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Bytes(Arc<Vec<u8>>);

impl Bytes {
    /// Creates a new buffer from any type convertible to `Vec<u8>`.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(Arc::new(data.into()))
    }

    /// Creates a new buffer from an existing `Vec<u8>`.
    pub fn from_vec(v: Vec<u8>) -> Self {
        Self(Arc::new(v))
    }

    /// Creates a zero-filled buffer of the given length.
    pub fn zeroed(len: usize) -> Self {
        Self(Arc::new(vec![0u8; len]))
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the buffer contents as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Copies the buffer contents into a new `Vec<u8>`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Returns a mutable reference to the underlying vector.
    ///
    /// Clones the data if other references exist (copy-on-write).
    pub fn make_mut(&mut self) -> &mut Vec<u8> {
        Arc::make_mut(&mut self.0)
    }

    /// Appends bytes to the buffer, cloning if necessary.
    pub fn extend_from_slice(&mut self, s: &[u8]) {
        self.make_mut().extend_from_slice(s);
    }
}

impl Clone for Bytes {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl Deref for Bytes {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// Lowercase hex rendering of the buffer contents.
impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_slice() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Self::new(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(s: &[u8]) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Bytes {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(arr: [u8; N]) -> Self {
        Self::new(arr)
    }
}

impl<const N: usize> From<&[u8; N]> for Bytes {
    fn from(arr: &[u8; N]) -> Self {
        Self::new(arr.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_storage_until_mutation() {
        let mut a = Bytes::new(b"shared");
        let b = a.clone();

        a.extend_from_slice(b"!");
        assert_eq!(a.as_slice(), b"shared!");
        assert_eq!(b.as_slice(), b"shared", "clone must keep the original data");
    }

    #[test]
    fn zeroed_has_requested_length() {
        let buf = Bytes::zeroed(7);
        assert_eq!(buf.len(), 7);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn display_renders_lowercase_hex() {
        let buf = Bytes::from([0x00u8, 0x0f, 0xa0, 0xff]);
        assert_eq!(format!("{}", buf), "000fa0ff");
    }

    #[test]
    fn empty_buffer() {
        let buf = Bytes::default();
        assert!(buf.is_empty());
        assert_eq!(format!("{}", buf), "");
    }
}
