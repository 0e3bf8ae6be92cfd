//! Caller-owned fixed-capacity output buffers.

use bstr::BStr;

/// Conventional token buffer capacity: the maximum path length in the
/// settings format, terminator included. Tokens in the format are pathnames,
/// application signatures, or small fixed strings, so this bounds them all.
pub const MAX_TOKEN_LEN: usize = 1024;

/// A fixed-capacity token buffer over caller-owned storage.
///
/// The tokenizer writes at most `capacity − 1` payload bytes and always
/// NUL-terminates the payload, on success and on every error path alike. The
/// terminator is bookkeeping for the fixed-capacity contract; the payload is
/// what [`as_bytes`](Self::as_bytes) returns.
///
/// Token bytes are conventionally UTF-8 but nothing enforces that, so the
/// payload is exposed as bytes (and as a [`BStr`] for display).
pub struct TokenBuf<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> TokenBuf<'a> {
    /// Wraps `storage` as an empty token buffer. Capacity is the slice
    /// length.
    pub fn new(storage: &'a mut [u8]) -> Self {
        Self {
            buf: storage,
            len: 0,
        }
    }

    /// Total capacity, including the byte reserved for the terminator.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Length of the accumulated payload, always `< capacity`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no payload has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The accumulated payload, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The accumulated payload as a byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    /// Discards the payload. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Appends one payload byte. The tokenizer's overflow guard ensures the
    /// terminator slot stays free.
    pub(crate) fn push(&mut self, byte: u8) {
        debug_assert!(self.len + 1 < self.buf.len(), "push into terminator slot");
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// Writes the terminator at the current length. No-op only for a
    /// zero-capacity buffer, which the tokenizer rejects up front.
    pub(crate) fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = 0;
        }
    }
}

impl core::fmt::Debug for TokenBuf<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenBuf")
            .field("payload", &self.as_bstr())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_terminate_stay_in_bounds() {
        let mut storage = [0xAAu8; 4];
        let mut buf = TokenBuf::new(&mut storage);
        buf.push(b'h');
        buf.push(b'i');
        buf.terminate();
        assert_eq!(buf.as_bytes(), b"hi");
        assert_eq!(buf.len(), 2);
        assert_eq!(storage[..3], *b"hi\0");
        assert_eq!(storage[3], 0xAA);
    }

    #[test]
    fn clear_resets_payload_only() {
        let mut storage = [0u8; 8];
        let mut buf = TokenBuf::new(&mut storage);
        buf.push(b'x');
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn terminate_tolerates_zero_capacity() {
        let mut storage: [u8; 0] = [];
        let mut buf = TokenBuf::new(&mut storage);
        buf.terminate();
        assert_eq!(buf.capacity(), 0);
    }
}
