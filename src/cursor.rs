use crate::decode::DecodeError;

/// A growable byte buffer with an explicit read position.
///
/// Every encode operation appends to the write tail and every decode
/// operation consumes from the read position, so one cursor can carry a
/// frame through assembly or parsing end to end. The read position never
/// passes the write tail: [`ByteCursor::consume`] fails with
/// [`DecodeError::Underrun`] instead of reading past the end, and leaves
/// the position untouched on failure.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteCursor {
    buf: Vec<u8>,
    pos: usize,
}

impl ByteCursor {
    /// Creates an empty cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor over existing bytes with the read position at the start.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: bytes.into(),
            pos: 0,
        }
    }

    /// Appends bytes to the write tail.
    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends a single byte to the write tail.
    pub fn push(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Consumes the next `n` unread bytes, advancing the read position.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Underrun`] if fewer than `n` unread bytes
    /// remain. The read position is unchanged in that case.
    pub fn consume(&mut self, n: usize) -> Result<&[u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::Underrun);
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    /// Returns the next unread byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Number of unread bytes between the read position and the write tail.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Total number of buffered bytes, consumed or not.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears the buffer and read position for reuse.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.pos = 0;
    }

    /// Returns the entire buffered contents, consumed bytes included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Unwraps the cursor into its underlying buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Unread bytes between the read position and the write tail.
    pub(crate) fn unread(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Advances the read position by `n` already-verified bytes.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos += n;
    }

    /// Overwrites one already-written byte, used to back-fill length fields.
    pub(crate) fn write_at(&mut self, index: usize, byte: u8) {
        self.buf[index] = byte;
    }

    /// Drops the consumed prefix so the buffer does not grow without bound
    /// across a long-lived receive session.
    pub(crate) fn compact(&mut self) {
        self.buf.drain(..self.pos);
        self.pos = 0;
    }
}
