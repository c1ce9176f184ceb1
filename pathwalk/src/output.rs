//! Bounded output writing.
//!
//! Every operation that produces a path writes through [`Output`], which
//! separates the *logical* cursor (how long the result would be with
//! unlimited space) from the *physical* capacity of the destination
//! buffer. Writes beyond capacity are dropped silently; the logical cursor
//! keeps advancing so callers always learn the untruncated length.
//!
//! The terminator contract: a buffer with capacity zero is never touched;
//! any other buffer ends up NUL-terminated within its capacity, even when
//! the result was truncated.
//!
//! Mutating operations that splice new content into an existing path write
//! the tail (the unchanged part after the edited region) before the new
//! content. That ordering is part of the operation's definition: a longer
//! replacement must never clobber bytes it still needs, so the tail leaves
//! the edited region first.

/// A bounded writer over a caller-supplied byte buffer.
pub(crate) struct Output<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Output<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Appends bytes at the logical cursor, copying only what fits.
    pub(crate) fn write(&mut self, bytes: &[u8]) {
        self.write_at(self.pos, bytes);
        self.pos += bytes.len();
    }

    /// Writes bytes at an explicit position without moving the cursor.
    ///
    /// Returns the logical length of `bytes` so callers can accumulate
    /// positions the same way regardless of truncation.
    pub(crate) fn write_at(&mut self, pos: usize, bytes: &[u8]) -> usize {
        let fit = bytes.len().min(self.buf.len().saturating_sub(pos));
        if fit > 0 {
            self.buf[pos..pos + fit].copy_from_slice(&bytes[..fit]);
        }
        bytes.len()
    }

    /// Moves the logical cursor forward over bytes already placed with
    /// [`write_at`](Self::write_at).
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Moves the logical cursor backward, discarding trailing output.
    pub(crate) fn retract(&mut self, n: usize) {
        self.pos -= n;
    }

    /// Terminates the output and returns the logical length.
    ///
    /// The NUL lands at the cursor if it fits, otherwise on the last byte
    /// of the buffer. A zero-capacity buffer stays untouched.
    pub(crate) fn finish(self) -> usize {
        if !self.buf.is_empty() {
            let end = self.pos.min(self.buf.len() - 1);
            self.buf[end] = 0;
        }
        self.pos
    }
}
