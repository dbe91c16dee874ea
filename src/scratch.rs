//! Reusable byte stack backing string assembly during a parse.
//!
//! String parsing cannot hand out slices of the input because escape
//! sequences decode to different bytes than they occupy in the source.
//! Instead, decoded bytes accumulate in a [`ScratchBuffer`] that is owned by
//! one parser instance and reused across every string in the document, so a
//! document with many strings performs a bounded number of allocations.
//!
//! The buffer is a stack, not a plain slice: each string parse records a
//! mark on entry and pops back to exactly that mark on exit, whether it
//! succeeds (the popped bytes become the string's contents) or fails (the
//! partial bytes are discarded). Container parsing may nest further string
//! parses above an outer mark without interference.

/// Capacity of the backing storage before the first growth.
const INITIAL_CAPACITY: usize = 256;

/// A growable byte region with stack-like push/pop semantics.
///
/// Invariants: `top <= capacity` at all times, and growth multiplies the
/// capacity by 1.5 (rounding up), so pushes are amortized O(1). Allocation
/// failure aborts, as with any Vec growth.
#[derive(Debug)]
pub(crate) struct ScratchBuffer {
    buf: Vec<u8>,
    top: usize,
}

impl ScratchBuffer {
    /// Creates an empty buffer. No allocation happens until the first push.
    pub(crate) fn new() -> Self {
        ScratchBuffer {
            buf: Vec::new(),
            top: 0,
        }
    }

    /// Logical length: the number of bytes currently pushed.
    pub(crate) fn len(&self) -> usize {
        self.top
    }

    /// Returns `true` if no bytes are currently pushed.
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity of the backing storage.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current top as a mark to pop or roll back to later.
    pub(crate) fn mark(&self) -> usize {
        self.top
    }

    /// Pushes a single byte.
    pub(crate) fn push_byte(&mut self, byte: u8) {
        self.grow_for(1);
        self.buf[self.top] = byte;
        self.top += 1;
    }

    /// Pushes `bytes` at the current top.
    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.buf[self.top..self.top + bytes.len()].copy_from_slice(bytes);
        self.top += bytes.len();
    }

    /// Pushes the UTF-8 encoding of `ch`.
    pub(crate) fn push_char(&mut self, ch: char) {
        if ch.is_ascii() {
            self.push_byte(ch as u8);
        } else {
            let mut utf8 = [0u8; 4];
            self.push_bytes(ch.encode_utf8(&mut utf8).as_bytes());
        }
    }

    /// Pops every byte pushed since `mark` and returns them as one
    /// contiguous slice.
    ///
    /// `mark <= len()` is a programming contract: a violation means a
    /// caller popped bytes it did not push.
    pub(crate) fn pop(&mut self, mark: usize) -> &[u8] {
        debug_assert!(mark <= self.top, "pop past the bottom of the stack");
        let popped = &self.buf[mark..self.top];
        self.top = mark;
        popped
    }

    /// Discards every byte pushed since `mark`.
    ///
    /// Used on failed string parses so partial bytes never leak into a
    /// sibling parse. Capacity is retained.
    pub(crate) fn rollback(&mut self, mark: usize) {
        debug_assert!(mark <= self.top, "rollback past the bottom of the stack");
        self.top = mark;
    }

    /// Grows the backing storage so `additional` more bytes fit.
    ///
    /// Growth is geometric: each step multiplies the capacity by 1.5,
    /// rounding up, starting from [`INITIAL_CAPACITY`].
    fn grow_for(&mut self, additional: usize) {
        let needed = self.top + additional;
        if needed <= self.buf.len() {
            return;
        }
        let mut capacity = if self.buf.is_empty() {
            INITIAL_CAPACITY
        } else {
            self.buf.len()
        };
        while capacity < needed {
            capacity += (capacity + 1) / 2;
        }
        self.buf.resize(capacity, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_roundtrip() {
        let mut scratch = ScratchBuffer::new();
        let mark = scratch.mark();
        scratch.push_bytes(b"Hello");
        assert_eq!(scratch.len(), 5);
        assert_eq!(scratch.pop(mark), b"Hello");
        assert_eq!(scratch.len(), 0);
    }

    #[test]
    fn nested_marks_pop_independently() {
        let mut scratch = ScratchBuffer::new();
        let outer = scratch.mark();
        scratch.push_bytes(b"outer");
        let inner = scratch.mark();
        scratch.push_bytes(b"inner");

        assert_eq!(scratch.pop(inner), b"inner");
        assert_eq!(scratch.pop(outer), b"outer");
        assert!(scratch.is_empty());
    }

    #[test]
    fn rollback_discards_partial_bytes() {
        let mut scratch = ScratchBuffer::new();
        scratch.push_bytes(b"keep");
        let mark = scratch.mark();
        scratch.push_bytes(b"discarded partial string");
        scratch.rollback(mark);
        assert_eq!(scratch.len(), 4);
        assert_eq!(scratch.pop(0), b"keep");
    }

    #[test]
    fn growth_is_geometric_from_initial_capacity() {
        let mut scratch = ScratchBuffer::new();
        assert_eq!(scratch.capacity(), 0);

        scratch.push_byte(b'x');
        assert_eq!(scratch.capacity(), INITIAL_CAPACITY);

        scratch.push_bytes(&[0u8; INITIAL_CAPACITY]);
        // one 1.5x step covers 256 -> 384
        assert_eq!(scratch.capacity(), INITIAL_CAPACITY + INITIAL_CAPACITY / 2);
    }

    #[test]
    fn large_push_grows_in_one_call() {
        let mut scratch = ScratchBuffer::new();
        let payload = vec![7u8; 10_000];
        scratch.push_bytes(&payload);
        assert_eq!(scratch.len(), 10_000);
        assert!(scratch.capacity() >= 10_000);
        assert_eq!(scratch.pop(0), payload.as_slice());
    }

    #[test]
    fn push_char_encodes_utf8() {
        let mut scratch = ScratchBuffer::new();
        scratch.push_char('A');
        scratch.push_char('é');
        scratch.push_char('中');
        scratch.push_char('𝄞');
        let bytes = scratch.pop(0).to_vec();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), "Aé中𝄞");
    }

    #[test]
    fn capacity_retained_after_rollback() {
        let mut scratch = ScratchBuffer::new();
        scratch.push_bytes(&[0u8; 1000]);
        let cap = scratch.capacity();
        scratch.rollback(0);
        assert_eq!(scratch.capacity(), cap);
        assert!(scratch.is_empty());
    }
}
