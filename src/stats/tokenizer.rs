//! Streaming tokenizer: splits raw bytes into bounded-length words.

/// Splits a byte stream into words on a delimiter byte, forcing a
/// boundary whenever a token reaches the configured maximum length.
///
/// Partial-token state persists across [`Tokenizer::feed`] calls, so a
/// word split across chunk boundaries is reassembled. Zero-length tokens
/// (consecutive delimiters) are never emitted. Non-UTF-8 bytes are
/// carried opaquely and decoded lossily at emission; there is no failure
/// path.
#[derive(Debug)]
pub struct Tokenizer {
    delimiter: u8,
    max_len: usize,
    pending: Vec<u8>,
}

impl Tokenizer {
    /// Create a tokenizer splitting on `delimiter` with tokens bounded
    /// to `max_len` bytes.
    pub fn new(delimiter: u8, max_len: usize) -> Self {
        Self {
            delimiter,
            max_len,
            pending: Vec::with_capacity(max_len),
        }
    }

    /// Feed a chunk, returning a lazy iterator over the tokens it
    /// completes.
    ///
    /// Bytes that do not complete a token stay buffered for the next
    /// call.
    pub fn feed<'a>(&'a mut self, chunk: &'a [u8]) -> Tokens<'a> {
        Tokens {
            tokenizer: self,
            chunk,
            pos: 0,
        }
    }

    /// Number of bytes buffered for the in-progress token.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Emit the in-progress token, if any.
    ///
    /// Used when a finite source is exhausted so the trailing word is
    /// not lost.
    pub fn flush(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.take_pending())
        }
    }

    fn take_pending(&mut self) -> String {
        let bytes = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Lazy iterator over the tokens completed by one chunk.
///
/// Created by [`Tokenizer::feed`]; dropping it mid-chunk leaves the
/// unconsumed bytes unseen, so callers normally drain it.
pub struct Tokens<'a> {
    tokenizer: &'a mut Tokenizer,
    chunk: &'a [u8],
    pos: usize,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.pos < self.chunk.len() {
            let byte = self.chunk[self.pos];
            self.pos += 1;

            if byte == self.tokenizer.delimiter {
                if !self.tokenizer.pending.is_empty() {
                    return Some(self.tokenizer.take_pending());
                }
            } else {
                self.tokenizer.pending.push(byte);
                if self.tokenizer.pending.len() == self.tokenizer.max_len {
                    return Some(self.tokenizer.take_pending());
                }
            }
        }
        None
    }
}
