//! Byte sources: unbounded producers feeding the pipeline.
//!
//! A [`ByteSource`] produces raw bytes at an uncontrolled rate. The
//! bundled sources are a paced random-letter generator (the classic
//! demo input) and a reader-backed source for stdin or files.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Read;
use std::thread;
use std::time::Duration;

/// Read-buffer size for [`ReaderSource`].
const READ_CHUNK: usize = 4096;

/// An unbounded producer of raw bytes.
///
/// `Ok(None)` signals end of stream. An infinite generator never returns
/// it; finite sources use it to trigger clean shutdown.
pub trait ByteSource: Send {
    /// Produce the next chunk of bytes.
    fn next_chunk(&mut self) -> std::io::Result<Option<Vec<u8>>>;
}

/// Letter pool for the random generator: lowercase ASCII plus space.
const LETTER_POOL: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";

/// Endless stream of random lowercase letters and spaces.
pub struct RandomLetters {
    interval: Duration,
    rng: StdRng,
}

impl RandomLetters {
    /// Create a generator pacing one letter per `interval`.
    ///
    /// A zero interval produces letters as fast as the pipeline pulls
    /// them.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            rng: StdRng::from_entropy(),
        }
    }
}

impl ByteSource for RandomLetters {
    fn next_chunk(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        let letter = LETTER_POOL[self.rng.gen_range(0..LETTER_POOL.len())];
        Ok(Some(vec![letter]))
    }
}

/// Wraps any reader (stdin, a file) as a chunked byte source.
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: Read + Send> ReaderSource<R> {
    /// Wrap a reader with a fixed-size read buffer.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: vec![0; READ_CHUNK],
        }
    }
}

impl<R: Read + Send> ByteSource for ReaderSource<R> {
    fn next_chunk(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        let n = self.reader.read(&mut self.buf)?;
        if n == 0 {
            Ok(None)
        } else {
            Ok(Some(self.buf[..n].to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_source_chunks_then_eof() {
        let mut source = ReaderSource::new(Cursor::new(b"hello world".to_vec()));

        let chunk = source.next_chunk().unwrap().unwrap();
        assert_eq!(chunk, b"hello world");

        assert!(source.next_chunk().unwrap().is_none());
    }

    #[test]
    fn test_reader_source_empty_input_is_immediate_eof() {
        let mut source = ReaderSource::new(Cursor::new(Vec::new()));
        assert!(source.next_chunk().unwrap().is_none());
    }

    #[test]
    fn test_random_letters_draws_from_pool() {
        let mut source = RandomLetters::new(Duration::ZERO);
        for _ in 0..64 {
            let chunk = source.next_chunk().unwrap().unwrap();
            assert_eq!(chunk.len(), 1);
            assert!(LETTER_POOL.contains(&chunk[0]));
        }
    }
}
