//! Fixed-width chunk reader.
//!
//! A [`ByteWindow`] pulls [`CHUNK_SIZE`]-byte windows from one stream. A short
//! read is not an error: the unfilled tail is zeroed and the caller is told
//! how many bytes were real.

use crate::errors::{HexdiffError, Result};
use std::io::{self, Read};

/// Bytes per comparison window; tied to the two-column hex+ASCII layout.
pub const CHUNK_SIZE: usize = 8;

/// One fixed-width window of raw bytes.
pub type Chunk = [u8; CHUNK_SIZE];

/// Result of filling one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filled {
    pub chunk: Chunk,
    /// Bytes actually obtained from the stream; the rest of `chunk` is zero.
    pub len: usize,
}

impl Filled {
    /// The stream ended before the chunk was full.
    pub fn is_short(&self) -> bool {
        self.len < CHUNK_SIZE
    }

    /// The stream yielded nothing at all for this chunk.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Fill a chunk from `reader`, retrying partial reads until the chunk is full
/// or the stream reports end-of-input.
///
/// # Errors
///
/// Any read error other than `Interrupted`, which is retried.
pub fn fill_chunk<R: Read + ?Sized>(reader: &mut R) -> io::Result<Filled> {
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut len = 0;
    while len < CHUNK_SIZE {
        match reader.read(&mut chunk[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(Filled { chunk, len })
}

/// A named byte stream read one chunk at a time.
pub struct ByteWindow<R> {
    reader: R,
    name: String,
}

impl<R: Read> ByteWindow<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the next chunk.
    ///
    /// # Errors
    ///
    /// Returns `HexdiffError::Read` if the underlying stream fails.
    pub fn next_chunk(&mut self) -> Result<Filled> {
        fill_chunk(&mut self.reader).map_err(|source| HexdiffError::Read {
            path: self.name.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Yields at most `step` bytes per `read` call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_full_chunk() {
        let mut src = Cursor::new((0u8..10).collect::<Vec<_>>());
        let filled = fill_chunk(&mut src).unwrap();
        assert_eq!(filled.chunk, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(!filled.is_short());
    }

    #[test]
    fn test_short_read_is_zero_filled() {
        let mut src = Cursor::new(vec![0xffu8; 3]);
        let filled = fill_chunk(&mut src).unwrap();
        assert_eq!(filled.len, 3);
        assert_eq!(filled.chunk, [0xff, 0xff, 0xff, 0, 0, 0, 0, 0]);
        assert!(filled.is_short());
        assert!(!filled.is_empty());
    }

    #[test]
    fn test_empty_stream() {
        let mut src = Cursor::new(Vec::<u8>::new());
        let filled = fill_chunk(&mut src).unwrap();
        assert!(filled.is_empty());
        assert_eq!(filled.chunk, [0u8; CHUNK_SIZE]);
    }

    #[test]
    fn test_partial_reads_are_accumulated() {
        let data = b"abcdefghij";
        let mut src = Trickle { data, step: 3 };
        let filled = fill_chunk(&mut src).unwrap();
        assert_eq!(&filled.chunk, b"abcdefgh");
        assert!(!filled.is_short());
    }

    #[test]
    fn test_read_error_carries_stream_name() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "device gone"))
            }
        }

        let mut window = ByteWindow::new(Broken, "left.bin");
        match window.next_chunk() {
            Err(HexdiffError::Read { path, .. }) => assert_eq!(path, "left.bin"),
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
