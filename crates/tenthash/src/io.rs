//! Hashing from and through `std::io`.
//!
//! - [`TentHash`] is itself a [`Write`](std::io::Write) sink, so
//!   `std::io::copy(&mut file, &mut hasher)` hashes a file.
//! - [`TentHash::update_reader`] / [`TentHash::finalize_reader`] /
//!   [`hash_reader`] pull a [`Read`](std::io::Read) to end of stream.
//! - [`DigestReader`] and [`DigestWriter`] hash bytes as they pass through
//!   another reader or writer.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use tenthash::TentHash;
//!
//! let mut h = TentHash::new();
//! h.update(b"Hello ");
//! let digest = h.finalize_reader(Cursor::new(b"world!"))?;
//! assert_eq!(digest, tenthash::hash(b"Hello world!"));
//!
//! // `h` still holds only "Hello ".
//! assert_eq!(h.message_len(), 6);
//! # Ok::<(), tenthash::ReadError>(())
//! ```

use std::io::{self, IoSlice, Read};

pub use traits::io::{DigestReader, DigestWriter, STREAM_BUF_LEN};
use traits::{Digest, ReadError};

use crate::{DIGEST_SIZE, TentHash};

impl TentHash {
  /// Drain `source` into the hasher until end of stream.
  ///
  /// Returns the number of bytes absorbed. On a read failure the bytes read
  /// before it stay absorbed; the error reports how many.
  #[inline]
  pub fn update_reader<R: Read>(&mut self, source: R) -> Result<u64, ReadError> {
    Digest::update_reader(self, source)
  }

  /// Digest of everything written so far followed by the contents of
  /// `source`, leaving `self` unchanged.
  #[inline]
  pub fn finalize_reader<R: Read>(&self, source: R) -> Result<[u8; DIGEST_SIZE], ReadError> {
    Digest::finalize_reader(self, source)
  }
}

/// Compute the digest of a whole stream in one shot.
///
/// ```rust
/// let digest = tenthash::hash_reader(&b"I love golang!"[..])?;
/// assert_eq!(digest[..4], [0xf9, 0x8c, 0x95, 0xae]);
/// # Ok::<(), tenthash::ReadError>(())
/// ```
#[inline]
pub fn hash_reader<R: Read>(source: R) -> Result<[u8; DIGEST_SIZE], ReadError> {
  TentHash::digest_reader(source)
}

impl io::Write for TentHash {
  /// Always consumes the whole buffer.
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let mut n = 0;
    for buf in bufs {
      self.update(buf);
      n += buf.len();
    }
    Ok(n)
  }

  #[inline]
  fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
    self.update(buf);
    Ok(())
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}
