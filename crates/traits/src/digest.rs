//! Streaming digest trait.
//!
//! Every implementation follows the same lifecycle: streaming updates,
//! idempotent finalize, and reset support.

use core::fmt::Debug;

/// Hash function producing a fixed-size digest from a byte stream.
///
/// `finalize` works on a snapshot of the hasher, so a caller can read the
/// digest of everything written so far and keep writing afterwards.
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Internal block size in bytes.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume or modify the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Drain `source` into the hasher until end of stream.
  ///
  /// Returns the number of bytes absorbed. On a read failure the bytes read
  /// before it stay absorbed; the error carries that count.
  #[cfg(feature = "std")]
  #[inline]
  fn update_reader<R>(&mut self, source: R) -> Result<u64, crate::ReadError>
  where
    R: std::io::Read,
  {
    crate::io::drain(source, |chunk| self.update(chunk))
  }

  /// Digest of everything written so far followed by the contents of `source`.
  ///
  /// The hasher itself is left untouched; the stream is drained into a clone.
  #[cfg(feature = "std")]
  #[inline]
  fn finalize_reader<R>(&self, source: R) -> Result<Self::Output, crate::ReadError>
  where
    R: std::io::Read,
  {
    let mut h = self.clone();
    h.update_reader(source)?;
    Ok(h.finalize())
  }

  /// Compute the digest of a whole stream in one shot.
  #[cfg(feature = "std")]
  #[inline]
  fn digest_reader<R>(source: R) -> Result<Self::Output, crate::ReadError>
  where
    R: std::io::Read,
  {
    Self::new().finalize_reader(source)
  }

  /// Wrap a reader to compute the digest transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::Digest;
  /// # #[derive(Clone, Default)]
  /// # struct SumDigest(u8);
  /// # impl Digest for SumDigest {
  /// #   const OUTPUT_SIZE: usize = 4;
  /// #   const BLOCK_SIZE: usize = 1;
  /// #   type Output = [u8; 4];
  /// #   fn new() -> Self { Self(0) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
  /// #   }
  /// #   fn finalize(&self) -> Self::Output { [self.0; 4] }
  /// #   fn reset(&mut self) { self.0 = 0; }
  /// # }
  /// # use std::io::Cursor;
  ///
  /// let mut reader = SumDigest::reader(Cursor::new(b"abc".to_vec()));
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// assert_eq!(
  ///   reader.digest(),
  ///   [b'a'.wrapping_add(b'b').wrapping_add(b'c'); 4]
  /// );
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to compute the digest transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}
