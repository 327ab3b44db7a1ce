//! Stream plumbing for [`Digest`](crate::Digest) types.
//!
//! Two ways to feed a hasher from I/O:
//!
//! - pull: [`Digest::update_reader`](crate::Digest::update_reader) drains a
//!   [`Read`](std::io::Read) into the hasher until end of stream;
//! - pass-through: [`DigestReader`] and [`DigestWriter`] wrap another reader or
//!   writer and hash exactly the bytes that were transferred.
//!
//! # Example
//!
//! ```rust
//! # use traits::Digest;
//! # #[derive(Clone, Default)]
//! # struct SumDigest(u8);
//! # impl Digest for SumDigest {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   const BLOCK_SIZE: usize = 1;
//! #   type Output = [u8; 4];
//! #   fn new() -> Self { Self(0) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
//! #   }
//! #   fn finalize(&self) -> Self::Output { [self.0; 4] }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! use std::io::Write;
//!
//! let mut writer = SumDigest::writer(Vec::new());
//! writer.write_all(b"hello world")?;
//! let (out, digest) = writer.into_parts();
//! assert_eq!(out, b"hello world".to_vec());
//! assert_eq!(digest, SumDigest::digest(b"hello world"));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{ErrorKind, IoSlice, IoSliceMut, Read, Write};

use crate::{Digest, ReadError};

/// Read buffer size used when draining a source.
pub const STREAM_BUF_LEN: usize = 8 * 1024;

/// Pull `source` to end of stream, handing every chunk to `on_data`.
///
/// `Interrupted` reads are retried; any other error stops the drain and is
/// returned together with the number of bytes already handed over.
pub(crate) fn drain<R>(mut source: R, mut on_data: impl FnMut(&[u8])) -> Result<u64, ReadError>
where
  R: Read,
{
  let mut buf = [0u8; STREAM_BUF_LEN];
  let mut consumed: u64 = 0;

  loop {
    let n = match source.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => n,
      Err(e) if e.kind() == ErrorKind::Interrupted => continue,
      Err(e) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(consumed, kind = %e.kind(), "byte source failed mid-stream");
        return Err(ReadError::new(consumed, e));
      }
    };
    // A misbehaving reader may report more than it was given room for.
    let Some(chunk) = buf.get(..n) else {
      return Err(ReadError::new(consumed, ErrorKind::InvalidData.into()));
    };
    on_data(chunk);
    consumed += n as u64;
  }

  #[cfg(feature = "tracing")]
  tracing::trace!(consumed, "byte source drained");
  Ok(consumed)
}

/// Wraps a [`Read`] and hashes every byte that is read through it.
///
/// Short reads are handled: only the bytes actually returned by the inner
/// reader reach the hasher.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `D`: The digest algorithm type
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self::with_hasher(inner, D::new())
  }

  /// Continue an existing hash computation over the bytes read from `inner`.
  #[inline]
  #[must_use]
  pub fn with_hasher(inner: R, hasher: D) -> Self {
    Self { inner, hasher }
  }

  /// Digest of everything read so far.
  ///
  /// Further reads keep updating the hasher.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// The hasher accumulating the bytes read so far.
  #[inline]
  pub fn hasher(&self) -> &D {
    &self.hasher
  }

  /// Unwrap, returning the inner reader and the final digest.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap, returning the inner reader and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, D: Digest> Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> std::io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs.iter() {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }
}

/// Wraps a [`Write`] and hashes every byte accepted by the inner writer.
///
/// Only the prefix the inner writer reports as written is hashed, so a short
/// write followed by a retry of the rest hashes every byte exactly once.
///
/// # Type Parameters
///
/// - `W`: The inner writer type
/// - `D`: The digest algorithm type
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Digest of everything written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// The hasher accumulating the bytes written so far.
  #[inline]
  pub fn hasher(&self) -> &D {
    &self.hasher
  }

  /// Unwrap, returning the inner writer and the final digest.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    (self.inner, self.hasher.finalize())
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, D: Digest> Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}
