//! Error type for stream hashing.
//!
//! Hashing itself never fails. The only failure is the byte source giving
//! out before end of stream, reported as [`ReadError`].

use core::fmt;
use std::io;

/// A byte source failed before reaching end of stream.
///
/// The underlying [`io::Error`] is kept verbatim and is reachable through
/// [`into_inner`](Self::into_inner), [`get_ref`](Self::get_ref) and
/// [`source`](core::error::Error::source). Bytes read before the failure were
/// already absorbed and are not rolled back; [`consumed`](Self::consumed)
/// reports how many.
///
/// # Examples
///
/// ```
/// use std::io;
///
/// use traits::ReadError;
///
/// let err = ReadError::new(64, io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"));
/// assert_eq!(err.consumed(), 64);
/// assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
///
/// let io_err: io::Error = err.into();
/// assert_eq!(io_err.to_string(), "peer went away");
/// ```
#[derive(Debug)]
pub struct ReadError {
  consumed: u64,
  source: io::Error,
}

impl ReadError {
  /// Wrap `source`, recording that `consumed` bytes were absorbed before it.
  #[inline]
  #[must_use]
  pub const fn new(consumed: u64, source: io::Error) -> Self {
    Self { consumed, source }
  }

  /// Bytes absorbed from the source before the failure.
  #[inline]
  #[must_use]
  pub const fn consumed(&self) -> u64 {
    self.consumed
  }

  /// Kind of the underlying I/O error.
  #[inline]
  #[must_use]
  pub fn kind(&self) -> io::ErrorKind {
    self.source.kind()
  }

  #[inline]
  #[must_use]
  pub fn get_ref(&self) -> &io::Error {
    &self.source
  }

  /// Discard the byte count and return the source's error unchanged.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> io::Error {
    self.source
  }
}

impl fmt::Display for ReadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "byte source failed after {} bytes", self.consumed)
  }
}

impl core::error::Error for ReadError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    Some(&self.source)
  }
}

impl From<ReadError> for io::Error {
  #[inline]
  fn from(err: ReadError) -> Self {
    err.source
  }
}
