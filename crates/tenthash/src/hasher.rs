#![allow(clippy::indexing_slicing)]

use core::fmt;

use traits::Digest;

use crate::{
  BLOCK_SIZE, DIGEST_SIZE,
  permute::{IV, absorb, mix},
};

/// Incremental TentHash state.
///
/// Every 32-byte-aligned prefix of the input is absorbed as soon as it is
/// complete; only the unaligned tail waits in the buffer. Finalizing works on
/// a copy, so the digest can be taken at any point and hashing continued.
///
/// # Example
///
/// ```rust
/// use tenthash::TentHash;
///
/// let mut h = TentHash::new();
/// h.update(b"Hello ");
/// h.update(b"world!");
/// assert_eq!(h.finalize(), tenthash::hash(b"Hello world!"));
/// assert_eq!(h.finalize()[..4], [0x15, 0x5f, 0x0a, 0x35]);
/// ```
#[derive(Clone)]
pub struct TentHash {
  state: [u64; 4],
  buf: [u8; BLOCK_SIZE],
  buf_len: usize,
  message_len: u64,
}

impl Default for TentHash {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for TentHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TentHash")
      .field("message_len", &self.message_len)
      .field("buffered", &self.buf_len)
      .finish_non_exhaustive()
  }
}

impl TentHash {
  /// A hasher that has seen no input.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      state: IV,
      buf: [0u8; BLOCK_SIZE],
      buf_len: 0,
      message_len: 0,
    }
  }

  /// Compute the digest of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Bytes written since construction or the last [`reset`](Self::reset).
  #[inline]
  #[must_use]
  pub const fn message_len(&self) -> u64 {
    self.message_len
  }

  /// Absorb `data` into the running hash.
  pub fn update(&mut self, mut data: &[u8]) {
    self.message_len = self.message_len.wrapping_add(data.len() as u64);

    while !data.is_empty() {
      if self.buf_len == 0 {
        let (blocks, rest) = data.as_chunks::<BLOCK_SIZE>();
        if !blocks.is_empty() {
          for block in blocks {
            absorb(&mut self.state, block);
          }
          data = rest;
          continue;
        }
      }

      let take = core::cmp::min(BLOCK_SIZE - self.buf_len, data.len());
      let (head, rest) = data.split_at(take);
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(head);
      self.buf_len += take;
      data = rest;

      if self.buf_len == BLOCK_SIZE {
        absorb(&mut self.state, &self.buf);
        self.buf_len = 0;
      }
    }
  }

  /// Digest of everything written so far.
  ///
  /// The hasher is not modified.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    self.finalize_into(&mut out);
    out
  }

  /// Write the digest of everything written so far into `out`.
  pub fn finalize_into(&self, out: &mut [u8; DIGEST_SIZE]) {
    let mut state = self.state;

    // Block-aligned input (including empty input) absorbs no padding block.
    if self.buf_len > 0 {
      let mut block = self.buf;
      block[self.buf_len..].fill(0);
      absorb(&mut state, &block);
    }

    state[0] ^= self.message_len.wrapping_mul(8);
    mix(&mut state);
    mix(&mut state);

    out[0..8].copy_from_slice(&state[0].to_le_bytes());
    out[8..16].copy_from_slice(&state[1].to_le_bytes());
    out[16..20].copy_from_slice(&(state[2] as u32).to_le_bytes());
  }

  /// Append the digest to `out`.
  #[cfg(feature = "alloc")]
  #[inline]
  pub fn sum_into(&self, out: &mut alloc::vec::Vec<u8>) {
    out.extend_from_slice(&self.finalize());
  }

  /// `prefix` followed by the digest.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn sum(&self, prefix: &[u8]) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec::Vec::with_capacity(prefix.len() + DIGEST_SIZE);
    out.extend_from_slice(prefix);
    self.sum_into(&mut out);
    out
  }

  /// Return to the just-constructed condition.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::new();
  }
}

impl Digest for TentHash {
  const OUTPUT_SIZE: usize = DIGEST_SIZE;
  const BLOCK_SIZE: usize = BLOCK_SIZE;
  type Output = [u8; DIGEST_SIZE];

  #[inline]
  fn new() -> Self {
    Self::new()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Self::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    Self::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Self::reset(self);
  }

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Self::digest(data)
  }
}
