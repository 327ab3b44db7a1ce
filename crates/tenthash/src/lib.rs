//! TentHash: a fast 160-bit hash for checksums and content fingerprints
//! (**NOT CRYPTO**).
//!
//! TentHash absorbs input in 32-byte blocks into a 256-bit state, stirring it
//! with a 7-round add-rotate-xor permutation, and folds the message length
//! in at the end. It is meant for detecting accidental changes to data. Do
//! not use it where an adversary picks the input: it offers no collision or
//! preimage resistance.
//!
//! # Quick Start
//!
//! ```
//! use tenthash::TentHash;
//!
//! // One-shot computation
//! let digest = tenthash::hash(b"Hello world!");
//! assert_eq!(digest.len(), tenthash::DIGEST_SIZE);
//! assert_eq!(digest[..4], [0x15, 0x5f, 0x0a, 0x35]);
//!
//! // Streaming computation
//! let mut hasher = TentHash::new();
//! hasher.update(b"Hello ");
//! hasher.update(b"world!");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! # Digest Layout
//!
//! The 20-byte digest is state word 0 then word 1 as little-endian `u64`s,
//! followed by the low 32 bits of word 2, little-endian.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` integration: [`hash_reader`], [`TentHash::update_reader`], `Write` for [`TentHash`] |
//! | `alloc` | Yes | [`TentHash::sum`] / [`TentHash::sum_into`] (implied by `std`) |
//! | `tracing` | No | `tracing` events from the stream adapter |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! tenthash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod hasher;
#[cfg(feature = "std")]
pub mod io;
mod permute;

pub use hasher::TentHash;
#[cfg(feature = "std")]
pub use io::hash_reader;
pub use permute::{IV, ROTATIONS};
pub use traits::Digest;
#[cfg(feature = "std")]
pub use traits::ReadError;

/// Digest size, in bytes.
pub const DIGEST_SIZE: usize = 160 / 8;

/// Internal block size, in bytes.
pub const BLOCK_SIZE: usize = 256 / 8;

/// Compute the digest of `data` in one shot.
#[inline]
#[must_use]
pub fn hash(data: &[u8]) -> [u8; DIGEST_SIZE] {
  TentHash::digest(data)
}
