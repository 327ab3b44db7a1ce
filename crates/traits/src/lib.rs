//! Core digest traits for the tenthash workspace.
//!
//! This crate provides the streaming-hash interface every hasher in the
//! workspace conforms to. It is `no_std` compatible; the `std` feature adds
//! reader/writer adapters and the stream error type.
//!
//! # Trait Hierarchy
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Digest`] | Streaming hash with a fixed-size output |
//! | [`io::DigestReader`] / [`io::DigestWriter`] | Hash bytes while they pass through I/O (`std`) |
//! | [`ReadError`] | A byte source failed mid-stream (`std`) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
#[cfg(feature = "std")]
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
#[cfg(feature = "std")]
pub use error::ReadError;
