// SPDX-License-Identifier: 0BSD
// spritzcrypt

//! # spritzcrypt
//!
//! A password-based file encryption and hashing toolkit built on the
//! [Spritz](https://people.csail.mit.edu/rivest/pubs/RS14.pdf) sponge construction — a
//! permutation over a 256-byte state, with no external block cipher or hash function underneath.
//!
//! This crate provides the cryptographic core: the [`sponge`] primitives, [`hash`] (fixed-length
//! hashing of byte slices or readers), [`keygen`] (password-hash-and-IV key derivation),
//! [`stream`] (the skipped keystream generator), [`header`] (the on-disk file-header codec), and
//! [`fileops`] (encrypt/decrypt/check/rekey orchestration). Command-line concerns — flag parsing,
//! password prompting, digest rendering — live in a separate binary crate.
//!
//! ## Dependencies
//!
//! Required: [`zeroize`](https://crates.io/crates/zeroize).
//!
//! ## Optional features
//!
//! Feature   | Meaning
//! --------- | ------------------------------------------------------------------------------------------
//! `tracing` | Dump the sponge's internal register state to the logging sub-system (via `log::trace()`) after each mutating step.
//!
//! ## License
//!
//! Copyright (C) 2026. Permission to use, copy, modify, and/or distribute this software for any
//! purpose with or without fee is hereby granted.
//!
//! THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES WITH REGARD TO THIS
//! SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE
//! AUTHOR BE LIABLE FOR ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
//! WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION OF CONTRACT,
//! NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN CONNECTION WITH THE USE OR PERFORMANCE
//! OF THIS SOFTWARE.

pub mod error;
pub mod fileops;
pub mod hash;
pub mod header;
pub mod keygen;
pub mod random;
pub mod sponge;
pub mod stream;

pub use error::Error;
pub use fileops::{check, decrypt, encrypt, rekey};
pub use hash::{file_hash, mem_hash};
pub use header::HEADER_SIZE;
pub use random::RandomSource;
pub use sponge::Sponge;
