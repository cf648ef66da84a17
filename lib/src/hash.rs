// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::io::Read;

use crate::error::Error;
use crate::sponge::{absorb_number, Sponge};

/// Chunk size used when hashing from a [`Read`] stream.
const READ_CHUNK_SIZE: usize = 4096;

/// Hashes `data` to a digest of `nbytes` bytes.
///
/// The sponge absorbs `data`, then an `absorb_stop`, then the big-endian length tag `nbytes`
/// itself, before dripping out the digest. Folding the requested output length into the input
/// this way means a 16-byte and a 32-byte digest of the same message are unrelated byte strings,
/// not a truncation of one another.
pub fn mem_hash(data: &[u8], nbytes: usize) -> Vec<u8> {
    let mut sponge = Sponge::new();
    sponge.absorb_many(data);
    sponge.absorb_stop();
    absorb_number(&mut sponge, nbytes);
    sponge.drip_many(nbytes)
}

/// Hashes the entire contents of `reader` to a digest of `nbytes` bytes.
///
/// Reads in fixed-size chunks so the whole file never needs to be resident in memory at once.
pub fn file_hash<R: Read>(mut reader: R, nbytes: usize) -> Result<Vec<u8>, Error> {
    let mut sponge = Sponge::new();
    let mut buf = [0u8; READ_CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        sponge.absorb_many(&buf[..n]);
    }

    sponge.absorb_stop();
    absorb_number(&mut sponge, nbytes);
    Ok(sponge.drip_many(nbytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s2_empty_and_single_zero_byte() {
        assert_eq!(hex::encode(mem_hash(b"", 32)), "eddbfc9e608c1a73eb8d1311c483626104b8ea762d3075768af586838ffb0381");
        assert_eq!(hex::encode(mem_hash(&[0u8], 32)), "6b811093e8ad7053a762862c4d7e05c5777ea86103d1b7281939b73523d1461b");
    }

    #[test]
    fn s3_abc() {
        assert_eq!(hex::encode(mem_hash(b"abc", 32)), "caa0decb4e19aab6ef397fb42269c3885b3667cf395be28345c9cef4662b2487");
    }

    #[test]
    fn h1_and_h64_abc() {
        assert_eq!(hex::encode(mem_hash(b"abc", 1)), "da");
        assert_eq!(
            hex::encode(mem_hash(b"abc", 64)),
            "33670b795784c617edb17a87ae2ea5226fbf851d71e1a396c06fbe9ed32c750e1386b0e120bbf565d25e8aee7abe12dd8695524844e80cd8065900d29a8e60f2"
        );
    }

    #[test]
    fn file_hash_matches_mem_hash() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let from_mem = mem_hash(data, 32);
        let from_reader = file_hash(&data[..], 32).unwrap();
        assert_eq!(from_mem, from_reader);
    }

    #[test]
    fn digest_length_changes_the_digest() {
        let short = mem_hash(b"abc", 16);
        let long = mem_hash(b"abc", 32);
        assert_ne!(short, &long[..16]);
    }
}
