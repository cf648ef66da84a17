// SPDX-License-Identifier: 0BSD
// spritzcrypt

use crate::error::Error;
use crate::hash::mem_hash;
use crate::keygen::keygen;
use crate::random::RandomSource;
use crate::stream::skipped_stream;

/// Total size of the on-disk file header, in bytes.
pub const HEADER_SIZE: usize = 76;

const IV_RANGE: std::ops::Range<usize> = 0..4;
const CHECK_RANGE: std::ops::Range<usize> = 4..8;
const HASHCHECK_RANGE: std::ops::Range<usize> = 8..12;
const PAYKEY_RANGE: std::ops::Range<usize> = 12..76;

/// Builds a fresh, all-plaintext header from `pw_hash` and a random source.
///
/// Layout: `IV[4] | CHECK[4] | HASHCHECK[4] | PAYKEY[64]`, where `HASHCHECK` is
/// `mem_hash(CHECK, 4)` and `IV`/`CHECK`/`PAYKEY` are random filler. The header is returned in
/// plaintext; call [`encrypt_header`] to obscure it before writing it out.
pub fn build_header<R: RandomSource>(rnd: &mut R) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    rnd.fill(&mut header[0..8]);
    let hashcheck = mem_hash(&header[CHECK_RANGE], 4);
    header[HASHCHECK_RANGE].copy_from_slice(&hashcheck);
    rnd.fill(&mut header[PAYKEY_RANGE]);
    header
}

/// Encrypts a plaintext header in place, given the 64-byte password hash.
///
/// `header[0..4]` (the IV) is XORed directly with `pw_hash[60..64]`. The round count and the
/// keystream skip distance are both derived from the now-recoverable IV, so encryption and
/// decryption agree on them without either side storing them separately. The CHECK/HASHCHECK
/// block and the PAYKEY block are encrypted with two different skip offsets into the *same*
/// keystream, with `extra_skip = 5 + CHECK[0]` read out of the header *before* CHECK is
/// overwritten with ciphertext.
pub fn encrypt_header(header: &mut [u8; HEADER_SIZE], pw_hash: &[u8; 64]) {
    let mut iv = [0u8; 4];
    iv.copy_from_slice(&header[IV_RANGE]);
    for i in 0..4 {
        header[i] ^= pw_hash[60 + i];
    }

    let times = 20000u32 + iv[3] as u32;
    let pw_key = keygen(pw_hash, &iv, times);
    let mut stream = skipped_stream(&pw_key, iv[1]);

    let extra_skip = 5usize + header[4] as usize;
    let enc = stream.xor_many(&header[CHECK_RANGE.start..HASHCHECK_RANGE.end]);
    header[CHECK_RANGE.start..HASHCHECK_RANGE.end].copy_from_slice(&enc);

    for _ in 0..extra_skip {
        stream.drip();
    }

    let enc_paykey = stream.xor_many(&header[PAYKEY_RANGE]);
    header[PAYKEY_RANGE].copy_from_slice(&enc_paykey);
}

/// Decrypts a header in place, given the 64-byte password hash.
///
/// Returns [`Error::BadPassword`] if the recovered `HASHCHECK` does not match
/// `mem_hash(CHECK, 4)` — the only integrity signal this format has, and the only way a wrong
/// password is ever detected.
pub fn decrypt_header(header: &mut [u8; HEADER_SIZE], pw_hash: &[u8; 64]) -> Result<(), Error> {
    for i in 0..4 {
        header[i] ^= pw_hash[60 + i];
    }
    let mut iv = [0u8; 4];
    iv.copy_from_slice(&header[IV_RANGE]);

    let times = 20000u32 + header[3] as u32;
    let pw_key = keygen(pw_hash, &iv, times);
    let mut stream = skipped_stream(&pw_key, header[1]);

    let dec = stream.xor_many(&header[CHECK_RANGE.start..HASHCHECK_RANGE.end]);
    header[CHECK_RANGE.start..HASHCHECK_RANGE.end].copy_from_slice(&dec);

    let check = header[CHECK_RANGE].to_vec();
    let hashcheck = &header[HASHCHECK_RANGE];
    if mem_hash(&check, 4) != hashcheck {
        return Err(Error::BadPassword);
    }

    let extra_skip = 5usize + header[4] as usize;
    for _ in 0..extra_skip {
        stream.drip();
    }

    let dec_paykey = stream.xor_many(&header[PAYKEY_RANGE]);
    header[PAYKEY_RANGE].copy_from_slice(&dec_paykey);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::mem_hash;
    use crate::random::DeterministicSource;

    fn pw_hash_of(pw: &[u8]) -> [u8; 64] {
        let v = mem_hash(pw, 64);
        let mut out = [0u8; 64];
        out.copy_from_slice(&v);
        out
    }

    #[test]
    fn round_trips_with_correct_password() {
        let pw_hash = pw_hash_of(b"password");
        let mut rnd = DeterministicSource::new();
        let plain = build_header(&mut rnd);

        let mut header = plain;
        encrypt_header(&mut header, &pw_hash);
        assert_ne!(header, plain);

        decrypt_header(&mut header, &pw_hash).unwrap();
        assert_eq!(header, plain);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let pw_hash = pw_hash_of(b"password");
        let wrong_hash = pw_hash_of(b"not the password");
        let mut rnd = DeterministicSource::new();
        let plain = build_header(&mut rnd);

        let mut header = plain;
        encrypt_header(&mut header, &pw_hash);

        let err = decrypt_header(&mut header, &wrong_hash).unwrap_err();
        assert!(matches!(err, Error::BadPassword));
    }

    #[test]
    fn single_bit_tamper_is_detected() {
        let pw_hash = pw_hash_of(b"password");
        let mut rnd = DeterministicSource::new();
        let plain = build_header(&mut rnd);

        let mut header = plain;
        encrypt_header(&mut header, &pw_hash);
        header[4] ^= 0x01;

        let err = decrypt_header(&mut header, &pw_hash).unwrap_err();
        assert!(matches!(err, Error::BadPassword));
    }
}
