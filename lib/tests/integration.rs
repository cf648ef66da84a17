// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::io::Cursor;

use spritzcrypt::random::DeterministicSource;
use spritzcrypt::{check, decrypt, encrypt, file_hash, mem_hash};

fn pw_hash(password: &[u8]) -> [u8; 64] {
    let digest = mem_hash(password, 64);
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}

#[test]
fn file_hash_of_empty_reader_matches_mem_hash_of_empty_slice() {
    let digest = file_hash(Cursor::new(&[][..]), 32).unwrap();
    assert_eq!(digest, mem_hash(b"", 32));
}

#[test]
fn round_trip_through_public_api_recovers_the_original_bytes() {
    let pw_hash = pw_hash(b"correct horse battery staple");
    let plaintext = b"the quick brown fox jumps over the lazy dog".repeat(50);

    let mut rnd = DeterministicSource::new();
    let mut ciphertext = Vec::new();
    encrypt(Cursor::new(&plaintext), &mut ciphertext, &pw_hash, &mut rnd).unwrap();
    assert_ne!(ciphertext[spritzcrypt::HEADER_SIZE..], plaintext[..]);

    let mut recovered = Vec::new();
    decrypt(Cursor::new(&ciphertext), &mut recovered, &pw_hash).unwrap();
    assert_eq!(recovered, plaintext);

    check(Cursor::new(&ciphertext), &pw_hash).unwrap();
}

#[test]
fn different_passwords_produce_different_ciphertext_for_the_same_plaintext_and_iv() {
    let plaintext = b"identical payload";
    let mut rnd_a = DeterministicSource::new();
    let mut rnd_b = DeterministicSource::new();

    let mut ct_a = Vec::new();
    encrypt(&plaintext[..], &mut ct_a, &pw_hash(b"alpha"), &mut rnd_a).unwrap();
    let mut ct_b = Vec::new();
    encrypt(&plaintext[..], &mut ct_b, &pw_hash(b"bravo"), &mut rnd_b).unwrap();

    assert_ne!(ct_a, ct_b);
}
