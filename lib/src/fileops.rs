// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::io::{Read, Seek, SeekFrom, Write};

use crate::error::Error;
use crate::header::{build_header, decrypt_header, encrypt_header, HEADER_SIZE};
use crate::random::RandomSource;
use crate::stream::skipped_stream;

const BODY_CHUNK_SIZE: usize = 4096;

/// Encrypts all of `reader` into `writer` under `pw_hash`, writing a fresh [`HEADER_SIZE`]-byte
/// header followed by the XORed ciphertext body.
///
/// The payload keystream is derived from the header's *plaintext* `PAYKEY`/`CHECK[1]` — it must
/// be built before [`encrypt_header`] turns the header into ciphertext.
pub fn encrypt<R: Read, W: Write, RND: RandomSource>(
    mut reader: R,
    mut writer: W,
    pw_hash: &[u8; 64],
    rnd: &mut RND,
) -> Result<(), Error> {
    let mut header = build_header(rnd);
    let mut payload_stream = skipped_stream(&header[12..76], header[5]);
    encrypt_header(&mut header, pw_hash);
    writer.write_all(&header)?;

    let mut buf = [0u8; BODY_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        let ct = payload_stream.xor_many(&buf[..n]);
        writer.write_all(&ct)?;
    }
    Ok(())
}

/// Decrypts all of `reader` into `writer` under `pw_hash`.
///
/// Returns [`Error::Corrupt`] if fewer than [`HEADER_SIZE`] bytes are available, and
/// [`Error::BadPassword`] if the header's self-check fails for `pw_hash`.
pub fn decrypt<R: Read, W: Write>(mut reader: R, mut writer: W, pw_hash: &[u8; 64]) -> Result<(), Error> {
    let mut header = read_header(&mut reader)?;
    decrypt_header(&mut header, pw_hash)?;
    let mut payload_stream = skipped_stream(&header[12..76], header[5]);

    let mut buf = [0u8; BODY_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        let pt = payload_stream.xor_many(&buf[..n]);
        writer.write_all(&pt)?;
    }
    Ok(())
}

/// Verifies that `pw_hash` opens `reader`'s header, without producing any plaintext.
pub fn check<R: Read>(mut reader: R, pw_hash: &[u8; 64]) -> Result<(), Error> {
    let mut header = read_header(&mut reader)?;
    decrypt_header(&mut header, pw_hash)?;
    Ok(())
}

/// Re-encrypts the header of an encrypted file in place, so it opens under `new_pw_hash` instead
/// of `old_pw_hash`, without touching the already-encrypted body.
///
/// A fresh random IV is drawn for the new header; the body's keystream is keyed by the header's
/// `PAYKEY`, not by the password, so leaving the body untouched is sound — the rekeyed header
/// still derives the same payload keystream once decrypted with the new password.
pub fn rekey<F: Read + Write + Seek, RND: RandomSource>(
    file: &mut F,
    old_pw_hash: &[u8; 64],
    new_pw_hash: &[u8; 64],
    rnd: &mut RND,
) -> Result<(), Error> {
    file.seek(SeekFrom::Start(0))?;
    let mut header = read_header(file)?;
    decrypt_header(&mut header, old_pw_hash)?;

    rnd.fill(&mut header[0..4]);
    encrypt_header(&mut header, new_pw_hash);

    file.seek(SeekFrom::Start(0))?;
    file.write_all(&header)?;
    Ok(())
}

fn read_header<R: Read>(reader: &mut R) -> Result<[u8; HEADER_SIZE], Error> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header).map_err(|_| Error::Corrupt)?;
    Ok(header)
}
