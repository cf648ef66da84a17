// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::io;

use spritzcrypt::hash::mem_hash;

use crate::error::Error;

/// Reduces a raw password to the 64-byte `pw_hash` every library entry point expects.
pub fn pw_hash(password: &[u8]) -> [u8; 64] {
    let digest = mem_hash(password, 64);
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}

/// Reads one password from the controlling terminal, with the given prompt.
fn prompt_once(prompt: &str) -> io::Result<String> {
    rpassword::prompt_password(prompt)
}

/// Resolves the password for `decrypt`/`check`/rekey-old: the `-p`/`-o` flag if given, otherwise
/// a single TTY prompt.
pub fn collect_single(flag: Option<&str>, prompt: &str) -> Result<[u8; 64], Error> {
    let password = match flag {
        Some(pw) => pw.to_owned(),
        None => prompt_once(prompt)?,
    };
    Ok(pw_hash(password.as_bytes()))
}

/// Resolves the password for `encrypt`/rekey-new: the `-p`/`-n` flag if given, otherwise a TTY
/// prompt entered twice, rejecting a mismatched confirmation.
///
/// Mirrors the original tool's behavior of prompting twice only when a password must be newly
/// chosen, and accepting a flag-supplied password without a second confirmation.
pub fn collect_confirmed(flag: Option<&str>, prompt: &str, confirm_prompt: &str) -> Result<[u8; 64], Error> {
    let password = match flag {
        Some(pw) => pw.to_owned(),
        None => {
            let first = prompt_once(prompt)?;
            let second = prompt_once(confirm_prompt)?;
            if first != second {
                return Err(Error::PasswordMismatch);
            }
            first
        }
    };
    Ok(pw_hash(password.as_bytes()))
}
