// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::path::{Path, PathBuf};

const ENCRYPTED_EXT: &str = ".spritz";
const FALLBACK_EXT: &str = ".unenc";

/// Derives the output file name for a `crypt` operation on `src`.
///
/// Encrypting appends [`ENCRYPTED_EXT`]. Decrypting strips a trailing [`ENCRYPTED_EXT`] if
/// present, or else appends [`FALLBACK_EXT`] so the output never silently overwrites the input.
pub fn determine_target(encrypting: bool, src: &Path) -> PathBuf {
    let src_str = src.to_string_lossy();
    if encrypting {
        PathBuf::from(format!("{src_str}{ENCRYPTED_EXT}"))
    } else if let Some(stripped) = src_str.strip_suffix(ENCRYPTED_EXT) {
        PathBuf::from(stripped)
    } else {
        PathBuf::from(format!("{src_str}{FALLBACK_EXT}"))
    }
}
