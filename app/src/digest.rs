// SPDX-License-Identifier: 0BSD
// spritzcrypt

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// How a computed digest is rendered for display.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DigestFormat {
    /// Base64, the default.
    Base64,
    /// Lowercase hex, selected with `-h`/`--hex`.
    Hex,
}

/// Renders `digest` in the requested format.
pub fn render(digest: &[u8], format: DigestFormat) -> String {
    match format {
        DigestFormat::Base64 => STANDARD.encode(digest),
        DigestFormat::Hex => hex::encode(digest),
    }
}

/// Converts a requested digest size in *bits* to a byte count, rounding up and never returning
/// zero (mirroring the original tool's `(bits + 7) / 8`, floored at 1).
pub fn bits_to_bytes(bits: u32) -> usize {
    (((bits + 7) / 8).max(1)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_to_bytes_rounds_up() {
        assert_eq!(bits_to_bytes(256), 32);
        assert_eq!(bits_to_bytes(1), 1);
        assert_eq!(bits_to_bytes(0), 1);
        assert_eq!(bits_to_bytes(9), 2);
    }

    #[test]
    fn renders_hex_and_base64() {
        let data = [0xAB, 0xCD, 0xEF];
        assert_eq!(render(&data, DigestFormat::Hex), "abcdef");
        assert_eq!(render(&data, DigestFormat::Base64), "q83v");
    }
}
