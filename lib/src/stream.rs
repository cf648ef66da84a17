// SPDX-License-Identifier: 0BSD
// spritzcrypt

use crate::sponge::Sponge;

/// Fixed number of warm-up drips discarded before a keystream is considered usable.
const BASE_SKIP: usize = 2048;

/// Builds a keystream sponge from `key`, discarding its first `2048 + skip` output bytes.
///
/// The returned [`Sponge`] is ready to be driven with [`Sponge::xor_many`]/[`Sponge::drip`] to
/// produce the actual keystream. Discarding a large, key-dependent prefix keeps early keystream
/// bytes — which are structurally closest to the absorbed key — out of anything ever exposed to
/// an attacker.
pub fn skipped_stream(key: &[u8], skip: u8) -> Sponge {
    let mut sponge = Sponge::new();
    sponge.absorb_many(key);
    for _ in 0..(BASE_SKIP + skip as usize) {
        sponge.drip();
    }
    sponge
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn different_skip_values_diverge() {
        let mut a = skipped_stream(b"key", 0);
        let mut b = skipped_stream(b"key", 1);
        assert_ne!(a.drip_many(16), b.drip_many(16));
    }

    #[test]
    fn same_key_and_skip_reproduce() {
        let mut a = skipped_stream(b"key", 7);
        let mut b = skipped_stream(b"key", 7);
        assert_eq!(a.drip_many(16), b.drip_many(16));
    }
}
