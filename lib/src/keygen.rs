// SPDX-License-Identifier: 0BSD
// spritzcrypt

use crate::sponge::Sponge;

/// Payload key size, in bytes.
pub const PAYKEY_SIZE: usize = 64;

/// Derives the 64-byte payload key (`PAYKEY`) from a 64-byte password hash and a 4-byte IV.
///
/// A single sponge is reused across `times` rounds. Each round absorbs a mutable `iv_copy`
/// (seeded from `iv` and replaced by sponge output every round), a `bias`-truncated slice of the
/// *original* `iv` (not `iv_copy`), and the running target buffer `tgt` (seeded from `pw_hash`);
/// it then re-derives both `tgt` and `iv_copy` from the sponge's own output. Every absorbed value
/// is separated with `absorb_stop`.
///
/// `times` is expected to be `20000 + iv[3]`, making the round count password- and IV-dependent
/// and deliberately expensive to brute-force.
pub fn keygen(pw_hash: &[u8; 64], iv: &[u8; 4], times: u32) -> [u8; PAYKEY_SIZE] {
    let mut sponge = Sponge::new();
    let mut tgt = pw_hash.to_vec();
    let mut iv_copy = *iv;

    for _ in 0..times {
        let bias = (iv_copy[0] & 3) as usize;
        sponge.absorb_many(&iv_copy);
        sponge.absorb_stop();
        sponge.absorb_many(&iv[bias..4]);
        sponge.absorb_stop();
        sponge.absorb_many(&tgt);
        sponge.absorb_stop();
        tgt = sponge.drip_many(64);
        let fresh_iv = sponge.drip_many(4);
        iv_copy.copy_from_slice(&fresh_iv);
    }

    let mut out = [0u8; PAYKEY_SIZE];
    out.copy_from_slice(&tgt);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::mem_hash;

    #[test]
    fn pw_hash_for_password_matches_reference() {
        let pw_hash = mem_hash(b"password", 64);
        assert_eq!(
            hex::encode(&pw_hash),
            "05312cf257d98dc69d4cd4cdc5cd17be8cf38d564384f121ca8b94d1b5aca900558d0abadf620c85ce2149c1357117552fa5cdf6a32fa21dd2af4221c4ceb34f"
        );
    }

    #[test]
    fn keygen_is_deterministic_for_same_inputs() {
        let pw_hash = mem_hash(b"password", 64);
        let mut pw_hash_arr = [0u8; 64];
        pw_hash_arr.copy_from_slice(&pw_hash);
        let iv = [1, 2, 3, 4];

        let k1 = keygen(&pw_hash_arr, &iv, 50);
        let k2 = keygen(&pw_hash_arr, &iv, 50);
        assert_eq!(k1, k2);
    }

    #[test]
    fn keygen_depends_on_every_input() {
        let pw_hash = mem_hash(b"password", 64);
        let mut pw_hash_arr = [0u8; 64];
        pw_hash_arr.copy_from_slice(&pw_hash);
        let other_pw_hash = mem_hash(b"other", 64);
        let mut other_pw_hash_arr = [0u8; 64];
        other_pw_hash_arr.copy_from_slice(&other_pw_hash);

        let iv = [1, 2, 3, 4];
        let other_iv = [1, 2, 3, 5];

        let base = keygen(&pw_hash_arr, &iv, 50);
        assert_ne!(base, keygen(&other_pw_hash_arr, &iv, 50));
        assert_ne!(base, keygen(&pw_hash_arr, &other_iv, 50));
        assert_ne!(base, keygen(&pw_hash_arr, &iv, 51));
    }
}
