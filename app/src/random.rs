// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::time::{SystemTime, UNIX_EPOCH};

use rand_core::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use spritzcrypt::RandomSource;

/// Non-cryptographic-strength, process-seeded random source used for real file headers.
///
/// The header format's own password-derived keystream is what actually protects a file; this
/// source only needs to avoid ever repeating an IV in practice, which a PCG seeded from wall
/// clock time and a per-process stack address comfortably achieves.
pub struct OsRandom {
    rng: Pcg64Mcg,
}

impl OsRandom {
    pub fn new() -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
        let stack_marker: u8 = 0;
        let address_entropy = &stack_marker as *const u8 as u64;
        let seed = (nanos as u64) ^ address_entropy ^ (std::process::id() as u64);
        OsRandom { rng: Pcg64Mcg::seed_from_u64(seed) }
    }
}

impl Default for OsRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }
}
