// SPDX-License-Identifier: 0BSD
// spritzcrypt

use zeroize::Zeroize;

const N: usize = 256;

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($self:tt, $arg:tt) => {
        log::trace!(
            "Sponge@{:p}: {} --> i={:02x} j={:02x} k={:02x} z={:02x} a={:02x} w={:02x}",
            &$self,
            $arg,
            $self.i,
            $self.j,
            $self.k,
            $self.z,
            $self.a,
            $self.w
        );
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($self:tt, $arg:tt) => {};
}

/// The Spritz sponge: a 256-byte permutation `s` plus six single-byte registers.
///
/// `Sponge` is the one primitive every other component in this crate is built from — hashing,
/// key derivation, and the keystream used to encrypt file contents are all just particular
/// sequences of [`absorb`](Sponge::absorb), [`absorb_stop`](Sponge::absorb_stop), and
/// [`drip`](Sponge::drip)/[`xor_many`](Sponge::xor_many) calls against a freshly created sponge.
///
/// The permutation `s` always remains a permutation of `0..256`; every mutation is a swap of two
/// elements, never an overwrite.
pub struct Sponge {
    s: [u8; N],
    i: u8,
    j: u8,
    k: u8,
    z: u8,
    a: u8,
    w: u8,
}

impl Sponge {
    /// Creates a fresh sponge in its initial state: the identity permutation, all registers at
    /// zero except `w`, which starts at `1` (it must be coprime with 256 at all times).
    pub fn new() -> Self {
        let mut s = [0u8; N];
        for (idx, slot) in s.iter_mut().enumerate() {
            *slot = idx as u8;
        }
        Sponge { s, i: 0, j: 0, k: 0, z: 0, a: 0, w: 1 }
    }

    #[inline]
    fn swap(&mut self, x: u8, y: u8) {
        self.s.swap(x as usize, y as usize);
    }

    #[inline]
    fn mem(&self, x: u8) -> u8 {
        self.s[x as usize]
    }

    /// One round of the internal state-update function.
    fn update(&mut self) {
        self.i = self.i.wrapping_add(self.w);
        self.j = self.k.wrapping_add(self.mem(self.j.wrapping_add(self.mem(self.i))));
        self.k = self.i.wrapping_add(self.k).wrapping_add(self.mem(self.j));
        self.swap(self.i, self.j);
    }

    /// Produces one byte of output from the current state, advancing `z`.
    fn output(&mut self) -> u8 {
        self.z = self.mem(self.j.wrapping_add(self.mem(self.i.wrapping_add(self.mem(self.z.wrapping_add(self.k))))));
        self.z
    }

    /// Runs `update` `n` times, then bumps `w` by 2 (keeping it odd, hence coprime with 256).
    fn whip(&mut self, n: usize) {
        for _ in 0..n {
            self.update();
        }
        self.w = self.w.wrapping_add(2);
    }

    /// A weak, cheap shuffle of the permutation: swaps `s[v]`/`s[N-1-v]` whenever out of order.
    fn crush(&mut self) {
        for v in 0..(N / 2) {
            if self.s[v] > self.s[N - 1 - v] {
                self.s.swap(v, N - 1 - v);
            }
        }
    }

    /// Full re-mix of the state: three rounds of `whip(2N)` interleaved with `crush()`, resetting
    /// the absorbed-nibble counter `a` to zero. Triggered automatically whenever the sponge
    /// switches between absorbing and producing output.
    fn shuffle(&mut self) {
        trace!(self, "shuffle::enter");
        self.whip(2 * N);
        self.crush();
        self.whip(2 * N);
        self.crush();
        self.whip(2 * N);
        self.a = 0;
        trace!(self, "shuffle::leave");
    }

    /// Absorbs a single nibble (low 4 bits of `x`) into the state.
    pub fn absorb_nibble(&mut self, x: u8) {
        if self.a as usize == N / 2 {
            self.shuffle();
        }
        let a = self.a;
        self.swap(a, 128 + (x & 0xf));
        self.a = self.a.wrapping_add(1);
        trace!(self, "absorb_nibble");
    }

    /// Absorbs one byte, low nibble first then high nibble.
    pub fn absorb(&mut self, b: u8) {
        self.absorb_nibble(b & 0xf);
        self.absorb_nibble(b >> 4);
    }

    /// Absorbs every byte of `data`, in order.
    pub fn absorb_many(&mut self, data: &[u8]) {
        for &b in data {
            self.absorb(b);
        }
    }

    /// Marks a boundary between two absorbed values without absorbing any data itself.
    ///
    /// This matters: `absorb_many(a); absorb_stop(); absorb_many(b)` produces a different state
    /// than `absorb_many(a); absorb_many(b)`, even when the concatenation of `a` and `b` is the
    /// same byte string.
    pub fn absorb_stop(&mut self) {
        if self.a as usize == N / 2 {
            self.shuffle();
        }
        self.a = self.a.wrapping_add(1);
        trace!(self, "absorb_stop");
    }

    fn drip_one(&mut self) -> u8 {
        self.update();
        self.output()
    }

    /// Produces a single output byte, shuffling first if the sponge has just finished absorbing.
    pub fn drip(&mut self) -> u8 {
        if self.a > 0 {
            self.shuffle();
        }
        let b = self.drip_one();
        trace!(self, "drip");
        b
    }

    /// Produces `n` output bytes, shuffling at most once regardless of `n`.
    pub fn drip_many(&mut self, n: usize) -> Vec<u8> {
        if self.a > 0 {
            self.shuffle();
        }
        let out = (0..n).map(|_| self.drip_one()).collect();
        trace!(self, "drip_many");
        out
    }

    /// XORs `data` with the sponge's output stream, byte for byte, and returns the result.
    pub fn xor_many(&mut self, data: &[u8]) -> Vec<u8> {
        if self.a > 0 {
            self.shuffle();
        }
        let out = data.iter().map(|&b| b ^ self.drip_one()).collect();
        trace!(self, "xor_many");
        out
    }
}

impl Default for Sponge {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Sponge {
    fn drop(&mut self) {
        self.s.zeroize();
        self.i.zeroize();
        self.j.zeroize();
        self.k.zeroize();
        self.z.zeroize();
        self.a.zeroize();
        self.w.zeroize();
    }
}

/// Absorbs `n` as a big-endian byte sequence, one byte tag at a time, recursively peeling off
/// everything above the low byte before absorbing it.
pub fn absorb_number(sponge: &mut Sponge, n: usize) {
    if n > 0xff {
        absorb_number(sponge, n >> 8);
    }
    sponge.absorb((n & 0xff) as u8);
}
