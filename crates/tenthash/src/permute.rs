//! The TentHash permutation: block absorption and the 7-round ARX mix.

use crate::BLOCK_SIZE;

/// Initial state words.
pub const IV: [u64; 4] = [
  0x5d6d_affc_4411_a967,
  0xe22d_4dea_6857_7f34,
  0xca50_864d_814c_bc2e,
  0x894e_29b9_611e_b173,
];

/// Left-rotation amounts `[r0, r1]` for each of the seven mix rounds.
///
/// `r0` rotates word 2, `r1` rotates word 3.
pub const ROTATIONS: [[u32; 2]; 7] = [[16, 28], [14, 57], [11, 22], [35, 34], [57, 16], [59, 40], [44, 13]];

/// Seven rounds of add-rotate-xor over the 256-bit state.
#[inline(always)]
pub(crate) fn mix(state: &mut [u64; 4]) {
  let [mut a, mut b, mut c, mut d] = *state;

  for [r0, r1] in ROTATIONS {
    a = a.wrapping_add(c);
    c = c.rotate_left(r0) ^ a;
    b = b.wrapping_add(d);
    d = d.rotate_left(r1) ^ b;
    core::mem::swap(&mut a, &mut b);
  }

  *state = [a, b, c, d];
}

/// XOR one little-endian block into the state, then mix.
#[inline(always)]
pub(crate) fn absorb(state: &mut [u64; 4], block: &[u8; BLOCK_SIZE]) {
  let (words, _) = block.as_chunks::<8>();
  for (s, w) in state.iter_mut().zip(words) {
    *s ^= u64::from_le_bytes(*w);
  }
  mix(state);
}
