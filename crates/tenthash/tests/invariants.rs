use tenthash::{BLOCK_SIZE, DIGEST_SIZE, IV, ROTATIONS, TentHash, hash};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// Whole-message reference: pad the tail once, absorb every block, fold in
/// the bit length, mix twice.
fn tenthash_reference(data: &[u8]) -> [u8; DIGEST_SIZE] {
  fn mix(s: &mut [u64; 4]) {
    for [r0, r1] in ROTATIONS {
      s[0] = s[0].wrapping_add(s[2]);
      s[2] = s[2].rotate_left(r0) ^ s[0];
      s[1] = s[1].wrapping_add(s[3]);
      s[3] = s[3].rotate_left(r1) ^ s[1];
      s.swap(0, 1);
    }
  }

  let mut padded = data.to_vec();
  padded.resize(data.len().div_ceil(BLOCK_SIZE) * BLOCK_SIZE, 0);

  let mut s = IV;
  for block in padded.chunks_exact(BLOCK_SIZE) {
    for (i, word) in block.chunks_exact(8).enumerate() {
      s[i] ^= u64::from_le_bytes(word.try_into().unwrap());
    }
    mix(&mut s);
  }
  s[0] ^= (data.len() as u64).wrapping_mul(8);
  mix(&mut s);
  mix(&mut s);

  let mut out = [0u8; DIGEST_SIZE];
  out[..8].copy_from_slice(&s[0].to_le_bytes());
  out[8..16].copy_from_slice(&s[1].to_le_bytes());
  out[16..].copy_from_slice(&s[2].to_le_bytes()[..4]);
  out
}

const LENGTHS: [usize; 17] = [0, 1, 2, 7, 8, 15, 16, 31, 32, 33, 63, 64, 65, 95, 96, 255, 1024];
const SEEDS: [u64; 3] = [0, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

#[test]
fn oneshot_matches_reference() {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);
      assert_eq!(hash(&data), tenthash_reference(&data), "reference mismatch at len={len}");
    }
  }
}

#[test]
fn every_two_way_split_matches_oneshot() {
  for &len in &[0usize, 31, 32, 33, 64, 100] {
    let data = gen_bytes(len, 0x5eed ^ len as u64);
    let expected = hash(&data);
    for split in 0..=len {
      let (a, b) = data.split_at(split);
      let mut h = TentHash::new();
      h.update(a);
      h.update(b);
      assert_eq!(h.finalize(), expected, "len={len} split={split}");
    }
  }
}

#[test]
fn fixed_chunk_sizes_match_oneshot() {
  let data = gen_bytes(1000, 42);
  let expected = hash(&data);
  for chunk in [1usize, 3, 7, 16, 31, 32, 33, 64, 129, 999, 1000] {
    let mut h = TentHash::new();
    for piece in data.chunks(chunk) {
      h.update(piece);
    }
    assert_eq!(h.finalize(), expected, "chunk={chunk}");
  }
}

#[test]
fn digest_size_is_fixed() {
  for len in [0usize, 1, 31, 32, 33, 10_000] {
    let data = gen_bytes(len, 7);
    assert_eq!(hash(&data).len(), DIGEST_SIZE);
    assert_eq!(TentHash::new().sum(&data).len(), len + DIGEST_SIZE);
  }
}

#[test]
fn finalize_is_idempotent_and_resumable() {
  let data = gen_bytes(200, 9);
  let mut h = TentHash::new();
  for (i, piece) in data.chunks(17).enumerate() {
    h.update(piece);
    let consumed = ((i + 1) * 17).min(data.len());
    let first = h.finalize();
    assert_eq!(first, h.finalize());
    assert_eq!(first, hash(&data[..consumed]), "after {consumed} bytes");
  }
}

#[test]
fn reset_forgets_history() {
  let noise = gen_bytes(77, 1);
  let data = gen_bytes(45, 2);

  let mut h = TentHash::new();
  h.update(&noise);
  let _ = h.finalize();
  h.reset();
  assert_eq!(h.message_len(), 0);
  h.update(&data);
  assert_eq!(h.finalize(), hash(&data));
}

#[test]
fn clone_is_an_independent_snapshot() {
  let mut h = TentHash::new();
  h.update(b"shared prefix, ");
  let mut fork = h.clone();

  h.update(b"left");
  fork.update(b"right");
  assert_eq!(h.finalize(), hash(b"shared prefix, left"));
  assert_eq!(fork.finalize(), hash(b"shared prefix, right"));
}

#[test]
fn length_is_bound_into_digest() {
  // Zero padding alone cannot make a short input collide with its padded form.
  for len in 1..BLOCK_SIZE {
    let short = vec![0u8; len];
    let padded = vec![0u8; BLOCK_SIZE];
    assert_ne!(hash(&short), hash(&padded), "len={len}");
  }
  assert_ne!(hash(b""), hash(&[0u8; BLOCK_SIZE]));
}

#[test]
fn snapshot_crosses_threads() {
  let mut h = TentHash::new();
  h.update(b"Hello ");
  let snapshot = h.clone();
  let worker = std::thread::spawn(move || {
    let mut s = snapshot;
    s.update(b"world!");
    s.finalize()
  });
  h.update(b"there");
  assert_eq!(worker.join().unwrap(), hash(b"Hello world!"));
  assert_eq!(h.finalize(), hash(b"Hello there"));
}
