//! Fuzz target for the streaming hasher.
//!
//! Arbitrary sequences of update, finalize and reset calls must agree with a
//! one-shot hash of the bytes written since the last reset.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tenthash::TentHash;

#[derive(Arbitrary, Debug)]
enum Op {
  Update(Vec<u8>),
  Finalize,
  Reset,
}

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
  test_chunked(&input.data, &input.chunk_sizes);
  test_ops(&input.ops);
});

fn test_chunked(data: &[u8], chunk_sizes: &[usize]) {
  let expected = tenthash::hash(data);

  let mut hasher = TentHash::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "tenthash streaming mismatch");
}

fn test_ops(ops: &[Op]) {
  let mut hasher = TentHash::new();
  let mut written = Vec::new();

  for op in ops {
    match op {
      Op::Update(bytes) => {
        hasher.update(bytes);
        written.extend_from_slice(bytes);
      }
      Op::Finalize => {
        assert_eq!(hasher.finalize(), tenthash::hash(&written));
      }
      Op::Reset => {
        hasher.reset();
        written.clear();
      }
    }
    assert_eq!(hasher.message_len(), written.len() as u64);
  }

  assert_eq!(hasher.finalize(), tenthash::hash(&written));
}
