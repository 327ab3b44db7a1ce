#![no_main]

use libfuzzer_sys::fuzz_target;
use tenthash::{DIGEST_SIZE, Digest as _, TentHash};

fuzz_target!(|data: &[u8]| {
  let ours = tenthash::hash(data);

  let streamed = tenthash::hash_reader(data).expect("in-memory reads cannot fail");
  assert_eq!(ours, streamed);

  let half = data.len() / 2;
  let vectored = TentHash::digest_vectored(&[&data[..half], &data[half..]]);
  assert_eq!(ours, vectored);

  let mut h = TentHash::new();
  h.update(data);
  let tagged = h.sum(b"tag");
  assert_eq!(tagged.len(), 3 + DIGEST_SIZE);
  assert_eq!(&tagged[3..], &ours[..]);
});
