#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use tthrs::{LEAF_SIZE, SequentialHasher, TthConfig, internal_digest, leaf_digest};

fuzz_target!(|data: Vec<u8>| {
    // Reference: materialize the whole leaf level and reduce it with the
    // public node operations, no grouping, no streaming.
    let reference = if data.is_empty() {
        tthrs::empty_file_digest()
    } else {
        let mut level: Vec<_> = data.chunks(LEAF_SIZE).map(leaf_digest).collect();
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut pairs = level.chunks_exact(2);
            for pair in &mut pairs {
                next.push(internal_digest(&pair[0], &pair[1]));
            }
            if let [odd] = pairs.remainder() {
                next.push(*odd);
            }
            level = next;
        }
        level[0]
    };

    // The streaming engine must agree for every group size.
    for group_size in [1usize, 2, 8, 64] {
        let config = TthConfig::default().with_group_size(group_size);
        let root = SequentialHasher::new(config)
            .hash_reader(Cursor::new(&data))
            .unwrap();
        assert_eq!(root, reference);
    }
});
