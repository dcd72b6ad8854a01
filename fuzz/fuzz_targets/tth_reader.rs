#![no_main]

use std::io::{self, Cursor, Read};

use libfuzzer_sys::fuzz_target;
use tthrs::SequentialHasher;

/// Yields at most `step` bytes per read call.
struct Dribble<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Dribble<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.len().min(buf.len()).min(self.step);
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, step) = input;
    let step = usize::from(step) + 1;

    let hasher = SequentialHasher::default();
    let reference = hasher.hash_reader(Cursor::new(&data)).unwrap();

    // Read granularity must not influence the root.
    let dribbled = hasher
        .hash_reader(Dribble {
            data: &data,
            step,
        })
        .unwrap();
    assert_eq!(dribbled, reference);
});
