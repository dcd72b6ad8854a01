//! File hashing example.
//!
//! Run with:
//!     cargo run --example hash_file -- /path/to/file

use std::env;
use std::time::Instant;

use tthrs::{ParallelHasher, SequentialHasher, TthConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    let size = std::fs::metadata(&path)?.len();
    println!("Hashing file: {} ({} bytes)\n", path, size);

    let start = Instant::now();
    let root = SequentialHasher::default().hash_file(&path)?;
    println!("sequential: {}  ({:.2?})", root, start.elapsed());

    let config = TthConfig::default().with_thread_count(4);
    let start = Instant::now();
    let root = ParallelHasher::new(config).hash_file(&path)?;
    println!("parallel:   {}  ({:.2?})", root, start.elapsed());

    Ok(())
}
