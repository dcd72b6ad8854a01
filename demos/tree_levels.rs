//! Full tree retention example.
//!
//! Run with:
//!     cargo run --example tree_levels -- /path/to/file

use std::env;

use tthrs::ParallelHasher;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    let tree = ParallelHasher::default().tree_file(&path)?;

    println!(
        "Tree for {}: {} leaves, {} levels\n",
        path,
        tree.leaf_count(),
        tree.height()
    );

    for (k, level) in tree.levels().iter().enumerate() {
        println!("level {:>2}: {:>8} digests", k, level.len());
    }

    println!("\nroot: {}", tree.root());

    Ok(())
}
