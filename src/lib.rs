//! tthrs
//!
//! Tiger Tree Hashing (TTH/THEX) for Rust.
//!
//! `tthrs` computes a Merkle-style hash tree over a file's bytes: the file
//! is cut into fixed 1024-byte leaves, each leaf is hashed with a leaf tag,
//! and adjacent digests combine pairwise (an unpaired trailing digest is
//! promoted unmodified) until a single root remains. The root is the
//! content identity used by THEX-compatible tooling; interior levels allow
//! verifying aligned spans of the file without re-reading everything else.
//!
//! Two engines produce byte-identical roots:
//!
//! - [`SequentialHasher`] streams any reader once with bounded memory,
//!   compressing fixed groups of leaves as it goes.
//! - [`ParallelHasher`] splits a file into leaf-aligned partitions hashed
//!   by concurrent workers, then reduces the materialized leaf level; it
//!   can also retain the full tree of levels.
//!
//! The crate intentionally:
//! - does NOT implement the Tiger primitive (the `tiger` crate does)
//! - does NOT expose the leaf size as a knob (1024 bytes is the format)
//! - does NOT do any network or transport work
//!
//! It only does one thing: **file bytes → Tiger tree**
//!
//! # Hashing a file
//!
//! ```no_run
//! use tthrs::{ParallelHasher, TthConfig};
//!
//! fn main() -> Result<(), tthrs::TthError> {
//!     let hasher = ParallelHasher::new(TthConfig::default());
//!     let root = hasher.hash_file("data.bin")?;
//!     println!("TTH: {root}");
//!     Ok(())
//! }
//! ```
//!
//! # Hashing a stream
//!
//! ```
//! use std::io::Cursor;
//! use tthrs::SequentialHasher;
//!
//! let root = SequentialHasher::default().hash_reader(Cursor::new(b"hello"))?;
//! assert_eq!(root.to_base32().len(), 39);
//! # Ok::<(), tthrs::TthError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod digest;
mod engine;
mod error;
mod tree;

mod hash; // internal tiger wrapper

//
// Public surface (intentionally tiny)
//

pub use config::{
    DEFAULT_DATA_BLOCK_SIZE, DEFAULT_GROUP_SIZE, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_THREAD_COUNT,
    LEAF_SIZE, TthConfig,
};
pub use digest::TthDigest;
pub use engine::{ParallelHasher, SequentialHasher};
pub use error::TthError;
pub use tree::{HashTree, empty_file_digest, internal_digest, leaf_digest};

use std::path::Path;

/// Computes the root digest of the file at `path` with default settings.
///
/// Uses the parallel engine, which stays on the calling thread for files
/// at or below the default 1 MiB threshold.
///
/// # Example
///
/// ```no_run
/// let root = tthrs::hash_file("data.bin")?;
/// println!("TTH: {root}");
/// # Ok::<(), tthrs::TthError>(())
/// ```
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<TthDigest, TthError> {
    ParallelHasher::default().hash_file(path)
}
