//! Partitioned multi-threaded engine.
//!
//! The file is split into leaf-aligned partitions, one worker per
//! partition. Every worker owns its own read handle and a disjoint
//! `&mut` slice of the pre-sized leaf level, so the level is filled
//! without locks; the borrow split is what proves the writes disjoint.
//! Workers are joined through [`std::thread::scope`] handles, which also
//! publishes their writes before reduction starts. A failing worker trips
//! a shared cancellation flag; its siblings observe it between block reads
//! and stop early, and exactly one error surfaces for the run.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::config::{LEAF_SIZE, TthConfig};
use crate::digest::TthDigest;
use crate::error::TthError;
use crate::tree::reduce::reduce_root;
use crate::tree::{HashTree, NodeHasher, empty_file_digest};

use super::partition::{FilePartition, partition_leaves};

/// Multi-threaded Tiger tree hasher.
///
/// Produces the same root as [`SequentialHasher`](super::SequentialHasher)
/// for any thread count; unlike the streaming engine it materializes the
/// leaf level, which is what makes retaining the full tree possible.
///
/// Files at or below the configured parallel threshold are hashed on the
/// calling thread with the same read loop; no workers are spawned.
///
/// # Example
///
/// ```no_run
/// use tthrs::{ParallelHasher, TthConfig};
///
/// let hasher = ParallelHasher::new(TthConfig::default().with_thread_count(8));
/// let root = hasher.hash_file("data.bin")?;
/// println!("TTH: {root}");
/// # Ok::<(), tthrs::TthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParallelHasher {
    config: TthConfig,
}

impl ParallelHasher {
    /// Creates a new parallel hasher with the given configuration.
    pub fn new(config: TthConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this hasher.
    pub fn config(&self) -> &TthConfig {
        &self.config
    }

    /// Computes the root digest of the file at `path`.
    ///
    /// Intermediate levels are discarded as they are consumed; use
    /// [`tree_file`](Self::tree_file) to retain them.
    pub fn hash_file<P: AsRef<Path>>(&self, path: P) -> Result<TthDigest, TthError> {
        match self.build_leaf_level(path.as_ref())? {
            None => Ok(empty_file_digest()),
            Some(leaves) => reduce_root(leaves, &mut NodeHasher::new()),
        }
    }

    /// Computes the full tree of the file at `path`, every level retained.
    pub fn tree_file<P: AsRef<Path>>(&self, path: P) -> Result<HashTree, TthError> {
        match self.build_leaf_level(path.as_ref())? {
            None => Ok(HashTree::empty_file()),
            Some(leaves) => HashTree::from_leaves(leaves),
        }
    }

    /// Fills the leaf level; `None` signals the zero-length file.
    fn build_leaf_level(&self, path: &Path) -> Result<Option<Vec<TthDigest>>, TthError> {
        self.config.validate()?;

        if !path.is_file() {
            return Err(TthError::NotFound(path.to_path_buf()));
        }
        let file_size = std::fs::metadata(path)?.len();
        if file_size == 0 {
            return Ok(None);
        }

        let leaf_count = file_size.div_ceil(LEAF_SIZE as u64);
        let mut leaves = vec![TthDigest::default(); leaf_count as usize];
        let block_size = self.config.data_block_size();

        if file_size <= self.config.parallel_threshold() {
            // Too small to amortize thread startup: same read loop, one
            // partition, calling thread.
            let whole = partition_leaves(file_size, leaf_count, 1);
            let cancel = AtomicBool::new(false);
            hash_partition(path, &whole[0], &mut leaves, block_size, &cancel)?;
            return Ok(Some(leaves));
        }

        let partitions = partition_leaves(file_size, leaf_count, self.config.thread_count());
        let cancel = AtomicBool::new(false);

        let mut results: Vec<Result<(), TthError>> = Vec::with_capacity(partitions.len());
        thread::scope(|s| {
            let mut handles = Vec::with_capacity(partitions.len());
            let mut rest: &mut [TthDigest] = &mut leaves;
            for part in &partitions {
                let (slots, tail) = std::mem::take(&mut rest).split_at_mut(part.leaf_count());
                rest = tail;
                let cancel = &cancel;
                handles.push(s.spawn(move || {
                    let result = hash_partition(path, part, slots, block_size, cancel);
                    if result.is_err() {
                        cancel.store(true, Ordering::Relaxed);
                    }
                    result
                }));
            }
            for handle in handles {
                results.push(handle.join().unwrap_or_else(|_| {
                    Err(TthError::Io(std::io::Error::other("hash worker panicked")))
                }));
            }
        });

        // Exactly one terminal error per run; a partial level is never
        // returned.
        results.into_iter().collect::<Result<(), TthError>>()?;
        Ok(Some(leaves))
    }
}

impl Default for ParallelHasher {
    fn default() -> Self {
        Self::new(TthConfig::default())
    }
}

/// Worker loop: streams one partition in `block_size` reads and writes the
/// leaf digests into the partition's slots.
///
/// Partition starts are leaf boundaries and `block_size` is a multiple of
/// the leaf size, so slicing each block into leaf-sized pieces lines up
/// with the file's leaf grid; only the final piece of the final partition
/// may be short. Returns early without error when cancellation is
/// observed; the worker that failed carries the error.
fn hash_partition(
    path: &Path,
    part: &FilePartition,
    slots: &mut [TthDigest],
    block_size: usize,
    cancel: &AtomicBool,
) -> Result<(), TthError> {
    debug_assert_eq!(slots.len(), part.leaf_count());

    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(part.start()))?;

    let mut hasher = NodeHasher::new();
    let mut block = vec![0u8; block_size];
    let mut remaining = part.end() - part.start();
    let mut slot = 0usize;

    while remaining > 0 {
        if cancel.load(Ordering::Relaxed) {
            return Ok(());
        }
        let want = remaining.min(block_size as u64) as usize;
        file.read_exact(&mut block[..want])?;
        for leaf in block[..want].chunks(LEAF_SIZE) {
            slots[slot] = hasher.leaf(leaf);
            slot += 1;
        }
        remaining -= want as u64;
    }

    debug_assert_eq!(slot, slots.len());
    Ok(())
}
