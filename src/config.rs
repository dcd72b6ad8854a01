//! Configuration for tree hashing behavior.
//!
//! - [`TthConfig`] - Sequential grouping and parallel execution tuning
//!
//! The leaf size is deliberately *not* configurable: every interoperating
//! TTH implementation hashes 1024-byte leaves, and changing it would
//! silently produce roots no other client can verify. It is exposed only
//! as the [`LEAF_SIZE`] constant.

use crate::error::TthError;

/// Size of one tree leaf in bytes. Fixed by the THEX format.
pub const LEAF_SIZE: usize = 1024;

/// Default number of leaf pairs compressed per group by the sequential
/// engine (64 pairs, i.e. 128 leaves / 128 KiB of input per group).
pub const DEFAULT_GROUP_SIZE: usize = 64;

/// Default number of worker threads for the parallel engine.
pub const DEFAULT_THREAD_COUNT: usize = 4;

/// Default read size per worker request (1 MiB).
pub const DEFAULT_DATA_BLOCK_SIZE: usize = 1024 * 1024;

/// Default file size at or below which the parallel engine stays on the
/// calling thread (1 MiB). Thread startup costs more than it saves there.
pub const DEFAULT_PARALLEL_THRESHOLD: u64 = 1024 * 1024;

/// Configuration for Tiger tree hashing.
///
/// All knobs trade memory, CPU and I/O against each other; none of them
/// affects the resulting root digest.
///
/// Constraints: `group_size` must be a non-zero power of two so that every
/// full group spans a power-of-two leaf count (group-wise reduction is only
/// equivalent to whole-level reduction under that alignment);
/// `data_block_size` must be a non-zero multiple of [`LEAF_SIZE`] so block
/// reads never split a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TthConfig {
    group_size: usize,
    thread_count: usize,
    data_block_size: usize,
    parallel_threshold: u64,
}

impl TthConfig {
    /// Creates a new configuration with the given group size and thread
    /// count, keeping defaults for the remaining knobs.
    ///
    /// Returns an error if a constraint is violated.
    pub fn new(group_size: usize, thread_count: usize) -> Result<Self, TthError> {
        let config = Self {
            group_size,
            thread_count,
            data_block_size: DEFAULT_DATA_BLOCK_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the sequential group size (leaf pairs per group).
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Sets the parallel worker thread count.
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Sets the per-worker read size in bytes.
    pub fn with_data_block_size(mut self, data_block_size: usize) -> Self {
        self.data_block_size = data_block_size;
        self
    }

    /// Sets the file size at or below which the parallel engine runs on
    /// the calling thread without spawning workers.
    pub fn with_parallel_threshold(mut self, parallel_threshold: u64) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Returns the sequential group size (leaf pairs per group).
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Returns the parallel worker thread count.
    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Returns the per-worker read size in bytes.
    pub fn data_block_size(&self) -> usize {
        self.data_block_size
    }

    /// Returns the small-file threshold for the parallel engine.
    pub fn parallel_threshold(&self) -> u64 {
        self.parallel_threshold
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), TthError> {
        if self.group_size == 0 {
            return Err(TthError::InvalidConfig {
                message: "group size must be non-zero",
            });
        }
        if !self.group_size.is_power_of_two() {
            return Err(TthError::InvalidConfig {
                message: "group size must be a power of two",
            });
        }
        if self.thread_count == 0 {
            return Err(TthError::InvalidConfig {
                message: "thread count must be non-zero",
            });
        }
        if self.data_block_size == 0 || self.data_block_size % LEAF_SIZE != 0 {
            return Err(TthError::InvalidConfig {
                message: "data block size must be a non-zero multiple of the leaf size",
            });
        }
        Ok(())
    }
}

impl Default for TthConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            thread_count: DEFAULT_THREAD_COUNT,
            data_block_size: DEFAULT_DATA_BLOCK_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
