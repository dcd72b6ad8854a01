//! The tree of digest levels.

use crate::digest::TthDigest;
use crate::error::TthError;
use crate::tree::node::{NodeHasher, empty_file_digest};
use crate::tree::reduce::reduce_once;

/// A fully materialized Tiger tree.
///
/// Level 0 holds every leaf digest in file order; each following level is
/// the reduction of the one below it; the last level holds the single root
/// digest. A zero-length file produces a one-level tree containing only
/// the reserved empty-file digest.
///
/// Interior levels are what partial-verification protocols exchange: a
/// peer holding level `k` can verify any aligned span of the file without
/// the rest of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashTree {
    levels: Vec<Vec<TthDigest>>,
}

impl HashTree {
    /// Builds the full tree from the materialized leaf level.
    ///
    /// Returns [`TthError::EmptyReduction`] on an empty leaf level.
    pub(crate) fn from_leaves(leaves: Vec<TthDigest>) -> Result<Self, TthError> {
        if leaves.is_empty() {
            return Err(TthError::EmptyReduction);
        }

        let mut levels = Vec::with_capacity(level_count_for(leaves.len() as u64));
        let mut hasher = NodeHasher::new();
        let mut current = leaves;
        while current.len() > 1 {
            let next = reduce_once(&current, &mut hasher);
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Ok(Self { levels })
    }

    /// The one-level tree of a zero-length file.
    pub(crate) fn empty_file() -> Self {
        Self {
            levels: vec![vec![empty_file_digest()]],
        }
    }

    /// Returns the root digest.
    pub fn root(&self) -> TthDigest {
        self.levels[self.levels.len() - 1][0]
    }

    /// Returns the number of levels, leaves included.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Returns the number of leaf digests.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Returns level `k` (level 0 is the leaves), or `None` if out of range.
    pub fn level(&self, k: usize) -> Option<&[TthDigest]> {
        self.levels.get(k).map(Vec::as_slice)
    }

    /// Returns all levels, leaves first.
    pub fn levels(&self) -> &[Vec<TthDigest>] {
        &self.levels
    }
}

/// Number of levels a tree over `leaf_count` leaves will have: the
/// smallest `h` with `2^(h - 1) >= leaf_count`.
pub(crate) fn level_count_for(leaf_count: u64) -> usize {
    let mut height = 1usize;
    let mut span = 1u64;
    while span < leaf_count {
        span = span.saturating_mul(2);
        height += 1;
    }
    height
}
