//! Level-by-level tree reduction.
//!
//! One rule does all the work: adjacent digests pair left-to-right into
//! parent digests, and an unpaired trailing digest is carried into the
//! next level unmodified. That promotion rule is what every other TTH
//! implementation does for non-power-of-two leaf counts, so it must not
//! be "fixed" into pad-or-rehash variants.

use crate::digest::TthDigest;
use crate::error::TthError;
use crate::tree::NodeHasher;

/// Reduces one level to the next: `ceil(n / 2)` parent digests.
///
/// Consecutive pairs `(2i, 2i + 1)` combine into one parent; an odd
/// trailing digest is promoted as-is.
pub(crate) fn reduce_once(level: &[TthDigest], hasher: &mut NodeHasher) -> Vec<TthDigest> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));

    let mut pairs = level.chunks_exact(2);
    for pair in &mut pairs {
        next.push(hasher.internal(&pair[0], &pair[1]));
    }
    if let [odd] = pairs.remainder() {
        next.push(*odd);
    }

    next
}

/// Fully reduces a level to its single root digest.
///
/// A level with zero digests signals a sizing bug upstream and yields
/// [`TthError::EmptyReduction`]; the zero-length-file case never reaches
/// the reducer.
pub(crate) fn reduce_root(
    mut level: Vec<TthDigest>,
    hasher: &mut NodeHasher,
) -> Result<TthDigest, TthError> {
    if level.is_empty() {
        return Err(TthError::EmptyReduction);
    }
    while level.len() > 1 {
        level = reduce_once(&level, hasher);
    }
    Ok(level[0])
}
