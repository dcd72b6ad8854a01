//! Tiger-based digest implementation.

use tiger::{Digest, Tiger};

use crate::digest::TthDigest;

/// A hasher that computes Tiger digests.
///
/// One instance can produce any number of digests; the internal state is
/// reset after each `finalize_reset`, with no residue carried between
/// invocations.
#[derive(Debug, Clone)]
pub struct TigerHasher {
    state: Tiger,
}

impl TigerHasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: Tiger::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes the current digest and resets the state for reuse.
    pub fn finalize_reset(&mut self) -> TthDigest {
        TthDigest::new(self.state.finalize_reset().into())
    }

    /// Resets the hasher to its initial state, discarding buffered input.
    #[allow(dead_code)]
    pub(crate) fn reset(&mut self) {
        self.state.reset();
    }

    /// Convenience method to hash data in one shot.
    #[allow(dead_code)]
    pub(crate) fn hash(data: &[u8]) -> TthDigest {
        TthDigest::new(Tiger::digest(data).into())
    }
}

impl Default for TigerHasher {
    fn default() -> Self {
        Self::new()
    }
}
