//! Digest primitive wrapper.
//!
//! This module wraps the external Tiger hash behind a small reusable
//! interface. The tree engines never touch the primitive's internals;
//! they only need `update`, `finalize_reset` and the one-shot helper.
//!
//! - [`TigerHasher`] - Tiger hash implementation

mod tiger;

pub(crate) use tiger::TigerHasher;
