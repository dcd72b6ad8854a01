//! Digest value types.
//!
//! - [`TthDigest`] - 24-byte Tiger tree digest

mod value;

pub use value::TthDigest;
