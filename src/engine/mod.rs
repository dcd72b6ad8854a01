//! The two hashing engines.
//!
//! - [`SequentialHasher`] - single-pass streaming engine with bounded memory
//! - [`ParallelHasher`] - partitioned multi-threaded engine, optionally
//!   retaining the full tree
//!
//! Both produce byte-identical roots for the same input; they differ only
//! in memory and time characteristics.

mod parallel;
mod partition;
mod sequential;

pub use parallel::ParallelHasher;
pub use sequential::SequentialHasher;
