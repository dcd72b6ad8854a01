//! Single-pass streaming engine.
//!
//! The engine never materializes the whole leaf level. Leaves are read two
//! at a time and combined into one pair digest on the fly; pair digests
//! accumulate into fixed-size groups, each full group is reduced to one
//! digest immediately, and only the group roots are kept until the end.
//! Peak memory is one group of pair digests plus the group-root list.
//!
//! Group-wise reduction produces the same root as reducing the whole leaf
//! level because every full group spans a power-of-two leaf count at an
//! aligned offset: pairing never crosses a group boundary, and a finished
//! group root is exactly the subtree root the whole-level reduction would
//! reach at that position.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::mem;
use std::path::Path;

use crate::config::{LEAF_SIZE, TthConfig};
use crate::digest::TthDigest;
use crate::error::TthError;
use crate::tree::reduce::reduce_root;
use crate::tree::{NodeHasher, empty_file_digest};

/// Streaming Tiger tree hasher.
///
/// Computes the root digest of any [`std::io::Read`] source in one pass
/// with memory bounded by the configured group size, independent of input
/// length.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use tthrs::{SequentialHasher, TthConfig};
///
/// let hasher = SequentialHasher::new(TthConfig::default());
/// let root = hasher.hash_reader(Cursor::new(b"hello world"))?;
/// println!("TTH: {root}");
/// # Ok::<(), tthrs::TthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SequentialHasher {
    config: TthConfig,
}

impl SequentialHasher {
    /// Creates a new sequential hasher with the given configuration.
    pub fn new(config: TthConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this hasher.
    pub fn config(&self) -> &TthConfig {
        &self.config
    }

    /// Computes the root digest of the file at `path`.
    ///
    /// A path that does not name an existing regular file is reported as
    /// [`TthError::NotFound`] before any stream is opened.
    pub fn hash_file<P: AsRef<Path>>(&self, path: P) -> Result<TthDigest, TthError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(TthError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        self.hash_reader(BufReader::new(file))
    }

    /// Computes the root digest of everything `reader` yields.
    ///
    /// Zero bytes of input produce the reserved empty-file digest. Any
    /// read error aborts the run.
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> Result<TthDigest, TthError> {
        self.config.validate()?;

        let group_size = self.config.group_size();
        let mut hasher = NodeHasher::new();
        let mut leaf_a = [0u8; LEAF_SIZE];
        let mut leaf_b = [0u8; LEAF_SIZE];

        // Pair digests of the group currently being filled.
        let mut group: Vec<TthDigest> = Vec::with_capacity(group_size);
        // One root per finished group.
        let mut group_roots: Vec<TthDigest> = Vec::new();

        loop {
            let len_a = read_leaf(&mut reader, &mut leaf_a)?;
            if len_a == 0 {
                break;
            }
            let len_b = read_leaf(&mut reader, &mut leaf_b)?;

            let digest = if len_b == 0 {
                // Trailing unpaired leaf: enters the reduction at its own
                // level, promoted rather than paired with itself.
                hasher.leaf(&leaf_a[..len_a])
            } else {
                let a = hasher.leaf(&leaf_a[..len_a]);
                let b = hasher.leaf(&leaf_b[..len_b]);
                hasher.internal(&a, &b)
            };
            group.push(digest);

            if group.len() == group_size {
                let full = mem::replace(&mut group, Vec::with_capacity(group_size));
                group_roots.push(reduce_root(full, &mut hasher)?);
            }
        }

        if group_roots.is_empty() {
            if group.is_empty() {
                // Zero-length input: the reserved one-leaf encoding.
                return Ok(empty_file_digest());
            }
            // Small input, a single (possibly partial) group.
            return reduce_root(group, &mut hasher);
        }

        if !group.is_empty() {
            group_roots.push(reduce_root(group, &mut hasher)?);
        }
        reduce_root(group_roots, &mut hasher)
    }
}

impl Default for SequentialHasher {
    fn default() -> Self {
        Self::new(TthConfig::default())
    }
}

/// Fills `buf` with up to one leaf of data, tolerating short reads.
///
/// Returns the number of bytes read; 0 means end of input at a leaf
/// boundary.
fn read_leaf<R: Read>(reader: &mut R, buf: &mut [u8; LEAF_SIZE]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < LEAF_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::tree::{internal_digest, leaf_digest};

    fn root_of(data: &[u8]) -> TthDigest {
        SequentialHasher::default()
            .hash_reader(Cursor::new(data))
            .unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(root_of(b""), empty_file_digest());
    }

    #[test]
    fn test_sub_leaf_input_root_is_its_leaf_digest() {
        let data = b"shorter than a leaf";
        assert_eq!(root_of(data), leaf_digest(data));
    }

    #[test]
    fn test_exact_leaf_input_has_no_internal_node() {
        let data = vec![0x41u8; LEAF_SIZE];
        assert_eq!(root_of(&data), leaf_digest(&data));
    }

    #[test]
    fn test_two_leaf_input() {
        let data: Vec<u8> = (0..2 * LEAF_SIZE).map(|i| (i % 251) as u8).collect();
        let expected = internal_digest(
            &leaf_digest(&data[..LEAF_SIZE]),
            &leaf_digest(&data[LEAF_SIZE..]),
        );
        assert_eq!(root_of(&data), expected);
    }

    #[test]
    fn test_three_leaf_input_promotes_the_odd_leaf() {
        // 2 * LEAF_SIZE + 1 bytes: three leaves, the last one byte long.
        let data: Vec<u8> = (0..2 * LEAF_SIZE + 1).map(|i| (i % 251) as u8).collect();
        let expected = internal_digest(
            &internal_digest(
                &leaf_digest(&data[..LEAF_SIZE]),
                &leaf_digest(&data[LEAF_SIZE..2 * LEAF_SIZE]),
            ),
            &leaf_digest(&data[2 * LEAF_SIZE..]),
        );
        assert_eq!(root_of(&data), expected);
    }

    #[test]
    fn test_known_thex_vectors() {
        // Test vectors from the THEX draft.
        assert_eq!(
            root_of(b"").to_base32(),
            "LWPNACQDBZRYXW3VHJVCJ64QBZNGHOHHHZWCLNQ"
        );
        assert_eq!(
            root_of(&[0u8]).to_base32(),
            "VK54ZIEEVTWNAUI5D5RDFIL37LX2IQNSTAXFKSA"
        );
        assert_eq!(
            root_of(&vec![b'A'; 1024]).to_base32(),
            "L66Q4YVNAFWVS23X2HJIRA5ZJ7WXR3F26RSASFA"
        );
        assert_eq!(
            root_of(&vec![b'A'; 1025]).to_base32(),
            "PZMRYHGY6LTBEH63ZWAHDORHSYTLO4LEFUIKHWY"
        );
    }

    #[test]
    fn test_group_size_does_not_change_the_root() {
        // Spans one group exactly, one group plus a leaf, and several groups.
        for leaves in [128usize, 129, 300] {
            let data: Vec<u8> = (0..leaves * LEAF_SIZE - 13)
                .map(|i| (i * 7 + 13) as u8)
                .collect();
            let reference = root_of(&data);
            for group_size in [1usize, 2, 16, 256] {
                let config = TthConfig::default().with_group_size(group_size);
                let root = SequentialHasher::new(config)
                    .hash_reader(Cursor::new(&data))
                    .unwrap();
                assert_eq!(root, reference, "group_size={group_size} leaves={leaves}");
            }
        }
    }

    #[test]
    fn test_read_granularity_does_not_change_the_root() {
        // A reader that dribbles out a few bytes per call must produce the
        // same root as a single contiguous read.
        struct Dribble<'a>(&'a [u8]);
        impl Read for Dribble<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                let n = self.0.len().min(buf.len()).min(3);
                buf[..n].copy_from_slice(&self.0[..n]);
                self.0 = &self.0[n..];
                Ok(n)
            }
        }

        let data: Vec<u8> = (0..3 * LEAF_SIZE + 100).map(|i| (i % 253) as u8).collect();
        let hasher = SequentialHasher::default();
        let dribbled = hasher.hash_reader(Dribble(&data)).unwrap();
        assert_eq!(dribbled, root_of(&data));
    }

    #[test]
    fn test_read_error_aborts() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let result = SequentialHasher::default().hash_reader(Failing);
        assert!(matches!(result, Err(TthError::Io(_))));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = SequentialHasher::default().hash_file("/no/such/file/anywhere");
        assert!(matches!(result, Err(TthError::NotFound(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let hasher = SequentialHasher::new(TthConfig::default().with_group_size(3));
        let result = hasher.hash_reader(Cursor::new(b"data"));
        assert!(matches!(result, Err(TthError::InvalidConfig { .. })));
    }
}
