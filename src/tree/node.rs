//! Domain-tagged node hashing.
//!
//! A single prefix byte separates the two hash domains: leaves are hashed
//! as `Tiger(0x00 || bytes)`, internal nodes as `Tiger(0x01 || left || right)`.
//! Without the tag, a crafted leaf containing two child digests would
//! collide with its parent.

use crate::digest::TthDigest;
use crate::hash::TigerHasher;

/// Prefix byte for leaf-level digests.
const LEAF_TAG: u8 = 0x00;

/// Prefix byte for internal-node digests.
const INTERNAL_TAG: u8 = 0x01;

/// A reusable tagged-node hasher.
///
/// Holds one Tiger instance and resets it between digests, so the hot
/// loops of both engines hash every leaf and node without re-instantiating
/// the primitive.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeHasher {
    inner: TigerHasher,
}

impl NodeHasher {
    pub fn new() -> Self {
        Self {
            inner: TigerHasher::new(),
        }
    }

    /// Digest of one leaf: `Tiger(0x00 || bytes)`.
    pub fn leaf(&mut self, bytes: &[u8]) -> TthDigest {
        self.inner.update(&[LEAF_TAG]);
        self.inner.update(bytes);
        self.inner.finalize_reset()
    }

    /// Digest of an internal node: `Tiger(0x01 || left || right)`.
    ///
    /// `left` must be the earlier-offset child; the combination is not
    /// commutative.
    pub fn internal(&mut self, left: &TthDigest, right: &TthDigest) -> TthDigest {
        self.inner.update(&[INTERNAL_TAG]);
        self.inner.update(left.as_bytes());
        self.inner.update(right.as_bytes());
        self.inner.finalize_reset()
    }
}

/// Computes the digest of one leaf of file content.
///
/// `bytes` is a full 1024-byte leaf or the shorter final leaf of the file.
/// Empty input is reserved for the zero-length-file encoding; use
/// [`empty_file_digest`] for that case.
pub fn leaf_digest(bytes: &[u8]) -> TthDigest {
    NodeHasher::new().leaf(bytes)
}

/// Combines two child digests into their parent digest.
///
/// `left` is always the earlier-offset node.
pub fn internal_digest(left: &TthDigest, right: &TthDigest) -> TthDigest {
    NodeHasher::new().internal(left, right)
}

/// Root digest of a zero-length file.
///
/// The reserved one-leaf encoding: the leaf rule applied to empty content,
/// i.e. Tiger over the single tag byte `0x00`.
pub fn empty_file_digest() -> TthDigest {
    leaf_digest(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::TigerHasher;

    #[test]
    fn test_empty_file_digest_known_value() {
        // THEX test vector: the zero-length file.
        assert_eq!(
            empty_file_digest().to_base32(),
            "LWPNACQDBZRYXW3VHJVCJ64QBZNGHOHHHZWCLNQ"
        );
    }

    #[test]
    fn test_single_zero_byte_leaf_known_value() {
        // THEX test vector: a file with a single zero byte.
        assert_eq!(
            leaf_digest(&[0u8]).to_base32(),
            "VK54ZIEEVTWNAUI5D5RDFIL37LX2IQNSTAXFKSA"
        );
    }

    #[test]
    fn test_leaf_tag_separates_domains() {
        // A leaf digest is not the raw Tiger of the same bytes.
        let data = b"some leaf content";
        assert_ne!(leaf_digest(data), TigerHasher::hash(data));
    }

    #[test]
    fn test_internal_digest_is_order_sensitive() {
        let a = leaf_digest(b"a");
        let b = leaf_digest(b"b");
        assert_ne!(internal_digest(&a, &b), internal_digest(&b, &a));
    }

    #[test]
    fn test_internal_tag_separates_levels() {
        // Hashing the concatenated children as a leaf must not collide
        // with the internal-node digest.
        let a = leaf_digest(b"a");
        let b = leaf_digest(b"b");
        let mut concat = Vec::new();
        concat.extend_from_slice(a.as_bytes());
        concat.extend_from_slice(b.as_bytes());
        assert_ne!(internal_digest(&a, &b), leaf_digest(&concat));
    }

    #[test]
    fn test_reusable_hasher_matches_free_functions() {
        let mut hasher = NodeHasher::new();
        let a = hasher.leaf(b"left leaf");
        let b = hasher.leaf(b"right leaf");
        let parent = hasher.internal(&a, &b);

        assert_eq!(a, leaf_digest(b"left leaf"));
        assert_eq!(b, leaf_digest(b"right leaf"));
        assert_eq!(parent, internal_digest(&a, &b));
    }
}
