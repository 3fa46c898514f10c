//! Merkle root computation over fixed-size leaves with an injected hasher.
//!
//! Behavior:
//! - An empty leaf list yields an all-zero root of `hash_size` bytes.
//! - An odd leaf count is padded once, at construction, by duplicating the
//!   last leaf; the padded list is visible through `leaves()`.
//! - The root is computed once at construction and cached; later mutation
//!   through `leaves_mut()` does not trigger recomputation.

use crate::types::bytes::Bytes;
use sha3::{Digest, Sha3_256};

/// Width of SHA3-256 output, the default leaf size.
pub const DEFAULT_HASH_SIZE: usize = 32;

/// SHA3-256 node hash, the default for 32-byte trees.
pub fn sha3_node_hash(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Merkle tree reducing an ordered leaf list to a single cached root.
///
/// The node hash is injected as any `Fn(&[u8]) -> Vec<u8>`; it is applied to
/// the concatenation of two nodes during reduction and is expected to return
/// `hash_size` bytes. Neither the hasher output nor the leaf sizes are
/// validated — a mismatched hasher produces a structurally valid but
/// meaningless tree.
pub struct MerkleTree<H = fn(&[u8]) -> Vec<u8>>
where
    H: Fn(&[u8]) -> Vec<u8>,
{
    leaves: Vec<Bytes>,
    hasher: H,
    hash_size: usize,
    root: Bytes,
}

impl MerkleTree {
    /// Builds a SHA3-256 tree over 32-byte leaves.
    pub fn sha3(leaves: Vec<Bytes>) -> Self {
        Self::new(leaves, sha3_node_hash as fn(&[u8]) -> Vec<u8>)
    }
}

impl<H> MerkleTree<H>
where
    H: Fn(&[u8]) -> Vec<u8>,
{
    /// Builds a tree with the default 32-byte hash width.
    pub fn new(leaves: Vec<Bytes>, hasher: H) -> Self {
        Self::with_hash_size(leaves, hasher, DEFAULT_HASH_SIZE)
    }

    /// Builds a tree over `hash_size`-byte leaves.
    ///
    /// Pads an odd leaf count to even and computes the root immediately.
    pub fn with_hash_size(mut leaves: Vec<Bytes>, hasher: H, hash_size: usize) -> Self {
        pad_to_even(&mut leaves);
        let root = compute_merkle_root(&leaves, &hasher, hash_size);
        Self {
            leaves,
            hasher,
            hash_size,
            root,
        }
    }

    /// The cached root.
    ///
    /// Computed once at construction. Mutating the leaf list afterwards
    /// through [`leaves_mut`](Self::leaves_mut) does NOT recompute it.
    pub fn root(&self) -> &Bytes {
        &self.root
    }

    /// The leaf list, including the duplicate appended for odd counts.
    pub fn leaves(&self) -> &[Bytes] {
        &self.leaves
    }

    /// Mutable access to the leaf list.
    ///
    /// The cached root is not invalidated by mutation; `root()` keeps
    /// returning the value computed at construction.
    pub fn leaves_mut(&mut self) -> &mut Vec<Bytes> {
        &mut self.leaves
    }

    /// Width in bytes of the leaves and of the root.
    pub fn hash_size(&self) -> usize {
        self.hash_size
    }

    /// The injected node hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

/// Appends a duplicate of the last leaf when the count is odd.
fn pad_to_even(leaves: &mut Vec<Bytes>) {
    if leaves.len() % 2 == 1 {
        let last = leaves[leaves.len() - 1].clone();
        leaves.push(last);
    }
}

/// Reduces the leaf list to a root on a working copy.
///
/// Each level pairs nodes left to right and replaces the pair with
/// `hasher(left ++ right)`, in place with read/write indices. A level with
/// an odd node count carries its first node up unpaired.
fn compute_merkle_root<H>(leaves: &[Bytes], hasher: &H, hash_size: usize) -> Bytes
where
    H: Fn(&[u8]) -> Vec<u8>,
{
    if leaves.is_empty() {
        return Bytes::zeroed(hash_size);
    }

    let mut nodes = leaves.to_vec();
    let mut len = nodes.len();

    while len > 1 {
        let unpaired = len % 2;
        let mut write = unpaired;
        let mut read = unpaired;

        while read < len {
            let left = &nodes[read];
            let right = &nodes[read + 1];

            let mut pair = Vec::with_capacity(left.len() + right.len());
            pair.extend_from_slice(left);
            pair.extend_from_slice(right);

            nodes[write] = Bytes::from_vec(hasher(&pair));

            write += 1;
            read += 2;
        }

        len = write;
    }

    nodes[0].clone()
}
