//! Handles into the vertex arena and Maps keyed by them

use std::hash::{BuildHasherDefault, Hasher};

/// The Type used to reference a Vertex inside a [`WeightedGraph`](super::WeightedGraph)
pub(crate) type NodeIdx = usize;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIdx keys with a faster Hasher
pub(crate) type NodeIdxMap<V> = hashbrown::HashMap<NodeIdx, V, BuildHasherDefault<NodeIdxHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIdx keys with a faster Hasher
pub(crate) type NodeIdxSet = hashbrown::HashSet<NodeIdx, BuildHasherDefault<NodeIdxHasher>>;

/// A [`Hasher`] specialized on NodeIdx keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct NodeIdxHasher(u64);

impl Hasher for NodeIdxHasher {
    /// panics, since only NodeIdx keys are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIdx keys")
    }
    /// Writes a single NodeIdx into this hasher.
    fn write_usize(&mut self, idx: NodeIdx) {
        // hashbrown reads its control bytes from the top 7 bits, so they must not stay zero
        self.0 = (idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
    fn finish(&self) -> u64 {
        self.0
    }
}
