use crate::graph::{NodeIdx, NodeIdxMap};
use crate::Cost;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry in the heap. Greater means "expand first".
#[derive(Clone, Copy, Debug)]
struct HeuristicElement {
    f: Cost,
    h: Cost,
    discovered: usize,
    node: NodeIdx,
    handle: usize,
}

impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    /// lowest `f`, then lowest `h`, then earliest discovery
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .total_cmp(&self.f)
            .then_with(|| rhs.h.total_cmp(&self.h))
            .then_with(|| rhs.discovered.cmp(&self.discovered))
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    handle: usize,
    g: Cost,
    discovered: usize,
}

/// The Nodes that were discovered but not yet expanded.
///
/// Every Node has at most one live entry, identified by the handle of its search node.
/// Replacing an entry leaves the old one in the heap, where it is skipped when popped.
/// A Node keeps the discovery rank of its first entry when it is replaced.
#[derive(Debug)]
pub(super) struct OpenSet {
    heap: BinaryHeap<HeuristicElement>,
    live: NodeIdxMap<Slot>,
    next_rank: usize,
}

impl OpenSet {
    pub fn with_capacity(size_hint: usize) -> Self {
        OpenSet {
            heap: BinaryHeap::with_capacity(size_hint / 2),
            live: NodeIdxMap::with_capacity_and_hasher(size_hint / 2, Default::default()),
            next_rank: 0,
        }
    }

    /// the `g` of the live entry of `node`, if it is open
    pub fn g_of(&self, node: NodeIdx) -> Option<Cost> {
        self.live.get(&node).map(|slot| slot.g)
    }

    /// Inserts `node`, or replaces its current entry.
    pub fn push(&mut self, node: NodeIdx, handle: usize, g: Cost, h: Cost) {
        let discovered = match self.live.get(&node) {
            Some(slot) => slot.discovered,
            None => {
                self.next_rank += 1;
                self.next_rank - 1
            }
        };
        self.live.insert(
            node,
            Slot {
                handle,
                g,
                discovered,
            },
        );
        self.heap.push(HeuristicElement {
            f: g + h,
            h,
            discovered,
            node,
            handle,
        });
    }

    /// Removes the preferred live entry and returns its handle.
    pub fn pop(&mut self) -> Option<usize> {
        while let Some(element) = self.heap.pop() {
            let is_live = self
                .live
                .get(&element.node)
                .map_or(false, |slot| slot.handle == element.handle);
            if is_live {
                self.live.remove(&element.node);
                return Some(element.handle);
            }
        }
        None
    }
}
