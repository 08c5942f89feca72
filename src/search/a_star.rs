use super::{Heuristic, OpenSet};
use crate::graph::{NodeIdx, NodeIdxSet};
use crate::{Cost, Path, WeightedGraph};

use log::{debug, trace};

/// A candidate Path to `node`, stored in the arena of a single search.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    node: NodeIdx,
    g: Cost,
    h: Cost,
    /// handle of the search node this one was reached from
    parent: Option<usize>,
}

impl SearchNode {
    fn f(&self) -> Cost {
        self.g + self.h
    }
}

/// Searches `graph` for the cheapest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Graph is expected to be undirected (see [`WeightedGraph::symmetrize`]); arcs are
/// followed in the direction they are stored. Neither `start` nor `goal` have to be part of
/// the Graph: an unknown identifier is treated as a Node without neighbors.
///
/// ## Ties
/// When several open Nodes have the same estimated total Cost, the one with the lower
/// Heuristic value is expanded first, then the one that was discovered first. Neighbors are
/// discovered in the order the Graph stores them, so equal inputs always give equal Paths.
///
/// ## Closed Nodes
/// A Node is never expanded twice. If an inconsistent Heuristic causes a Node to be expanded
/// before its cheapest Path is known, the cheaper Path found later is ignored.
///
/// ## Examples
/// ```
/// use waypoint_pathfinding::{prelude::*, WeightedGraph};
///
/// // A--2--B--3--C
/// //  \         /
/// //   ----9----
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("A", "B", 2.0).unwrap();
/// graph.add_edge("B", "C", 3.0).unwrap();
/// graph.add_edge("A", "C", 9.0).unwrap();
/// graph.add_node("D");
///
/// let path = find_path(&graph, "A", "C", &ZeroHeuristic).unwrap();
/// assert_eq!(path, vec!["A", "B", "C"]);
/// assert_eq!(path.cost(), 5.0);
///
/// assert_eq!(find_path(&graph, "A", "D", &ZeroHeuristic), None);
/// ```
///
/// ## Returns
/// the Path, if one was found, or None if the `goal` is unreachable.
/// The first Node in the Path is always the `start` and the last is the `goal`. If
/// `start == goal`, the Path contains only that Node and costs nothing.
pub fn find_path<H: Heuristic + ?Sized>(
    graph: &WeightedGraph,
    start: &str,
    goal: &str,
    heuristic: &H,
) -> Option<Path> {
    if start == goal {
        return Some(Path::new(vec![start.to_owned()], 0.0));
    }
    let (Some(start_idx), Some(goal_idx)) = (graph.idx(start), graph.idx(goal)) else {
        debug!("no path from `{}` to `{}`: not part of the graph", start, goal);
        return None;
    };

    let size_hint = graph.node_count();
    let mut arena = Vec::with_capacity(size_hint);
    let mut open = OpenSet::with_capacity(size_hint);
    let mut closed = NodeIdxSet::with_capacity_and_hasher(size_hint, Default::default());

    let h = heuristic.estimate(start, goal);
    arena.push(SearchNode {
        node: start_idx,
        g: 0.0,
        h,
        parent: None,
    });
    open.push(start_idx, 0, 0.0, h);

    while let Some(current) = open.pop() {
        let SearchNode { node, g, .. } = arena[current];
        if node == goal_idx {
            let path = reconstruct(graph, &arena, current);
            debug!(
                "found path from `{}` to `{}` after expanding {} nodes: {}",
                start,
                goal,
                closed.len(),
                path
            );
            return Some(path);
        }
        closed.insert(node);
        trace!(
            "expanding `{}` (g = {}, f = {})",
            graph.id(node),
            g,
            arena[current].f()
        );

        for &(other, cost) in graph.edges(node) {
            if closed.contains(&other) {
                continue;
            }
            let other_g = g + cost;
            if open.g_of(other).map_or(false, |prev_g| prev_g <= other_g) {
                continue;
            }
            let h = heuristic.estimate(graph.id(other), goal);
            let handle = arena.len();
            arena.push(SearchNode {
                node: other,
                g: other_g,
                h,
                parent: Some(current),
            });
            open.push(other, handle, other_g, h);
        }
    }

    debug!(
        "no path from `{}` to `{}` after expanding {} nodes",
        start,
        goal,
        closed.len()
    );
    None
}

/// follows the parents from `goal` back to the start
fn reconstruct(graph: &WeightedGraph, arena: &[SearchNode], goal: usize) -> Path {
    let mut steps = vec![];
    let mut current = Some(goal);
    while let Some(handle) = current {
        let search_node = &arena[handle];
        steps.push(graph.id(search_node.node).to_owned());
        current = search_node.parent;
    }
    steps.reverse();
    Path::new(steps, arena[goal].g)
}
