use crate::Cost;

/// Estimates the remaining Cost from a Node to the goal of a search.
///
/// A* only guarantees the cheapest Path if the Heuristic is admissible, that is, it never
/// returns more than the actual Cost of the cheapest Path from `node` to `goal`. The estimate
/// must also be non-negative and must not change during a search.
///
/// If there is no proper way of estimating the Cost, use [`ZeroHeuristic`]. This turns the
/// search into Dijkstra's Algorithm: slower, but always correct.
///
/// Any `Fn(&str, &str) -> Cost` is a Heuristic:
/// ```
/// use waypoint_pathfinding::{prelude::*, Cost};
///
/// // how many floors apart two rooms are, for identifiers like "3.12"
/// let floors = |node: &str, goal: &str| -> Cost {
///     let floor = |id: &str| id.split('.').next().and_then(|f| f.parse::<f64>().ok());
///     match (floor(node), floor(goal)) {
///         (Some(a), Some(b)) => (a - b).abs(),
///         _ => 0.0,
///     }
/// };
/// assert_eq!(floors.estimate("3.12", "1.04"), 2.0);
/// assert_eq!(ZeroHeuristic.estimate("3.12", "1.04"), 0.0);
/// ```
pub trait Heuristic {
    /// the estimated Cost of getting from `node` to `goal`
    fn estimate(&self, node: &str, goal: &str) -> Cost;
}

impl<F: Fn(&str, &str) -> Cost> Heuristic for F {
    fn estimate(&self, node: &str, goal: &str) -> Cost {
        self(node, goal)
    }
}

/// The Heuristic that always estimates `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _: &str, _: &str) -> Cost {
        0.0
    }
}
