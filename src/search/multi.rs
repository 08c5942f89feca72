use super::{find_path, Heuristic};
use crate::{Path, WeightedGraph};

use hashbrown::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Searches Paths from `start` to several goals at once.
///
/// Every goal gets its own [`find_path`] run against the shared Graph. With the `parallel`
/// feature (on by default) the runs are spread over the rayon thread pool.
///
/// ## Examples
/// ```
/// use waypoint_pathfinding::{prelude::*, WeightedGraph};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("entrance", "hall", 1.0).unwrap();
/// graph.add_edge("hall", "lab", 2.0).unwrap();
/// graph.add_node("basement");
///
/// let paths = find_paths(&graph, "entrance", &["lab", "basement"], &ZeroHeuristic);
///
/// // if the Goal is reachable, the Path is added to the Map
/// assert_eq!(paths["lab"].cost(), 3.0);
/// // if the Goal is not reachable, there won't be an entry in the Map
/// assert!(!paths.contains_key("basement"));
/// ```
///
/// ## Returns
/// a HashMap with all reachable goals as the Key and the cheapest Path to that goal as Value.
pub fn find_paths<G, H>(
    graph: &WeightedGraph,
    start: &str,
    goals: &[G],
    heuristic: &H,
) -> HashMap<String, Path>
where
    G: AsRef<str> + Sync,
    H: Heuristic + Sync + ?Sized,
{
    #[cfg(feature = "parallel")]
    let goals = goals.par_iter();
    #[cfg(not(feature = "parallel"))]
    let goals = goals.iter();

    goals
        .filter_map(|goal| {
            let goal = goal.as_ref();
            find_path(graph, start, goal, heuristic).map(|path| (goal.to_owned(), path))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ZeroHeuristic;

    #[test]
    fn matches_single_searches() {
        let mut graph = WeightedGraph::new();
        for i in 0..20 {
            let weight = 1.0 + (i % 3) as f64;
            graph
                .add_edge(&i.to_string(), &(i + 1).to_string(), weight)
                .unwrap();
        }
        graph.add_edge("0", "10", 4.0).unwrap();
        graph.add_node("island");

        let goals: Vec<String> = (0..=20)
            .map(|i| i.to_string())
            .chain(Some("island".into()))
            .collect();
        let paths = find_paths(&graph, "0", &goals, &ZeroHeuristic);

        assert_eq!(paths.len(), 21);
        for goal in goals.iter().filter(|goal| *goal != "island") {
            assert_eq!(
                Some(&paths[goal.as_str()]),
                find_path(&graph, "0", goal, &ZeroHeuristic).as_ref()
            );
        }
        assert_eq!(paths["0"], vec!["0"]);
    }

    #[test]
    fn duplicate_goals() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 1.0).unwrap();

        let paths = find_paths(&graph, "a", &["b", "b"], &ZeroHeuristic);
        assert_eq!(paths.len(), 1);
    }
}
