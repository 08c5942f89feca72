use super::{NodeIdx, Vertex};
use crate::{document, Cost, GraphError, Result};

use hashbrown::HashMap;
use log::debug;
use slab::Slab;

/// A Map from Waypoint identifiers to their weighted neighbors.
///
/// Identifiers are opaque Strings compared exactly. A Node may be declared without any edges
/// (an isolated Node) or only exist because an edge mentions it; both are queryable.
///
/// Arcs are stored in the direction they were added. [`find_path`](crate::search::find_path)
/// expects an undirected Graph, which is what [`symmetrize`](WeightedGraph::symmetrize) (or
/// [`add_edge`](WeightedGraph::add_edge) and [`from_document`](WeightedGraph::from_document))
/// produce.
///
/// Neighbors are kept in insertion order, so a search over the same Graph always visits them
/// in the same order.
///
/// ## Examples
/// ```
/// use waypoint_pathfinding::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("lobby", "stairs", 4.0).unwrap();
/// graph.add_node("storage");
///
/// assert_eq!(graph.weight("stairs", "lobby"), Some(4.0));
/// assert_eq!(graph.neighbors("storage").count(), 0);
/// assert!(graph.is_symmetric());
/// ```
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    vertices: Slab<Vertex>,
    index: HashMap<String, NodeIdx>,
}

impl WeightedGraph {
    /// Creates an empty Graph
    pub fn new() -> WeightedGraph {
        WeightedGraph::default()
    }

    /// Creates an empty Graph with room for `capacity` Nodes
    pub fn with_capacity(capacity: usize) -> WeightedGraph {
        WeightedGraph {
            vertices: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Parses a GraphML document and makes the result undirected.
    ///
    /// Shorthand for [`parse_graph`](crate::document::parse_graph) followed by
    /// [`symmetrize`](WeightedGraph::symmetrize).
    ///
    /// ## Examples
    /// ```
    /// use waypoint_pathfinding::WeightedGraph;
    ///
    /// let graph = WeightedGraph::from_document(br#"
    ///     <graphml><graph>
    ///         <edge source="a" target="b" weight="2.5"/>
    ///     </graph></graphml>
    /// "#).unwrap();
    ///
    /// assert_eq!(graph.weight("b", "a"), Some(2.5));
    /// ```
    pub fn from_document(bytes: &[u8]) -> Result<WeightedGraph> {
        let mut graph = document::parse_graph(bytes)?;
        graph.symmetrize();
        Ok(graph)
    }

    /// Registers a Node without any neighbors. Does nothing if the Node already exists.
    pub fn add_node(&mut self, id: &str) -> &mut Self {
        self.intern(id);
        self
    }

    /// Adds the arc `from -> to`, creating both Nodes if necessary.
    ///
    /// An existing arc between the two keeps its position and gets the new weight.
    ///
    /// ## Errors
    /// [`GraphError::InvalidWeight`] if `weight` is negative or not finite.
    pub fn add_arc(&mut self, from: &str, to: &str, weight: Cost) -> Result<()> {
        check_weight(from, to, weight)?;
        let from = self.intern(from);
        let to = self.intern(to);
        self.vertices[from].set_weight(to, weight);
        Ok(())
    }

    /// Adds the undirected edge `a <-> b`, i.e. both arcs with the same weight.
    ///
    /// ## Errors
    /// [`GraphError::InvalidWeight`] if `weight` is negative or not finite.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Cost) -> Result<()> {
        check_weight(a, b, weight)?;
        let a = self.intern(a);
        let b = self.intern(b);
        self.link(a, b, weight);
        Ok(())
    }

    /// Removes the arcs in both directions between `a` and `b`.
    ///
    /// Returns the weight of `a -> b`, or of `b -> a` if only that one existed.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Option<Cost> {
        let (a, b) = (self.idx(a)?, self.idx(b)?);
        let forward = self.vertices[a].remove_edge(b);
        let backward = self.vertices[b].remove_edge(a);
        forward.or(backward)
    }

    /// Removes a Node and every arc pointing to or from it.
    ///
    /// Returns `false` if the Node did not exist.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(idx) = self.index.remove(id) else {
            return false;
        };
        self.vertices.remove(idx);
        for (_, vertex) in self.vertices.iter_mut() {
            vertex.remove_edge(idx);
        }
        true
    }

    /// `true` if the Node was declared or is the endpoint of an arc
    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The outgoing arcs of a Node as `(neighbor, weight)`, in insertion order.
    ///
    /// Unknown Nodes have no neighbors.
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, Cost)> + 'a {
        self.index.get(id).into_iter().flat_map(move |&idx| {
            self.vertices[idx]
                .edges
                .iter()
                .map(move |&(other, cost)| (self.vertices[other].id.as_str(), cost))
        })
    }

    /// The weight of the arc `from -> to`, if there is one
    pub fn weight(&self, from: &str, to: &str) -> Option<Cost> {
        self.vertices[self.idx(from)?].weight_to(self.idx(to)?)
    }

    /// All Node identifiers in storage order.
    ///
    /// That is the order they were first seen, until [`remove_node`](WeightedGraph::remove_node)
    /// frees a slot: later Nodes fill freed slots before being appended.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|(_, vertex)| vertex.id.as_str())
    }

    /// The number of Nodes
    pub fn node_count(&self) -> usize {
        self.vertices.len()
    }

    /// The number of directed arcs. An undirected edge counts twice, a self-loop once.
    pub fn arc_count(&self) -> usize {
        self.vertices.iter().map(|(_, vertex)| vertex.edges.len()).sum()
    }

    /// `true` if there are no Nodes
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Makes the Graph undirected: for every arc `a -> b` with weight `w`, `b -> a` gets
    /// weight `w` as well.
    ///
    /// Isolated Nodes are kept. If both directions already exist with different weights, the
    /// arcs are replayed in storage order (Nodes as listed by [`nodes`](WeightedGraph::nodes),
    /// then each Node's arcs in insertion order) and the last one replayed sets the weight of
    /// both.
    /// Calling this on an undirected Graph does not change it.
    ///
    /// ## Examples
    /// ```
    /// use waypoint_pathfinding::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// graph.add_arc("a", "b", 2.0).unwrap();
    /// assert!(!graph.is_symmetric());
    ///
    /// graph.symmetrize();
    /// assert_eq!(graph.weight("b", "a"), Some(2.0));
    /// assert!(graph.is_symmetric());
    /// ```
    pub fn symmetrize(&mut self) {
        let mut undirected = WeightedGraph::with_capacity(self.node_count());
        for (_, vertex) in self.vertices.iter() {
            undirected.intern(&vertex.id);
        }
        for (_, vertex) in self.vertices.iter() {
            let a = undirected.intern(&vertex.id);
            for &(other, cost) in vertex.edges.iter() {
                let b = undirected.intern(&self.vertices[other].id);
                undirected.link(a, b, cost);
            }
        }
        debug!(
            "symmetrized graph: {} nodes, {} -> {} arcs",
            undirected.node_count(),
            self.arc_count(),
            undirected.arc_count()
        );
        *self = undirected;
    }

    /// `true` if every arc `a -> b` has a reverse arc `b -> a` with the same weight
    pub fn is_symmetric(&self) -> bool {
        self.vertices.iter().all(|(idx, vertex)| {
            vertex
                .edges
                .iter()
                .all(|&(other, cost)| self.vertices[other].weight_to(idx) == Some(cost))
        })
    }

    pub(crate) fn idx(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub(crate) fn id(&self, idx: NodeIdx) -> &str {
        &self.vertices[idx].id
    }

    pub(crate) fn edges(&self, idx: NodeIdx) -> &[(NodeIdx, Cost)] {
        &self.vertices[idx].edges
    }

    fn intern(&mut self, id: &str) -> NodeIdx {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.vertices.insert(Vertex::new(id.to_owned()));
        self.index.insert(id.to_owned(), idx);
        idx
    }

    fn link(&mut self, a: NodeIdx, b: NodeIdx, cost: Cost) {
        self.vertices[a].set_weight(b, cost);
        self.vertices[b].set_weight(a, cost);
    }
}

fn check_weight(from: &str, to: &str, weight: Cost) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight {
            from: from.to_owned(),
            to: to.to_owned(),
            weight: weight.to_string(),
        })
    }
}

/// Graphs are equal if they contain the same Nodes and arcs, regardless of insertion order.
impl PartialEq for WeightedGraph {
    fn eq(&self, other: &WeightedGraph) -> bool {
        self.node_count() == other.node_count()
            && self.arc_count() == other.arc_count()
            && self.vertices.iter().all(|(_, vertex)| {
                other.contains_node(&vertex.id)
                    && vertex.edges.iter().all(|&(to, cost)| {
                        other.weight(&vertex.id, self.id(to)) == Some(cost)
                    })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_neighbors(graph: &WeightedGraph, id: &str) -> Vec<(String, Cost)> {
        let mut ret: Vec<_> = graph
            .neighbors(id)
            .map(|(other, cost)| (other.to_owned(), cost))
            .collect();
        ret.sort_by(|a, b| a.0.cmp(&b.0));
        ret
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = WeightedGraph::new();
        graph.add_node("a").add_node("a").add_node("b");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn arcs_create_implicit_nodes() {
        let mut graph = WeightedGraph::new();
        graph.add_arc("a", "b", 1.0).unwrap();

        assert!(graph.contains_node("b"));
        assert_eq!(graph.neighbors("b").count(), 0);
        assert_eq!(graph.weight("a", "b"), Some(1.0));
        assert_eq!(graph.weight("b", "a"), None);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let graph = WeightedGraph::new();
        assert_eq!(graph.neighbors("nowhere").count(), 0);
        assert_eq!(graph.weight("nowhere", "else"), None);
    }

    #[test]
    fn rejects_invalid_weights() {
        let mut graph = WeightedGraph::new();

        let err = graph.add_edge("a", "b", -1.0).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidWeight {
                from: "a".into(),
                to: "b".into(),
                weight: "-1".into()
            }
        );
        assert!(graph.add_arc("a", "b", Cost::NAN).is_err());
        assert!(graph.add_arc("a", "b", Cost::INFINITY).is_err());

        // nothing was inserted by the failed calls
        assert!(graph.is_empty());
    }

    #[test]
    fn zero_weight_is_valid() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 0.0).unwrap();
        assert_eq!(graph.weight("b", "a"), Some(0.0));
    }

    #[test]
    fn overwriting_keeps_order() {
        let mut graph = WeightedGraph::new();
        graph.add_arc("a", "b", 1.0).unwrap();
        graph.add_arc("a", "c", 1.0).unwrap();
        graph.add_arc("a", "b", 7.0).unwrap();

        let neighbors: Vec<_> = graph.neighbors("a").collect();
        assert_eq!(neighbors, vec![("b", 7.0), ("c", 1.0)]);
        assert_eq!(graph.arc_count(), 2);
    }

    #[test]
    fn symmetrize_adds_reverse_arcs() {
        let mut graph = WeightedGraph::new();
        graph.add_node("isolated");
        graph.add_arc("a", "b", 2.0).unwrap();
        graph.add_arc("b", "c", 3.0).unwrap();
        graph.add_arc("c", "c", 1.0).unwrap();

        graph.symmetrize();

        assert!(graph.is_symmetric());
        assert_eq!(graph.node_count(), 4);
        assert!(graph.contains_node("isolated"));
        assert_eq!(sorted_neighbors(&graph, "b"), vec![("a".to_owned(), 2.0), ("c".to_owned(), 3.0)]);
        assert_eq!(graph.weight("c", "c"), Some(1.0));
        assert_eq!(graph.arc_count(), 5);
    }

    #[test]
    fn symmetrize_is_idempotent() {
        let mut graph = WeightedGraph::new();
        graph.add_arc("a", "b", 2.0).unwrap();
        graph.add_arc("c", "a", 4.0).unwrap();
        graph.add_arc("b", "d", 1.5).unwrap();
        graph.add_node("e");

        graph.symmetrize();
        let once = graph.clone();
        graph.symmetrize();

        assert_eq!(graph, once);
        assert_eq!(
            graph.nodes().collect::<Vec<_>>(),
            once.nodes().collect::<Vec<_>>()
        );
    }

    #[test]
    fn symmetrize_conflict_last_arc_wins() {
        let mut graph = WeightedGraph::new();
        graph.add_arc("a", "b", 1.0).unwrap();
        graph.add_arc("b", "a", 5.0).unwrap();

        graph.symmetrize();

        // "b" is stored after "a", so its arc is replayed last
        assert_eq!(graph.weight("a", "b"), Some(5.0));
        assert_eq!(graph.weight("b", "a"), Some(5.0));
    }

    #[test]
    fn remove_edge_both_directions() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 3.0).unwrap();

        assert_eq!(graph.remove_edge("b", "a"), Some(3.0));
        assert_eq!(graph.arc_count(), 0);
        assert_eq!(graph.remove_edge("a", "b"), None);
        assert_eq!(graph.remove_edge("a", "missing"), None);
    }

    #[test]
    fn remove_node_drops_incoming_arcs() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 1.0).unwrap();
        graph.add_edge("b", "c", 1.0).unwrap();
        graph.add_arc("a", "c", 1.0).unwrap();

        assert!(graph.remove_node("c"));
        assert!(!graph.remove_node("c"));

        assert!(!graph.contains_node("c"));
        assert_eq!(sorted_neighbors(&graph, "a"), vec![("b".to_owned(), 1.0)]);
        assert_eq!(sorted_neighbors(&graph, "b"), vec![("a".to_owned(), 1.0)]);

        // the freed slot is reused without mixing up identifiers
        graph.add_edge("d", "a", 2.0).unwrap();
        assert_eq!(graph.weight("a", "d"), Some(2.0));
        assert_eq!(graph.weight("a", "c"), None);
    }

    #[test]
    fn removed_slots_are_refilled() {
        let mut graph = WeightedGraph::new();
        graph.add_node("a").add_node("b").add_node("c");
        graph.remove_node("a");
        graph.add_arc("d", "b", 1.0).unwrap();
        graph.add_arc("b", "d", 4.0).unwrap();

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["d", "b", "c"]);

        // "d" took the first slot, so the arc of "b" is replayed last
        graph.symmetrize();
        assert_eq!(graph.weight("d", "b"), Some(4.0));
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["d", "b", "c"]);
    }

    #[test]
    fn equality_ignores_order() {
        let mut first = WeightedGraph::new();
        first.add_edge("a", "b", 1.0).unwrap();
        first.add_edge("b", "c", 2.0).unwrap();

        let mut second = WeightedGraph::new();
        second.add_edge("c", "b", 2.0).unwrap();
        second.add_edge("b", "a", 1.0).unwrap();

        assert_eq!(first, second);

        second.add_node("d");
        assert_ne!(first, second);
    }
}
