#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path between two Waypoints of an indoor Map.
//!
//! ## Introduction
//! Indoor Maps are described as a Graph: every Waypoint (a room, a door, a corner of a
//! corridor, ...) is a Node with a unique name, and every walkable connection between two of
//! them is an Edge with a Cost, usually its length. Such Graphs are commonly exchanged as
//! [GraphML](http://graphml.graphdrawing.org/) documents, where only two elements matter:
//! ```xml
//! <node id="STRING"/>
//! <edge source="STRING" target="STRING" weight="NUMBER"/>
//! ```
//! This crate reads such a document into a [`WeightedGraph`] (see [`document`]) and searches
//! it with the A* Algorithm (see [`search`]). The result is the sequence of Waypoint names from
//! the start to the goal, which can then be drawn by whatever displays the Map.
//!
//! Edges are walkable in both directions, no matter which of the two Nodes is written as the
//! `source`. Weights that are left out (or are not numbers) count as `1`. Negative weights are
//! rejected, since a cheapest Path is not well-defined with them.
//!
//! ## Examples
//! Finding a Path in a document in one go:
//! ```
//! use waypoint_pathfinding::route;
//!
//! let document = br#"
//!     <graphml>
//!         <graph edgedefault="undirected">
//!             <node id="A"/> <node id="B"/> <node id="C"/>
//!             <edge source="A" target="B" weight="2"/>
//!             <edge source="B" target="C" weight="3"/>
//!         </graph>
//!     </graphml>
//! "#;
//!
//! let path = route(document, "A", "C").unwrap().unwrap();
//!
//! assert_eq!(path, vec!["A", "B", "C"]);
//! assert_eq!(path.cost(), 5.0);
//! ```
//! [`route`] keeps the two kinds of failure apart: `Err` if the document is broken,
//! `Ok(None)` if the goal simply cannot be reached:
//! ```
//! # use waypoint_pathfinding::{route, GraphError};
//! let document = br#"<graph><node id="A"/><node id="B"/></graph>"#;
//! assert_eq!(route(document, "A", "B"), Ok(None));
//!
//! let broken = br#"<graph><node id="A"/>"#;
//! assert!(matches!(
//!     route(broken, "A", "B"),
//!     Err(GraphError::DocumentMalformed { .. })
//! ));
//! ```
//!
//! ### Reusing the Graph
//! Parsing the document is usually more expensive than a single search. When several Paths are
//! needed, build the Graph once and search it as often as necessary:
//! ```
//! use waypoint_pathfinding::{prelude::*, Cost};
//!
//! let graph = WeightedGraph::from_document(br#"
//!     <graph>
//!         <edge source="1.01" target="1.02" weight="4"/>
//!         <edge source="1.02" target="stairs-1" weight="2"/>
//!         <edge source="stairs-1" target="stairs-2" weight="6"/>
//!         <edge source="stairs-2" target="2.07" weight="3"/>
//!     </graph>
//! "#).unwrap();
//!
//! let path = find_path(&graph, "1.01", "2.07", &ZeroHeuristic).unwrap();
//! assert_eq!(path.cost(), 15.0);
//!
//! // a Heuristic speeds up the search if it never overestimates the remaining Cost
//! let changing_floors = |node: &str, goal: &str| -> Cost {
//!     if node.chars().next() == goal.chars().next() { 0.0 } else { 6.0 }
//! };
//! let back = find_path(&graph, "2.07", "1.01", &changing_floors).unwrap();
//! assert_eq!(back, path.reversed());
//!
//! let all = find_paths(&graph, "1.01", &["1.02", "2.07"], &ZeroHeuristic);
//! assert_eq!(all.len(), 2);
//! ```
//!
//! ### Configuration
//! [`parse_graph_with`](document::parse_graph_with) takes a [`ParseConfig`] to control how
//! missing or broken weights are treated:
//! ```
//! use waypoint_pathfinding::{document::parse_graph_with, GraphError, ParseConfig};
//!
//! let document = br#"<graph><edge source="A" target="B" weight="far"/></graph>"#;
//!
//! let graph = parse_graph_with(document, &ParseConfig::default()).unwrap();
//! assert_eq!(graph.weight("A", "B"), Some(1.0));
//!
//! let result = parse_graph_with(document, &ParseConfig::STRICT);
//! assert!(matches!(result, Err(GraphError::InvalidWeight { .. })));
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): [`find_paths`](search::find_paths) runs its searches on the rayon
//!   thread pool.

/// The Type used for edge weights and Path Costs
pub type Cost = f64;

mod error;
pub use self::error::{GraphError, Result};

pub mod document;
pub use self::document::ParseConfig;

pub mod graph;
pub use self::graph::WeightedGraph;

mod path;
pub use self::path::Path;

pub mod search;

/// Parses `document`, and searches the cheapest Path from `start` to `goal` in it.
///
/// Uses the default [`ParseConfig`] and the [`ZeroHeuristic`](search::ZeroHeuristic).
///
/// ## Returns
/// - `Ok(Some(path))` with the Waypoints from `start` to `goal`
/// - `Ok(None)` if `goal` cannot be reached from `start`
/// - `Err(_)` if the document could not be turned into a Graph
pub fn route(document: &[u8], start: &str, goal: &str) -> Result<Option<Path>> {
    let graph = WeightedGraph::from_document(document)?;
    Ok(search::find_path(
        &graph,
        start,
        goal,
        &search::ZeroHeuristic,
    ))
}

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        document::{parse_graph, parse_graph_with},
        route,
        search::{find_path, find_paths, Heuristic, ZeroHeuristic},
        GraphError, ParseConfig, Path, WeightedGraph,
    };
}
