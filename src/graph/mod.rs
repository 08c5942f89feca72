//! The Graph of Waypoints that is searched by [`find_path`](crate::search::find_path).

mod node_idx;
pub(crate) use node_idx::*;

mod vertex;
use vertex::Vertex;

mod weighted_graph;
pub use weighted_graph::WeightedGraph;
