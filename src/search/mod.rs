//! Finding the cheapest Paths through a [`WeightedGraph`](crate::WeightedGraph).
//!
//! Every search owns its own bookkeeping and only reads the Graph, so any number of searches
//! may run on the same Graph from different threads.

mod heuristic;
pub use heuristic::{Heuristic, ZeroHeuristic};

mod open_set;
use open_set::OpenSet;

mod a_star;
pub use a_star::find_path;

mod multi;
pub use multi::find_paths;
