//! Reading Graphs from GraphML-style documents.
//!
//! Only two kinds of elements matter, everything else is ignored:
//! ```xml
//! <node id="STRING"/>
//! <edge source="STRING" target="STRING" weight="NUMBER"/>
//! ```
//! The document is read in a single pass of start/end events, without building a tree of it.
//!
//! Elements that lack the attributes they need (a `node` without `id`, an `edge` without
//! `source` or `target`) are skipped. A `weight` that is missing or not a number becomes
//! [`ParseConfig::default_weight`]. Documents that are not well-formed fail with
//! [`GraphError::DocumentMalformed`] and no Graph is returned.
//!
//! Edges are added in the direction they are written. Call
//! [`WeightedGraph::symmetrize`] before searching, or use [`WeightedGraph::from_document`]
//! which does both.

mod config;
pub use config::ParseConfig;

mod parse_state;
use parse_state::ParseState;

use crate::{GraphError, Result, WeightedGraph};

use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Parses a document with the default [`ParseConfig`].
///
/// ## Examples
/// ```
/// use waypoint_pathfinding::document::parse_graph;
///
/// let graph = parse_graph(br#"
///     <graphml>
///         <node id="A"/> <node id="B"/> <node/>
///         <edge source="A" target="B" weight="2"/>
///     </graphml>
/// "#).unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.weight("A", "B"), Some(2.0));
/// // edges are directed until the Graph is symmetrized
/// assert_eq!(graph.weight("B", "A"), None);
/// ```
pub fn parse_graph(bytes: &[u8]) -> Result<WeightedGraph> {
    parse_graph_with(bytes, &ParseConfig::default())
}

/// Parses a document into a directed [`WeightedGraph`].
///
/// ## Errors
/// - [`GraphError::DocumentMalformed`] for invalid UTF-8, unterminated or mismatched tags,
///   unclosed elements, anything but exactly one root element, text outside of the root,
///   broken attributes or invalid escapes
/// - [`GraphError::InvalidWeight`] for negative or non-finite weights, and for weights that
///   are not numbers if [`ParseConfig::strict_weights`] is set
pub fn parse_graph_with(bytes: &[u8], config: &ParseConfig) -> Result<WeightedGraph> {
    if let Err(err) = std::str::from_utf8(bytes) {
        return Err(GraphError::malformed(err.valid_up_to(), err));
    }
    let mut reader = Reader::from_reader(bytes);
    reader.check_end_names(true);

    let mut state = ParseState::new(config);
    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                state.open(position)?;
                state.start_element(&element, position)?;
            }
            Ok(Event::Empty(element)) => {
                state.open(position)?;
                state.start_element(&element, position)?;
                state.close();
                state.end_element(element.local_name().as_ref(), position)?;
            }
            Ok(Event::End(element)) => {
                state.close();
                state.end_element(element.local_name().as_ref(), position)?;
            }
            Ok(Event::Text(text)) => state.text(&text, position)?,
            Ok(Event::CData(data)) => state.text(&data, position)?,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(GraphError::malformed(reader.buffer_position(), err)),
        }
    }

    let graph = state.finish(reader.buffer_position())?;
    debug!(
        "parsed graph document: {} nodes, {} arcs",
        graph.node_count(),
        graph.arc_count()
    );
    Ok(graph)
}
