use thiserror::Error;

/// The ways building a [`WeightedGraph`](crate::WeightedGraph) can fail.
///
/// Not finding a Path is not an Error: [`find_path`](crate::search::find_path) returns `None`
/// for unreachable goals, so a broken document and a disconnected map can always be told apart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// The document is not well-formed XML. Parsing stops, no partial graph is returned.
    #[error("malformed graph document at byte {position}: {reason}")]
    DocumentMalformed {
        /// byte offset into the document where the problem was noticed
        position: usize,
        /// what went wrong
        reason: String,
    },

    /// An edge weight that is negative, not finite or (with
    /// [`ParseConfig::strict_weights`](crate::ParseConfig::strict_weights)) not a number.
    #[error("invalid weight `{weight}` on edge `{from}` -> `{to}`")]
    InvalidWeight {
        /// the source of the edge
        from: String,
        /// the target of the edge
        to: String,
        /// the offending weight as written in the document, or formatted from the number
        /// passed to [`WeightedGraph::add_arc`](crate::WeightedGraph::add_arc) and friends
        weight: String,
    },
}

impl GraphError {
    pub(crate) fn malformed(position: usize, reason: impl std::fmt::Display) -> GraphError {
        GraphError::DocumentMalformed {
            position,
            reason: reason.to_string(),
        }
    }
}

/// `Result` with [`GraphError`] as the Error type
pub type Result<T> = std::result::Result<T, GraphError>;
