use crate::Cost;

/// Options for reading graph documents with [`parse_graph_with`](crate::document::parse_graph_with)
///
/// Default options:
/// ```
/// # use waypoint_pathfinding::ParseConfig;
/// assert_eq!(
///     ParseConfig {
///         default_weight: 1.0,
///         strict_weights: false,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParseConfig {
    /// The weight of an `edge` without a usable `weight` attribute (defaults to `1.0`)
    pub default_weight: Cost,
    /// `false` (default): a `weight` that is not a number is replaced by `default_weight`.
    ///
    /// `true`: such a `weight` fails the parse with
    /// [`GraphError::InvalidWeight`](crate::GraphError::InvalidWeight).
    ///
    /// Negative and non-finite weights are rejected either way.
    pub strict_weights: bool,
}

impl ParseConfig {
    /// a ParseConfig that refuses to guess missing numbers
    ///
    /// Values:
    /// ```
    /// # use waypoint_pathfinding::ParseConfig;
    /// assert_eq!(
    ///     ParseConfig {
    ///         default_weight: 1.0,
    ///         strict_weights: true,
    ///     },
    ///     ParseConfig::STRICT
    /// );
    /// ```
    pub const STRICT: ParseConfig = ParseConfig {
        default_weight: 1.0,
        strict_weights: true,
    };
}

impl Default for ParseConfig {
    fn default() -> ParseConfig {
        ParseConfig {
            default_weight: 1.0,
            strict_weights: false,
        }
    }
}
