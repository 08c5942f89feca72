use super::ParseConfig;
use crate::{Cost, GraphError, Result, WeightedGraph};

use log::{debug, trace};
use quick_xml::events::BytesStart;

/// An `edge` whose end tag has not been seen yet
#[derive(Debug)]
struct PendingEdge {
    source: Option<String>,
    target: Option<String>,
    weight: Option<String>,
}

/// Everything that is carried from one event of a single parse to the next.
///
/// A new one is created for every document, so nothing leaks between parses.
#[derive(Debug)]
pub(super) struct ParseState<'c> {
    config: &'c ParseConfig,
    graph: WeightedGraph,
    pending: Option<PendingEdge>,
    depth: usize,
    /// set once the root element was opened; a second one is an error
    seen_root: bool,
}

impl<'c> ParseState<'c> {
    pub fn new(config: &'c ParseConfig) -> Self {
        ParseState {
            config,
            graph: WeightedGraph::new(),
            pending: None,
            depth: 0,
            seen_root: false,
        }
    }

    /// An opening tag. `<x/>` is reported as `start_element` followed by `end_element`.
    pub fn start_element(&mut self, element: &BytesStart, position: usize) -> Result<()> {
        match element.local_name().as_ref() {
            b"node" => {
                let [id] = read_attributes(element, [&b"id"[..]], position)?;
                match id {
                    Some(id) => {
                        trace!("node `{}`", id);
                        self.graph.add_node(&id);
                    }
                    None => debug!("skipping node without id at byte {}", position),
                }
            }
            b"edge" => {
                let keys = [&b"source"[..], &b"target"[..], &b"weight"[..]];
                let [source, target, weight] = read_attributes(element, keys, position)?;
                self.pending = Some(PendingEdge {
                    source,
                    target,
                    weight,
                });
            }
            _ => {}
        }
        Ok(())
    }

    pub fn end_element(&mut self, local_name: &[u8], position: usize) -> Result<()> {
        if local_name != b"edge" {
            return Ok(());
        }
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        let (Some(source), Some(target)) = (pending.source, pending.target) else {
            debug!("skipping edge without source or target at byte {}", position);
            return Ok(());
        };
        let weight = self.resolve_weight(&source, &target, pending.weight)?;
        trace!("edge `{}` -> `{}` ({})", source, target, weight);
        self.graph.add_arc(&source, &target, weight)
    }

    /// Enters an element. Fails if the element would be a second root.
    pub fn open(&mut self, position: usize) -> Result<()> {
        if self.depth == 0 {
            if self.seen_root {
                return Err(GraphError::malformed(position, "more than one root element"));
            }
            self.seen_root = true;
        }
        self.depth += 1;
        Ok(())
    }

    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Character data. Only whitespace may appear outside of the root element.
    pub fn text(&self, text: &[u8], position: usize) -> Result<()> {
        let whitespace = text.iter().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
        if self.depth == 0 && !whitespace {
            return Err(GraphError::malformed(position, "text outside of the root element"));
        }
        Ok(())
    }

    /// Hands out the Graph once the whole document was read.
    pub fn finish(self, position: usize) -> Result<WeightedGraph> {
        if !self.seen_root {
            return Err(GraphError::malformed(position, "document has no root element"));
        }
        if self.depth > 0 {
            return Err(GraphError::malformed(
                position,
                format!("{} element(s) left unclosed", self.depth),
            ));
        }
        Ok(self.graph)
    }

    fn resolve_weight(&self, source: &str, target: &str, raw: Option<String>) -> Result<Cost> {
        let Some(raw) = raw else {
            return Ok(self.config.default_weight);
        };
        match raw.trim().parse::<Cost>() {
            Ok(weight) if weight.is_finite() && weight >= 0.0 => Ok(weight),
            Ok(_) => Err(GraphError::InvalidWeight {
                from: source.to_owned(),
                to: target.to_owned(),
                weight: raw,
            }),
            Err(_) if self.config.strict_weights => Err(GraphError::InvalidWeight {
                from: source.to_owned(),
                to: target.to_owned(),
                weight: raw,
            }),
            Err(_) => {
                debug!(
                    "weight `{}` on `{}` -> `{}` is not a number, using {}",
                    raw, source, target, self.config.default_weight
                );
                Ok(self.config.default_weight)
            }
        }
    }
}

/// Looks up the (unescaped) values of the attributes named in `keys`, matched by local name.
fn read_attributes<const N: usize>(
    element: &BytesStart,
    keys: [&[u8]; N],
    position: usize,
) -> Result<[Option<String>; N]> {
    let mut values: [Option<String>; N] = std::array::from_fn(|_| None);
    for attr in element.attributes() {
        let attr = attr.map_err(|err| GraphError::malformed(position, err))?;
        let key = attr.key.local_name();
        if let Some(slot) = keys.iter().position(|&wanted| wanted == key.as_ref()) {
            let value = attr
                .unescape_value()
                .map_err(|err| GraphError::malformed(position, err))?;
            values[slot] = Some(value.into_owned());
        }
    }
    Ok(values)
}
