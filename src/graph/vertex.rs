use super::{NodeIdx, NodeIdxMap};
use crate::Cost;

#[derive(Clone, Debug)]
pub(crate) struct Vertex {
    pub id: String,
    /// outgoing arcs in insertion order
    pub edges: Vec<(NodeIdx, Cost)>,
    /// position of each neighbor in `edges`
    slots: NodeIdxMap<usize>,
}

impl Vertex {
    pub fn new(id: String) -> Vertex {
        Vertex {
            id,
            edges: Vec::new(),
            slots: NodeIdxMap::default(),
        }
    }

    pub fn weight_to(&self, other: NodeIdx) -> Option<Cost> {
        self.slots.get(&other).map(|&slot| self.edges[slot].1)
    }

    /// overwrites the weight of an existing arc, keeping its position
    pub fn set_weight(&mut self, other: NodeIdx, cost: Cost) {
        match self.slots.get(&other) {
            Some(&slot) => self.edges[slot].1 = cost,
            None => {
                self.slots.insert(other, self.edges.len());
                self.edges.push((other, cost));
            }
        }
    }

    pub fn remove_edge(&mut self, other: NodeIdx) -> Option<Cost> {
        let slot = self.slots.remove(&other)?;
        let (_, cost) = self.edges.remove(slot);
        for &(shifted, _) in &self.edges[slot..] {
            if let Some(s) = self.slots.get_mut(&shifted) {
                *s -= 1;
            }
        }
        Some(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(vertex: &Vertex) -> Vec<NodeIdx> {
        vertex.edges.iter().map(|&(id, _)| id).collect()
    }

    #[test]
    fn slots_follow_removals() {
        let mut vertex = Vertex::new("hub".into());
        for id in 0..5 {
            vertex.set_weight(id, id as Cost);
        }

        assert_eq!(vertex.remove_edge(1), Some(1.0));
        assert_eq!(vertex.remove_edge(1), None);
        assert_eq!(ids(&vertex), vec![0, 2, 3, 4]);

        vertex.set_weight(4, 9.0);
        vertex.set_weight(1, 2.0);
        assert_eq!(ids(&vertex), vec![0, 2, 3, 4, 1]);
        for (id, cost) in [(0, 0.0), (1, 2.0), (2, 2.0), (3, 3.0), (4, 9.0)] {
            assert_eq!(vertex.weight_to(id), Some(cost));
        }
        assert_eq!(vertex.weight_to(5), None);
    }
}
