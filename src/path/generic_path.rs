use crate::Cost;

/// A sequence of Waypoints from a start to a goal, together with the total Cost of walking it.
///
/// Note that the Costs of the individual steps cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P = String> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 4.5);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the Nodes of the Path, starting with the start
    pub fn nodes(&self) -> &[P] {
        &self.path
    }

    /// unwraps the Nodes of the Path
    pub fn into_nodes(self) -> Vec<P> {
        self.path
    }

    /// Returns the same Path walked from goal to start.
    ///
    /// The Cost stays the same, which is only true on an undirected Graph.
    /// ## Examples
    /// ```
    /// # use waypoint_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42.0);
    /// let reversed = path.reversed();
    ///
    /// assert_eq!(reversed, vec!['c', 'b', 'a']);
    /// assert_eq!(reversed.cost(), 42.0);
    /// ```
    pub fn reversed(&self) -> Path<P>
    where
        P: Clone,
    {
        let mut path = self.path.clone();
        path.reverse();
        Path::new(path, self.cost)
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<P: PartialEq<Q>, Q> PartialEq<Vec<Q>> for Path<P> {
    fn eq(&self, rhs: &Vec<Q>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq<Q>, Q> PartialEq<&'a [Q]> for Path<P> {
    fn eq(&self, rhs: &&'a [Q]) -> bool {
        self.path[..] == **rhs
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cost.total_cmp(&other.cost))
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
