//! The graph contract shared by every storage backend.
//!
//! Traversal code only ever talks to a graph through [`Graph`], so a
//! [`MatrixGraph`] and an [`EdgeListGraph`] are interchangeable behind
//! `&G`, `&dyn Graph` or `Box<dyn Graph>`. Backends own their storage,
//! including the per-vertex mark array.

pub mod edge_list;
pub mod matrix;
mod validation;

pub use edge_list::EdgeListGraph;
pub use matrix::MatrixGraph;

use serde::{Deserialize, Serialize};

use crate::errors::GraphResult;

/// Edge weight. Zero means "no edge"; stored weights are always positive.
pub type Weight = i32;

/// Per-vertex integer tag. `0` means unvisited by convention.
pub type Mark = i32;

/// A stored edge record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub src: usize,
    pub dest: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: usize, dest: usize, weight: Weight) -> Self {
        Self { src, dest, weight }
    }

    pub fn connects(&self, v: usize) -> bool {
        self.src == v || self.dest == v
    }

    /// The endpoint opposite `v`, or `None` when `v` is not an endpoint.
    pub fn other(&self, v: usize) -> Option<usize> {
        if self.src == v {
            Some(self.dest)
        } else if self.dest == v {
            Some(self.src)
        } else {
            None
        }
    }
}

/// Capability set every storage backend provides.
///
/// Any vertex argument outside `[0, vertex_count())` fails with
/// [`GraphError::OutOfRange`](crate::GraphError::OutOfRange) and leaves the
/// graph untouched. Neighbor enumeration through [`Graph::first_neighbor`] /
/// [`Graph::next_neighbor`] is deterministic as long as the graph is not
/// mutated in between.
pub trait Graph {
    /// Reset to `n` vertices, zero edges, all marks cleared.
    fn init(&mut self, n: usize) -> GraphResult<()>;
    fn vertex_count(&self) -> usize;
    /// Undirected edges count once, directed edges once per direction.
    fn edge_count(&self) -> usize;
    fn is_directed(&self) -> bool;
    fn first_neighbor(&self, v: usize) -> GraphResult<Option<usize>>;
    /// The neighbor of `v` that follows `w` in enumeration order.
    fn next_neighbor(&self, v: usize, w: usize) -> GraphResult<Option<usize>>;
    /// Create or update an edge. `weight` must be positive.
    fn set_edge(&mut self, v1: usize, v2: usize, weight: Weight) -> GraphResult<()>;
    /// Remove an edge (and its mirror when undirected). Returns whether one existed.
    fn delete_edge(&mut self, v1: usize, v2: usize) -> GraphResult<bool>;
    fn is_edge(&self, v1: usize, v2: usize) -> GraphResult<bool>;
    /// Weight of the edge, or `0` when absent.
    fn weight(&self, v1: usize, v2: usize) -> GraphResult<Weight>;
    fn get_mark(&self, v: usize) -> GraphResult<Mark>;
    fn set_mark(&mut self, v: usize, mark: Mark) -> GraphResult<()>;
    fn clear_marks(&mut self);
}

impl<G> Graph for Box<G>
where
    G: Graph + ?Sized,
{
    fn init(&mut self, n: usize) -> GraphResult<()> {
        (**self).init(n)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn first_neighbor(&self, v: usize) -> GraphResult<Option<usize>> {
        (**self).first_neighbor(v)
    }

    fn next_neighbor(&self, v: usize, w: usize) -> GraphResult<Option<usize>> {
        (**self).next_neighbor(v, w)
    }

    fn set_edge(&mut self, v1: usize, v2: usize, weight: Weight) -> GraphResult<()> {
        (**self).set_edge(v1, v2, weight)
    }

    fn delete_edge(&mut self, v1: usize, v2: usize) -> GraphResult<bool> {
        (**self).delete_edge(v1, v2)
    }

    fn is_edge(&self, v1: usize, v2: usize) -> GraphResult<bool> {
        (**self).is_edge(v1, v2)
    }

    fn weight(&self, v1: usize, v2: usize) -> GraphResult<Weight> {
        (**self).weight(v1, v2)
    }

    fn get_mark(&self, v: usize) -> GraphResult<Mark> {
        (**self).get_mark(v)
    }

    fn set_mark(&mut self, v: usize, mark: Mark) -> GraphResult<()> {
        (**self).set_mark(v, mark)
    }

    fn clear_marks(&mut self) {
        (**self).clear_marks()
    }
}
