//! Per-traversal visitation state and contract-level neighbor iteration.
//!
//! Traversals keep their own [`VisitMap`] instead of reusing the backend's
//! mark array, so they only need `&G` and never race on shared marks.
//! [`write_marks`] copies a finished traversal back into the backend for
//! callers that rely on the mark-based contract.

use crate::backend::{Graph, Mark};
use crate::errors::{GraphError, GraphResult};

/// Mark value written for a visited vertex.
pub const VISITED_MARK: Mark = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitState {
    #[default]
    Unvisited,
    Visited,
}

#[derive(Clone, Debug)]
pub struct VisitMap {
    states: Vec<VisitState>,
    visited: usize,
}

impl VisitMap {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            states: vec![VisitState::Unvisited; vertex_count],
            visited: 0,
        }
    }

    pub fn for_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        Self::new(graph.vertex_count())
    }

    pub fn state(&self, v: usize) -> VisitState {
        self.states.get(v).copied().unwrap_or_default()
    }

    pub fn is_visited(&self, v: usize) -> bool {
        self.state(v) == VisitState::Visited
    }

    /// Mark `v` visited. Returns `false` if it already was.
    pub fn visit(&mut self, v: usize) -> bool {
        match self.states.get_mut(v) {
            Some(state) if *state == VisitState::Unvisited => {
                *state = VisitState::Visited;
                self.visited += 1;
                true
            }
            _ => false,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// True once every vertex has been visited.
    pub fn all_visited(&self) -> bool {
        self.visited == self.states.len()
    }

    pub fn unvisited(&self) -> impl Iterator<Item = usize> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == VisitState::Unvisited)
            .map(|(v, _)| v)
    }
}

/// Lazy walk over `first_neighbor` / `next_neighbor` of one vertex.
pub struct Neighbors<'g, G: ?Sized> {
    graph: &'g G,
    vertex: usize,
    last: Option<usize>,
    done: bool,
}

impl<G> Iterator for Neighbors<'_, G>
where
    G: Graph + ?Sized,
{
    type Item = GraphResult<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let step = match self.last {
            None => self.graph.first_neighbor(self.vertex),
            Some(w) => self.graph.next_neighbor(self.vertex, w),
        };
        match step {
            Ok(Some(w)) => {
                self.last = Some(w);
                Some(Ok(w))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Iterate the neighbors of `v` through the graph contract.
pub fn neighbors<G>(graph: &G, v: usize) -> GraphResult<Neighbors<'_, G>>
where
    G: Graph + ?Sized,
{
    check_start(graph, v)?;
    Ok(Neighbors {
        graph,
        vertex: v,
        last: None,
        done: false,
    })
}

/// Fail with `OutOfRange` unless `v` names a vertex of `graph`.
pub fn check_start<G>(graph: &G, v: usize) -> GraphResult<()>
where
    G: Graph + ?Sized,
{
    if v < graph.vertex_count() {
        Ok(())
    } else {
        Err(GraphError::out_of_range(v, graph.vertex_count()))
    }
}

/// Clear the backend's marks, then mark every vertex `visited` reached.
pub fn write_marks<G>(graph: &mut G, visited: &VisitMap) -> GraphResult<()>
where
    G: Graph + ?Sized,
{
    graph.clear_marks();
    for v in 0..graph.vertex_count() {
        if visited.is_visited(v) {
            graph.set_mark(v, VISITED_MARK)?;
        }
    }
    Ok(())
}
