//! Single edge-list backend.
//!
//! All edges live in one insertion-ordered `Vec<Edge>` with no per-vertex
//! index. Undirected edges are stored once as `src <= dest`, so a lookup only
//! checks one orientation, but neighbor search still has to test both
//! endpoints. Every lookup is an O(E) scan, and walking all neighbors of `v`
//! through [`Graph::next_neighbor`] costs O(E * deg(v)) because each step
//! rescans up to the previously returned neighbor.

use std::fmt;

use super::validation::{alloc_marks, check_pair, check_vertex, check_weight};
use super::{Edge, Graph, Mark, Weight};
use crate::errors::GraphResult;

#[derive(Clone, Debug)]
pub struct EdgeListGraph {
    vertex_count: usize,
    directed: bool,
    edges: Vec<Edge>,
    marks: Vec<Mark>,
}

impl EdgeListGraph {
    pub fn new(n: usize, directed: bool) -> GraphResult<Self> {
        let mut graph = Self {
            vertex_count: 0,
            directed,
            edges: Vec::new(),
            marks: Vec::new(),
        };
        graph.init(n)?;
        Ok(graph)
    }

    pub fn undirected(n: usize) -> GraphResult<Self> {
        Self::new(n, false)
    }

    pub fn directed(n: usize) -> GraphResult<Self> {
        Self::new(n, true)
    }

    /// Stored edge records in insertion order.
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }

    /// Neighbors of `v`, sorted and deduplicated.
    pub fn neighbor_list(&self, v: usize) -> GraphResult<Vec<usize>> {
        check_vertex(v, self.vertex_count)?;
        let mut neighbors: Vec<usize> = self.incident(v).collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        Ok(neighbors)
    }

    /// Out-degree for directed graphs, degree otherwise. A self-loop adds one.
    pub fn degree(&self, v: usize) -> GraphResult<usize> {
        check_vertex(v, self.vertex_count)?;
        Ok(self.incident(v).count())
    }

    /// In-degree for directed graphs; same as [`EdgeListGraph::degree`] otherwise.
    pub fn in_degree(&self, v: usize) -> GraphResult<usize> {
        if !self.directed {
            return self.degree(v);
        }
        check_vertex(v, self.vertex_count)?;
        Ok(self.edges.iter().filter(|e| e.dest == v).count())
    }

    fn canonical(&self, v1: usize, v2: usize) -> (usize, usize) {
        if self.directed || v1 <= v2 {
            (v1, v2)
        } else {
            (v2, v1)
        }
    }

    fn find_edge(&self, v1: usize, v2: usize) -> Option<usize> {
        let (src, dest) = self.canonical(v1, v2);
        self.edges
            .iter()
            .position(|e| e.src == src && e.dest == dest)
    }

    /// Neighbors reachable from `v` along stored edges, in storage order.
    fn incident(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let directed = self.directed;
        self.edges.iter().filter_map(move |e| {
            if directed {
                (e.src == v).then_some(e.dest)
            } else {
                e.other(v)
            }
        })
    }
}

impl Graph for EdgeListGraph {
    fn init(&mut self, n: usize) -> GraphResult<()> {
        self.marks = alloc_marks(n)?;
        self.vertex_count = n;
        self.edges.clear();
        #[cfg(feature = "logging")]
        log::debug!(
            "initialized {} edge-list graph with {n} vertices",
            if self.directed { "directed" } else { "undirected" }
        );
        Ok(())
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn first_neighbor(&self, v: usize) -> GraphResult<Option<usize>> {
        check_vertex(v, self.vertex_count)?;
        Ok(self.incident(v).next())
    }

    fn next_neighbor(&self, v: usize, w: usize) -> GraphResult<Option<usize>> {
        check_pair(v, w, self.vertex_count)?;
        let mut neighbors = self.incident(v);
        if neighbors.by_ref().any(|x| x == w) {
            Ok(neighbors.next())
        } else {
            Ok(None)
        }
    }

    fn set_edge(&mut self, v1: usize, v2: usize, weight: Weight) -> GraphResult<()> {
        check_pair(v1, v2, self.vertex_count)?;
        check_weight(weight)?;
        match self.find_edge(v1, v2) {
            Some(idx) => self.edges[idx].weight = weight,
            None => {
                let (src, dest) = self.canonical(v1, v2);
                self.edges.push(Edge::new(src, dest, weight));
            }
        }
        Ok(())
    }

    fn delete_edge(&mut self, v1: usize, v2: usize) -> GraphResult<bool> {
        check_pair(v1, v2, self.vertex_count)?;
        match self.find_edge(v1, v2) {
            Some(idx) => {
                self.edges.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn is_edge(&self, v1: usize, v2: usize) -> GraphResult<bool> {
        check_pair(v1, v2, self.vertex_count)?;
        Ok(self.find_edge(v1, v2).is_some())
    }

    fn weight(&self, v1: usize, v2: usize) -> GraphResult<Weight> {
        check_pair(v1, v2, self.vertex_count)?;
        Ok(self
            .find_edge(v1, v2)
            .map(|idx| self.edges[idx].weight)
            .unwrap_or(0))
    }

    fn get_mark(&self, v: usize) -> GraphResult<Mark> {
        check_vertex(v, self.vertex_count)?;
        Ok(self.marks[v])
    }

    fn set_mark(&mut self, v: usize, mark: Mark) -> GraphResult<()> {
        check_vertex(v, self.vertex_count)?;
        self.marks[v] = mark;
        Ok(())
    }

    fn clear_marks(&mut self) {
        self.marks.fill(0);
    }
}

impl fmt::Display for EdgeListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Edge List ({} vertices, {} edges, {}):",
            self.vertex_count,
            self.edges.len(),
            if self.directed { "directed" } else { "undirected" }
        )?;
        let arrow = if self.directed { "->" } else { "--" };
        for e in &self.edges {
            writeln!(f, "  {} {arrow} {} (weight: {})", e.src, e.dest, e.weight)?;
        }
        Ok(())
    }
}
