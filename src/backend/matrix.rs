//! Dense adjacency-matrix backend.
//!
//! Cell `(i, j)` of a row-major `n x n` matrix holds the weight of edge
//! `i -> j`, with `0` meaning no edge. Neighbor enumeration is a linear scan
//! of the row, so neighbors come out in ascending id order.

use std::fmt;

use super::validation::{alloc_marks, check_pair, check_vertex, check_weight, matrix_cells};
use super::{Edge, Graph, Mark, Weight};
use crate::errors::{GraphError, GraphResult};

#[derive(Clone, Debug)]
pub struct MatrixGraph {
    vertex_count: usize,
    edge_count: usize,
    directed: bool,
    cells: Vec<Weight>,
    marks: Vec<Mark>,
}

impl MatrixGraph {
    pub fn new(n: usize, directed: bool) -> GraphResult<Self> {
        let mut graph = Self {
            vertex_count: 0,
            edge_count: 0,
            directed,
            cells: Vec::new(),
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

    /// Neighbors of `v` in ascending order.
    pub fn neighbor_list(&self, v: usize) -> GraphResult<Vec<usize>> {
        check_vertex(v, self.vertex_count)?;
        Ok((0..self.vertex_count)
            .filter(|&j| self.cell(v, j) != 0)
            .collect())
    }

    /// Out-degree for directed graphs, degree otherwise. A self-loop adds one.
    pub fn degree(&self, v: usize) -> GraphResult<usize> {
        check_vertex(v, self.vertex_count)?;
        Ok((0..self.vertex_count)
            .filter(|&j| self.cell(v, j) != 0)
            .count())
    }

    /// In-degree for directed graphs; same as [`MatrixGraph::degree`] otherwise.
    pub fn in_degree(&self, v: usize) -> GraphResult<usize> {
        if !self.directed {
            return self.degree(v);
        }
        check_vertex(v, self.vertex_count)?;
        Ok((0..self.vertex_count)
            .filter(|&i| self.cell(i, v) != 0)
            .count())
    }

    /// Every stored edge; undirected edges are listed once with `src <= dest`.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for i in 0..self.vertex_count {
            let start = if self.directed { 0 } else { i };
            for j in start..self.vertex_count {
                let weight = self.cell(i, j);
                if weight != 0 {
                    edges.push(Edge::new(i, j, weight));
                }
            }
        }
        edges
    }

    fn cell(&self, i: usize, j: usize) -> Weight {
        self.cells[i * self.vertex_count + j]
    }

    fn cell_mut(&mut self, i: usize, j: usize) -> &mut Weight {
        &mut self.cells[i * self.vertex_count + j]
    }

    fn scan_row(&self, v: usize, from: usize) -> Option<usize> {
        (from..self.vertex_count).find(|&j| self.cell(v, j) != 0)
    }
}

impl Graph for MatrixGraph {
    fn init(&mut self, n: usize) -> GraphResult<()> {
        let cells = matrix_cells(n)?;
        let mut storage = Vec::new();
        storage.try_reserve_exact(cells).map_err(|e| {
            GraphError::invalid_argument(format!("cannot allocate matrix for {n} vertices: {e}"))
        })?;
        let marks = alloc_marks(n)?;
        storage.resize(cells, 0);
        self.cells = storage;
        self.marks = marks;
        self.vertex_count = n;
        self.edge_count = 0;
        #[cfg(feature = "logging")]
        log::debug!(
            "initialized {} matrix graph with {n} vertices",
            if self.directed { "directed" } else { "undirected" }
        );
        Ok(())
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn first_neighbor(&self, v: usize) -> GraphResult<Option<usize>> {
        check_vertex(v, self.vertex_count)?;
        Ok(self.scan_row(v, 0))
    }

    fn next_neighbor(&self, v: usize, w: usize) -> GraphResult<Option<usize>> {
        check_pair(v, w, self.vertex_count)?;
        Ok(self.scan_row(v, w + 1))
    }

    fn set_edge(&mut self, v1: usize, v2: usize, weight: Weight) -> GraphResult<()> {
        check_pair(v1, v2, self.vertex_count)?;
        check_weight(weight)?;
        if self.cell(v1, v2) == 0 {
            self.edge_count += 1;
        }
        *self.cell_mut(v1, v2) = weight;
        if !self.directed {
            *self.cell_mut(v2, v1) = weight;
        }
        Ok(())
    }

    fn delete_edge(&mut self, v1: usize, v2: usize) -> GraphResult<bool> {
        check_pair(v1, v2, self.vertex_count)?;
        if self.cell(v1, v2) == 0 {
            return Ok(false);
        }
        *self.cell_mut(v1, v2) = 0;
        if !self.directed {
            *self.cell_mut(v2, v1) = 0;
        }
        self.edge_count -= 1;
        Ok(true)
    }

    fn is_edge(&self, v1: usize, v2: usize) -> GraphResult<bool> {
        check_pair(v1, v2, self.vertex_count)?;
        Ok(self.cell(v1, v2) != 0)
    }

    fn weight(&self, v1: usize, v2: usize) -> GraphResult<Weight> {
        check_pair(v1, v2, self.vertex_count)?;
        Ok(self.cell(v1, v2))
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

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Adjacency Matrix ({} vertices, {} edges, {}):",
            self.vertex_count,
            self.edge_count,
            if self.directed { "directed" } else { "undirected" }
        )?;
        write!(f, "   ")?;
        for j in 0..self.vertex_count {
            write!(f, "{j} ")?;
        }
        writeln!(f)?;
        for i in 0..self.vertex_count {
            write!(f, "{i}: ")?;
            for j in 0..self.vertex_count {
                write!(f, "{} ", self.cell(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatrixGraph {
        let mut graph = MatrixGraph::undirected(5).unwrap();
        for &(a, b, w) in &[(0, 1, 1), (0, 2, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 4, 3)] {
            graph.set_edge(a, b, w).unwrap();
        }
        graph
    }

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let graph = sample();
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.weight(1, 4).unwrap(), 3);
        assert_eq!(graph.weight(4, 1).unwrap(), 3);
        assert!(graph.is_edge(2, 0).unwrap());
    }

    #[test]
    fn test_neighbors_scan_in_ascending_order() {
        let graph = sample();
        assert_eq!(graph.first_neighbor(1).unwrap(), Some(0));
        assert_eq!(graph.next_neighbor(1, 0).unwrap(), Some(2));
        assert_eq!(graph.next_neighbor(1, 2).unwrap(), Some(4));
        assert_eq!(graph.next_neighbor(1, 4).unwrap(), None);
        assert_eq!(graph.neighbor_list(1).unwrap(), vec![0, 2, 4]);
    }

    #[test]
    fn test_update_weight_keeps_edge_count() {
        let mut graph = sample();
        graph.set_edge(4, 1, 9).unwrap();
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.weight(1, 4).unwrap(), 9);
    }

    #[test]
    fn test_delete_edge_clears_both_cells() {
        let mut graph = sample();
        assert!(graph.delete_edge(2, 1).unwrap());
        assert!(!graph.is_edge(1, 2).unwrap());
        assert!(!graph.is_edge(2, 1).unwrap());
        assert_eq!(graph.edge_count(), 5);
        assert!(!graph.delete_edge(1, 2).unwrap());
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_init_resets_edges_and_marks() {
        let mut graph = sample();
        graph.set_mark(3, 7).unwrap();
        graph.init(3).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.get_mark(0).unwrap(), 0);
        assert!(!graph.is_edge(0, 1).unwrap());
        assert!(graph.get_mark(3).is_err());
    }

    #[test]
    fn test_failed_set_edge_leaves_matrix_unchanged() {
        let mut graph = sample();
        assert!(graph.set_edge(0, 9, 1).is_err());
        assert!(graph.set_edge(0, 4, 0).is_err());
        assert_eq!(graph.edge_count(), 6);
        assert!(!graph.is_edge(0, 4).unwrap());
    }

    #[test]
    fn test_directed_degrees() {
        let mut graph = MatrixGraph::directed(4).unwrap();
        for &(a, b) in &[(0, 1), (0, 2), (1, 3), (2, 3)] {
            graph.set_edge(a, b, 1).unwrap();
        }
        assert_eq!(graph.degree(0).unwrap(), 2);
        assert_eq!(graph.in_degree(3).unwrap(), 2);
        assert_eq!(graph.in_degree(0).unwrap(), 0);
        assert!(!graph.is_edge(1, 0).unwrap());
    }

    #[test]
    fn test_self_loop_counts_once() {
        let mut graph = MatrixGraph::undirected(3).unwrap();
        graph.set_edge(1, 1, 2).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(1).unwrap(), 1);
        assert_eq!(graph.neighbor_list(1).unwrap(), vec![1]);
        assert!(graph.delete_edge(1, 1).unwrap());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edges_lists_undirected_once() {
        let graph = sample();
        let edges = graph.edges();
        assert_eq!(edges.len(), 6);
        assert!(edges.iter().all(|e| e.src <= e.dest));
        assert!(edges.contains(&Edge::new(1, 4, 3)));
    }

    #[test]
    fn test_display_dump_mentions_shape() {
        let text = sample().to_string();
        assert!(text.starts_with("Adjacency Matrix (5 vertices, 6 edges, undirected):"));
        assert!(text.contains("1: 1 0 1 0 3"));
    }

    #[test]
    fn test_oversized_matrix_is_rejected() {
        assert!(matches!(
            MatrixGraph::undirected(usize::MAX),
            Err(GraphError::InvalidArgument(_))
        ));
    }
}
