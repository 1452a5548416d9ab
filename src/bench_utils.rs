use ahash::AHashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::backend::{Edge, Graph, Weight};
use crate::errors::GraphResult;

const MAX_RANDOM_WEIGHT: Weight = 9;

/// A generated edge set that can be loaded into any backend.
#[derive(Clone, Debug)]
pub struct GraphDataset {
    pub vertices: usize,
    pub edges: Vec<Edge>,
}

impl GraphDataset {
    pub fn edges(&self) -> usize {
        self.edges.len()
    }

    pub fn degrees(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.vertices];
        for edge in &self.edges {
            counts[edge.src] += 1;
            counts[edge.dest] += 1;
        }
        counts
    }

    pub fn hub_index(&self) -> usize {
        let mut best = (0usize, 0usize);
        for (idx, deg) in self.degrees().into_iter().enumerate() {
            if deg > best.0 {
                best = (deg, idx);
            }
        }
        best.1
    }

    /// `set_edge` every generated edge into `graph`.
    pub fn populate<G>(&self, graph: &mut G) -> GraphResult<()>
    where
        G: Graph + ?Sized,
    {
        for edge in &self.edges {
            graph.set_edge(edge.src, edge.dest, edge.weight)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
    /// `components` disjoint lines of equal length
    Disjoint { components: usize },
}

pub fn generate_graph(shape: GraphShape, vertex_count: usize, seed: u64) -> GraphDataset {
    assert!(vertex_count > 1, "vertex_count must exceed 1");
    let mut edges = match shape {
        GraphShape::Line => generate_line_edges(0, vertex_count),
        GraphShape::Star => generate_star_edges(vertex_count),
        GraphShape::Grid2D { width, height } => generate_grid_edges(width, height, vertex_count),
        GraphShape::RandomErdosRenyi { edges } => {
            generate_random_edges(vertex_count, edges, seed)
        }
        GraphShape::Disjoint { components } => generate_disjoint_edges(vertex_count, components),
    };
    edges.sort_by(|a, b| a.src.cmp(&b.src).then_with(|| a.dest.cmp(&b.dest)));
    GraphDataset {
        vertices: vertex_count,
        edges,
    }
}

fn generate_line_edges(first: usize, end: usize) -> Vec<Edge> {
    (first..end.saturating_sub(1))
        .map(|idx| Edge::new(idx, idx + 1, 1))
        .collect()
}

fn generate_star_edges(count: usize) -> Vec<Edge> {
    (1..count).map(|leaf| Edge::new(0, leaf, 1)).collect()
}

fn generate_grid_edges(width: usize, height: usize, vertex_count: usize) -> Vec<Edge> {
    assert_eq!(
        width * height,
        vertex_count,
        "grid dimensions must match vertex count"
    );
    let mut edges = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = y * width + x;
            if x + 1 < width {
                edges.push(Edge::new(base, base + 1, 1));
            }
            if y + 1 < height {
                edges.push(Edge::new(base, base + width, 1));
            }
        }
    }
    edges
}

fn generate_random_edges(vertex_count: usize, edge_count: usize, seed: u64) -> Vec<Edge> {
    let total_pairs = vertex_count * (vertex_count - 1) / 2;
    assert!(
        edge_count <= total_pairs,
        "edge_count exceeds possible pairs"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = AHashSet::with_capacity(edge_count);
    let mut edges = Vec::with_capacity(edge_count);
    while edges.len() < edge_count {
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a == b {
            continue;
        }
        let pair = (a.min(b), a.max(b));
        if seen.insert(pair) {
            let weight = rng.gen_range(1..=MAX_RANDOM_WEIGHT);
            edges.push(Edge::new(pair.0, pair.1, weight));
        }
    }
    edges
}

fn generate_disjoint_edges(vertex_count: usize, components: usize) -> Vec<Edge> {
    assert!(
        components > 0 && components <= vertex_count,
        "components must be in 1..=vertex_count"
    );
    let size = vertex_count / components;
    let mut edges = Vec::new();
    for component in 0..components {
        let first = component * size;
        let end = if component + 1 == components {
            vertex_count
        } else {
            first + size
        };
        edges.extend(generate_line_edges(first, end));
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MatrixGraph;

    #[test]
    fn test_random_graph_is_deterministic_per_seed() {
        let a = generate_graph(GraphShape::RandomErdosRenyi { edges: 20 }, 12, 7);
        let b = generate_graph(GraphShape::RandomErdosRenyi { edges: 20 }, 12, 7);
        assert_eq!(a.edges, b.edges);
        assert_eq!(a.edges(), 20);
        assert!(a.edges.iter().all(|e| e.src < e.dest && e.weight > 0));
    }

    #[test]
    fn test_grid_edge_count() {
        let grid = generate_graph(GraphShape::Grid2D { width: 3, height: 2 }, 6, 0);
        assert_eq!(grid.edges(), 7);
    }

    #[test]
    fn test_star_hub() {
        let star = generate_graph(GraphShape::Star, 5, 0);
        assert_eq!(star.hub_index(), 0);
    }

    #[test]
    fn test_disjoint_lines_leave_gaps() {
        let data = generate_graph(GraphShape::Disjoint { components: 2 }, 6, 0);
        assert_eq!(data.edges(), 4);
        assert!(!data.edges.iter().any(|e| e.src == 2 && e.dest == 3));
    }

    #[test]
    fn test_populate_backend() {
        let data = generate_graph(GraphShape::Line, 4, 0);
        let mut graph = MatrixGraph::undirected(4).unwrap();
        data.populate(&mut graph).unwrap();
        assert_eq!(graph.edge_count(), 3);
    }
}
