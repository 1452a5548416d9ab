//! Configuration for backend selection.
//!
//! This module provides the configuration structures needed for choosing
//! between the adjacency-matrix and edge-list backends at runtime, plus the
//! [`open_graph`] factory that turns a configuration into a boxed
//! [`Graph`].

use serde::{Deserialize, Serialize};

use crate::backend::{EdgeListGraph, Graph, MatrixGraph};
use crate::errors::{GraphError, GraphResult};

/// Backend selection enum for choosing between storage implementations.
///
/// # Default Behavior
///
/// The default backend is [`BackendKind::Matrix`], which gives O(1) edge
/// lookups and ascending-id neighbor order.
///
/// # Examples
///
/// ```rust
/// use markgraph::{BackendKind, GraphConfig};
///
/// let cfg = GraphConfig::new(BackendKind::EdgeList, 8);
/// assert_eq!(cfg.backend, BackendKind::EdgeList);
/// assert_eq!(GraphConfig::default().backend, BackendKind::Matrix);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Dense `n x n` weight matrix
    ///
    /// **Use when you need:**
    /// - Constant-time `is_edge` / `weight`
    /// - Neighbors enumerated in ascending id order
    /// - Dense graphs where O(n^2) memory is acceptable
    #[default]
    Matrix,

    /// Single unordered list of edge records
    ///
    /// **Use when you need:**
    /// - Memory proportional to the number of edges
    /// - Small sparse graphs where O(E) lookups are acceptable
    EdgeList,
}

/// Complete configuration for graph construction.
///
/// # Default Configuration
///
/// ```rust
/// use markgraph::{BackendKind, GraphConfig};
/// let config = GraphConfig::default();
/// assert_eq!(config.backend, BackendKind::Matrix);
/// assert_eq!(config.vertices, 0);
/// assert!(!config.directed);
/// ```
///
/// # Examples
///
/// ```rust
/// use markgraph::GraphConfig;
///
/// let cfg = GraphConfig::edge_list(6).directed(true);
/// assert!(cfg.directed);
///
/// let parsed = GraphConfig::from_json(r#"{"backend": "matrix", "vertices": 4}"#).unwrap();
/// assert_eq!(parsed.vertices, 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Which backend to use for graph storage
    ///
    /// **Default:** [`BackendKind::Matrix`]
    pub backend: BackendKind,

    /// Number of vertices the graph starts with
    ///
    /// **Default:** `0`
    pub vertices: usize,

    /// Whether edges are one-way
    ///
    /// **Default:** `false`
    ///
    /// Undirected edges are symmetric and counted once in `edge_count()`.
    pub directed: bool,
}

impl GraphConfig {
    /// Create a new undirected configuration with the specified backend.
    pub fn new(backend: BackendKind, vertices: usize) -> Self {
        Self {
            backend,
            vertices,
            directed: false,
        }
    }

    /// Create a configuration for the adjacency-matrix backend.
    pub fn matrix(vertices: usize) -> Self {
        Self::new(BackendKind::Matrix, vertices)
    }

    /// Create a configuration for the edge-list backend.
    pub fn edge_list(vertices: usize) -> Self {
        Self::new(BackendKind::EdgeList, vertices)
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their defaults. A negative or non-integer vertex
    /// count, or an unknown backend name, is rejected with
    /// [`GraphError::InvalidArgument`].
    pub fn from_json(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::invalid_argument(format!("graph config: {e}")))
    }

    pub fn to_json(&self) -> GraphResult<String> {
        serde_json::to_string(self)
            .map_err(|e| GraphError::invalid_argument(format!("graph config: {e}")))
    }
}

/// Open a graph with the specified configuration.
///
/// This is the factory that allows runtime backend selection; both backends
/// implement the same [`Graph`] contract.
///
/// # Examples
/// ```rust
/// use markgraph::{GraphConfig, open_graph};
///
/// let mut graph = open_graph(&GraphConfig::edge_list(3)).unwrap();
/// graph.set_edge(0, 2, 5).unwrap();
/// assert_eq!(graph.weight(2, 0).unwrap(), 5);
/// ```
pub fn open_graph(cfg: &GraphConfig) -> GraphResult<Box<dyn Graph>> {
    #[cfg(feature = "logging")]
    log::debug!(
        "opening {:?} graph: vertices={} directed={}",
        cfg.backend,
        cfg.vertices,
        cfg.directed
    );
    match cfg.backend {
        BackendKind::Matrix => Ok(Box::new(MatrixGraph::new(cfg.vertices, cfg.directed)?)),
        BackendKind::EdgeList => Ok(Box::new(EdgeListGraph::new(cfg.vertices, cfg.directed)?)),
    }
}
