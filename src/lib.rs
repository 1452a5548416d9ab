//! Graph contract with two interchangeable storage backends and
//! backend-agnostic traversals.
//!
//! markgraph defines a small [`Graph`] trait (vertex/edge operations plus a
//! per-vertex mark array) and realizes it twice: [`MatrixGraph`] keeps a
//! dense adjacency matrix, [`EdgeListGraph`] keeps a single list of edge
//! records. BFS and DFS are written purely against the trait.
//!
//! # Quick Start
//!
//! ```rust
//! use markgraph::{Graph, MatrixGraph, bfs::bfs, dfs::dfs};
//!
//! let mut graph = MatrixGraph::undirected(4).unwrap();
//! graph.set_edge(0, 1, 1).unwrap();
//! graph.set_edge(0, 2, 1).unwrap();
//! graph.set_edge(2, 3, 1).unwrap();
//!
//! assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
//! assert_eq!(dfs(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
//! ```
//!
//! # Public API Organization
//!
//! ## Core Types
//! - [`Graph`] - the backend contract
//! - [`MatrixGraph`] - adjacency-matrix backend
//! - [`EdgeListGraph`] - edge-list backend
//! - [`Edge`], [`Weight`], [`Mark`]
//!
//! ## Configuration
//! - [`BackendKind`], [`GraphConfig`], [`open_graph()`]
//!
//! ## Traversals
//! - [`bfs`] - breadth-first order, complete BFS, BFS trees, shortest paths
//! - [`dfs`] - recursive DFS, complete DFS, hook-driven DFS
//! - [`algo`] - components, degree ranking, reachability
//!
//! ## Utilities
//! - [`GraphError`] - error handling
//! - [`SharedGraph`] - lock-guarded handle for concurrent traversal

pub mod algo;
pub mod backend;
pub mod bench_utils;
pub mod bfs;
pub mod config;
pub mod dfs;
pub mod errors;
pub mod shared;
pub mod visit;

pub use backend::{Edge, EdgeListGraph, Graph, Mark, MatrixGraph, Weight};
pub use config::{BackendKind, GraphConfig, open_graph};
pub use dfs::{DfsEvent, DfsVisitor};
pub use errors::{GraphError, GraphResult};
pub use shared::SharedGraph;
pub use visit::{VisitMap, VisitState};
