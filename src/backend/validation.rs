//! Argument checks shared by the backends. Every contract operation runs
//! these before touching storage so a failed call never mutates the graph.

use crate::errors::{GraphError, GraphResult};

use super::{Mark, Weight};

pub(crate) fn check_vertex(v: usize, vertex_count: usize) -> GraphResult<()> {
    if v < vertex_count {
        Ok(())
    } else {
        Err(GraphError::out_of_range(v, vertex_count))
    }
}

pub(crate) fn check_pair(v1: usize, v2: usize, vertex_count: usize) -> GraphResult<()> {
    check_vertex(v1, vertex_count)?;
    check_vertex(v2, vertex_count)
}

pub(crate) fn check_weight(weight: Weight) -> GraphResult<()> {
    if weight > 0 {
        Ok(())
    } else {
        Err(GraphError::invalid_argument(format!(
            "edge weight must be positive, got {weight}"
        )))
    }
}

/// Number of cells an `n x n` matrix needs, rejecting sizes that overflow.
pub(crate) fn matrix_cells(n: usize) -> GraphResult<usize> {
    n.checked_mul(n).ok_or_else(|| {
        GraphError::invalid_argument(format!("{n} vertices exceed adjacency matrix capacity"))
    })
}

/// Zeroed mark array for `n` vertices, rejecting counts that cannot be allocated.
pub(crate) fn alloc_marks(n: usize) -> GraphResult<Vec<Mark>> {
    let mut marks = Vec::new();
    marks.try_reserve_exact(n).map_err(|e| {
        GraphError::invalid_argument(format!("cannot allocate marks for {n} vertices: {e}"))
    })?;
    marks.resize(n, 0);
    Ok(marks)
}
