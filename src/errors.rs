use thiserror::Error;

/// Error type for graph contract and traversal operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        GraphError::OutOfRange {
            vertex,
            vertex_count,
        }
    }

    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidArgument(msg.into())
    }
}
