use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    /// Failed to read input: {0}
    Io(String),
    /// Input is empty, expected a vertex count
    MissingVertexCount,
    /// Invalid token `{token}` at position {position}, expected an integer
    InvalidToken { token: String, position: usize },
    /// Vertex count must be positive
    NoVertices,
    /// Cannot allocate a {0} x {0} graph
    TooManyVertices(usize),
    /// Incomplete edge at end of input, expected `u v capacity weight`
    TruncatedEdge,
    /// Edge ({from}, {to}) references a vertex outside [0, {vertex_count})
    OutOfRange {
        from: i64,
        to: i64,
        vertex_count: usize,
    },
    /// Invalid capacity on edge ({from}, {to}), expected non-negative value
    NegativeCapacity { from: usize, to: usize },
    /// Invariant violated: {0}
    InvariantViolated(String),
    /// Residual graph still has a path from source to sink
    NotMaximal,
    /// Residual graph has a negative-cost cycle, flow is not of minimum cost
    NotMinimal,
    /// Max flow algorithm specific error
    AlgoSpecific(String),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
