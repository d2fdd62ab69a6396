use crate::shape::Dim;

/// Errors raised by intersection queries.
///
/// All of them are fatal to the query that detects them: no partial result is
/// produced and nothing is retried.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GjkError {
    /// Two shapes, or a shape and a dimension-specific operation, disagree on their dimension.
    #[error("dimension mismatch: expected a {expected} shape, found a {found} shape")]
    DimensionMismatch {
        /// The dimension required by the operation.
        expected: Dim,
        /// The dimension of the offending shape.
        found: Dim,
    },
    /// A support point was requested from a polytope without any vertex.
    #[error("a polytope must have at least one vertex")]
    EmptyShape,
    /// The simplex evolution was invoked on a simplex of invalid size.
    ///
    /// This indicates a broken internal invariant, not a user error.
    #[error("unsupported {dim} simplex size: {size}")]
    UnsupportedSimplexSize {
        /// The dimension of the simplex evolution state machine.
        dim: Dim,
        /// The number of points of the simplex.
        size: usize,
    },
}
