//! Errors returned by problem construction and ranking.

use thiserror::Error;

/// Errors returned when building or ranking a [`Problem`](crate::Problem).
///
/// Every variant is an invariant violation or a resource failure. Degenerate
/// inputs (no points, a single point, fewer than two dimensions) are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A point's value count differs from the problem's dimension count.
    #[error("point {point} has {got} values, problem has {expected} dimensions")]
    DimensionMismatch {
        point: usize,
        expected: usize,
        got: usize,
    },
    /// A value was NaN or infinite.
    #[error("point value at [{point}][{dim}] is not finite")]
    NonFinite { point: usize, dim: usize },
    /// Two points share a tiebreaker, so the sort order is not total.
    #[error("tiebreaker {tiebreaker} is used by more than one point")]
    DuplicateTiebreaker { tiebreaker: i64 },
    /// The operation only works on a specific dimension count.
    #[error("operation requires {expected} dimensions, problem has {got}")]
    UnsupportedDimension { expected: usize, got: usize },
    /// A projection clone no longer lines up with its source point.
    #[error(
        "projection misaligned at position {position}: expected tiebreaker {expected}, found {found}"
    )]
    ProjectionMisaligned {
        position: usize,
        expected: i64,
        found: i64,
    },
    /// Storage for a projection could not be reserved.
    #[error("failed to allocate projection for {points} points")]
    Allocation { points: usize },
    /// A point index was past the end of the problem.
    #[error("point index {index} out of range for {len} points")]
    PointOutOfRange { index: usize, len: usize },
    /// A dimension index was past the problem's dimension count.
    #[error("dimension {dim} out of range for {dimensions} dimensions")]
    DimensionOutOfRange { dim: usize, dimensions: usize },
}
