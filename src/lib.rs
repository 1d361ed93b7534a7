//! Multidimensional dominance ranking for multi-objective optimization.
//!
//! For every point in a set, count how many other points it weakly dominates
//! (is at least as large on every axis). Feeding negated objectives turns this
//! ECDF count into a maxima test: points with rank 0 in the negated problem
//! are the Pareto-optimal points of the original one.
//!
//! The naive computation is O(n² · d). [`rank`] uses Bentley's
//! multidimensional divide-and-conquer instead, dropping one dimension per
//! level of recursion until it reaches the two-dimensional sweep in
//! [`rank_pairwise`]. [`brute_force_rank`] is kept as a reference.
//!
//! Ties are resolved with a per-point `tiebreaker` that must be unique; see
//! [`dominates`] for the exact rule.

mod dominance;
mod error;
mod options;
mod pairwise;
mod point;
mod problem;
mod recursive;
mod session;

pub use dominance::{brute_force_rank, dominates};
pub use error::RankError;
pub use options::{Algorithm, SolveOptions, TiebreakStrategy};
pub use pairwise::rank_pairwise;
pub use point::Point;
pub use problem::Problem;
pub use recursive::rank;
pub use session::Session;

/// Rank raw rows and return the ranks in input order.
///
/// Each row's tiebreaker is its index.
///
/// ```rust
/// use pareto_ecdf::rank_rows;
///
/// let ranks = rank_rows(&[
///     vec![1.0, 5.0],
///     vec![5.0, 1.0],
///     vec![3.0, 3.0],
///     vec![4.0, 4.0],
/// ])
/// .unwrap();
/// assert_eq!(ranks, vec![0, 0, 0, 1]);
/// ```
pub fn rank_rows(rows: &[Vec<f64>]) -> Result<Vec<usize>, RankError> {
    let mut problem = Problem::from_rows(rows)?;
    rank(&mut problem)?;
    Ok(problem.ranks_by_insertion())
}
