//! Pairwise dominance and the quadratic reference ranker.

use tracing::debug;

use crate::error::RankError;
use crate::point::Point;
use crate::problem::Problem;

/// Does `a` weakly dominate `b`?
///
/// `a` must be at least `b` on every axis. On an axis where the two are
/// equal, `a` must also carry the larger (or equal) tiebreaker. The check is
/// repeated per tied axis, so this is dominance over the composite keys
/// `(value, tiebreaker)` that the sorts use, not a single final tie-break.
///
/// ```rust
/// use pareto_ecdf::{dominates, Point};
///
/// let a = Point::new(vec![4.0, 4.0], 3);
/// let b = Point::new(vec![3.0, 3.0], 2);
/// let c = Point::new(vec![1.0, 5.0], 0);
/// assert!(dominates(&a, &b));
/// assert!(!dominates(&a, &c));
/// ```
pub fn dominates(a: &Point, b: &Point) -> bool {
    for (&av, &bv) in a.values.iter().zip(b.values.iter()) {
        if av < bv {
            return false;
        }
        if av == bv && a.tiebreaker < b.tiebreaker {
            return false;
        }
    }
    true
}

/// Rank every point by direct pairwise comparison. O(n² · d).
///
/// Serves as the oracle the divide-and-conquer rankers are checked against.
/// Ranks are reset first, and the current order is left as it was.
pub fn brute_force_rank(problem: &mut Problem) -> Result<(), RankError> {
    problem.reset();
    problem.validate()?;
    debug!(
        points = problem.len(),
        dimensions = problem.dimensions(),
        "brute-force ranking"
    );

    let points = problem.points_mut();
    for i in 0..points.len() {
        let count = (0..points.len())
            .filter(|&j| i != j && dominates(&points[i], &points[j]))
            .count();
        points[i].rank = count;
    }
    Ok(())
}
