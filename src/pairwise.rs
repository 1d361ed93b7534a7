//! Two-dimensional divide-and-conquer ranking.
//!
//! Sort on axis 0 and split positionally into a lower half `A` and an upper
//! half `B`. Both halves are ranked recursively. The marriage step then
//! re-sorts the whole slice on axis 1 and sweeps it once: every `B` point
//! dominates exactly the (counted) `A` points seen before it, because axis 0
//! already favours `B` by construction of the split.

use tracing::{debug, trace};

use crate::error::RankError;
use crate::point::{Point, Side};
use crate::problem::{sort_by_axis, Problem};

/// Rank a two-dimensional problem in O(n log² n).
///
/// ```rust
/// use pareto_ecdf::{rank_pairwise, Problem};
///
/// let mut problem = Problem::from_rows(&[
///     vec![1.0, 5.0],
///     vec![5.0, 1.0],
///     vec![3.0, 3.0],
///     vec![4.0, 4.0],
/// ])
/// .unwrap();
/// rank_pairwise(&mut problem).unwrap();
/// assert_eq!(problem.ranks_by_insertion(), vec![0, 0, 0, 1]);
/// ```
pub fn rank_pairwise(problem: &mut Problem) -> Result<(), RankError> {
    if problem.dimensions() != 2 {
        return Err(RankError::UnsupportedDimension {
            expected: 2,
            got: problem.dimensions(),
        });
    }
    problem.reset();
    problem.validate()?;
    debug!(points = problem.len(), "pairwise ranking");

    let (points, order) = problem.parts_mut();
    ecdf2(points, order);
    Ok(())
}

/// Rank the points listed in `order` on axes 0 and 1.
///
/// Only points flagged `valid` contribute to other points' ranks.
pub(crate) fn ecdf2(points: &mut [Point], order: &mut [usize]) {
    let n = order.len();
    if n <= 1 {
        if let Some(&only) = order.first() {
            points[only].rank = 0;
        }
        return;
    }

    sort_by_axis(points, order, 0);
    let mid = n / 2;
    trace!(points = n, lower = mid, upper = n - mid, "split on axis 0");
    {
        let (lower, upper) = order.split_at_mut(mid);
        ecdf2(points, lower);
        ecdf2(points, upper);
    }

    for &i in &order[..mid] {
        points[i].side = Side::Lower;
    }
    for &i in &order[mid..] {
        points[i].side = Side::Upper;
    }
    sort_by_axis(points, order, 1);

    let mut counted = 0;
    for &i in order.iter() {
        let p = &mut points[i];
        match p.side {
            Side::Lower => counted += usize::from(p.valid),
            Side::Upper => p.rank += counted,
        }
    }
}
