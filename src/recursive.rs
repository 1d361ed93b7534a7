//! k-dimensional divide-and-conquer ranking (Bentley's ECDF recursion).
//!
//! A d-dimensional problem is sorted on its last axis and split positionally
//! into `A` (lower half) and `B` (upper half). Pairs inside each half are
//! resolved by recursing at full dimension. Cross pairs are resolved by a
//! projection: a clone of every point with the last axis dropped, in which
//! only `A` clones are counted. Ranking the projection at `d - 1` gives each
//! `B` point the number of `A` points it dominates, since the last axis
//! already favours `B`. The recursion bottoms out in the 2-D sweep.
//!
//! Total cost is roughly O(n log^(d-1) n).

use tracing::{debug, error, trace};

use crate::error::RankError;
use crate::pairwise::ecdf2;
use crate::point::Point;
use crate::problem::{sort_by_axis, Problem};

/// Rank every point of `problem` by the number of points it dominates.
///
/// Problems with fewer than two dimensions are left with every rank at 0.
/// On error every rank is reset to 0, so a failed call exposes no partial
/// result.
///
/// ```rust
/// use pareto_ecdf::{rank, Problem};
///
/// let mut problem = Problem::from_rows(&[
///     vec![1.0, 1.0, 1.0],
///     vec![2.0, 2.0, 2.0],
///     vec![3.0, 0.0, 3.0],
/// ])
/// .unwrap();
/// rank(&mut problem).unwrap();
/// assert_eq!(problem.ranks_by_insertion(), vec![0, 1, 0]);
/// ```
pub fn rank(problem: &mut Problem) -> Result<(), RankError> {
    problem.reset();
    problem.validate()?;
    debug!(
        points = problem.len(),
        dimensions = problem.dimensions(),
        "divide-and-conquer ranking"
    );

    let dimensions = problem.dimensions();
    let (points, order) = problem.parts_mut();
    if let Err(e) = ecdfk(points, order, dimensions) {
        problem.reset();
        return Err(e);
    }
    Ok(())
}

/// Rank the points listed in `order` on axes `0..dimensions`.
pub(crate) fn ecdfk(
    points: &mut [Point],
    order: &mut [usize],
    dimensions: usize,
) -> Result<(), RankError> {
    let n = order.len();
    if n <= 1 {
        if let Some(&only) = order.first() {
            points[only].rank = 0;
        }
        return Ok(());
    }
    if dimensions < 2 {
        return Ok(());
    }
    if dimensions == 2 {
        ecdf2(points, order);
        return Ok(());
    }

    let axis = dimensions - 1;
    sort_by_axis(points, order, axis);
    let mid = n / 2;
    trace!(points = n, dimensions, lower = mid, upper = n - mid, "split on last axis");
    {
        let (lower, upper) = order.split_at_mut(mid);
        ecdfk(points, lower, dimensions)?;
        ecdfk(points, upper, dimensions)?;
    }

    // The halves were reshuffled internally but keep their members.
    sort_by_axis(points, order, axis);
    let mut projection = project(points, order, mid, axis)?;
    let mut projection_order: Vec<usize> = (0..n).collect();
    sort_by_axis(&projection, &mut projection_order, 0);
    ecdfk(&mut projection, &mut projection_order, axis)?;

    // Clone `i` was built from position `i`, so storage order is split order.
    for (position, (&i, clone)) in order.iter().zip(projection.iter()).enumerate() {
        let source = &mut points[i];
        if source.tiebreaker != clone.tiebreaker {
            error!(
                position,
                expected = source.tiebreaker,
                found = clone.tiebreaker,
                "projection does not line up with its source"
            );
            return Err(RankError::ProjectionMisaligned {
                position,
                expected: source.tiebreaker,
                found: clone.tiebreaker,
            });
        }
        if position >= mid {
            source.rank += clone.rank;
        }
    }
    trace!(points = n, dimensions, "merged projection");
    Ok(())
}

/// Clone the points in `order` down to `dimensions` axes.
///
/// A clone is counted only if it sits in the lower half and its source was
/// counted, so exclusions made by an enclosing projection carry through.
fn project(
    points: &[Point],
    order: &[usize],
    mid: usize,
    dimensions: usize,
) -> Result<Vec<Point>, RankError> {
    let mut projection = Vec::new();
    projection
        .try_reserve_exact(order.len())
        .map_err(|_| RankError::Allocation {
            points: order.len(),
        })?;
    projection.extend(order.iter().enumerate().map(|(position, &i)| {
        let source = &points[i];
        source.project(dimensions, position < mid && source.valid)
    }));
    Ok(projection)
}
