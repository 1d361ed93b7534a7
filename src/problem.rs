//! Point storage and the reorderable index sequence the rankers work on.
//!
//! A [`Problem`] owns its points in insertion order and keeps a separate
//! `order` of indices into that storage. Sorting only ever permutes `order`,
//! so no point payload is copied while the recursion reshuffles the sequence.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::RankError;
use crate::point::Point;

/// A dominance-ranking problem: `dimensions` axes and a set of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    dimensions: usize,
    points: Vec<Point>,
    order: Vec<usize>,
}

impl Problem {
    /// Create an empty problem over `dimensions` axes.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            points: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Create an empty problem with room for `points` points.
    pub fn with_capacity(dimensions: usize, points: usize) -> Self {
        Self {
            dimensions,
            points: Vec::with_capacity(points),
            order: Vec::with_capacity(points),
        }
    }

    /// Build a problem from raw rows.
    ///
    /// Tiebreaker and external id of each point are its row index.
    ///
    /// ```rust
    /// use pareto_ecdf::Problem;
    ///
    /// let problem = Problem::from_rows(&[vec![1.0, 5.0], vec![5.0, 1.0]]).unwrap();
    /// assert_eq!(problem.dimensions(), 2);
    /// assert_eq!(problem.len(), 2);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, RankError> {
        let dimensions = rows.first().map_or(0, Vec::len);
        let mut problem = Self::with_capacity(dimensions, rows.len());
        for (i, row) in rows.iter().enumerate() {
            problem.push(Point::new(row.clone(), i as i64))?;
        }
        Ok(problem)
    }

    /// Append a point, returning its insertion index.
    ///
    /// Rejects points whose value count does not match the problem or whose
    /// values are not finite. Tiebreaker uniqueness is checked by [`validate`](Self::validate).
    pub fn push(&mut self, point: Point) -> Result<usize, RankError> {
        let index = self.points.len();
        check_point(&point, index, self.dimensions)?;
        self.points.push(point);
        self.order.push(index);
        Ok(index)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point at `position` in the current order.
    ///
    /// Ranking permutes the order, so after a solve this is *not* the point
    /// inserted at `position`; read its external id to recover identity.
    pub fn point_at(&self, position: usize) -> Option<&Point> {
        self.order.get(position).map(|&i| &self.points[i])
    }

    /// Points in the current order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.order.iter().map(move |&i| &self.points[i])
    }

    /// Ranks in the current order.
    pub fn ranks_in_order(&self) -> Vec<usize> {
        self.iter().map(Point::rank).collect()
    }

    /// Ranks indexed by insertion order, independent of any sorting.
    pub fn ranks_by_insertion(&self) -> Vec<usize> {
        self.points.iter().map(Point::rank).collect()
    }

    /// Stable sort of the order by `values[axis]`, ties by tiebreaker.
    pub fn sort_by_axis(&mut self, axis: usize) -> Result<(), RankError> {
        if axis >= self.dimensions {
            return Err(RankError::DimensionOutOfRange {
                dim: axis,
                dimensions: self.dimensions,
            });
        }
        sort_by_axis(&self.points, &mut self.order, axis);
        Ok(())
    }

    /// Check every invariant the rankers rely on.
    pub fn validate(&self) -> Result<(), RankError> {
        let mut seen = HashSet::with_capacity(self.points.len());
        for (i, p) in self.points.iter().enumerate() {
            check_point(p, i, self.dimensions)?;
            if !seen.insert(p.tiebreaker) {
                return Err(RankError::DuplicateTiebreaker {
                    tiebreaker: p.tiebreaker,
                });
            }
        }
        Ok(())
    }

    /// Zero every rank and mark every point as counted.
    pub(crate) fn reset(&mut self) {
        for p in &mut self.points {
            p.rank = 0;
            p.valid = true;
        }
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub(crate) fn point_mut(&mut self, index: usize) -> Result<&mut Point, RankError> {
        let len = self.points.len();
        self.points
            .get_mut(index)
            .ok_or(RankError::PointOutOfRange { index, len })
    }

    /// Split borrow of storage and order for the recursive rankers.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Point], &mut [usize]) {
        (&mut self.points, &mut self.order)
    }
}

fn check_point(point: &Point, index: usize, dimensions: usize) -> Result<(), RankError> {
    if point.values.len() != dimensions {
        return Err(RankError::DimensionMismatch {
            point: index,
            expected: dimensions,
            got: point.values.len(),
        });
    }
    if let Some(dim) = point.values.iter().position(|v| !v.is_finite()) {
        return Err(RankError::NonFinite { point: index, dim });
    }
    Ok(())
}

/// Compare two points on `axis`, falling back to the tiebreaker.
pub(crate) fn axis_cmp(a: &Point, b: &Point, axis: usize) -> Ordering {
    a.values[axis]
        .partial_cmp(&b.values[axis])
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.tiebreaker.cmp(&b.tiebreaker))
}

/// Sort `order` (indices into `points`) ascending on `axis`.
pub(crate) fn sort_by_axis(points: &[Point], order: &mut [usize], axis: usize) {
    order.sort_by(|&i, &j| axis_cmp(&points[i], &points[j], axis));
}
