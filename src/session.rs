//! A stateful, index-addressed front end over [`Problem`].
//!
//! Suited to callers that cannot hand over structured data in one piece:
//! size the session, write values one coordinate at a time, solve, then read
//! results back by position.
//!
//! Solving permutes the point sequence. Results are therefore read *by final
//! position*: [`id_at`](Session::id_at) says which original point sits at a
//! position and [`rank_at`](Session::rank_at) gives its rank. Callers that
//! prefer insertion order can use [`ranks_by_insertion`](Session::ranks_by_insertion).

use tracing::debug;

use crate::dominance::brute_force_rank;
use crate::error::RankError;
use crate::options::{Algorithm, SolveOptions, TiebreakStrategy};
use crate::point::Point;
use crate::problem::Problem;
use crate::recursive::rank;

/// A caller-owned ranking context.
///
/// ```rust
/// use pareto_ecdf::Session;
///
/// let mut session = Session::new(3, 2);
/// for (i, (x, y)) in [(1.0, 1.0), (2.0, 2.0), (0.0, 3.0)].into_iter().enumerate() {
///     session.set_value(i, 0, x).unwrap();
///     session.set_value(i, 1, y).unwrap();
/// }
/// session.set_id(1, 500).unwrap();
/// session.solve().unwrap();
///
/// let (id, rank) = (0..3)
///     .map(|pos| (session.id_at(pos).unwrap(), session.rank_at(pos).unwrap()))
///     .find(|&(id, _)| id == 500)
///     .unwrap();
/// assert_eq!((id, rank), (500, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    problem: Problem,
    options: SolveOptions,
}

impl Session {
    /// Allocate `points` points over `dimensions` axes, all values zero.
    ///
    /// Each point's id and tiebreaker default to its insertion index.
    pub fn new(points: usize, dimensions: usize) -> Self {
        let mut problem = Problem::with_capacity(dimensions, points);
        for i in 0..points {
            // Zero values always match the declared dimension count.
            let _ = problem.push(Point::new(vec![0.0; dimensions], i as i64));
        }
        Self {
            problem,
            options: SolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SolveOptions {
        self.options
    }

    pub fn len(&self) -> usize {
        self.problem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problem.is_empty()
    }

    /// Set coordinate `dim` of the point inserted at `point`.
    pub fn set_value(&mut self, point: usize, dim: usize, value: f64) -> Result<(), RankError> {
        let dimensions = self.problem.dimensions();
        if dim >= dimensions {
            return Err(RankError::DimensionOutOfRange { dim, dimensions });
        }
        self.problem.point_mut(point)?.values[dim] = value;
        Ok(())
    }

    /// Tag the point inserted at `point` with a caller-defined id.
    pub fn set_id(&mut self, point: usize, id: i64) -> Result<(), RankError> {
        self.problem.point_mut(point)?.external_id = id;
        Ok(())
    }

    /// Override the tiebreaker of the point inserted at `point`.
    ///
    /// Uniqueness is checked when solving.
    pub fn set_tiebreaker(&mut self, point: usize, tiebreaker: i64) -> Result<(), RankError> {
        self.problem.point_mut(point)?.tiebreaker = tiebreaker;
        Ok(())
    }

    /// Assign tiebreakers from coordinate sums (see [`TiebreakStrategy::CoordinateSum`]).
    pub fn generate_tiebreak(&mut self) {
        let points = self.problem.points_mut();
        let mut keyed: Vec<(i64, usize)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let negated: f64 = -p.values.iter().sum::<f64>();
                (negated.trunc() as i64, i)
            })
            .collect();
        keyed.sort_unstable();
        for (tiebreaker, (_, i)) in keyed.into_iter().enumerate() {
            points[i].tiebreaker = tiebreaker as i64;
        }
    }

    /// Rank every point with the configured algorithm.
    pub fn solve(&mut self) -> Result<(), RankError> {
        if self.options.tiebreak == TiebreakStrategy::CoordinateSum {
            self.generate_tiebreak();
        }
        debug!(
            points = self.problem.len(),
            dimensions = self.problem.dimensions(),
            algorithm = ?self.options.algorithm,
            "solving session"
        );
        match self.options.algorithm {
            Algorithm::DivideAndConquer => rank(&mut self.problem),
            Algorithm::BruteForce => brute_force_rank(&mut self.problem),
        }
    }

    /// Rank of the point at final position `position`.
    pub fn rank_at(&self, position: usize) -> Result<usize, RankError> {
        self.at(position).map(Point::rank)
    }

    /// Id of the point at final position `position`.
    pub fn id_at(&self, position: usize) -> Result<i64, RankError> {
        self.at(position).map(Point::external_id)
    }

    /// `(id, rank)` for every position, in final order.
    pub fn results(&self) -> Vec<(i64, usize)> {
        self.problem
            .iter()
            .map(|p| (p.external_id(), p.rank()))
            .collect()
    }

    /// Ranks indexed by insertion order.
    pub fn ranks_by_insertion(&self) -> Vec<usize> {
        self.problem.ranks_by_insertion()
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    fn at(&self, position: usize) -> Result<&Point, RankError> {
        self.problem
            .point_at(position)
            .ok_or(RankError::PointOutOfRange {
                index: position,
                len: self.problem.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rows: &[[f64; 2]]) -> Session {
        let mut s = Session::new(rows.len(), 2);
        for (i, row) in rows.iter().enumerate() {
            for (d, &v) in row.iter().enumerate() {
                s.set_value(i, d, v).unwrap();
            }
        }
        s
    }

    #[test]
    fn out_of_range_writes_are_rejected() {
        let mut s = Session::new(2, 2);
        assert_eq!(
            s.set_value(2, 0, 1.0),
            Err(RankError::PointOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            s.set_value(0, 2, 1.0),
            Err(RankError::DimensionOutOfRange {
                dim: 2,
                dimensions: 2
            })
        );
        assert_eq!(
            s.rank_at(5),
            Err(RankError::PointOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn ids_default_to_insertion_index() {
        let mut s = filled(&[[3.0, 3.0], [1.0, 1.0], [2.0, 2.0]]);
        s.solve().unwrap();
        let mut results = s.results();
        results.sort_unstable();
        assert_eq!(results, vec![(0, 2), (1, 0), (2, 1)]);
        assert_eq!(s.ranks_by_insertion(), vec![2, 0, 1]);
    }

    #[test]
    fn positional_reads_agree_with_results() {
        let mut s = filled(&[[1.0, 5.0], [5.0, 1.0], [3.0, 3.0], [4.0, 4.0]]);
        s.solve().unwrap();
        for (pos, &(id, r)) in s.results().iter().enumerate() {
            assert_eq!(s.id_at(pos).unwrap(), id);
            assert_eq!(s.rank_at(pos).unwrap(), r);
        }
    }

    #[test]
    fn coordinate_sum_tiebreak_is_unique() {
        // Raw trunc(-sum) + index would give -1 for both points.
        let mut s = filled(&[[0.5, 0.5], [1.0, 1.0]]);
        s.generate_tiebreak();
        let tbs: Vec<i64> = s.problem().points().iter().map(Point::tiebreaker).collect();
        assert_eq!(tbs, vec![1, 0]);
        s.solve().unwrap();
        assert_eq!(s.ranks_by_insertion(), vec![0, 1]);
    }

    #[test]
    fn duplicate_tiebreaker_fails_solve() {
        let mut s = filled(&[[0.0, 0.0], [1.0, 1.0]]);
        s.set_tiebreaker(1, 0).unwrap();
        assert_eq!(
            s.solve(),
            Err(RankError::DuplicateTiebreaker { tiebreaker: 0 })
        );
    }

    #[test]
    fn brute_force_option_agrees() {
        let rows = [[1.0, 2.0], [2.0, 1.0], [2.0, 2.0], [0.0, 0.0], [2.0, 2.0]];
        let mut fast = filled(&rows);
        let mut slow = filled(&rows).with_options(
            SolveOptions::new()
                .with_algorithm(Algorithm::BruteForce)
                .with_tiebreak(TiebreakStrategy::InsertionIndex),
        );
        fast.solve().unwrap();
        slow.solve().unwrap();
        assert_eq!(fast.ranks_by_insertion(), slow.ranks_by_insertion());
    }
}
