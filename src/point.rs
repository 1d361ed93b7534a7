//! The point record ranked by every algorithm in this crate.

/// Which half of a split a point landed in during a marriage step.
///
/// Only meaningful between tagging and the sweep that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Side {
    #[default]
    Lower,
    Upper,
}

/// A point in multi-objective space, together with its dominance rank.
///
/// `tiebreaker` must be unique within a [`Problem`](crate::Problem): it turns
/// every axis into a strict total order, and ranking relies on that.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub(crate) values: Vec<f64>,
    pub(crate) tiebreaker: i64,
    pub(crate) external_id: i64,
    pub(crate) rank: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) side: Side,
    #[cfg_attr(feature = "serde", serde(skip, default = "valid_default"))]
    pub(crate) valid: bool,
}

#[cfg(feature = "serde")]
fn valid_default() -> bool {
    true
}

impl Point {
    /// Create a point. The external id defaults to the tiebreaker.
    pub fn new(values: Vec<f64>, tiebreaker: i64) -> Self {
        Self {
            values,
            tiebreaker,
            external_id: tiebreaker,
            rank: 0,
            side: Side::Lower,
            valid: true,
        }
    }

    /// Attach a caller-defined tag that survives reordering.
    pub fn with_external_id(mut self, external_id: i64) -> Self {
        self.external_id = external_id;
        self
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn tiebreaker(&self) -> i64 {
        self.tiebreaker
    }

    pub fn external_id(&self) -> i64 {
        self.external_id
    }

    /// Number of other points this one dominates.
    ///
    /// Only final after a ranking call on the owning problem has returned `Ok`.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Copy of this point reduced to its first `dimensions` values, with a
    /// fresh rank. Tiebreaker and id are carried over unchanged.
    pub(crate) fn project(&self, dimensions: usize, valid: bool) -> Self {
        Self {
            values: self.values[..dimensions].to_vec(),
            tiebreaker: self.tiebreaker,
            external_id: self.external_id,
            rank: 0,
            side: Side::Lower,
            valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_point_is_unranked_and_valid() {
        let p = Point::new(vec![1.0, 2.0], 7);
        assert_eq!(p.rank(), 0);
        assert_eq!(p.external_id(), 7);
        assert!(p.valid);
    }

    #[test]
    fn projection_drops_trailing_axes_and_keeps_tiebreaker() {
        let mut p = Point::new(vec![1.0, 2.0, 3.0], 4).with_external_id(99);
        p.rank = 5;
        let q = p.project(2, false);
        assert_eq!(q.values(), &[1.0, 2.0]);
        assert_eq!(q.tiebreaker(), 4);
        assert_eq!(q.external_id(), 99);
        assert_eq!(q.rank(), 0);
        assert!(!q.valid);
    }
}
