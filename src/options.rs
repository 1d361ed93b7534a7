//! Configuration for [`Session::solve`](crate::Session::solve).

/// Which ranker a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Bentley's divide-and-conquer, O(n log^(d-1) n).
    #[default]
    DivideAndConquer,
    /// Direct pairwise comparison, O(n² · d).
    BruteForce,
}

/// How a session assigns tiebreakers before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TiebreakStrategy {
    /// Keep whatever tiebreakers are set (insertion index unless overwritten).
    #[default]
    InsertionIndex,
    /// Points with a smaller coordinate sum win ties.
    ///
    /// Points are ordered by `trunc(-Σ values)`, then by insertion index, and
    /// receive tiebreakers `0..n` in that order, so the result is always unique.
    CoordinateSum,
}

/// Options controlling a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOptions {
    pub algorithm: Algorithm,
    pub tiebreak: TiebreakStrategy,
}

impl SolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the ranker.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Select the tiebreak assignment applied at solve time.
    pub fn with_tiebreak(mut self, tiebreak: TiebreakStrategy) -> Self {
        self.tiebreak = tiebreak;
        self
    }
}
