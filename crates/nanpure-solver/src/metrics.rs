//! Solve-effort metrics.

use crate::technique::TechniqueKind;

/// Counters accumulated over one solver run.
///
/// A fresh `Metrics` starts at zero and is filled in by the logical phase
/// and, when that phase stalls, by the backtracking search. The rating
/// module turns these counters into a difficulty score.
///
/// # Examples
///
/// ```
/// use nanpure_solver::{Metrics, TechniqueKind};
///
/// let mut metrics = Metrics::default();
/// metrics.steps += 1;
/// metrics.techniques_used.push(TechniqueKind::NakedSingle);
///
/// assert_eq!(metrics.singles(), 1);
/// assert!(!metrics.used_backtracking());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metrics {
    /// Total placements: one per logical placement, plus one per digit
    /// tried by the backtracking search.
    pub steps: u64,
    /// Number of times the search undid a placement.
    pub backtracks: u64,
    /// Every technique application, in order of use.
    pub techniques_used: Vec<TechniqueKind>,
}

impl Metrics {
    /// Counts the naked and hidden single applications.
    #[must_use]
    pub fn singles(&self) -> usize {
        self.techniques_used
            .iter()
            .filter(|kind| kind.is_single())
            .count()
    }

    /// Counts the naked and hidden pair applications.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.techniques_used
            .iter()
            .filter(|kind| kind.is_pair())
            .count()
    }

    /// Returns `true` if the run fell back to backtracking search.
    #[must_use]
    pub fn used_backtracking(&self) -> bool {
        self.techniques_used
            .contains(&TechniqueKind::Backtracking)
    }
}

#[cfg(test)]
mod tests {
    use nanpure_core::UnitKind;

    use super::*;

    #[test]
    fn test_counts_by_category() {
        let metrics = Metrics {
            steps: 10,
            backtracks: 0,
            techniques_used: vec![
                TechniqueKind::NakedSingle,
                TechniqueKind::HiddenSingle(UnitKind::Row),
                TechniqueKind::NakedPair(UnitKind::Box),
                TechniqueKind::HiddenPair(UnitKind::Column),
                TechniqueKind::NakedTriple(UnitKind::Row),
                TechniqueKind::XWing(UnitKind::Row),
            ],
        };
        assert_eq!(metrics.singles(), 2);
        assert_eq!(metrics.pairs(), 2);
        assert!(!metrics.used_backtracking());
    }

    #[test]
    fn test_used_backtracking() {
        let metrics = Metrics {
            steps: 0,
            backtracks: 3,
            techniques_used: vec![TechniqueKind::Backtracking],
        };
        assert!(metrics.used_backtracking());
    }
}
