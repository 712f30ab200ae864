//! Shared state of a solver run.

use nanpure_core::{Digit, Grid, Position, Unit};

use crate::{
    CandidateGrid, Metrics, StepRecorder,
    recorder::CellDigit,
    technique::{TechniqueKind, all_techniques},
};

/// The mutable state a technique operates on: the grid, its candidate
/// sets, the effort metrics, and the step recorder.
///
/// Techniques read the grid and candidates directly and mutate them only
/// through [`place`](Self::place) and [`eliminate`](Self::eliminate), which
/// keep the candidates, metrics, and recorded steps consistent with every
/// change.
#[derive(Debug, Clone)]
pub struct EngineContext {
    grid: Grid,
    candidates: CandidateGrid,
    metrics: Metrics,
    recorder: StepRecorder,
}

impl EngineContext {
    /// Creates a context for solving `grid`.
    #[must_use]
    pub fn new(grid: Grid, recorder: StepRecorder) -> Self {
        let candidates = CandidateGrid::from_grid(&grid);
        Self {
            grid,
            candidates,
            metrics: Metrics::default(),
            recorder,
        }
    }

    /// Returns the current grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub const fn candidates_at(&self, pos: Position) -> nanpure_core::DigitSet {
        self.candidates.at(pos)
    }

    /// Returns the metrics accumulated so far.
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Places a digit found by `technique` and propagates the constraint.
    ///
    /// The placement clears the cell's candidates and removes the digit
    /// from every peer in the cell's row, column, and box. The placement
    /// and the propagated eliminations are recorded as two separate steps.
    pub fn place(&mut self, pos: Position, digit: Digit, technique: TechniqueKind) {
        self.grid.set(pos, Some(digit));
        self.metrics.steps += 1;
        self.metrics.techniques_used.push(technique);
        self.recorder
            .record(technique, &[CellDigit::new(pos, digit)], &[]);
        self.candidates.clear(pos);

        let mut propagated = Vec::new();
        for unit in [
            Unit::Row(pos.row()),
            Unit::Column(pos.col()),
            Unit::Box(pos.box_index()),
        ] {
            for peer in unit.cells() {
                if peer != pos && self.candidates.remove(peer, digit) {
                    propagated.push(CellDigit::new(peer, digit));
                }
            }
        }
        self.recorder
            .record(TechniqueKind::PlacementPropagation, &[], &propagated);
    }

    /// Applies the candidate eliminations found by `technique`.
    ///
    /// Only removals that actually change a candidate set are counted and
    /// recorded. Returns `true` if at least one candidate was removed; the
    /// technique application is tallied only in that case.
    pub fn eliminate(&mut self, technique: TechniqueKind, removals: &[CellDigit]) -> bool {
        let mut removed = Vec::new();
        for &removal in removals {
            if self.candidates.remove(removal.pos, removal.digit) {
                removed.push(removal);
            }
        }
        if removed.is_empty() {
            return false;
        }
        self.metrics.techniques_used.push(technique);
        self.recorder.record(technique, &[], &removed);
        true
    }

    /// Consumes the context, yielding the grid, metrics, and recorder.
    #[must_use]
    pub fn into_parts(self) -> (Grid, Metrics, StepRecorder) {
        (self.grid, self.metrics, self.recorder)
    }
}

/// Runs the logical techniques until none of them makes progress.
///
/// Each pass tries the techniques in order from cheapest to most advanced
/// and applies the first finding. After every change the pass restarts from
/// the cheapest technique, so advanced patterns only fire when no simpler
/// deduction remains.
pub fn run_to_quiescence(cx: &mut EngineContext) {
    let techniques = all_techniques();
    'outer: while !cx.grid().is_complete() {
        for technique in &techniques {
            if technique.apply(cx) {
                continue 'outer;
            }
        }
        break;
    }
}

#[cfg(test)]
mod tests {
    use nanpure_core::DigitSet;

    use super::*;

    #[test]
    fn test_place_propagates_to_peers() {
        let grid = Grid::empty();
        let mut cx = EngineContext::new(grid, StepRecorder::enabled());

        cx.place(Position::new(0, 0), Digit::D5, TechniqueKind::NakedSingle);

        assert_eq!(cx.grid().get(Position::new(0, 0)), Some(Digit::D5));
        assert!(cx.candidates_at(Position::new(0, 0)).is_empty());
        assert!(!cx.candidates_at(Position::new(0, 8)).contains(Digit::D5));
        assert!(!cx.candidates_at(Position::new(8, 0)).contains(Digit::D5));
        assert!(!cx.candidates_at(Position::new(2, 2)).contains(Digit::D5));
        assert!(cx.candidates_at(Position::new(4, 4)).contains(Digit::D5));

        assert_eq!(cx.metrics().steps, 1);
        let (_, _, recorder) = cx.into_parts();
        let steps = recorder.into_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].technique, TechniqueKind::NakedSingle);
        assert_eq!(steps[1].technique, TechniqueKind::PlacementPropagation);
        // 8 row peers + 8 column peers + 4 remaining box peers.
        assert_eq!(steps[1].eliminations.len(), 20);
    }

    #[test]
    fn test_eliminate_counts_only_real_removals() {
        let grid = Grid::empty();
        let mut cx = EngineContext::new(grid, StepRecorder::enabled());
        let pos = Position::new(3, 3);

        let removals = [CellDigit::new(pos, Digit::D1), CellDigit::new(pos, Digit::D2)];
        assert!(cx.eliminate(TechniqueKind::XWing(nanpure_core::UnitKind::Row), &removals));
        assert_eq!(cx.candidates_at(pos), DigitSet::ALL.difference(DigitSet::from_iter([Digit::D1, Digit::D2])));

        // Removing the same candidates again changes nothing and is not
        // tallied as a technique application.
        assert!(!cx.eliminate(TechniqueKind::XWing(nanpure_core::UnitKind::Row), &removals));
        assert_eq!(cx.metrics().techniques_used.len(), 1);
    }
}
