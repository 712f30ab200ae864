//! Step recording for explained solves.

use nanpure_core::{Digit, Position};

use crate::technique::TechniqueKind;

/// One (cell, digit) pair appearing in a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDigit {
    /// The cell.
    pub pos: Position,
    /// The digit placed in or removed from that cell.
    pub digit: Digit,
}

impl CellDigit {
    /// Creates a cell/digit pair.
    #[must_use]
    pub const fn new(pos: Position, digit: Digit) -> Self {
        Self { pos, digit }
    }
}

/// One recorded solver action.
///
/// A step names the technique that fired, the digits it placed, and the
/// candidates it eliminated. Replaying the placements of every step over
/// the original puzzle reproduces the solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The technique that produced this step.
    pub technique: TechniqueKind,
    /// Digits written into cells by this step.
    pub placements: Vec<CellDigit>,
    /// Candidates removed by this step.
    pub eliminations: Vec<CellDigit>,
}

/// Collects [`Step`]s during a solve.
///
/// The recorder is either enabled (explained solve) or disabled (plain
/// solve). A disabled recorder ignores every [`record`](Self::record) call,
/// so the solving code is identical in both modes.
#[derive(Debug, Clone)]
pub struct StepRecorder {
    record: bool,
    steps: Vec<Step>,
}

impl StepRecorder {
    /// Creates a recorder that discards every step.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            record: false,
            steps: Vec::new(),
        }
    }

    /// Creates a recorder that keeps every step.
    #[must_use]
    pub const fn enabled() -> Self {
        Self {
            record: true,
            steps: Vec::new(),
        }
    }

    /// Returns `true` if steps are being kept.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.record
    }

    /// Records one step. Steps with no placements and no eliminations are
    /// dropped, as is everything on a disabled recorder.
    pub fn record(&mut self, technique: TechniqueKind, placements: &[CellDigit], eliminations: &[CellDigit]) {
        if !self.record || (placements.is_empty() && eliminations.is_empty()) {
            return;
        }
        self.steps.push(Step {
            technique,
            placements: placements.to_vec(),
            eliminations: eliminations.to_vec(),
        });
    }

    /// Consumes the recorder and returns the recorded steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_recorder_keeps_nothing() {
        let mut recorder = StepRecorder::disabled();
        recorder.record(
            TechniqueKind::NakedSingle,
            &[CellDigit::new(Position::new(0, 0), Digit::D5)],
            &[],
        );
        assert!(!recorder.is_enabled());
        assert!(recorder.into_steps().is_empty());
    }

    #[test]
    fn test_enabled_recorder_keeps_steps_in_order() {
        let mut recorder = StepRecorder::enabled();
        recorder.record(
            TechniqueKind::NakedSingle,
            &[CellDigit::new(Position::new(0, 0), Digit::D5)],
            &[],
        );
        recorder.record(
            TechniqueKind::PlacementPropagation,
            &[],
            &[CellDigit::new(Position::new(0, 1), Digit::D5)],
        );
        let steps = recorder.into_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].technique, TechniqueKind::NakedSingle);
        assert_eq!(steps[1].technique, TechniqueKind::PlacementPropagation);
    }

    #[test]
    fn test_empty_steps_are_dropped() {
        let mut recorder = StepRecorder::enabled();
        recorder.record(TechniqueKind::NakedSingle, &[], &[]);
        assert!(recorder.into_steps().is_empty());
    }
}
