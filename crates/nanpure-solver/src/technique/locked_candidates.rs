use nanpure_core::{Digit, Position, Unit};
use tinyvec::ArrayVec;

use super::{Technique, TechniqueKind};
use crate::{EngineContext, recorder::CellDigit};

const NAME_POINTING: &str = "locked candidates (pointing)";
const NAME_CLAIMING: &str = "locked candidates (claiming)";

/// A technique that removes candidates when a box confines a digit to a
/// single row or column.
///
/// If every cell of a box that can hold a digit lies in one row (or
/// column), the digit must be placed there, so it is removed from the
/// rest of that row (or column) outside the box.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedPointing;

impl LockedPointing {
    /// Creates a new `LockedPointing` technique.
    #[must_use]
    pub const fn new() -> Self {
        LockedPointing
    }
}

impl Technique for LockedPointing {
    fn name(&self) -> &'static str {
        NAME_POINTING
    }

    fn apply(&self, cx: &mut EngineContext) -> bool {
        for box_index in 0..9 {
            for digit in Digit::ALL {
                let cells = digit_cells(cx, Unit::Box(box_index), digit);
                let [first, rest @ ..] = &cells[..] else {
                    continue;
                };

                if rest.iter().all(|pos| pos.row() == first.row()) {
                    let removals =
                        removals_outside_box(cx, Unit::Row(first.row()), box_index, digit);
                    if cx.eliminate(TechniqueKind::LockedPointing, &removals) {
                        return true;
                    }
                }
                if rest.iter().all(|pos| pos.col() == first.col()) {
                    let removals =
                        removals_outside_box(cx, Unit::Column(first.col()), box_index, digit);
                    if cx.eliminate(TechniqueKind::LockedPointing, &removals) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// A technique that removes candidates when a row or column confines a
/// digit to a single box.
///
/// If every cell of a row (or column) that can hold a digit lies in one
/// box, the digit is removed from the rest of that box.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedClaiming;

impl LockedClaiming {
    /// Creates a new `LockedClaiming` technique.
    #[must_use]
    pub const fn new() -> Self {
        LockedClaiming
    }
}

impl Technique for LockedClaiming {
    fn name(&self) -> &'static str {
        NAME_CLAIMING
    }

    fn apply(&self, cx: &mut EngineContext) -> bool {
        let lines = (0..9).map(Unit::Row).chain((0..9).map(Unit::Column));
        for line in lines {
            for digit in Digit::ALL {
                let cells = digit_cells(cx, line, digit);
                let [first, rest @ ..] = &cells[..] else {
                    continue;
                };

                let box_index = first.box_index();
                if rest.iter().all(|pos| pos.box_index() == box_index) {
                    let mut removals = Vec::new();
                    for pos in Unit::Box(box_index).cells() {
                        if !line.contains(pos) && cx.candidates_at(pos).contains(digit) {
                            removals.push(CellDigit::new(pos, digit));
                        }
                    }
                    if cx.eliminate(TechniqueKind::LockedClaiming, &removals) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

fn digit_cells(cx: &EngineContext, unit: Unit, digit: Digit) -> ArrayVec<[Position; 9]> {
    let mut cells = ArrayVec::new();
    for pos in unit.cells() {
        if cx.candidates_at(pos).contains(digit) {
            cells.push(pos);
        }
    }
    cells
}

fn removals_outside_box(
    cx: &EngineContext,
    line: Unit,
    box_index: u8,
    digit: Digit,
) -> Vec<CellDigit> {
    line.cells()
        .into_iter()
        .filter(|pos| pos.box_index() != box_index && cx.candidates_at(*pos).contains(digit))
        .map(|pos| CellDigit::new(pos, digit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_pointing_eliminates_along_row() {
        // In box 0, digit 1 is confined to row 0: rows 1 and 2 of the box
        // are fully occupied. The 1 is removed from the rest of row 0.
        TechniqueTester::from_str(
            "
            ___ ___ ___
            456 ___ ___
            789 ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&LockedPointing::new())
        .assert_removed_includes(Position::new(0, 3), [Digit::D1])
        .assert_removed_includes(Position::new(0, 8), [Digit::D1])
        // Cells outside row 0 keep the digit.
        .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_claiming_eliminates_inside_box() {
        // In row 0, digit 1 can only sit in box 0: columns 3 to 8 of the
        // row are occupied. The 1 is removed from the other box 0 cells.
        TechniqueTester::from_str(
            "
            ___ 345 678
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&LockedClaiming::new())
        .assert_removed_includes(Position::new(1, 0), [Digit::D1])
        .assert_removed_includes(Position::new(2, 2), [Digit::D1]);
    }

    #[test]
    fn test_no_change_on_open_grid() {
        TechniqueTester::from_str(
            "
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&LockedPointing::new())
        .assert_no_change(Position::new(0, 0))
        .apply_once(&LockedClaiming::new())
        .assert_no_change(Position::new(8, 8));
    }
}
