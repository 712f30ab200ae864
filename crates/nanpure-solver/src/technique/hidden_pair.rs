use nanpure_core::{Digit, DigitSet, Position, Unit};
use tinyvec::ArrayVec;

use super::{Technique, TechniqueKind};
use crate::{EngineContext, recorder::CellDigit};

const NAME: &str = "hidden pair";

/// A technique that strips extra candidates off a hidden pair.
///
/// When two digits can each only sit in the same two cells of a unit,
/// those cells must hold exactly those digits, so every other candidate
/// is removed from them.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenPair;

impl HiddenPair {
    /// Creates a new `HiddenPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenPair
    }
}

impl Technique for HiddenPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, cx: &mut EngineContext) -> bool {
        for unit in Unit::all() {
            let placements: Vec<(Digit, ArrayVec<[Position; 9]>)> = Digit::ALL
                .into_iter()
                .map(|digit| {
                    let mut cells = ArrayVec::new();
                    for pos in unit.cells() {
                        if cx.candidates_at(pos).contains(digit) {
                            cells.push(pos);
                        }
                    }
                    (digit, cells)
                })
                .collect();

            for (i, (d1, cells1)) in placements.iter().enumerate() {
                if cells1.len() != 2 {
                    continue;
                }
                for (d2, cells2) in &placements[i + 1..] {
                    if cells2 != cells1 {
                        continue;
                    }
                    let pair = DigitSet::from_iter([*d1, *d2]);
                    let mut removals = Vec::new();
                    for &pos in cells1 {
                        for digit in cx.candidates_at(pos).difference(pair) {
                            removals.push(CellDigit::new(pos, digit));
                        }
                    }
                    if cx.eliminate(TechniqueKind::HiddenPair(unit.kind()), &removals) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_hidden_pair_in_row() {
        // In row 0, digits 1 and 2 fit only in (0, 0) and (0, 1): the
        // other open row cell (0, 2) sees a 1 and a 2 through its column.
        // The pair cells lose their remaining candidate 9.
        TechniqueTester::from_str(
            "
            ___ 345 678
            ___ ___ ___
            ___ ___ ___
            __1 ___ ___
            __2 ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&HiddenPair::new())
        .assert_removed_includes(Position::new(0, 0), [Digit::D9])
        .assert_removed_includes(Position::new(0, 1), [Digit::D9]);
    }

    #[test]
    fn test_no_change_without_hidden_pair() {
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
        .apply_once(&HiddenPair::new())
        .assert_no_change(Position::new(0, 0))
        .assert_no_change(Position::new(4, 4));
    }
}
