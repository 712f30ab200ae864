use nanpure_core::{Unit, UnitKind};

use super::{Technique, TechniqueKind};
use crate::{EngineContext, recorder::CellDigit};

const NAME_PAIR: &str = "naked pair";
const NAME_TRIPLE: &str = "naked triple";

/// A technique that removes candidates using naked pairs and triples.
///
/// When exactly `size` cells of a unit share one identical candidate set
/// of `size` digits, those digits are locked into those cells and removed
/// from every other cell of the unit.
#[derive(Debug, Clone, Copy)]
pub struct NakedTuple {
    size: usize,
}

impl NakedTuple {
    /// Creates the pair-sized tuple technique.
    #[must_use]
    pub const fn pair() -> Self {
        Self { size: 2 }
    }

    /// Creates the triple-sized tuple technique.
    #[must_use]
    pub const fn triple() -> Self {
        Self { size: 3 }
    }

    const fn kind(self, unit_kind: UnitKind) -> TechniqueKind {
        match self.size {
            2 => TechniqueKind::NakedPair(unit_kind),
            _ => TechniqueKind::NakedTriple(unit_kind),
        }
    }
}

impl Technique for NakedTuple {
    fn name(&self) -> &'static str {
        match self.size {
            2 => NAME_PAIR,
            _ => NAME_TRIPLE,
        }
    }

    fn apply(&self, cx: &mut EngineContext) -> bool {
        for unit in Unit::all() {
            let cells = unit.cells();
            for (i, &anchor) in cells.iter().enumerate() {
                let tuple = cx.candidates_at(anchor);
                if tuple.len() != self.size {
                    continue;
                }
                // Only act on the first cell carrying this set, so each
                // tuple is considered once per unit.
                if cells[..i].iter().any(|&pos| cx.candidates_at(pos) == tuple) {
                    continue;
                }
                let matching = cells
                    .iter()
                    .filter(|&&pos| cx.candidates_at(pos) == tuple)
                    .count();
                if matching != self.size {
                    continue;
                }

                let mut removals = Vec::new();
                for &pos in &cells {
                    if cx.candidates_at(pos) == tuple {
                        continue;
                    }
                    for digit in tuple.intersection(cx.candidates_at(pos)) {
                        removals.push(CellDigit::new(pos, digit));
                    }
                }
                if cx.eliminate(self.kind(unit.kind()), &removals) {
                    return true;
                }
            }
        }
        false
    }
}
