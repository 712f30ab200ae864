use nanpure_core::{Digit, DigitSet, Position, Unit};
use tinyvec::ArrayVec;

use super::{Technique, TechniqueKind};
use crate::{EngineContext, recorder::CellDigit};

const NAME: &str = "hidden triple";

/// A technique that strips extra candidates off a hidden triple.
///
/// When three digits are jointly confined to three cells of a unit (each
/// digit fitting in one to three of them), those cells must hold exactly
/// those digits, so every other candidate is removed from them.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenTriple;

impl HiddenTriple {
    /// Creates a new `HiddenTriple` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenTriple
    }
}

impl Technique for HiddenTriple {
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
                .filter(|(_, cells)| (1..=3).contains(&cells.len()))
                .collect();

            for (i, (d1, cells1)) in placements.iter().enumerate() {
                for (j, (d2, cells2)) in placements.iter().enumerate().skip(i + 1) {
                    for (d3, cells3) in &placements[j + 1..] {
                        let mut union: ArrayVec<[Position; 9]> = ArrayVec::new();
                        for &pos in cells1.iter().chain(cells2).chain(cells3) {
                            if !union.contains(&pos) {
                                union.push(pos);
                            }
                        }
                        if union.len() != 3 {
                            continue;
                        }
                        let triple = DigitSet::from_iter([*d1, *d2, *d3]);
                        let mut removals = Vec::new();
                        for &pos in &union {
                            for digit in cx.candidates_at(pos).difference(triple) {
                                removals.push(CellDigit::new(pos, digit));
                            }
                        }
                        if cx.eliminate(TechniqueKind::HiddenTriple(unit.kind()), &removals) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}
