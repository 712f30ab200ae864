use nanpure_core::{Digit, Position, Unit};
use tinyvec::ArrayVec;

use super::{Technique, TechniqueKind};
use crate::EngineContext;

const NAME: &str = "hidden single";

/// A technique that places a digit with a single possible cell in some
/// unit, even when that cell still has other candidates.
///
/// Units are scanned rows first, then columns, then boxes; the reported
/// kind carries the unit kind the single was found in.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, cx: &mut EngineContext) -> bool {
        for unit in Unit::all() {
            for digit in Digit::ALL {
                let mut cells: ArrayVec<[Position; 9]> = ArrayVec::new();
                for pos in unit.cells() {
                    if cx.candidates_at(pos).contains(digit) {
                        cells.push(pos);
                    }
                }
                if let [pos] = cells[..] {
                    cx.place(pos, digit, TechniqueKind::HiddenSingle(unit.kind()));
                    return true;
                }
            }
        }
        false
    }
}
