use nanpure_core::Position;

use super::{Technique, TechniqueKind};
use crate::EngineContext;

const NAME: &str = "naked single";

/// A technique that places the digit of a cell with a single remaining
/// candidate.
///
/// The placement also performs the fundamental constraint propagation:
/// the placed digit is removed from every peer in the cell's row, column,
/// and box. Cells are scanned in row-major order and the first naked
/// single found is placed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, cx: &mut EngineContext) -> bool {
        for pos in Position::all() {
            if let Some(digit) = cx.candidates_at(pos).as_single() {
                cx.place(pos, digit, TechniqueKind::NakedSingle);
                return true;
            }
        }
        false
    }
}
