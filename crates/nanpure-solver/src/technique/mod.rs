//! Logical solving techniques.
//!
//! Each technique inspects the candidate state through an
//! [`EngineContext`] and applies its first finding, from which the pass
//! loop in [`run_to_quiescence`](crate::run_to_quiescence) restarts with
//! the cheapest technique. [`all_techniques`] returns the techniques in
//! escalation order.

use std::fmt::Debug;

use derive_more::Display;
use nanpure_core::UnitKind;

use crate::EngineContext;

mod hidden_pair;
mod hidden_single;
mod hidden_triple;
mod locked_candidates;
mod naked_single;
mod naked_tuple;
mod x_wing;

pub use self::{
    hidden_pair::HiddenPair,
    hidden_single::HiddenSingle,
    hidden_triple::HiddenTriple,
    locked_candidates::{LockedClaiming, LockedPointing},
    naked_single::NakedSingle,
    naked_tuple::NakedTuple,
    x_wing::XWing,
};

/// Identifies one technique application, qualified by the unit kind it
/// acted on where that distinction matters.
///
/// The `Display` output is the human-readable label reported in metrics
/// and explained steps, for example `Hidden Single (row)` or
/// `Locked Candidates (Pointing)`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechniqueKind {
    /// A cell with a single remaining candidate.
    #[display("Naked Single")]
    NakedSingle,
    /// A digit with a single possible cell in a unit.
    #[display("Hidden Single ({_0})")]
    HiddenSingle(UnitKind),
    /// Box candidates confined to one row or column.
    #[display("Locked Candidates (Pointing)")]
    LockedPointing,
    /// Row or column candidates confined to one box.
    #[display("Locked Candidates (Claiming)")]
    LockedClaiming,
    /// Two cells of a unit sharing the same two candidates.
    #[display("Naked Pair ({_0})")]
    NakedPair(UnitKind),
    /// Three cells of a unit sharing the same three candidates.
    #[display("Naked Triple ({_0})")]
    NakedTriple(UnitKind),
    /// Two digits confined to the same two cells of a unit.
    #[display("Hidden Pair ({_0})")]
    HiddenPair(UnitKind),
    /// Three digits confined to the same three cells of a unit.
    #[display("Hidden Triple ({_0})")]
    HiddenTriple(UnitKind),
    /// A digit forming a rectangle over two rows or two columns.
    #[display("X-Wing ({_0})")]
    XWing(UnitKind),
    /// Depth-first search over the remaining candidates.
    #[display("Backtracking")]
    Backtracking,
    /// Candidate removals propagated from a placement. Only appears in
    /// recorded steps, never in the technique tally.
    #[display("Placement Propagation")]
    PlacementPropagation,
}

impl TechniqueKind {
    /// Returns `true` for naked and hidden singles.
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::NakedSingle | Self::HiddenSingle(_))
    }

    /// Returns `true` for naked and hidden pairs.
    #[must_use]
    pub const fn is_pair(self) -> bool {
        matches!(self, Self::NakedPair(_) | Self::HiddenPair(_))
    }
}

/// A logical solving technique.
///
/// Implementations are stateless; all mutable state lives in the
/// [`EngineContext`].
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Applies the technique's first finding, if any.
    ///
    /// Returns `true` if the grid or the candidates changed. Findings
    /// whose eliminations are already gone do not count as changes.
    fn apply(&self, cx: &mut EngineContext) -> bool;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

/// Returns every technique in escalation order, cheapest first.
///
/// The order is fixed: singles, locked candidates, naked tuples, hidden
/// tuples, then X-Wing.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(LockedPointing::new()),
        Box::new(LockedClaiming::new()),
        Box::new(NakedTuple::pair()),
        Box::new(NakedTuple::triple()),
        Box::new(HiddenPair::new()),
        Box::new(HiddenTriple::new()),
        Box::new(XWing::rows()),
        Box::new(XWing::columns()),
    ]
}
