use nanpure_core::{Digit, Position, UnitKind};
use tinyvec::ArrayVec;

use super::{Technique, TechniqueKind};
use crate::{EngineContext, recorder::CellDigit};

const NAME_ROWS: &str = "x-wing (rows)";
const NAME_COLUMNS: &str = "x-wing (columns)";

/// A technique that removes candidates using the X-Wing pattern.
///
/// When a digit fits in exactly two cells of two base lines, and those
/// cells share the same two cross lines, the digit must occupy opposite
/// corners of the rectangle. It is removed from the rest of both cross
/// lines. The pattern only holds with exactly two such base lines; a
/// third base line on the same cross pair voids it.
///
/// Instantiated once with rows as base lines and once with columns.
#[derive(Debug, Clone, Copy)]
pub struct XWing {
    base: UnitKind,
}

impl XWing {
    /// Creates the X-Wing with rows as base lines.
    #[must_use]
    pub const fn rows() -> Self {
        Self {
            base: UnitKind::Row,
        }
    }

    /// Creates the X-Wing with columns as base lines.
    #[must_use]
    pub const fn columns() -> Self {
        Self {
            base: UnitKind::Column,
        }
    }

    const fn at(self, line: u8, cross: u8) -> Position {
        match self.base {
            UnitKind::Column => Position::new(cross, line),
            _ => Position::new(line, cross),
        }
    }
}

impl Technique for XWing {
    fn name(&self) -> &'static str {
        match self.base {
            UnitKind::Column => NAME_COLUMNS,
            _ => NAME_ROWS,
        }
    }

    fn apply(&self, cx: &mut EngineContext) -> bool {
        for digit in Digit::ALL {
            // Base lines where the digit has exactly two cells, keyed by
            // the cross pair those cells sit on.
            let mut pairs: ArrayVec<[(u8, u8); 9]> = ArrayVec::new();
            let mut lines: ArrayVec<[u8; 9]> = ArrayVec::new();
            for line in 0..9 {
                let mut crosses: ArrayVec<[u8; 9]> = ArrayVec::new();
                for cross in 0..9 {
                    if cx.candidates_at(self.at(line, cross)).contains(digit) {
                        crosses.push(cross);
                    }
                }
                if let [a, b] = crosses[..] {
                    pairs.push((a, b));
                    lines.push(line);
                }
            }

            for (i, &pair) in pairs.iter().enumerate() {
                if pairs[..i].contains(&pair) {
                    continue;
                }
                let matching: ArrayVec<[u8; 9]> = lines
                    .iter()
                    .zip(&pairs)
                    .filter(|&(_, &p)| p == pair)
                    .map(|(&line, _)| line)
                    .collect();
                let [l1, l2] = matching[..] else {
                    continue;
                };

                let mut removals = Vec::new();
                for line in 0..9 {
                    if line == l1 || line == l2 {
                        continue;
                    }
                    for cross in [pair.0, pair.1] {
                        let pos = self.at(line, cross);
                        if cx.candidates_at(pos).contains(digit) {
                            removals.push(CellDigit::new(pos, digit));
                        }
                    }
                }
                let kind = match self.base {
                    UnitKind::Column => TechniqueKind::XWing(UnitKind::Column),
                    _ => TechniqueKind::XWing(UnitKind::Row),
                };
                if cx.eliminate(kind, &removals) {
                    return true;
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
    fn test_x_wing_on_rows() {
        // Digit 1 fits in exactly two cells of rows 0 and 4, in the same
        // two columns (1 and 7). Every other row loses the 1 from those
        // columns.
        TechniqueTester::from_str(
            "
            2_34567_8
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            3_45678_9
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&XWing::rows())
        .assert_removed_includes(Position::new(1, 1), [Digit::D1])
        .assert_removed_includes(Position::new(8, 7), [Digit::D1])
        // Corner cells keep the digit.
        .assert_no_change(Position::new(0, 1))
        .assert_no_change(Position::new(4, 7));
    }

    #[test]
    fn test_three_base_lines_void_the_pattern() {
        // Rows 0, 4, and 6 all confine digit 1 to columns 1 and 7, so no
        // two-row rectangle exists and nothing is eliminated.
        TechniqueTester::from_str(
            "
            2_34567_8
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            3_45678_9
            ___ ___ ___
            4_56789_2
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&XWing::rows())
        .assert_no_change(Position::new(1, 1))
        .assert_no_change(Position::new(8, 7));
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
        .apply_once(&XWing::rows())
        .assert_no_change(Position::new(0, 0))
        .apply_once(&XWing::columns())
        .assert_no_change(Position::new(4, 4));
    }
}
