//! Difficulty levels.

use derive_more::Display;

/// The four puzzle difficulty levels.
///
/// Levels order from easiest to hardest. The generator uses the level to
/// pick a clue-count target, and the rating module maps a numeric score
/// back to a level.
///
/// # Examples
///
/// ```
/// use nanpure_core::Difficulty;
///
/// assert!(Difficulty::Easy < Difficulty::Expert);
/// assert_eq!("medium".parse(), Ok(Difficulty::Medium));
/// assert_eq!(Difficulty::Hard.to_string(), "hard");
/// ```
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Solvable with singles alone.
    #[display("easy")]
    Easy,
    /// Needs locked candidates or an occasional pair.
    #[display("medium")]
    Medium,
    /// Needs tuples and may need a little search.
    #[display("hard")]
    Hard,
    /// Leans on advanced patterns or backtracking.
    #[display("expert")]
    Expert,
}

/// Error returned when a difficulty string is not recognized.
#[derive(Debug, Display, derive_more::Error, Clone, Copy, PartialEq, Eq)]
#[display("unknown difficulty, expected easy, medium, hard, or expert")]
pub struct ParseDifficultyError;

impl Difficulty {
    /// All levels from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];
}

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, ParseDifficultyError> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(ParseDifficultyError),
        }
    }
}
