//! Reproducible generation seeds.

use std::{
    fmt,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use derive_more::{Display, Error};
use rand::RngExt as _;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed identifying one generated puzzle.
///
/// The same seed and difficulty always reproduce the same puzzle. Seeds
/// render as 64 lowercase hex characters and parse back from that form.
///
/// # Examples
///
/// ```
/// use nanpure_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Error returned when a seed string cannot be parsed.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {_0}")]
    #[error(ignore)]
    Length(usize),
    /// The string contains a non-hex character.
    #[display("invalid hex character {_0:?} in seed")]
    #[error(ignore)]
    InvalidChar(char),
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed by hashing thread-local entropy together with
    /// the current time.
    #[must_use]
    pub fn random() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(rand::rng().random::<[u8; 32]>());
        hasher.update(nanos.to_le_bytes());
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 64 {
            return Err(ParseSeedError::Length(chars.len()));
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(chars.chunks(2)) {
            let mut value = 0_u32;
            for &ch in pair {
                let digit = ch
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidChar(ch))?;
                value = value * 16 + digit;
            }
            #[expect(clippy::cast_possible_truncation, reason = "two hex digits fit in u8")]
            {
                *byte = value as u8;
            }
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_from_str_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let rendered = seed.to_string();
        assert_eq!(rendered.len(), 64);
        assert_eq!(rendered.parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::Length(3))
        );
        let bad = "g".repeat(64);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidChar('g'))
        );
    }

    #[test]
    fn test_parse_errors_display_and_have_no_source() {
        let err: &dyn std::error::Error = &ParseSeedError::Length(3);
        assert_eq!(err.to_string(), "seed must be 64 hex characters, got 3");
        assert!(err.source().is_none());

        let err: &dyn std::error::Error = &ParseSeedError::InvalidChar('g');
        assert_eq!(err.to_string(), "invalid hex character 'g' in seed");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
