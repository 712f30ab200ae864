//! A set of digits 1-9, represented as a bitmask.

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Digit;

/// A set of Sudoku digits backed by a 9-bit mask.
///
/// Bits 0-8 of the inner `u16` represent digits 1-9. Membership, insertion,
/// and removal are O(1), and iteration yields digits in ascending order.
/// This is the candidate-set representation used throughout the solver: a
/// cell's remaining candidates are one `DigitSet`.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::ALL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
///
/// # Set operations
///
/// ```
/// use nanpure_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const ALL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::from_elem(digit).0 != 0
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::from_elem(digit).0;
    }

    /// Removes a digit from the set.
    ///
    /// Returns `true` if the digit was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let present = self.contains(digit);
        self.0 &= !Self::from_elem(digit).0;
        present
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit of a one-element set, or `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_elem(Digit::D4).as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::ALL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() == 1 {
            #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros of a 9-bit mask fits in u8")]
            Digit::try_from_value(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterates over the digits in the set in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

/// Ascending-order iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        #[expect(clippy::cast_possible_truncation, reason = "bit index of a 9-bit mask fits in u8")]
        Digit::try_from_value(bit as u8 + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);

        assert!(set.remove(Digit::D1));
        assert!(!set.remove(Digit::D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::ALL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::ALL.contains(digit));
        }
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::from_elem(Digit::D7).as_single(), Some(Digit::D7));
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        let pair = DigitSet::from_iter([Digit::D2, Digit::D3]);
        assert_eq!(pair.as_single(), None);
    }

    #[test]
    fn test_iteration_order_ascending() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5, Digit::D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
    }

    #[test]
    fn test_set_operations() {
        let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b).len(), 1);
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.intersection(b));
    }

    #[test]
    fn test_display() {
        let set = DigitSet::from_iter([Digit::D3, Digit::D1]);
        assert_eq!(set.to_string(), "{1,3}");
        assert_eq!(DigitSet::EMPTY.to_string(), "{}");
    }
}
