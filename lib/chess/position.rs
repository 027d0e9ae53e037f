use derive_more::Display;
use std::ops::{Add, Sub};

/// A pair of zero-based (file, rank) coordinates.
///
/// Only coordinates in the range `(0..=7)` denote squares of the board, but
/// any pair can be represented so that callers may ask about squares that do
/// not exist and be told so.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({}, {})", file, rank)]
pub struct Position {
    #[cfg_attr(test, strategy(0i8..8))]
    pub file: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    pub rank: i8,
}

impl Position {
    /// Constructs [`Position`] from a pair of file and rank.
    pub const fn new(file: i8, rank: i8) -> Self {
        Position { file, rank }
    }

    /// Whether this position denotes a square of the board.
    pub const fn is_on_board(&self) -> bool {
        0 <= self.file && self.file < 8 && 0 <= self.rank && self.rank < 8
    }

    /// Returns an iterator over every square of the board, rank by rank.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64i8).map(|i| Position::new(i % 8, i / 8))
    }
}

/// The (file, rank) displacement between two positions, saturating at the bounds of `i8`.
impl Sub for Position {
    type Output = (i8, i8);

    fn sub(self, rhs: Self) -> Self::Output {
        (
            self.file.saturating_sub(rhs.file),
            self.rank.saturating_sub(rhs.rank),
        )
    }
}

/// Shifts a position, anything past the bounds of `i8` stays off the board.
impl Add<(i8, i8)> for Position {
    type Output = Self;

    fn add(self, (file, rank): (i8, i8)) -> Self::Output {
        Position::new(
            self.file.saturating_add(file),
            self.rank.saturating_add(rank),
        )
    }
}
