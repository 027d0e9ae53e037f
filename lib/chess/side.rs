use derive_more::Display;
use std::ops::Not;

/// The side a chess [`Piece`][`crate::chess::Piece`] belongs to.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Side {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Side {
    /// The side to move on a given turn.
    ///
    /// White moves on even turns, Black on odd turns.
    pub const fn on_turn(turn: u32) -> Self {
        match turn % 2 {
            0 => Side::White,
            _ => Side::Black,
        }
    }

    /// The rank offset of a single pawn advance.
    ///
    /// White sits on the high ranks and advances toward rank 0.
    pub const fn forward(&self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The rank this side's pawns start on.
    pub const fn pawn_rank(&self) -> i8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// The rank this side's pieces start on.
    pub const fn back_rank(&self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}
