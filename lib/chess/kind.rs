use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// The kind of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Whether this kind moves along rays that can be blocked.
    pub const fn is_slider(&self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => f.write_char('p'),
            PieceKind::Rook => f.write_char('r'),
            PieceKind::Knight => f.write_char('n'),
            PieceKind::Bishop => f.write_char('b'),
            PieceKind::Queen => f.write_char('q'),
            PieceKind::King => f.write_char('k'),
        }
    }
}

/// The reason why parsing [`PieceKind`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected one of `p`, `r`, `n`, `b`, `q` or `k`")]
pub struct ParsePieceKindError;

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(PieceKind::Pawn),
            "r" => Ok(PieceKind::Rook),
            "n" => Ok(PieceKind::Knight),
            "b" => Ok(PieceKind::Bishop),
            "q" => Ok(PieceKind::Queen),
            "k" => Ok(PieceKind::King),
            _ => Err(ParsePieceKindError),
        }
    }
}
