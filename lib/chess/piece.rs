use crate::chess::{PieceKind, Side};
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt::{self, Write};

/// A chess piece of a certain [`PieceKind`] and [`Side`].
///
/// Pieces carry no state of their own, two pieces of the same kind and side are
/// interchangeable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`PieceKind`] and [`Side`].
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    fn figurine(&self) -> char {
        use {PieceKind::*, Side::*};
        match (self.side, self.kind) {
            (White, Pawn) => '♙',
            (White, Rook) => '♖',
            (White, Knight) => '♘',
            (White, Bishop) => '♗',
            (White, Queen) => '♕',
            (White, King) => '♔',
            (Black, Pawn) => '♟',
            (Black, Rook) => '♜',
            (Black, Knight) => '♞',
            (Black, Bishop) => '♝',
            (Black, Queen) => '♛',
            (Black, King) => '♚',
        }
    }
}

impl From<Piece> for char {
    fn from(p: Piece) -> char {
        let c = match p.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match p.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

/// The reason why converting [`Piece`] from a character failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected one of `PRNBQK` for white or `prnbqk` for black")]
pub struct InvalidPiece;

impl TryFrom<char> for Piece {
    type Error = InvalidPiece;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        let kind = c
            .to_ascii_lowercase()
            .to_string()
            .parse()
            .map_err(|_| InvalidPiece)?;

        Ok(Piece::new(kind, side))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = if f.alternate() {
            self.figurine()
        } else {
            (*self).into()
        };

        f.write_char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_a_default_ascii_representation(p: Piece) {
        assert_eq!(char::from(p).to_string(), p.to_string());
    }

    #[proptest]
    fn piece_has_an_alternate_figurine_representation(p: Piece) {
        assert_eq!(p.figurine().to_string(), format!("{:#}", p));
    }

    #[proptest]
    fn white_pieces_are_printed_in_upper_case(k: PieceKind) {
        let c = char::from(Piece::new(k, Side::White));
        assert!(c.is_ascii_uppercase());
        assert_eq!(c.to_ascii_lowercase().to_string(), k.to_string());
    }

    #[proptest]
    fn converting_printed_piece_is_an_identity(p: Piece) {
        assert_eq!(Piece::try_from(char::from(p)), Ok(p));
    }

    #[proptest]
    fn converting_piece_fails_for_other_characters(
        #[filter(!"prnbqkPRNBQK".contains(#c))] c: char,
    ) {
        assert_eq!(Piece::try_from(c), Err(InvalidPiece));
    }
}
