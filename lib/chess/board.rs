use crate::chess::{Piece, PieceKind, Position, Side};
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The reason why a [`Board`] cannot host a game.
///
/// These never arise from moves played through
/// [`GameState::apply_move`][`crate::chess::GameState::apply_move`], they
/// signal a board that was assembled inconsistently.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum CorruptBoard {
    #[display(fmt = "the {} king is missing", _0)]
    MissingKing(#[error(not(source))] Side),
    #[display(fmt = "there is more than one {} king", _0)]
    MultipleKings(#[error(not(source))] Side),
    #[display(fmt = "the {} king is attacked while it is not their turn", _0)]
    OpponentInCheck(#[error(not(source))] Side),
}

/// The piece placement on the board.
///
/// Rank 0 is Black's back rank and rank 7 is White's.
/// This type does not validate whether the placement it holds is reachable in a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board([[Option<Piece>; 8]; 8]);

// Deriving would overflow the stack generating nested arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        vec![any::<Option<Piece>>(); 64]
            .prop_map(|v| {
                let mut board = Board::empty();
                for (p, piece) in Position::iter().zip(v) {
                    board.set(p, piece);
                }

                board
            })
            .boxed()
    }
}

impl Default for Board {
    /// The standard starting placement.
    fn default() -> Self {
        use PieceKind::*;
        const BACK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        for side in [Side::White, Side::Black] {
            for (file, kind) in (0..8).zip(BACK) {
                board.set(Position::new(file, side.back_rank()), Some(Piece::new(kind, side)));
                board.set(Position::new(file, side.pawn_rank()), Some(Piece::new(Pawn, side)));
            }
        }

        board
    }
}

impl Board {
    /// A board without any pieces.
    pub const fn empty() -> Self {
        Board([[None; 8]; 8])
    }

    /// The [`Piece`] on the given [`Position`], if any.
    ///
    /// Positions off the board are always empty.
    pub fn get(&self, p: Position) -> Option<Piece> {
        if p.is_on_board() {
            self.0[p.rank as usize][p.file as usize]
        } else {
            None
        }
    }

    /// Whether the given [`Position`] holds a piece of the opponent of `side`.
    pub fn is_enemy(&self, p: Position, side: Side) -> bool {
        matches!(self.get(p), Some(piece) if piece.side != side)
    }

    /// Places or clears a square, returning what it held before.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not on the board.
    pub fn set(&mut self, p: Position, piece: Option<Piece>) -> Option<Piece> {
        assert!(p.is_on_board(), "position {} is off the board", p);
        std::mem::replace(&mut self.0[p.rank as usize][p.file as usize], piece)
    }

    /// Moves whatever is on `origin` to `destination`, returning the captured piece, if any.
    ///
    /// Does nothing if `origin` is empty.
    ///
    /// # Panics
    ///
    /// Panics if either position is not on the board.
    pub fn relocate(&mut self, origin: Position, destination: Position) -> Option<Piece> {
        match self.set(origin, None) {
            None => None,
            piece => self.set(destination, piece),
        }
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::iter().filter_map(move |p| Some((p, self.get(p)?)))
    }

    /// An iterator over the pieces of one [`Side`].
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.side == side)
    }

    /// The [`Position`] of the unique king of a [`Side`].
    pub fn find_king(&self, side: Side) -> Result<Position, CorruptBoard> {
        let king = Piece::new(PieceKind::King, side);
        let mut kings = self.iter().filter(|&(_, piece)| piece == king);

        match (kings.next(), kings.next()) {
            (Some((p, _)), None) => Ok(p),
            (None, _) => Err(CorruptBoard::MissingKing(side)),
            (Some(_), Some(_)) => Err(CorruptBoard::MultipleKings(side)),
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Position`], if any.
///
/// # Panics
///
/// Panics if the position is not on the board.
impl Index<Position> for Board {
    type Output = Option<Piece>;

    fn index(&self, p: Position) -> &Self::Output {
        assert!(p.is_on_board(), "position {} is off the board", p);
        &self.0[p.rank as usize][p.file as usize]
    }
}

/// Prints the placement field of [FEN], starting from rank 0.
///
/// The alternate form `{:#}` prints a grid of figurines instead.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.grid(f);
        }

        for (rank, row) in self.0.iter().enumerate() {
            if rank > 0 {
                f.write_char('/')?;
            }

            let mut gap = 0;
            for square in row {
                match square {
                    None => gap += 1,
                    Some(piece) => {
                        if gap > 0 {
                            write!(f, "{}", gap)?;
                            gap = 0;
                        }

                        write!(f, "{}", piece)?;
                    }
                }
            }

            if gap > 0 {
                write!(f, "{}", gap)?;
            }
        }

        Ok(())
    }
}

impl Board {
    fn grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     0   1   2   3   4   5   6   7")?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        for (rank, row) in self.0.iter().enumerate() {
            write!(f, " {} |", rank)?;

            for square in row {
                match square {
                    Some(piece) => write!(f, " {:#} |", piece)?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "     0   1   2   3   4   5   6   7")
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected exactly 8 ranks")]
    InvalidRankCount,
    #[display(fmt = "rank {} does not hold exactly 8 squares", _0)]
    InvalidRankLength(#[error(not(source))] usize),
    #[display(fmt = "unexpected character `{}`", _0)]
    InvalidCharacter(#[error(not(source))] char),
}

/// Parses the placement field of [FEN], starting from rank 0.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::InvalidRankCount);
        }

        let mut board = Board::empty();
        for (rank, row) in rows.into_iter().enumerate() {
            let mut file = 0usize;
            for c in row.chars() {
                match c.to_digit(10) {
                    Some(n @ 1..=8) => file += n as usize,
                    _ => {
                        let piece = Piece::try_from(c)
                            .map_err(|_| ParseBoardError::InvalidCharacter(c))?;

                        if file >= 8 {
                            return Err(ParseBoardError::InvalidRankLength(rank));
                        }

                        board.set(Position::new(file as i8, rank as i8), Some(piece));
                        file += 1;
                    }
                }
            }

            if file != 8 {
                return Err(ParseBoardError::InvalidRankLength(rank));
            }
        }

        Ok(board)
    }
}
