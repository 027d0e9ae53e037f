use crate::chess::{rules, Board, CorruptBoard, Outcome, Piece, Position, Side};
use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, info, instrument};

/// The reason why a move was rejected.
///
/// A rejected move never changes the [`GameState`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum MoveError {
    #[display(fmt = "there is no piece on the origin square")]
    NoPieceAtOrigin,
    #[display(fmt = "the piece on the origin square belongs to the side not to move")]
    WrongSideToMove,
    #[display(fmt = "the move starts or ends off the board")]
    OutOfBounds,
    #[display(fmt = "the piece cannot move that way")]
    IllegalGeometry,
    #[display(fmt = "the move leaves the king in check")]
    LeavesKingInCheck,
    #[display(fmt = "the game is already over")]
    GameAlreadyOver,
}

/// A game of chess in progress.
///
/// The side to move is derived from the turn counter alone, and the only way to
/// advance the turn is [`GameState::apply_move`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GameState {
    board: Board,
    turn: u32,
    check: Option<Side>,
    outcome: Option<Outcome>,
}

// Plays a random sequence of legal moves from the starting position.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for GameState {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<GameState>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{prelude::*, sample::Selector};

        (0..32usize, any::<Selector>())
            .prop_map(|(plies, selector)| {
                let mut state = GameState::new();

                for _ in 0..plies {
                    let moves: Vec<_> = state.legal_moves().collect();
                    if moves.is_empty() {
                        break;
                    }

                    let (o, d) = selector.select(moves);
                    if state.apply_move(o, d).is_err() {
                        break;
                    }
                }

                state
            })
            .boxed()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A game in the standard starting position, White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::default(),
            turn: 0,
            check: None,
            outcome: None,
        }
    }

    /// A game resumed from an arbitrary placement on the given turn.
    ///
    /// Each side must have exactly one king, and the side that just moved must
    /// not be left in check.
    pub fn with_board(board: Board, turn: u32) -> Result<Self, CorruptBoard> {
        let side = Side::on_turn(turn);
        board.find_king(side)?;
        board.find_king(!side)?;

        if is_attacked(&board, !side) {
            return Err(CorruptBoard::OpponentInCheck(!side));
        }

        let mut state = GameState {
            board,
            turn,
            check: None,
            outcome: None,
        };

        state.settle();
        Ok(state)
    }

    /// The current placement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How many moves have been played.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The side to move.
    pub fn side_to_move(&self) -> Side {
        Side::on_turn(self.turn)
    }

    /// The side in check, if any.
    ///
    /// Only the side to move can ever be in check.
    pub fn side_in_check(&self) -> Option<Side> {
        self.check
    }

    /// The [`Outcome`] of the game, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The [`Piece`] on the given [`Position`], if any.
    pub fn query(&self, p: Position) -> Option<Piece> {
        self.board.get(p)
    }

    /// The [`Position`] of the king of a [`Side`].
    pub fn find_king(&self, side: Side) -> Result<Position, CorruptBoard> {
        self.board.find_king(side)
    }

    /// Whether the king of a [`Side`] is attacked by any opposing piece.
    pub fn is_in_check(&self, side: Side) -> bool {
        is_attacked(&self.board, side)
    }

    /// Checks whether a move is legal for the side to move, or the reason why not.
    pub fn check_move(&self, origin: Position, destination: Position) -> Result<Piece, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameAlreadyOver);
        }

        if !origin.is_on_board() || !destination.is_on_board() {
            return Err(MoveError::OutOfBounds);
        }

        let piece = self.board.get(origin).ok_or(MoveError::NoPieceAtOrigin)?;

        if piece.side != self.side_to_move() {
            return Err(MoveError::WrongSideToMove);
        }

        if !rules::is_valid_move(piece, origin, destination, &self.board) {
            return Err(MoveError::IllegalGeometry);
        }

        if !self.resolves_check(origin, destination) {
            return Err(MoveError::LeavesKingInCheck);
        }

        Ok(piece)
    }

    /// Whether a move is legal for the side to move.
    pub fn validate_move(&self, origin: Position, destination: Position) -> bool {
        match self.check_move(origin, destination) {
            Ok(_) => true,
            Err(reason) => {
                debug!(%origin, %destination, %reason, "rejected move");
                false
            }
        }
    }

    /// Whether the king of the side to move is safe once the move is played.
    ///
    /// The move is played on a copy of the board, this state is never altered.
    /// Moves that start or end off the board resolve nothing.
    pub fn resolves_check(&self, origin: Position, destination: Position) -> bool {
        if !origin.is_on_board() || !destination.is_on_board() {
            return false;
        }

        !is_attacked(&simulate(&self.board, origin, destination), self.side_to_move())
    }

    /// Whether the [`Side`] is in check and no move of its pieces gets it out of check.
    pub fn is_checkmate(&self, side: Side) -> bool {
        if !self.is_in_check(side) {
            return false;
        }

        let escapes = self.board.pieces(side).any(|(origin, piece)| {
            Position::iter().any(|destination| {
                rules::is_valid_move(piece, origin, destination, &self.board)
                    && !is_attacked(&simulate(&self.board, origin, destination), side)
            })
        });

        !escapes
    }

    /// An iterator over every legal (origin, destination) pair for the side to move.
    pub fn legal_moves(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.board
            .pieces(self.side_to_move())
            .flat_map(move |(origin, _)| {
                Position::iter()
                    .filter(move |&destination| self.check_move(origin, destination).is_ok())
                    .map(move |destination| (origin, destination))
            })
    }

    /// Plays a move if legal, returning the side left in check, if any.
    ///
    /// On error nothing changes.
    #[instrument(level = "trace", skip(self), err)]
    pub fn apply_move(
        &mut self,
        origin: Position,
        destination: Position,
    ) -> Result<Option<Side>, MoveError> {
        let piece = self.check_move(origin, destination)?;

        if self.board.get(destination).is_some()
            && !rules::can_capture(piece, origin, destination, &self.board)
        {
            return Err(MoveError::IllegalGeometry);
        }

        if let Some(captured) = self.board.relocate(origin, destination) {
            debug!(%piece, %captured, %destination, "capture");
        }

        self.turn += 1;
        Ok(self.settle())
    }

    /// Recomputes check and checkmate for the side to move.
    fn settle(&mut self) -> Option<Side> {
        let side = self.side_to_move();
        self.check = self.is_in_check(side).then(|| side);

        if self.check.is_some() {
            if self.is_checkmate(side) {
                let outcome = Outcome::Checkmate(!side);
                info!(%outcome);
                self.outcome = Some(outcome);
            } else {
                info!(%side, "in check");
            }
        }

        self.check
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:#}", self.board)?;

        match (self.outcome, self.check) {
            (Some(outcome), _) => write!(f, "turn {}: {}", self.turn, outcome),
            (None, Some(side)) => write!(f, "turn {}: {} to move, in check", self.turn, side),
            (None, None) => write!(f, "turn {}: {} to move", self.turn, self.side_to_move()),
        }
    }
}

/// A copy of `board` with the move played on it.
fn simulate(board: &Board, origin: Position, destination: Position) -> Board {
    let mut next = *board;
    next.relocate(origin, destination);
    next
}

/// Whether the king of `side` is attacked, a missing king counts as attacked.
fn is_attacked(board: &Board, side: Side) -> bool {
    match board.find_king(side) {
        Err(_) => true,
        Ok(king) => board
            .pieces(!side)
            .any(|(p, piece)| rules::can_capture(piece, p, king, board)),
    }
}

/// Starts a game in the standard starting position.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Plays a move on a copy of `state`, leaving `state` untouched.
pub fn apply_move(
    state: &GameState,
    origin: Position,
    destination: Position,
) -> Result<GameState, MoveError> {
    let mut next = state.clone();
    next.apply_move(origin, destination)?;
    Ok(next)
}

/// The [`Piece`] on the given [`Position`], if any.
pub fn query(state: &GameState, position: Position) -> Option<Piece> {
    state.query(position)
}

/// The side in check, if any.
pub fn side_in_check(state: &GameState) -> Option<Side> {
    state.side_in_check()
}

/// Whether `side` has been checkmated.
pub fn is_checkmate(state: &GameState, side: Side) -> bool {
    state.is_checkmate(side)
}
