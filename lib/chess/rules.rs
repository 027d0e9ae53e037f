//! Geometry of piece movement.
//!
//! These functions know nothing about turns or check, they only answer whether
//! a piece standing on `origin` could reach `destination` on a given [`Board`].
//! Callers are expected to pass positions on the board.

use crate::chess::{Board, Piece, PieceKind, Position, Side};

/// Whether `piece` standing on `origin` may move to `destination`.
///
/// The destination must be empty or hold an enemy piece, and sliding pieces
/// must have a clear path.
pub fn is_valid_move(piece: Piece, origin: Position, destination: Position, board: &Board) -> bool {
    let (df, dr) = destination - origin;
    if (df, dr) == (0, 0) {
        return false;
    }

    let target = board.get(destination);
    if matches!(target, Some(t) if t.side == piece.side) {
        return false;
    }

    let aligned = match piece.kind {
        PieceKind::Pawn => return is_valid_pawn_move(piece.side, origin, (df, dr), board),
        PieceKind::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),
        PieceKind::King => df.abs() <= 1 && dr.abs() <= 1,
        PieceKind::Rook => df == 0 || dr == 0,
        PieceKind::Bishop => df.abs() == dr.abs(),
        PieceKind::Queen => df == 0 || dr == 0 || df.abs() == dr.abs(),
    };

    aligned && (!piece.kind.is_slider() || is_path_clear(origin, destination, board))
}

fn is_valid_pawn_move(side: Side, origin: Position, (df, dr): (i8, i8), board: &Board) -> bool {
    let forward = side.forward();
    let ahead = origin + (0, forward);

    match (df.abs(), dr * forward) {
        (0, 1) => board.get(ahead).is_none(),
        (0, 2) => {
            origin.rank == side.pawn_rank()
                && board.get(ahead).is_none()
                && board.get(ahead + (0, forward)).is_none()
        }
        (1, 1) => board.is_enemy(origin + (df, forward), side),
        _ => false,
    }
}

/// Whether every square strictly between `origin` and `destination` is empty.
///
/// Walks one square at a time in the direction of the sign of each axis delta,
/// which is only meaningful for straight or diagonal displacements.
pub fn is_path_clear(origin: Position, destination: Position, board: &Board) -> bool {
    let (df, dr) = destination - origin;
    let step = (df.signum(), dr.signum());
    let steps = df.abs().max(dr.abs());

    (1..steps).all(|i| board.get(origin + (step.0 * i, step.1 * i)).is_none())
}

/// Whether `piece` standing on `origin` attacks an enemy piece on `destination`.
pub fn can_capture(piece: Piece, origin: Position, destination: Position, board: &Board) -> bool {
    board.is_enemy(destination, piece.side) && is_valid_move(piece, origin, destination, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::sample::select;
    use test_strategy::proptest;

    const KNIGHT_JUMPS: [(i8, i8); 8] = [
        (1, 2),
        (2, 1),
        (2, -1),
        (1, -2),
        (-1, -2),
        (-2, -1),
        (-2, 1),
        (-1, 2),
    ];

    fn pawn(side: Side) -> Piece {
        Piece::new(PieceKind::Pawn, side)
    }

    #[proptest]
    fn no_piece_may_stay_in_place(b: Board, p: Piece, o: Position) {
        assert!(!is_valid_move(p, o, o, &b));
    }

    #[proptest]
    fn no_piece_may_land_on_a_friendly_piece(
        mut b: Board,
        p: Piece,
        o: Position,
        #[filter(#d != #o)] d: Position,
        k: PieceKind,
    ) {
        b.set(d, Some(Piece::new(k, p.side)));
        assert!(!is_valid_move(p, o, d, &b));
    }

    #[proptest]
    fn queen_moves_like_rook_or_bishop(b: Board, s: Side, o: Position, d: Position) {
        let queen = is_valid_move(Piece::new(PieceKind::Queen, s), o, d, &b);
        let rook = is_valid_move(Piece::new(PieceKind::Rook, s), o, d, &b);
        let bishop = is_valid_move(Piece::new(PieceKind::Bishop, s), o, d, &b);
        assert_eq!(queen, rook || bishop);
    }

    #[proptest]
    fn can_capture_requires_an_enemy_on_the_destination(
        b: Board,
        p: Piece,
        o: Position,
        d: Position,
    ) {
        assert_eq!(
            can_capture(p, o, d, &b),
            b.is_enemy(d, p.side) && is_valid_move(p, o, d, &b)
        );
    }

    #[proptest]
    fn knight_jumps_over_blockers(
        s: Side,
        #[strategy(2i8..6)] f: i8,
        #[strategy(2i8..6)] r: i8,
        #[strategy(select(KNIGHT_JUMPS.to_vec()))] jump: (i8, i8),
        blocker: Piece,
    ) {
        let origin = Position::new(f, r);
        let knight = Piece::new(PieceKind::Knight, s);
        let mut b = Board::empty();
        b.set(origin, Some(knight));
        assert!(is_valid_move(knight, origin, origin + jump, &b));

        for step in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            b.set(origin + step, Some(blocker));
        }

        assert!(is_valid_move(knight, origin, origin + jump, &b));
    }

    #[proptest]
    fn knight_only_moves_in_an_l_shape(
        s: Side,
        o: Position,
        #[filter(!KNIGHT_JUMPS.contains(&(#d - #o)))] d: Position,
    ) {
        let knight = Piece::new(PieceKind::Knight, s);
        assert!(!is_valid_move(knight, o, d, &Board::empty()));
    }

    #[proptest]
    fn king_moves_a_single_step(s: Side, o: Position, d: Position) {
        let king = Piece::new(PieceKind::King, s);
        let (df, dr) = d - o;
        assert_eq!(
            is_valid_move(king, o, d, &Board::empty()),
            d != o && df.abs() <= 1 && dr.abs() <= 1
        );
    }

    #[proptest]
    fn sliders_are_blocked_by_any_piece_in_between(
        s: Side,
        #[strategy(select(vec![PieceKind::Rook, PieceKind::Bishop, PieceKind::Queen]))] k: PieceKind,
        blocker: Piece,
    ) {
        let slider = Piece::new(k, s);
        let (o, d, between) = match k {
            PieceKind::Rook => (Position::new(0, 7), Position::new(0, 4), Position::new(0, 6)),
            _ => (Position::new(2, 7), Position::new(5, 4), Position::new(4, 5)),
        };

        let mut b = Board::empty();
        assert!(is_valid_move(slider, o, d, &b));

        b.set(between, Some(blocker));
        assert!(!is_valid_move(slider, o, d, &b));
    }

    #[test]
    fn rook_is_blocked_on_the_starting_position() {
        let b = Board::default();
        let rook = Piece::new(PieceKind::Rook, Side::White);
        assert!(!is_valid_move(rook, Position::new(0, 7), Position::new(0, 4), &b));
    }

    #[proptest]
    fn rook_cannot_move_off_its_file_and_rank(
        s: Side,
        o: Position,
        #[filter(#d.file != #o.file && #d.rank != #o.rank)] d: Position,
    ) {
        let rook = Piece::new(PieceKind::Rook, s);
        assert!(!is_valid_move(rook, o, d, &Board::empty()));
    }

    #[proptest]
    fn path_is_clear_between_adjacent_squares(
        b: Board,
        o: Position,
        #[strategy(-1i8..=1)] df: i8,
        #[strategy(-1i8..=1)] dr: i8,
    ) {
        assert!(is_path_clear(o, o + (df, dr), &b));
    }

    #[test]
    fn path_excludes_both_endpoints() {
        let mut b = Board::empty();
        b.set(Position::new(1, 1), Some(pawn(Side::White)));
        b.set(Position::new(4, 4), Some(pawn(Side::Black)));
        assert!(is_path_clear(Position::new(1, 1), Position::new(4, 4), &b));

        b.set(Position::new(3, 3), Some(pawn(Side::Black)));
        assert!(!is_path_clear(Position::new(1, 1), Position::new(4, 4), &b));
    }

    #[proptest]
    fn pawn_advances_one_square_onto_an_empty_square(s: Side, #[strategy(0i8..8)] f: i8) {
        let o = Position::new(f, 3);
        let d = o + (0, s.forward());
        let mut b = Board::empty();
        assert!(is_valid_move(pawn(s), o, d, &b));
        assert!(!is_valid_move(pawn(s), o, o + (0, -s.forward()), &b));

        b.set(d, Some(pawn(!s)));
        assert!(!is_valid_move(pawn(s), o, d, &b));
    }

    #[proptest]
    fn pawn_double_step_requires_both_squares_to_be_empty(
        s: Side,
        #[strategy(0i8..8)] f: i8,
        #[strategy(0usize..2)] blocked: usize,
        blocker: Piece,
    ) {
        let o = Position::new(f, s.pawn_rank());
        let d = o + (0, 2 * s.forward());
        let mut b = Board::default();
        assert!(is_valid_move(pawn(s), o, d, &b));

        b.set(o + (0, (1 + blocked as i8) * s.forward()), Some(blocker));
        assert!(!is_valid_move(pawn(s), o, d, &b));
    }

    #[proptest]
    fn pawn_double_step_is_only_allowed_from_home_rank(
        s: Side,
        #[strategy(0i8..8)] f: i8,
        #[strategy(2i8..6)] r: i8,
    ) {
        let o = Position::new(f, r);
        let b = Board::empty();
        assert!(!is_valid_move(pawn(s), o, o + (0, 2 * s.forward()), &b));
    }

    #[proptest]
    fn pawn_captures_diagonally_forward_only_onto_enemies(
        s: Side,
        #[strategy(1i8..7)] f: i8,
        #[strategy(2i8..6)] r: i8,
        #[strategy(select(vec![-1i8, 1]))] side_step: i8,
        k: PieceKind,
    ) {
        let o = Position::new(f, r);
        let d = o + (side_step, s.forward());
        let mut b = Board::empty();
        assert!(!is_valid_move(pawn(s), o, d, &b));

        b.set(d, Some(Piece::new(k, !s)));
        assert!(is_valid_move(pawn(s), o, d, &b));
        assert!(can_capture(pawn(s), o, d, &b));
        assert!(!is_valid_move(pawn(s), o, o + (side_step, -s.forward()), &b));
    }

    #[test]
    fn pawn_double_step_from_start_is_legal() {
        let b = Board::default();
        let o = Position::new(0, 6);
        assert!(is_valid_move(pawn(Side::White), o, Position::new(0, 4), &b));
        assert!(!is_valid_move(pawn(Side::White), o, Position::new(0, 3), &b));
    }
}
