mod board;
mod game;
mod kind;
mod notation;
mod outcome;
mod piece;
mod position;
mod side;

/// Movement rules of each [`PieceKind`].
pub mod rules;

pub use board::*;
pub use game::*;
pub use kind::*;
pub use notation::*;
pub use outcome::*;
pub use piece::*;
pub use position::*;
pub use side::*;
