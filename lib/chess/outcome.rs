use crate::chess::Side;
use derive_more::Display;

/// How a chess game ended.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display(fmt = "checkmate by the {} player", _0)]
    Checkmate(Side),
}

impl Outcome {
    /// The winning side.
    pub fn winner(&self) -> Side {
        match *self {
            Outcome::Checkmate(s) => s,
        }
    }

    /// The losing side.
    pub fn loser(&self) -> Side {
        !self.winner()
    }
}
