use crate::chess::Position;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How the digit of a square like `E2` maps onto a rank.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    /// Digit 8 is rank 0, so `A1` is `(0, 7)` and White's pieces start on `1` and `2`.
    #[default]
    Descending,
    /// Digit 1 is rank 0, so `A1` is `(0, 0)`.
    Ascending,
}

/// The reason why parsing a square failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParsePositionError {
    #[display(fmt = "expected a letter in the range `('A'..='H')`")]
    InvalidFile,
    #[display(fmt = "expected a digit in the range `('1'..='8')`")]
    InvalidRank,
}

/// The reason why parsing a move failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
#[display(fmt = "failed to parse move")]
pub struct ParseMoveError(ParsePositionError);

/// The reason why parsing [`Notation`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse notation configuration")]
pub struct ParseNotationError(ron::de::SpannedError);

/// Translation between squares written like `E2` and [`Position`]s.
///
/// Files map `A..=H` onto `0..=7`, letters are accepted in either case.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, default)]
pub struct Notation {
    pub ranks: RankOrder,
}

impl Notation {
    /// Parses a square like `E2`.
    pub fn parse(&self, s: &str) -> Result<Position, ParsePositionError> {
        let mut chars = s.trim().chars();

        let file = match chars.next().map(|c| c.to_ascii_lowercase()) {
            Some(c @ 'a'..='h') => (c as u8 - b'a') as i8,
            _ => return Err(ParsePositionError::InvalidFile),
        };

        let digit = match (chars.next(), chars.next()) {
            (Some(c @ '1'..='8'), None) => (c as u8 - b'0') as i8,
            _ => return Err(ParsePositionError::InvalidRank),
        };

        let rank = match self.ranks {
            RankOrder::Descending => 8 - digit,
            RankOrder::Ascending => digit - 1,
        };

        Ok(Position::new(file, rank))
    }

    /// Parses a pair of squares like `E2 E4` or `e2e4`.
    pub fn parse_move(&self, s: &str) -> Result<(Position, Position), ParseMoveError> {
        let s: String = s.split_whitespace().collect();
        let i = s.char_indices().nth(2).map_or(s.len(), |(i, _)| i);
        Ok((self.parse(&s[..i])?, self.parse(&s[i..])?))
    }

    /// Writes a [`Position`] like `E2`, or nothing if it is off the board.
    pub fn format(&self, p: Position) -> Option<String> {
        if !p.is_on_board() {
            return None;
        }

        let digit = match self.ranks {
            RankOrder::Descending => 8 - p.rank,
            RankOrder::Ascending => p.rank + 1,
        };

        Some(format!("{}{}", (b'A' + p.file as u8) as char, digit))
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Notation {
    type Err = ParseNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
