use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{GameState, Notation};
use tracing::instrument;

/// Replay a sequence of moves from the starting position and print the result.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// How squares are written, in RON.
    #[clap(short, long, default_value_t)]
    notation: Notation,

    /// The moves to play, each like `e2e4`.
    moves: Vec<String>,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        println!("{}", self.replay()?);
        Ok(())
    }

    fn replay(&self) -> Result<GameState, Anyhow> {
        let mut game = GameState::new();

        for (i, m) in self.moves.iter().enumerate() {
            let (origin, destination) = self
                .notation
                .parse_move(m)
                .with_context(|| format!("move #{} `{}` is malformed", i + 1, m))?;

            game.apply_move(origin, destination)
                .with_context(|| format!("move #{} `{}` was rejected", i + 1, m))?;
        }

        Ok(game)
    }
}
