use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{GameState, Notation};
use std::io::{stdin, stdout, Read, Write};
use tracing::{info, instrument, warn};

/// Play a game from the terminal, one move per line like `E2 E4`.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// How squares are written, in RON.
    #[clap(short, long, default_value_t)]
    notation: Notation,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.run(&mut Io::new(stdout().lock(), stdin().lock()))
    }

    /// Runs the game loop until checkmate, `quit` or the end of the input.
    fn run<W: Write, R: Read>(&self, io: &mut Io<W, R>) -> Result<(), Anyhow> {
        let mut game = GameState::new();
        io.send(&game)?;

        while game.outcome().is_none() {
            io.prompt(format_args!("{}> ", game.side_to_move()))?;

            let line = match io.recv()? {
                None => return Ok(()),
                Some(line) => line,
            };

            match line.trim() {
                "" => continue,
                "quit" => return Ok(()),
                line => match self.notation.parse_move(line) {
                    Err(e) => {
                        warn!(%line, "{}", e);
                        io.send(e)?;
                    }

                    Ok((origin, destination)) => match game.apply_move(origin, destination) {
                        Ok(_) => io.send(&game)?,
                        Err(e) => {
                            warn!(%line, "{}", e);
                            io.send(e)?;
                        }
                    },
                },
            }
        }

        if let Some(outcome) = game.outcome() {
            info!(%outcome, turn = game.turn());
        }

        Ok(())
    }
}
