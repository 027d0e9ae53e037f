use anyhow::Error as Anyhow;
use clap::Parser;
use cli::Cli;

mod applet;
mod cli;
mod io;

fn main() -> Result<(), Anyhow> {
    let cli = Cli::parse();
    cli.execute()
}
