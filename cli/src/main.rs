use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sweeper_core::{CellCount, Coord2, Game, GameConfig, RandomMineGenerator};

mod command;
mod render;
mod session;

use session::{Ending, Session};

/// The field is always nine by nine, only the mine count is configurable.
const BOARD_SIZE: Coord2 = (9, 9);

#[derive(Parser, Debug)]
#[command(version, about = "Text minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of mines, skips the prompt
    #[arg(short, long)]
    mines: Option<CellCount>,
}

/// Uses `--mines` when given, rejecting an out-of-range value at startup, and otherwise asks for it.
fn select_config<R: BufRead, W: Write>(
    mines: Option<CellCount>,
    session: &mut Session<R, W>,
) -> anyhow::Result<Option<GameConfig>> {
    match mines {
        Some(mines) => Ok(Some(
            GameConfig::new(BOARD_SIZE, mines).context("invalid --mines")?,
        )),
        None => session.configure(BOARD_SIZE),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());

    let Some(config) = select_config(args.mines, &mut session)? else {
        return Ok(());
    };

    let mut game = Game::new(config, RandomMineGenerator::new(seed));
    match session.play(&mut game)? {
        Ending::Quit => log::debug!("Quit before the game ended"),
        ending => log::info!("Finished with {:?}", ending),
    }

    Ok(())
}
