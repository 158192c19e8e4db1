use std::io::{BufRead, Write};

use anyhow::Result;
use sweeper_core::{BoardView, Coord2, Game, GameConfig, GameState, MineGenerator, Victory};

use crate::command::{parse_mine_count, parse_move};
use crate::render::{LOSS_MESSAGE, render_board, victory_message};

pub const MINE_PROMPT: &str = "How many mines do you want on the field?";
pub const TURN_PROMPT: &str = "Set/unset mine marks or claim a cell as free:";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Won(Victory),
    Lost,
    /// Input ran out before the game finished.
    Quit,
}

/// Turn loop of the text interface over any line source and sink.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for the mine count until a valid one is given. `None` when input ends first.
    pub fn configure(&mut self, size: Coord2) -> Result<Option<GameConfig>> {
        loop {
            writeln!(self.output, "{MINE_PROMPT}")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_mine_count(&line, size) {
                Ok(config) => {
                    log::debug!("Configured {:?}", config);
                    return Ok(Some(config));
                }
                Err(err) => {
                    log::info!("Rejected mine count {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    pub fn play<G: MineGenerator + Clone>(&mut self, game: &mut Game<G>) -> Result<Ending> {
        self.output
            .write_all(render_board(game, BoardView::Player).as_bytes())?;

        loop {
            writeln!(self.output, "{TURN_PROMPT}")?;
            let Some(line) = self.read_line()? else {
                log::info!("Input closed, leaving unfinished game");
                return Ok(Ending::Quit);
            };
            if line.trim().is_empty() {
                continue;
            }

            let mv = match parse_move(&line, game.config().size) {
                Ok(mv) => mv,
                Err(err) => {
                    log::info!("Rejected command {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            if let Err(err) = game.play(mv) {
                log::info!("Rejected move {:?}: {}", mv, err);
                writeln!(self.output, "{err}")?;
                continue;
            }

            if log::log_enabled!(log::Level::Trace) {
                log::trace!("Solution:\n{}", render_board(game, BoardView::Solution));
            }

            let ending = match game.state() {
                GameState::Won(victory) => Ending::Won(victory),
                GameState::Lost => Ending::Lost,
                GameState::Ready | GameState::Active => {
                    self.output
                        .write_all(render_board(game, BoardView::Player).as_bytes())?;
                    continue;
                }
            };

            self.output
                .write_all(render_board(game, BoardView::Solution).as_bytes())?;
            let message = match ending {
                Ending::Won(victory) => victory_message(victory),
                _ => LOSS_MESSAGE,
            };
            writeln!(self.output, "{message}")?;
            self.output.flush()?;
            return Ok(ending);
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
