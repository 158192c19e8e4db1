use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Claim the cell as free.
    Reveal,
    /// Set or unset a mine mark.
    ToggleFlag,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub coords: Coord2,
    pub action: Action,
}

impl Move {
    pub const fn reveal(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::Reveal,
        }
    }

    pub const fn toggle_flag(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::ToggleFlag,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Mark(MarkOutcome),
    Reveal(RevealOutcome),
}

/// A single game session. Mines are placed lazily by the generator when the first valid move arrives, whatever
/// that move is, and never again.
#[derive(Clone, Debug)]
pub struct Game<G> {
    config: GameConfig,
    generator: G,
    engine: Option<PlayEngine>,
}

impl<G: MineGenerator + Clone> Game<G> {
    pub fn new(config: GameConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            engine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.engine
            .as_ref()
            .map_or(GameState::Ready, PlayEngine::state)
    }

    /// The engine, once mines have been placed.
    pub fn engine(&self) -> Option<&PlayEngine> {
        self.engine.as_ref()
    }

    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome> {
        let coords = self.config.validate_coords(mv.coords)?;

        let engine = match &mut self.engine {
            Some(engine) => engine,
            slot => {
                log::debug!("Placing mines on first move at {:?}", coords);
                let layout = self.generator.clone().generate(self.config)?;
                slot.insert(PlayEngine::new(layout))
            }
        };

        let outcome = match mv.action {
            Action::Reveal => MoveOutcome::Reveal(engine.reveal(coords)?),
            Action::ToggleFlag => MoveOutcome::Mark(engine.toggle_flag(coords)?),
        };
        log::debug!(
            "{:?} at {:?}: {:?}, state {:?}",
            mv.action,
            coords,
            outcome,
            engine.state()
        );

        Ok(outcome)
    }

    pub fn view_cell(&self, coords: Coord2, view: BoardView) -> ViewCell {
        self.engine
            .as_ref()
            .map_or(ViewCell::Hidden, |engine| engine.view_cell(coords, view))
    }
}
