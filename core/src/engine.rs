use std::collections::VecDeque;

use ndarray::Array2;

use crate::*;

/// How a game was won.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Victory {
    /// Every mine is flagged and no flag sits on a safe cell.
    AllMinesFlagged,
    /// Every safe cell is revealed, whatever the flags say.
    AllSafeCellsExplored,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GameState {
    /// No move yet, mines are not placed.
    #[default]
    Ready,
    Active,
    Won(Victory),
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost)
    }
}

/// Grid-state engine over a placed mine layout: flags, flood-fill reveals and win/loss evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    mine_layout: MineLayout,
    truth: Array2<TrueCell>,
    board: Array2<EngineCell>,
    revealed_count: CellCount,
    remaining_mine_guesses: CellCount,
    false_flags: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let truth = mine_layout.hints();
        Self {
            remaining_mine_guesses: mine_layout.mine_count(),
            mine_layout,
            truth,
            board: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            false_flags: 0,
            state: GameState::Active,
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    /// Mines not yet covered by a flag placed on them.
    pub fn remaining_mine_guesses(&self) -> CellCount {
        self.remaining_mine_guesses
    }

    /// Flags currently placed on safe cells.
    pub fn false_flags(&self) -> CellCount {
        self.false_flags
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn cell_at(&self, coords: Coord2) -> EngineCell {
        self.board[coords.to_nd_index()]
    }

    pub fn true_cell_at(&self, coords: Coord2) -> TrueCell {
        self.truth[coords.to_nd_index()]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use EngineCell::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let has_mine = self.mine_layout[coords];
        let cell = self.board[coords.to_nd_index()];
        let outcome = match cell {
            Hidden => {
                self.board[coords.to_nd_index()] = Flagged;
                if has_mine {
                    self.remaining_mine_guesses -= 1;
                } else {
                    self.false_flags += 1;
                }
                MarkOutcome::Flagged
            }
            Flagged => {
                self.board[coords.to_nd_index()] = Hidden;
                self.unflag_counters(has_mine);
                MarkOutcome::Unflagged
            }
            Revealed(_) => return Err(GameError::CellRevealed),
        };

        self.evaluate();
        Ok(outcome)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use EngineCell::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.board[coords.to_nd_index()];
        match cell {
            Flagged => Err(GameError::CellFlagged),
            Revealed(_) => Ok(RevealOutcome::NoChange),
            Hidden if self.mine_layout[coords] => {
                self.triggered_mine = Some(coords);
                self.end_game(GameState::Lost);
                Ok(RevealOutcome::HitMine)
            }
            Hidden => {
                let opened = self.flood_fill(coords);
                self.evaluate();
                Ok(RevealOutcome::Revealed(opened))
            }
        }
    }

    /// Reveals `start` and saturates the 8-connected region of empty cells around it, including its numbered
    /// boundary. Mines are never reached. Returns how many cells were opened.
    fn flood_fill(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let truth = self.truth[coords.to_nd_index()];
            let adjacent_mines = match truth {
                TrueCell::Mine => continue,
                TrueCell::Empty => 0,
                TrueCell::Numbered(n) => n,
            };

            let cell = self.board[coords.to_nd_index()];
            match cell {
                EngineCell::Revealed(_) => continue,
                EngineCell::Flagged => self.unflag_counters(false),
                EngineCell::Hidden => {}
            }

            self.board[coords.to_nd_index()] = EngineCell::Revealed(adjacent_mines);
            self.revealed_count += 1;
            opened += 1;

            if truth == TrueCell::Empty {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(coords)
                        .filter(|&pos| self.board[pos.to_nd_index()].is_unrevealed()),
                );
            }
        }

        opened
    }

    fn unflag_counters(&mut self, has_mine: bool) {
        if has_mine {
            self.remaining_mine_guesses += 1;
        } else {
            self.false_flags -= 1;
        }
    }

    fn evaluate(&mut self) {
        if self.state.is_finished() {
            return;
        }

        if self.revealed_count == self.mine_layout.safe_cell_count() {
            self.end_game(GameState::Won(Victory::AllSafeCellsExplored));
        } else if self.remaining_mine_guesses == 0 && self.false_flags == 0 {
            self.end_game(GameState::Won(Victory::AllMinesFlagged));
        }
    }

    fn end_game(&mut self, state: GameState) {
        if self.state.is_finished() {
            return;
        }

        log::info!("Game ended: {:?}", state);
        self.state = state;
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord2, mines: &[Coord2]) -> MineLayout {
        MineLayout::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn reveal_hits_mine_and_sets_triggered_cell() {
        let mut engine = PlayEngine::new(layout((2, 2), &[(1, 1)]));

        let outcome = engine.reveal((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.triggered_mine(), Some((1, 1)));
    }

    #[test]
    fn flagging_only_mine_wins() {
        let mut engine = PlayEngine::new(layout((2, 2), &[(0, 0)]));

        assert_eq!(engine.toggle_flag((0, 0)).unwrap(), MarkOutcome::Flagged);

        assert_eq!(engine.remaining_mine_guesses(), 0);
        assert_eq!(engine.false_flags(), 0);
        assert_eq!(engine.state(), GameState::Won(Victory::AllMinesFlagged));
    }

    #[test]
    fn false_flag_blocks_flag_victory() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 0)]));

        engine.toggle_flag((2, 2)).unwrap();
        engine.toggle_flag((0, 0)).unwrap();

        assert_eq!(engine.remaining_mine_guesses(), 0);
        assert_eq!(engine.false_flags(), 1);
        assert_eq!(engine.state(), GameState::Active);

        engine.toggle_flag((2, 2)).unwrap();
        assert_eq!(engine.state(), GameState::Won(Victory::AllMinesFlagged));
    }

    #[test]
    fn zero_mine_board_is_won_by_exploration() {
        let mut engine = PlayEngine::new(layout((2, 2), &[]));

        assert_eq!(engine.reveal((1, 0)).unwrap(), RevealOutcome::Revealed(4));

        for coords in iter_coords((2, 2)) {
            assert_eq!(engine.cell_at(coords), EngineCell::Revealed(0));
        }
        assert_eq!(
            engine.state(),
            GameState::Won(Victory::AllSafeCellsExplored)
        );
    }

    #[test]
    fn flag_then_unflag_restores_counters() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 0)]));
        let before = engine.clone();

        assert_eq!(engine.toggle_flag((2, 1)).unwrap(), MarkOutcome::Flagged);
        assert_eq!(engine.false_flags(), 1);
        assert_eq!(engine.toggle_flag((2, 1)).unwrap(), MarkOutcome::Unflagged);
        assert_eq!(engine, before);

        engine.toggle_flag((0, 0)).unwrap();
        assert_eq!(engine.state(), GameState::Won(Victory::AllMinesFlagged));
    }

    #[test]
    fn mine_flag_toggle_restores_counters() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 0), (2, 2)]));
        let before = engine.clone();

        engine.toggle_flag((2, 2)).unwrap();
        assert_eq!(engine.remaining_mine_guesses(), 1);
        engine.toggle_flag((2, 2)).unwrap();
        assert_eq!(engine, before);
    }

    #[test]
    fn flagging_revealed_cell_is_rejected() {
        let mut engine = PlayEngine::new(layout((3, 1), &[(0, 0)]));

        engine.reveal((1, 0)).unwrap();
        let before = engine.clone();

        assert_eq!(engine.toggle_flag((1, 0)), Err(GameError::CellRevealed));
        assert_eq!(engine, before);
    }

    #[test]
    fn revealing_flagged_cell_is_rejected() {
        let mut engine = PlayEngine::new(layout((3, 1), &[(0, 0)]));

        engine.toggle_flag((2, 0)).unwrap();
        assert_eq!(engine.reveal((2, 0)), Err(GameError::CellFlagged));
        assert_eq!(engine.cell_at((2, 0)), EngineCell::Flagged);
    }

    #[test]
    fn revealing_revealed_cell_is_no_change() {
        let mut engine = PlayEngine::new(layout((3, 1), &[(0, 0)]));

        engine.reveal((1, 0)).unwrap();
        assert_eq!(engine.reveal((1, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine.revealed_count(), 1);
    }

    #[test]
    fn reveal_numbered_cell_does_not_spread() {
        let mut engine = PlayEngine::new(layout((3, 3), &[(0, 0)]));

        assert_eq!(engine.reveal((1, 1)).unwrap(), RevealOutcome::Revealed(1));
        assert_eq!(engine.cell_at((1, 1)), EngineCell::Revealed(1));
        assert_eq!(engine.cell_at((2, 2)), EngineCell::Hidden);
    }

    #[test]
    fn flood_fill_saturates_empty_region_and_numbered_boundary() {
        // . . . 1 X
        // . . . 1 1
        // 1 1 . . .
        // X 1 . . .
        let mines = [(4, 0), (0, 3)];
        let mut engine = PlayEngine::new(layout((5, 4), &mines));

        let outcome = engine.reveal((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed(18));
        assert_eq!(engine.state(), GameState::Won(Victory::AllSafeCellsExplored));
        assert_eq!(engine.cell_at((3, 0)), EngineCell::Revealed(1));
        assert_eq!(engine.cell_at((1, 3)), EngineCell::Revealed(1));
        assert_eq!(engine.cell_at((4, 0)), EngineCell::Hidden);
        assert_eq!(engine.cell_at((0, 3)), EngineCell::Hidden);
    }

    #[test]
    fn flood_fill_stops_at_numbered_wall() {
        // . 1 X 1 .
        // . 1 X 1 .
        // . 1 X 1 .
        let mines = [(2, 0), (2, 1), (2, 2)];
        let mut engine = PlayEngine::new(layout((5, 3), &mines));

        engine.reveal((0, 1)).unwrap();

        for y in 0..3 {
            assert_eq!(engine.cell_at((0, y)), EngineCell::Revealed(0));
            assert!(matches!(engine.cell_at((1, y)), EngineCell::Revealed(_)));
            assert_eq!(engine.cell_at((3, y)), EngineCell::Hidden);
            assert_eq!(engine.cell_at((4, y)), EngineCell::Hidden);
        }
        assert_eq!(engine.revealed_count(), 6);
        assert_eq!(engine.state(), GameState::Active);
    }

    #[test]
    fn flood_fill_clears_false_flags() {
        let mut engine = PlayEngine::new(layout((4, 4), &[(3, 3)]));

        engine.toggle_flag((1, 1)).unwrap();
        assert_eq!(engine.false_flags(), 1);

        engine.reveal((0, 0)).unwrap();

        assert_eq!(engine.cell_at((1, 1)), EngineCell::Revealed(0));
        assert_eq!(engine.false_flags(), 0);
        assert_eq!(engine.cell_at((3, 3)), EngineCell::Hidden);
        assert_eq!(
            engine.state(),
            GameState::Won(Victory::AllSafeCellsExplored)
        );
    }

    #[test]
    fn all_mine_board_is_won_by_exploration_on_first_flag() {
        let mines: Vec<_> = iter_coords((2, 2)).collect();
        let mut engine = PlayEngine::new(layout((2, 2), &mines));

        assert_eq!(engine.toggle_flag((1, 0)).unwrap(), MarkOutcome::Flagged);

        assert_eq!(engine.remaining_mine_guesses(), 3);
        assert_eq!(
            engine.state(),
            GameState::Won(Victory::AllSafeCellsExplored)
        );
        assert_eq!(engine.toggle_flag((0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn all_mine_board_is_lost_on_first_reveal() {
        let mines: Vec<_> = iter_coords((2, 2)).collect();
        let mut engine = PlayEngine::new(layout((2, 2), &mines));

        assert_eq!(engine.reveal((0, 1)).unwrap(), RevealOutcome::HitMine);
        assert_eq!(engine.state(), GameState::Lost);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut engine = PlayEngine::new(layout((2, 2), &[(1, 1)]));

        engine.reveal((1, 1)).unwrap();

        assert_eq!(engine.reveal((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(engine.toggle_flag((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(engine.state(), GameState::Lost);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut engine = PlayEngine::new(layout((2, 2), &[(1, 1)]));

        assert_eq!(engine.reveal((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(engine.toggle_flag((0, 2)), Err(GameError::InvalidCoords));
    }
}
