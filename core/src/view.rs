use crate::*;

/// Selects which logical board is rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardView {
    /// What the player has uncovered so far.
    Player,
    /// The full layout, shown once the game ends.
    Solution,
}

/// A single cell as seen through a [`BoardView`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewCell {
    Hidden,
    Flagged,
    Empty,
    Number(u8),
    Mine,
}

impl From<TrueCell> for ViewCell {
    fn from(cell: TrueCell) -> Self {
        match cell {
            TrueCell::Mine => Self::Mine,
            TrueCell::Empty => Self::Empty,
            TrueCell::Numbered(n) => Self::Number(n),
        }
    }
}

impl From<EngineCell> for ViewCell {
    fn from(cell: EngineCell) -> Self {
        match cell {
            EngineCell::Hidden => Self::Hidden,
            EngineCell::Flagged => Self::Flagged,
            EngineCell::Revealed(0) => Self::Empty,
            EngineCell::Revealed(n) => Self::Number(n),
        }
    }
}

impl PlayEngine {
    pub fn view_cell(&self, coords: Coord2, view: BoardView) -> ViewCell {
        match view {
            BoardView::Player => self.cell_at(coords).into(),
            BoardView::Solution => self.true_cell_at(coords).into(),
        }
    }
}
