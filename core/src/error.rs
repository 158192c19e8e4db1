use thiserror::Error;

use crate::CellCount;

/// Rejection of a board configuration, raised before any mine is placed.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must be at least one cell wide and tall")]
    EmptyBoard,
    #[error("Too many mines: requested {requested} but the board only fits {capacity}")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell is already revealed")]
    CellRevealed,
    #[error("Cell is flagged, remove the mark before claiming it as free")]
    CellFlagged,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Mine layout does not match the board configuration")]
    LayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
