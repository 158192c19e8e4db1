use sweeper_core::{Action, CellCount, ConfigError, Coord, Coord2, GameConfig, Move, mult};
use thiserror::Error;

/// Player input that cannot be turned into a move. Rejected input never touches the game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCommand {
    #[error("Missing {0}, expected: <column> <row> <free|mine>")]
    MissingToken(&'static str),
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("Unknown command {0:?}, use \"free\" or \"mine\"")]
    UnknownAction(String),
    #[error("Unexpected input after the command: {0:?}")]
    TrailingInput(String),
    #[error("Cell {column} {row} is outside the {width}x{height} field")]
    OutOfBounds {
        column: i64,
        row: i64,
        width: Coord,
        height: Coord,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("Mine count must be between 0 and {capacity}, got {requested}")]
    OutOfRange { requested: i64, capacity: CellCount },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parses `<column> <row> <free|mine>`, 1-indexed, command case-insensitive.
pub fn parse_move(line: &str, (width, height): Coord2) -> Result<Move, InvalidCommand> {
    let mut tokens = line.split_whitespace();

    let column = parse_number(tokens.next().ok_or(InvalidCommand::MissingToken("column"))?)?;
    let row = parse_number(tokens.next().ok_or(InvalidCommand::MissingToken("row"))?)?;
    let action = tokens.next().ok_or(InvalidCommand::MissingToken("command"))?;

    let action = match action.to_lowercase().as_str() {
        "free" => Action::Reveal,
        "mine" => Action::ToggleFlag,
        _ => return Err(InvalidCommand::UnknownAction(action.to_string())),
    };

    if let Some(extra) = tokens.next() {
        return Err(InvalidCommand::TrailingInput(extra.to_string()));
    }

    let out_of_bounds = InvalidCommand::OutOfBounds {
        column,
        row,
        width,
        height,
    };
    let coords = match (to_index(column, width), to_index(row, height)) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(out_of_bounds),
    };

    Ok(Move { coords, action })
}

/// Parses the mine count answer into a configuration for a board of `size`.
pub fn parse_mine_count(line: &str, size: Coord2) -> Result<GameConfig, SetupError> {
    let token = line.trim();
    let requested: i64 = token
        .parse()
        .map_err(|_| SetupError::NotANumber(token.to_string()))?;

    let mines = CellCount::try_from(requested).map_err(|_| SetupError::OutOfRange {
        requested,
        capacity: mult(size.0, size.1),
    })?;

    Ok(GameConfig::new(size, mines)?)
}

fn parse_number(token: &str) -> Result<i64, InvalidCommand> {
    token
        .parse()
        .map_err(|_| InvalidCommand::NotANumber(token.to_string()))
}

/// Converts a 1-based index into a 0-based coordinate below `bound`.
fn to_index(value: i64, bound: Coord) -> Option<Coord> {
    let index = Coord::try_from(value.checked_sub(1)?).ok()?;
    (index < bound).then_some(index)
}
