use std::fmt::Write;

use sweeper_core::{BoardView, Game, MineGenerator, Victory, ViewCell};

pub fn glyph(cell: ViewCell) -> char {
    match cell {
        ViewCell::Hidden => '.',
        ViewCell::Flagged => '*',
        ViewCell::Empty => ' ',
        ViewCell::Number(n) => char::from(b'0' + n),
        ViewCell::Mine => 'X',
    }
}

/// Renders one logical board: a header of 1-based column indices, bordered rows prefixed by their 1-based index.
pub fn render_board<G: MineGenerator + Clone>(game: &Game<G>, view: BoardView) -> String {
    let (width, height) = game.config().size;
    let label_width = height.to_string().len();
    let separator = format!("{:—<label_width$}│{}│\n", "", "—".repeat(width.into()));

    let mut out = String::new();
    let header: String = (1..=u32::from(width))
        .filter_map(|column| char::from_digit(column % 10, 10))
        .collect();
    let _ = writeln!(out, "{:label_width$}│{header}│", "");
    out.push_str(&separator);

    for y in 0..height {
        let row: String = (0..width)
            .map(|x| glyph(game.view_cell((x, y), view)))
            .collect();
        let _ = writeln!(out, "{:>label_width$}│{row}│", u16::from(y) + 1);
    }
    out.push_str(&separator);

    out
}

pub fn victory_message(victory: Victory) -> &'static str {
    match victory {
        Victory::AllMinesFlagged => "Congratulations! You found all the mines!",
        Victory::AllSafeCellsExplored => "You successfully explored all safe cells!",
    }
}

pub const LOSS_MESSAGE: &str = "You stepped on a mine and failed!";
