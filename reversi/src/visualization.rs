use crate::{Board, Cell};

const SEPARATOR: &str = " +-+-+-+-+-+-+-+-+";

/// Renders the board as a text grid.
///
/// Columns are labelled `A` to `H` and rows `1` to `8`, black pieces are drawn
/// as `X` and white pieces as `O`.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("  A B C D E F G H\n");
    result += SEPARATOR;
    for (i, row) in board.rows().enumerate() {
        result += &format!("\n{}|", i + 1);
        for cell in row {
            result.push(match cell {
                Cell::Empty => ' ',
                Cell::Black => 'X',
                Cell::White => 'O',
            });
            result.push('|');
        }
        result += "\n";
        result += SEPARATOR;
    }
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
