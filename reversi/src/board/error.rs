use crate::Piece;

/// The error type for [`Board::get()`](crate::Board::get), i.e. for reading a cell
/// that is not on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub row: i8,
    pub column: i8,
}

impl std::error::Error for OutOfRange {}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell ({}, {}) is outside the board, row and column should be between 0 and 7",
            self.row, self.column
        )
    }
}

/// The error type for building a [`Board`](crate::Board) from a grid that is not 8x8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidBoardShape {
    WrongNumberOfRows { rows: usize },
    WrongNumberOfColumns { row: usize, columns: usize },
}

impl std::error::Error for InvalidBoardShape {}

impl std::fmt::Display for InvalidBoardShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoardShape::WrongNumberOfRows { rows } => {
                write!(f, "The board should have 8 rows, but has {}", rows)
            }
            InvalidBoardShape::WrongNumberOfColumns { row, columns } => write!(
                f,
                "Every row of the board should have 8 columns, but row {} has {}",
                row, columns
            ),
        }
    }
}

/// The error type for [`Board::put()`](crate::Board::put), i.e. for placing a single piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds,
    Occupied { existing: Piece },
    NoAdjacentOpponent,
    NothingFlipped,
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds => {
                write!(f, "Piece was placed out of the bounds of the board")
            }
            IllegalPlacement::Occupied { existing } => {
                write!(f, "Piece was placed on a cell already holding a {} piece", existing)
            }
            IllegalPlacement::NoAdjacentOpponent => write!(
                f,
                "Piece was placed on a cell with no opposing piece next to it"
            ),
            IllegalPlacement::NothingFlipped => write!(
                f,
                "Piece was placed next to opposing pieces, but does not enclose any of them"
            ),
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardFromStrErr {
    InvalidShape(InvalidBoardShape),
    InvalidCell { row: usize, column: usize, found: char },
}

impl std::error::Error for BoardFromStrErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardFromStrErr::InvalidShape(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for BoardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFromStrErr::InvalidShape(_) => write!(f, "Board diagram is not 8x8"),
            BoardFromStrErr::InvalidCell { row, column, found } => write!(
                f,
                "Unexpected character '{}' at ({}, {}), expected one of '.', 'X' or 'O'",
                found, row, column
            ),
        }
    }
}

impl From<InvalidBoardShape> for BoardFromStrErr {
    fn from(err: InvalidBoardShape) -> Self {
        BoardFromStrErr::InvalidShape(err)
    }
}
