use std::str::FromStr;

use crate::{Board, Piece};

/// Specifies which piece to place, and where.
///
/// A move with both coordinates set to `-1` is the "no move" sentinel, see
/// [`Move::invalid()`]. Any attempt to play it is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub row: i8,
    pub column: i8,
}

impl Move {
    pub fn new(piece: Piece, row: i8, column: i8) -> Self {
        Self { piece, row, column }
    }

    /// The sentinel for "no move found".
    pub fn invalid(piece: Piece) -> Self {
        Self {
            piece,
            row: -1,
            column: -1,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.row == -1 && self.column == -1
    }

    /// The target cell in board notation, if it is on the board.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Board::is_in_bounds(self.row, self.column).then_some(Coordinate {
            row: self.row,
            column: self.column,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.coordinate() {
            Some(coordinate) => write!(f, "{} {}", self.piece, coordinate),
            None => write!(f, "{} ({}, {})", self.piece, self.row, self.column),
        }
    }
}

/// A cell on the board, written as a column letter followed by a row digit.
///
/// `A1` is the top-left cell (row 0, column 0), `H8` the bottom-right one.
/// ```
/// # use reversi::Coordinate;
/// let coordinate: Coordinate = "D3".parse().unwrap();
/// assert_eq!(coordinate, Coordinate { row: 2, column: 3 });
/// assert_eq!(coordinate.to_string(), "D3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i8,
    pub column: i8,
}

/// The error type for the [`FromStr`] instance of [`Coordinate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidColumn,
    InvalidRow,
}

impl std::error::Error for CoordinateFromStrErr {}

impl std::fmt::Display for CoordinateFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateFromStrErr::LessThanTwoChars => write!(f, "Coordinate is too short"),
            CoordinateFromStrErr::MoreThanTwoChars => write!(f, "Coordinate is too long"),
            CoordinateFromStrErr::InvalidColumn => write!(f, "Column should be a letter from A to H"),
            CoordinateFromStrErr::InvalidRow => write!(f, "Row should be a digit from 1 to 8"),
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let column_char = chars.next().ok_or(CoordinateFromStrErr::LessThanTwoChars)?;
        let row_char = chars.next().ok_or(CoordinateFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(CoordinateFromStrErr::MoreThanTwoChars);
        }
        let column = match column_char.to_ascii_uppercase() {
            c @ 'A'..='H' => (c as u8 - b'A') as i8,
            _ => return Err(CoordinateFromStrErr::InvalidColumn),
        };
        let row = match row_char {
            c @ '1'..='8' => (c as u8 - b'1') as i8,
            _ => return Err(CoordinateFromStrErr::InvalidRow),
        };
        Ok(Coordinate { row, column })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !Board::is_in_bounds(self.row, self.column) {
            return write!(f, "({}, {})", self.row, self.column);
        }
        let column = char::from(b'A' + self.column as u8);
        write!(f, "{}{}", column, self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coordinates() {
        assert_eq!("A1".parse::<Coordinate>(), Ok(Coordinate { row: 0, column: 0 }));
        assert_eq!("A5".parse::<Coordinate>(), Ok(Coordinate { row: 4, column: 0 }));
        assert_eq!("h8".parse::<Coordinate>(), Ok(Coordinate { row: 7, column: 7 }));
        assert_eq!(" C4\n".parse::<Coordinate>(), Ok(Coordinate { row: 3, column: 2 }));
    }

    #[test]
    fn reject_malformed_coordinates() {
        assert_eq!("".parse::<Coordinate>(), Err(CoordinateFromStrErr::LessThanTwoChars));
        assert_eq!("A".parse::<Coordinate>(), Err(CoordinateFromStrErr::LessThanTwoChars));
        assert_eq!("A10".parse::<Coordinate>(), Err(CoordinateFromStrErr::MoreThanTwoChars));
        assert_eq!("I1".parse::<Coordinate>(), Err(CoordinateFromStrErr::InvalidColumn));
        assert_eq!("A9".parse::<Coordinate>(), Err(CoordinateFromStrErr::InvalidRow));
        assert_eq!("A0".parse::<Coordinate>(), Err(CoordinateFromStrErr::InvalidRow));
        assert_eq!("5A".parse::<Coordinate>(), Err(CoordinateFromStrErr::InvalidColumn));
    }

    #[test]
    fn off_board_coordinates_display_as_pairs() {
        assert_eq!(Coordinate { row: 7, column: 7 }.to_string(), "H8");
        assert_eq!(Coordinate { row: 0, column: -1 }.to_string(), "(0, -1)");
        assert_eq!(Coordinate { row: 3, column: 100 }.to_string(), "(3, 100)");
        assert_eq!(Coordinate { row: 8, column: 0 }.to_string(), "(8, 0)");
    }

    #[test]
    fn sentinel_move() {
        let mv = Move::invalid(Piece::White);
        assert!(mv.is_invalid());
        assert_eq!(mv.coordinate(), None);
        assert_eq!(mv.to_string(), "White (-1, -1)");
        assert_eq!(Move::new(Piece::Black, 2, 3).to_string(), "Black D3");
    }
}
