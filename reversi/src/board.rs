mod error;

use std::str::FromStr;

pub use error::*;

/// The number of rows, and also the number of columns, of the board.
pub const BOARD_SIZE: i8 = 8;

/// The eight compass directions, as (row, column) steps.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The content of a single cell of the [`Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// One of the two sides of the game. Black moves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    #[default]
    Black,
    White,
}

impl Piece {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
        }
    }
}

impl std::ops::Not for Piece {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Black => write!(f, "Black"),
            Piece::White => write!(f, "White"),
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Cell {
        match piece {
            Piece::Black => Cell::Black,
            Piece::White => Cell::White,
        }
    }
}

impl Cell {
    /// The piece on this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Piece::Black),
            Cell::White => Some(Piece::White),
        }
    }
}

/// An 8x8 Reversi board.
///
/// Rows and columns are both indexed from 0 to 7, and the cells are stored
/// in row-major order. Two boards are equal if all their cells are equal.
///
/// The [`Default`] board is the standard starting position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }
}

impl Board {
    /// Creates a board in the starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board without any pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Creates a board from a list of rows.
    ///
    /// Fails if there are not exactly 8 rows of exactly 8 cells each.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, InvalidBoardShape> {
        if rows.len() != BOARD_SIZE as usize {
            return Err(InvalidBoardShape::WrongNumberOfRows { rows: rows.len() });
        }
        let mut board = Self::empty();
        for (i, row) in rows.into_iter().enumerate() {
            board.cells[i] = row
                .try_into()
                .map_err(|row: Vec<Cell>| InvalidBoardShape::WrongNumberOfColumns {
                    row: i,
                    columns: row.len(),
                })?;
        }
        Ok(board)
    }

    pub fn is_in_bounds(row: i8, column: i8) -> bool {
        (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&column)
    }

    /// Returns the content of the cell at the given coordinates.
    pub fn get(&self, row: i8, column: i8) -> Result<Cell, OutOfRange> {
        if !Self::is_in_bounds(row, column) {
            return Err(OutOfRange { row, column });
        }
        Ok(self.cells[row as usize][column as usize])
    }

    /// The rows of the board, from row 0 to row 7.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE as usize]> {
        self.cells.iter()
    }

    /// Places a piece and flips every enclosed line of opposing pieces.
    ///
    /// This is the core function of this type. Starting from the target cell, each of the
    /// eight directions whose neighboring cell holds an opposing piece is scanned outward.
    /// If the scan reaches a piece of the placed color before hitting an empty cell or the
    /// edge of the board, all the cells in between are flipped.
    ///
    /// The placement is legal only if at least one cell gets flipped. On success the number
    /// of flipped cells is returned. On failure the board is left untouched.
    pub fn put(&mut self, piece: Piece, row: i8, column: i8) -> Result<usize, IllegalPlacement> {
        if !Self::is_in_bounds(row, column) {
            return Err(IllegalPlacement::OutOfBounds);
        }

        if let Some(existing) = self.cells[row as usize][column as usize].piece() {
            return Err(IllegalPlacement::Occupied { existing });
        }

        let own_cell = Cell::from(piece);
        let opponent_cell = Cell::from(piece.opponent());

        let opponent_directions: Vec<(i8, i8)> = DIRECTIONS
            .into_iter()
            .filter(|&(di, dj)| {
                let (i, j) = (row + di, column + dj);
                Self::is_in_bounds(i, j) && self.cells[i as usize][j as usize] == opponent_cell
            })
            .collect();

        if opponent_directions.is_empty() {
            return Err(IllegalPlacement::NoAdjacentOpponent);
        }

        // The directions lie on different rays from the target cell, so the
        // flips of one direction never affect the scan of another.
        let num_flipped: usize = opponent_directions
            .into_iter()
            .map(|direction| self.flip_line(own_cell, row, column, direction))
            .sum();

        if num_flipped == 0 {
            return Err(IllegalPlacement::NothingFlipped);
        }

        self.cells[row as usize][column as usize] = own_cell;
        Ok(num_flipped)
    }

    /// Counts the cells holding the given piece.
    pub fn score(&self, piece: Piece) -> usize {
        self.count(Cell::from(piece))
    }

    pub fn num_empty(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// Is it legal to place the piece at the given coordinates?
    ///
    /// The check is done by placing the piece on a throwaway copy of the board.
    pub fn can_put(&self, piece: Piece, row: i8, column: i8) -> bool {
        let mut trial = *self;
        trial.put(piece, row, column).is_ok()
    }

    /// All coordinates where the piece may be placed, in row-major order.
    pub fn locations_for_piece(&self, piece: Piece) -> Vec<(i8, i8)> {
        self.empty_cells()
            .filter(|&(i, j)| self.can_put(piece, i, j))
            .collect()
    }

    /// Is it possible to place this piece anywhere?
    ///
    /// This is a bit more efficient than checking [`Self::locations_for_piece()`].
    pub fn possible_to_place_piece(&self, piece: Piece) -> bool {
        self.empty_cells().any(|(i, j)| self.can_put(piece, i, j))
    }

    fn empty_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|i| (0..BOARD_SIZE).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.cells[i as usize][j as usize] == Cell::Empty)
    }

    fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    // Scans from (row, column) in one direction and flips the cells in between if the
    // line ends in a piece of `own_cell`. Returns the number of flipped cells.
    fn flip_line(&mut self, own_cell: Cell, row: i8, column: i8, (di, dj): (i8, i8)) -> usize {
        let mut distance = 1;
        loop {
            let (i, j) = (row + distance * di, column + distance * dj);
            if !Self::is_in_bounds(i, j) {
                return 0;
            }
            match self.cells[i as usize][j as usize] {
                Cell::Empty => return 0,
                cell if cell == own_cell => {
                    for k in 1..distance {
                        self.cells[(row + k * di) as usize][(column + k * dj) as usize] = own_cell;
                    }
                    return (distance - 1) as usize;
                }
                _ => distance += 1,
            }
        }
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = InvalidBoardShape;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<[[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize]> for Board {
    fn from(cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize]) -> Self {
        Self { cells }
    }
}

/// Parses a diagram of eight lines with eight characters each.
///
/// `.` is an empty cell, `X` a black piece and `O` a white piece. Blank lines and
/// whitespace around the lines are ignored.
impl FromStr for Board {
    type Err = BoardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::with_capacity(BOARD_SIZE as usize);
        for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let cells = line
                .chars()
                .enumerate()
                .map(|(column, c)| match c {
                    '.' => Ok(Cell::Empty),
                    'X' => Ok(Cell::Black),
                    'O' => Ok(Cell::White),
                    found => Err(BoardFromStrErr::InvalidCell { row, column, found }),
                })
                .collect::<Result<Vec<Cell>, BoardFromStrErr>>()?;
            rows.push(cells);
        }
        Ok(Self::from_rows(rows)?)
    }
}

/// Shorthand for creating boards from a diagram.
///
/// This macro is just calling the [`FromStr`] instance of [`Board`].
/// ```
/// # use reversi::Board;
/// let board = reversi::board!(
///     "........
///      ........
///      ........
///      ...OX...
///      ...XO...
///      ........
///      ........
///      ........"
/// );
/// assert_eq!(board, Board::default());
/// ```
#[macro_export]
macro_rules! board {
    ($diagram:literal) => {
        <$crate::Board as std::str::FromStr>::from_str($diagram)
            .expect("Invalid diagram given to board! macro")
    };
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::PlayedOutBoard;

    quickcheck! {
        fn pieces_and_empty_cells_add_up_to_64(board: Board) -> bool {
            board.score(Piece::Black) + board.score(Piece::White) + board.num_empty() == 64
        }

        fn failed_put_leaves_board_unchanged(board: Board, piece: Piece, row: i8, column: i8) -> bool {
            let mut copy = board;
            match copy.put(piece, row, column) {
                Ok(_) => true,
                Err(_) => copy == board,
            }
        }

        fn put_gains_placed_and_flipped_cells(input: PlayedOutBoard) -> bool {
            let PlayedOutBoard { board, to_move } = input;
            board.locations_for_piece(to_move).into_iter().all(|(i, j)| {
                let mut copy = board;
                let num_flipped = copy.put(to_move, i, j).unwrap();
                num_flipped > 0
                    && copy.score(to_move) == board.score(to_move) + num_flipped + 1
                    && copy.score(!to_move) == board.score(!to_move) - num_flipped
            })
        }

        fn locations_match_possible_to_place(input: PlayedOutBoard) -> bool {
            let PlayedOutBoard { board, to_move } = input;
            board.locations_for_piece(to_move).is_empty() != board.possible_to_place_piece(to_move)
        }

        fn get_fails_exactly_outside_the_board(board: Board, row: i8, column: i8) -> bool {
            board.get(row, column).is_ok() == Board::is_in_bounds(row, column)
        }
    }

    #[test]
    fn default_board_has_four_center_pieces() {
        let board = Board::default();
        for i in 0..BOARD_SIZE {
            for j in 0..BOARD_SIZE {
                let expected = match (i, j) {
                    (3, 3) | (4, 4) => Cell::White,
                    (3, 4) | (4, 3) => Cell::Black,
                    _ => Cell::Empty,
                };
                assert_eq!(board.get(i, j), Ok(expected));
            }
        }
        assert_eq!(board.score(Piece::Black), 2);
        assert_eq!(board.score(Piece::White), 2);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn get_out_of_range() {
        let board = Board::default();
        for (i, j) in [(-1, 0), (8, 0), (0, -1), (0, 8)] {
            assert_eq!(board.get(i, j), Err(OutOfRange { row: i, column: j }));
        }
    }

    #[test]
    fn from_rows_checks_shape() {
        let row = vec![Cell::Empty; 8];
        assert_eq!(
            Board::from_rows(vec![row.clone(); 7]),
            Err(InvalidBoardShape::WrongNumberOfRows { rows: 7 })
        );
        let mut rows = vec![row; 8];
        rows[5].push(Cell::Black);
        assert_eq!(
            Board::try_from(rows),
            Err(InvalidBoardShape::WrongNumberOfColumns { row: 5, columns: 9 })
        );
        assert_eq!(Board::from_rows(vec![vec![Cell::Empty; 8]; 8]), Ok(Board::empty()));
    }

    #[test]
    fn from_str_rejects_bad_diagrams() {
        assert_eq!(
            "........\n.......".parse::<Board>(),
            Err(BoardFromStrErr::InvalidShape(
                InvalidBoardShape::WrongNumberOfRows { rows: 2 }
            ))
        );
        assert_eq!(
            "..Z".parse::<Board>(),
            Err(BoardFromStrErr::InvalidCell {
                row: 0,
                column: 2,
                found: 'Z'
            })
        );
    }

    #[test]
    fn put_out_of_range_or_occupied() {
        let mut board = Board::default();
        for piece in [Piece::Black, Piece::White] {
            for (i, j) in [(-1, 0), (8, 0), (0, -1), (0, 8)] {
                assert_eq!(board.put(piece, i, j), Err(IllegalPlacement::OutOfBounds));
            }
            for (i, j) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
                assert!(matches!(
                    board.put(piece, i, j),
                    Err(IllegalPlacement::Occupied { .. })
                ));
            }
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn put_on_corner_of_new_board() {
        let mut board = Board::default();
        for piece in [Piece::Black, Piece::White] {
            for (i, j) in [(0, 0), (0, 7), (7, 0), (7, 7)] {
                assert!(board.put(piece, i, j).is_err());
            }
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn put_beside_single_piece() {
        for diagram in [
            "........\n........\n........\n...O....\n........\n........\n........\n........",
            "........\n........\n........\n...X....\n........\n........\n........\n........",
        ] {
            let mut board: Board = diagram.parse().unwrap();
            for piece in [Piece::Black, Piece::White] {
                for (i, j) in [(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)] {
                    assert!(board.put(piece, i, j).is_err());
                }
            }
        }
    }

    #[test]
    fn put_next_to_opponent_without_enclosing() {
        let mut board = crate::board!(
            ".O....O.
             .O....O.
             ........
             ........
             ........
             ........
             ........
             ........"
        );
        assert_eq!(board.put(Piece::Black, 0, 0), Err(IllegalPlacement::NothingFlipped));
        assert_eq!(board.put(Piece::Black, 0, 7), Err(IllegalPlacement::NothingFlipped));
        assert_eq!(board.put(Piece::Black, 7, 7), Err(IllegalPlacement::NoAdjacentOpponent));
        assert_eq!(board.put(Piece::White, 0, 0), Err(IllegalPlacement::NoAdjacentOpponent));
    }

    #[test]
    fn put_along_own_edges() {
        let mut board = crate::board!(
            ".XXX....
             .X......
             .X......
             ......X.
             ......X.
             ....XXX.
             ........
             ........"
        );
        for (i, j) in [
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 0),
            (2, 0),
            (3, 0),
            (7, 4),
            (7, 5),
            (7, 6),
            (4, 7),
            (5, 7),
            (6, 7),
        ] {
            assert!(board.put(Piece::Black, i, j).is_err());
        }
    }

    #[test]
    fn put_flips_enclosed_lines_only() {
        let mut board = crate::board!(
            "O.O.O...
             .OOO....
             OO.OOX..
             .OOO....
             O.O.O...
             ..X..X..
             ........
             ........"
        );
        assert_eq!(board.put(Piece::Black, 2, 2), Ok(6));
        let expected = crate::board!(
            "O.O.O...
             .OOO....
             OOXXXX..
             .OXX....
             O.X.X...
             ..X..X..
             ........
             ........"
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn put_flips_in_several_directions() {
        let mut board = crate::board!(
            "X..X....
             .O.O.O..
             ..OOO...
             XOO.OO..
             ..OOO...
             .O.O.O..
             X.......
             ........"
        );
        assert_eq!(board.put(Piece::Black, 3, 3), Ok(8));
        let expected = crate::board!(
            "X..X....
             .X.X.O..
             ..XXO...
             XXXXOO..
             ..XOO...
             .X.O.O..
             X.......
             ........"
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn score_counts_only_own_pieces() {
        let board = crate::board!(
            "X..X....
             .O.O.O..
             ..OOO...
             XOO.OO..
             ..OOO...
             .O.O.O..
             X.......
             .......X"
        );
        assert_eq!(board.score(Piece::Black), 5);
        assert_eq!(board.score(Piece::White), 16);
        assert_eq!(board.num_empty(), 43);
    }

    #[test]
    fn opening_locations() {
        let board = Board::default();
        assert_eq!(
            board.locations_for_piece(Piece::Black),
            vec![(2, 3), (3, 2), (4, 5), (5, 4)]
        );
        assert_eq!(
            board.locations_for_piece(Piece::White),
            vec![(2, 4), (3, 5), (4, 2), (5, 3)]
        );
        assert!(!Board::empty().possible_to_place_piece(Piece::Black));
    }
}
