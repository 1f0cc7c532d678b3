use quickcheck::{Arbitrary, Gen};

use crate::{Board, Cell, Piece, BOARD_SIZE};

/// A board reached from the starting position by random legal moves.
#[derive(Clone, Debug)]
pub struct PlayedOutBoard {
    pub board: Board,
    /// The side whose turn it is on `board`.
    pub to_move: Piece,
}

impl Arbitrary for PlayedOutBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_moves = u8::arbitrary(g) % 61;
        let mut board = Board::default();
        let mut to_move = Piece::Black;
        for _ in 0..num_moves {
            let mut locations = board.locations_for_piece(to_move);
            if locations.is_empty() {
                // Forced pass
                to_move = !to_move;
                locations = board.locations_for_piece(to_move);
            }
            let Some(&(i, j)) = g.choose(&locations) else {
                break;
            };
            board.put(to_move, i, j).unwrap();
            to_move = !to_move;
        }
        PlayedOutBoard { board, to_move }
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::arbitrary(g);
            }
        }
        Board::from(cells)
    }
}

impl Arbitrary for Cell {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Cell::Empty, Cell::Black, Cell::White]).unwrap()
    }
}

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Piece::Black, Piece::White]).unwrap()
    }
}
