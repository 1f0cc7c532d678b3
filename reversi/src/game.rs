use std::cmp::Ordering;

use crate::{Board, IllegalPlacement, Move, Piece};

/// Whether any further moves are possible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Continue,
    GameOver,
}

/// Summarizes the outcome of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    /// The turn passes to the opponent.
    Continue,
    /// The opponent has no legal move, so the same player moves again.
    ContinueWithSkip,
    /// Neither player has a legal move left.
    GameOver,
}

/// The final result of a game, by comparing scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Piece),
    Draw,
}

/// The error type for [`Game::next_move()`].
///
/// A rejected move leaves the game untouched, the same player has to move again.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfTurn { current_turn: Piece },
    IllegalPlacement(IllegalPlacement),
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::IllegalPlacement(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfTurn { current_turn } => {
                write!(f, "Tried to move out of turn, it is {}'s turn", current_turn)
            }
            IllegalMove::IllegalPlacement(_) => write!(f, "Tried to place a piece illegally"),
        }
    }
}

/// A game of Reversi: a board plus turn bookkeeping.
///
/// The only way to change the game is [`Self::next_move()`].
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    current_turn: Piece,
    move_count: u32,
    status: GameStatus,
}

impl Game {
    /// Starts a game from the standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a game from the given position, with Black to move.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_turn(&self) -> Piece {
        self.current_turn
    }

    /// The number of successful placements so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Places a piece for the player whose turn it is, and advances the turn.
    ///
    /// If the opponent then has no legal placement anywhere, the turn goes back to the
    /// player who just moved ([`MoveStatus::ContinueWithSkip`]). If that player can't
    /// move either, the game is over.
    pub fn next_move(
        &mut self,
        piece: Piece,
        row: i8,
        column: i8,
    ) -> Result<MoveStatus, IllegalMove> {
        if piece != self.current_turn {
            return Err(IllegalMove::OutOfTurn {
                current_turn: self.current_turn,
            });
        }

        self.board
            .put(piece, row, column)
            .map_err(IllegalMove::IllegalPlacement)?;

        self.move_count += 1;
        self.current_turn = !piece;

        if self.board.possible_to_place_piece(self.current_turn) {
            return Ok(MoveStatus::Continue);
        }

        self.current_turn = piece;
        if self.board.possible_to_place_piece(self.current_turn) {
            Ok(MoveStatus::ContinueWithSkip)
        } else {
            self.status = GameStatus::GameOver;
            Ok(MoveStatus::GameOver)
        }
    }

    /// Same as [`Self::next_move()`], taking the move as a single value.
    pub fn play(&mut self, mv: Move) -> Result<MoveStatus, IllegalMove> {
        self.next_move(mv.piece, mv.row, mv.column)
    }

    /// Who won, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.status == GameStatus::Continue {
            return None;
        }
        let outcome = match self
            .board
            .score(Piece::Black)
            .cmp(&self.board.score(Piece::White))
        {
            Ordering::Greater => Outcome::Winner(Piece::Black),
            Ordering::Less => Outcome::Winner(Piece::White),
            Ordering::Equal => Outcome::Draw,
        };
        Some(outcome)
    }
}
