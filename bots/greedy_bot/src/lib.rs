use reversi::{Board, Game, Move, Piece, BOARD_SIZE};
use reversi_bot_utils::Bot;
use tracing::debug;

/// Picks the placement that maximizes its own score right after the move.
///
/// Only a single move is looked at. Ties go to the first cell in row-major order.
pub struct GreedyBot {
    piece: Piece,
}

impl GreedyBot {
    pub fn new(piece: Piece) -> Self {
        Self { piece }
    }

    /// Returns the best placement and the score it leads to.
    pub fn best_placement(&self, board: &Board) -> Option<(i8, i8, usize)> {
        let mut candidates = Vec::new();
        for i in 0..BOARD_SIZE {
            for j in 0..BOARD_SIZE {
                let mut trial = *board;
                if trial.put(self.piece, i, j).is_ok() {
                    candidates.push((i, j, trial.score(self.piece)));
                }
            }
        }
        highest_scoring(candidates)
    }
}

// The search starts from a score of 0, not from the lowest possible score, so
// a placement has to leave the bot with at least one piece to be chosen. Every
// legal placement does, since it keeps the placed piece.
fn highest_scoring(
    candidates: impl IntoIterator<Item = (i8, i8, usize)>,
) -> Option<(i8, i8, usize)> {
    let mut top_score = 0;
    let mut top_choice = None;
    for (i, j, score) in candidates {
        if score > top_score {
            top_score = score;
            top_choice = Some((i, j, score));
        }
    }
    top_choice
}

impl Bot for GreedyBot {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn propose_move(&mut self, game: &Game) -> anyhow::Result<Move> {
        let mv = match self.best_placement(game.board()) {
            Some((i, j, score)) => {
                debug!(piece = %self.piece, row = i, column = j, score, "Greedy choice");
                Move::new(self.piece, i, j)
            }
            None => {
                debug!(piece = %self.piece, "No placement raises the score");
                Move::invalid(self.piece)
            }
        };
        Ok(mv)
    }
}
