mod human;
pub use human::*;

use reversi::{Game, Move, Piece};

/// A trait to simplify writing players.
///
/// A bot only ever sees the game through a shared reference. It proposes a
/// move, and the caller decides whether to apply it.
pub trait Bot {
    /// The side this bot plays.
    fn piece(&self) -> Piece;

    /// Picks the next move for the current position.
    ///
    /// Errors are reserved for failures of the bot itself, e.g. its input
    /// going away. A bot that cannot find a move returns [`Move::invalid()`].
    fn propose_move(&mut self, game: &Game) -> anyhow::Result<Move>;

    /// Whether asking again after a rejected move can lead to a different answer.
    fn retry_on_illegal_move(&self) -> bool {
        false
    }
}
