use std::io::Write;

use reversi::{Board, Game, GameStatus, IllegalMove, Outcome, Piece};
use tracing::{debug, warn};

use crate::player::Player;

pub enum GameResult {
    Finished {
        outcome: Outcome,
        black_score: usize,
        white_score: usize,
    },
    IllegalMoveByPlayer {
        piece: Piece,
        err: IllegalMove,
    },
}

/// Plays one game from the starting position, rendering every position to `out`.
///
/// `players[0]` plays Black and `players[1]` plays White.
///
/// Returns an error only on I/O failure, not when an illegal move is played.
/// A rejected move is asked for again if the player supports it, otherwise the
/// game ends with [`GameResult::IllegalMoveByPlayer`].
pub fn play_game(players: &mut [Player; 2], out: &mut impl Write) -> anyhow::Result<GameResult> {
    debug_assert_eq!(players[0].piece(), Piece::Black);
    debug_assert_eq!(players[1].piece(), Piece::White);

    let mut game = Game::new();
    print_position(out, game.board())?;

    while game.status() == GameStatus::Continue {
        writeln!(out)?;
        writeln!(out, "Move {}", game.move_count() + 1)?;
        writeln!(out, "Current turn: {}", game.current_turn())?;

        let player = &mut players[game.current_turn() as usize];
        let mv = player.propose_move(&game)?;
        match game.play(mv) {
            Ok(status) => {
                debug!(player = %player.name, %mv, ?status, "Move played");
            }
            Err(err) => {
                warn!(player = %player.name, %mv, "{}", err);
                writeln!(out, "Invalid move!")?;
                if !player.retry_on_illegal_move() {
                    return Ok(GameResult::IllegalMoveByPlayer {
                        piece: player.piece(),
                        err,
                    });
                }
            }
        }

        print_position(out, game.board())?;
    }

    let Some(outcome) = game.outcome() else {
        anyhow::bail!("Game loop ended while the game was still running");
    };
    match outcome {
        Outcome::Winner(Piece::Black) => writeln!(out, "Black wins!")?,
        Outcome::Winner(Piece::White) => writeln!(out, "White wins!")?,
        Outcome::Draw => writeln!(out, "Draw!")?,
    }

    Ok(GameResult::Finished {
        outcome,
        black_score: game.board().score(Piece::Black),
        white_score: game.board().score(Piece::White),
    })
}

fn print_position(out: &mut impl Write, board: &Board) -> std::io::Result<()> {
    writeln!(out, "{}", board)?;
    writeln!(out, "Black score: {}", board.score(Piece::Black))?;
    writeln!(out, "White score: {}", board.score(Piece::White))
}
