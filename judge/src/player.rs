use greedy_bot::GreedyBot;
use reversi::{Game, Move, Piece};
use reversi_bot_utils::{Bot, HumanPlayer};

/// The kinds of players the judge can seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    /// The greedy computer player
    Cpu,
    /// A person entering moves on the console
    Human,
}

/// A seated player: a bot plus a name for messages and logs.
pub struct Player {
    pub name: String,
    bot: Box<dyn Bot>,
}

impl Player {
    pub fn new(name: &str, bot: Box<dyn Bot>) -> Self {
        Self {
            name: String::from(name),
            bot,
        }
    }

    pub fn from_kind(kind: PlayerKind, piece: Piece) -> Self {
        match kind {
            PlayerKind::Cpu => Self::new(
                &format!("CPU ({})", piece),
                Box::new(GreedyBot::new(piece)),
            ),
            PlayerKind::Human => Self::new(
                &format!("Human ({})", piece),
                Box::new(HumanPlayer::stdio(piece)),
            ),
        }
    }

    pub fn piece(&self) -> Piece {
        self.bot.piece()
    }

    pub fn propose_move(&mut self, game: &Game) -> anyhow::Result<Move> {
        self.bot.propose_move(game)
    }

    pub fn retry_on_illegal_move(&self) -> bool {
        self.bot.retry_on_illegal_move()
    }
}
