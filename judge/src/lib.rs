mod game;
mod menu;
mod player;
pub use game::*;
pub use menu::*;
pub use player::*;

/// Settings for a series of games, as resolved from the command line.
pub struct Config {
    pub black: PlayerKind,
    pub white: PlayerKind,
    pub num_games: usize,
    /// Randomly swap which configured player gets Black before each game.
    pub shuffle_colors: bool,
    pub rng: rand::rngs::StdRng,
}
