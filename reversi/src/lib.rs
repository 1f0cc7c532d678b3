pub use board::*;
pub use game::*;
pub use moves::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod game;
mod moves;
mod visualization;
