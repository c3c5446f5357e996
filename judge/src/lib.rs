mod error;
mod game;
mod transcript;
pub use error::*;
pub use game::*;
pub use transcript::*;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Stop replaying at the first rejected move.
    pub stop_on_illegal_move: bool,
    /// Print the board to stderr after every accepted move.
    pub show_board: bool,
}
