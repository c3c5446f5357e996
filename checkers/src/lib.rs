//! Rules engine for English draughts (checkers) on the standard 8×8 board.
//!
//! [`GameState`] validates and applies moves, including forced captures,
//! chains of jumps and promotion, and reports the winner. The board and its
//! queries live in [`SquareSet`] and [`Square`].
//!
//! ```
//! use checkers::{Address, GameState, Player};
//! let mut game = GameState::default();
//! let moved = game.make_move(
//!     Player::One,
//!     Address::Coordinate { x: 1, y: 2 },
//!     &[Address::Coordinate { x: 0, y: 3 }],
//! );
//! assert!(moved);
//! assert_eq!(game.current_player(), Player::Two);
//! ```

pub use errors::*;
pub use game_state::*;
pub use geometry::*;
pub use piece::*;
pub use protocol_types::*;
pub use square::*;
pub use square_set::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod errors;
mod game_state;
mod geometry;
mod piece;
mod protocol_types;
mod square;
mod square_set;
mod visualization;
