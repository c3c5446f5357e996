use serde::{Deserialize, Serialize};

/// One of the two players, identified on the wire by the number 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    /// Starts on rows 0 to 2 and moves towards increasing y.
    One = 1,
    /// Starts on rows 5 to 7 and moves towards decreasing y.
    Two = 2,
}

impl Player {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row direction in which this player's men move.
    pub fn forward(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// The error type for the [`TryFrom<u8>`] instance of [`Player`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPlayerNumber(pub u8);

impl std::error::Error for InvalidPlayerNumber {}

impl std::fmt::Display for InvalidPlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not a player number, expected 1 or 2", self.0)
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayerNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            n => Err(InvalidPlayerNumber(n)),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.number()
    }
}

/// A man or a king owned by one of the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub player: Player,
    pub king: bool,
}

impl Piece {
    /// A piece that has not been crowned yet.
    pub fn man(player: Player) -> Self {
        Self {
            player,
            king: false,
        }
    }

    pub fn king(player: Player) -> Self {
        Self { player, king: true }
    }

    /// The row direction the piece moves in. Kings ignore it.
    pub fn direction(&self) -> i8 {
        self.player.forward()
    }

    pub fn promote(&mut self) {
        self.king = true;
    }
}
