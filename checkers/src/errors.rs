/// The reasons why [`GameState::make_move()`](crate::GameState::make_move) can reject a move.
///
/// `leg` is the index of the offending leg in the list of destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    NotPlayersTurn,
    EmptySquareOrigin,
    PieceMustCapture { leg: usize },
    InvalidMove { leg: usize },
}

impl std::error::Error for MoveError {}

fn ordinal_number(num: usize) -> String {
    match num {
        0 => String::from("first"),
        1 => String::from("second"),
        2 => String::from("third"),
        3 => String::from("fourth"),
        4 => String::from("fifth"),
        n => {
            let suffix = match ((n + 1) % 10, (n + 1) % 100) {
                (_, 11..=13) => "th",
                (1, _) => "st",
                (2, _) => "nd",
                (3, _) => "rd",
                _ => "th",
            };
            format!("{}{}", n + 1, suffix)
        }
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::NotPlayersTurn => write!(f, "It is not that player's turn."),
            MoveError::EmptySquareOrigin => write!(f, "There is no piece there."),
            MoveError::PieceMustCapture { leg } => write!(
                f,
                "Another piece must capture first (the {} leg is not a capture).",
                ordinal_number(*leg)
            ),
            MoveError::InvalidMove { leg } => write!(
                f,
                "That piece cannot move like that (the {} leg is not allowed).",
                ordinal_number(*leg)
            ),
        }
    }
}

/// The error type for building a board from a list of squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// A square lies outside of the 8×8 board.
    OutOfBounds { x: i8, y: i8 },
    DuplicateCoordinate { x: i8, y: i8 },
    DuplicateId { id: u32 },
}

impl std::error::Error for SetupError {}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::OutOfBounds { x, y } => {
                write!(f, "The square at ({}, {}) is not on the board", x, y)
            }
            SetupError::DuplicateCoordinate { x, y } => {
                write!(f, "The board contains more than one square at ({}, {})", x, y)
            }
            SetupError::DuplicateId { id } => {
                write!(f, "The board contains more than one square with id {}", id)
            }
        }
    }
}
