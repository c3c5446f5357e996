use checkers::{MoveError, Player};

#[derive(Debug)]
/// Error type for one rejected move request.
pub struct IllegalMove {
    /// Index of the request in the transcript.
    pub move_idx: usize,
    pub player: Player,
    /// Every reason the engine gave, in the order it found them.
    pub errors: Vec<MoveError>,
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Move {} by {} was rejected with {} error(s)",
            self.move_idx + 1,
            self.player,
            self.errors.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let err = IllegalMove {
            move_idx: 2,
            player: Player::Two,
            errors: vec![MoveError::NotPlayersTurn],
        };
        assert_eq!(
            err.to_string(),
            "Move 3 by player 2 was rejected with 1 error(s)"
        );
        assert_eq!(
            err.source().map(|e| e.to_string()),
            Some(String::from("It is not that player's turn."))
        );
    }
}
