use serde::{Deserialize, Serialize};

use crate::{Piece, Player, SetupError, Square, SquareSet};

/// The state of a game as exchanged with a host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub current_player_number: Player,
    /// All squares of the board, in board order.
    pub squares: Vec<SquareRecord>,
    /// Only present once the game is decided. Ignored when loading a snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub winner: Option<Player>,
}

/// A single square, including coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareRecord {
    #[serde(default)]
    pub id: Option<u32>,
    pub x: i8,
    pub y: i8,
    /// `null` for an empty square.
    #[serde(default)]
    pub piece: Option<PieceRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceRecord {
    pub player_number: Player,
    #[serde(default)]
    pub king: bool,
}

/// Identifies a square either by its coordinates or by its id.
///
/// On the wire this is either `{"x": 1, "y": 2}` or a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    Coordinate { x: i8, y: i8 },
    Id(u32),
}

/// A request by a player to move one of their pieces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub player_number: Player,
    pub from: Address,
    /// The landing squares of each leg, in order.
    pub to: Vec<Address>,
}

/// Describes the most recent change that was applied to a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LastChange {
    #[serde(rename_all = "camelCase")]
    Move {
        player_number: Player,
        from: Address,
        to: Vec<Address>,
    },
}

impl From<&Square> for SquareRecord {
    fn from(square: &Square) -> Self {
        Self {
            id: square.id,
            x: square.x,
            y: square.y,
            piece: square.piece.map(PieceRecord::from),
        }
    }
}

impl From<SquareRecord> for Square {
    fn from(record: SquareRecord) -> Self {
        Self {
            id: record.id,
            x: record.x,
            y: record.y,
            piece: record.piece.map(Piece::from),
        }
    }
}

impl From<Piece> for PieceRecord {
    fn from(piece: Piece) -> Self {
        Self {
            player_number: piece.player,
            king: piece.king,
        }
    }
}

impl From<PieceRecord> for Piece {
    fn from(record: PieceRecord) -> Self {
        Self {
            player: record.player_number,
            king: record.king,
        }
    }
}

impl TryFrom<Vec<SquareRecord>> for SquareSet {
    type Error = SetupError;

    fn try_from(records: Vec<SquareRecord>) -> Result<Self, Self::Error> {
        SquareSet::new(records.into_iter().map(Square::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_forms() {
        let by_coordinate: Address = serde_json::from_str(r#"{"x": 3, "y": 4}"#).unwrap();
        assert_eq!(by_coordinate, Address::Coordinate { x: 3, y: 4 });
        let by_id: Address = serde_json::from_str("17").unwrap();
        assert_eq!(by_id, Address::Id(17));
    }

    #[test]
    fn move_request() {
        let json = r#"{
            "playerNumber": 1,
            "from": {"x": 1, "y": 0},
            "to": [{"x": 3, "y": 2}, {"x": 1, "y": 4}]
        }"#;
        let request: MoveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.player_number, Player::One);
        assert_eq!(request.from, Address::Coordinate { x: 1, y: 0 });
        assert_eq!(request.to.len(), 2);

        let json = r#"{"playerNumber": 2, "from": 9, "to": [13]}"#;
        let request: MoveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.to, vec![Address::Id(13)]);
    }

    #[test]
    fn invalid_player_number_is_rejected() {
        let json = r#"{"playerNumber": 3, "from": 9, "to": [13]}"#;
        assert!(serde_json::from_str::<MoveRequest>(json).is_err());
    }

    #[test]
    fn last_change_shape() {
        let change = LastChange::Move {
            player_number: Player::One,
            from: Address::Id(1),
            to: vec![Address::Id(3)],
        };
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "move", "playerNumber": 1, "from": 1, "to": [3]})
        );
    }

    #[test]
    fn square_record_shape() {
        let square = Square::new(2, 5)
            .with_id(4)
            .with_piece(Piece::king(Player::Two));
        let value = serde_json::to_value(SquareRecord::from(&square)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 4, "x": 2, "y": 5, "piece": {"playerNumber": 2, "king": true}})
        );
        let empty = serde_json::to_value(SquareRecord::from(&Square::new(0, 0))).unwrap();
        assert_eq!(
            empty,
            serde_json::json!({"id": null, "x": 0, "y": 0, "piece": null})
        );
    }
}
