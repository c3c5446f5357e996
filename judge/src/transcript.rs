use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use checkers::{GameState, MoveRequest, Snapshot};
use serde::{Deserialize, Serialize};

/// The move requests of one game, in the order they were made.
///
/// Stored as a JSON array of requests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    pub requests: Vec<MoveRequest>,
}

impl Transcript {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open transcript '{}'", path.display()))?;
        let transcript: Transcript = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse transcript '{}'", path.display()))?;
        Ok(transcript)
    }
}

/// Loads the starting position from a snapshot file, or returns the
/// standard starting position if no file is given.
pub fn load_start_position(path: Option<&Path>) -> anyhow::Result<GameState> {
    let Some(path) = path else {
        return Ok(GameState::default());
    };
    if !path.is_file() {
        anyhow::bail!("Starting position '{}' does not exist", path.display());
    }
    let file = File::open(path)?;
    let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse starting position '{}'", path.display()))?;
    let game = GameState::from_snapshot(snapshot)
        .with_context(|| format!("Invalid starting position '{}'", path.display()))?;
    Ok(game)
}

#[cfg(test)]
mod tests {
    use checkers::{Address, Player};

    use super::*;

    #[test]
    fn parse_transcript() {
        let json = r#"[
            {"playerNumber": 1, "from": {"x": 3, "y": 2}, "to": [{"x": 4, "y": 3}]},
            {"playerNumber": 2, "from": 22, "to": [18]}
        ]"#;
        let transcript: Transcript = serde_json::from_str(json).unwrap();
        assert_eq!(transcript.requests.len(), 2);
        assert_eq!(transcript.requests[1].player_number, Player::Two);
        assert_eq!(transcript.requests[1].to, vec![Address::Id(18)]);
    }

    #[test]
    fn default_start_position() {
        let game = load_start_position(None).unwrap();
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.squares().len(), 32);
    }

    #[test]
    fn missing_start_position() {
        let result = load_start_position(Some(Path::new("/nonexistent/start.json")));
        assert!(result.is_err());
    }
}
