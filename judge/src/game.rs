use checkers::{GameState, MoveRequest, Player};
use tracing::{debug, info, warn};

use crate::error::IllegalMove;
use crate::Config;

pub enum GameResult {
    WonByPlayer { player: Player },
    /// The transcript ended before either player won.
    Unfinished,
    /// Replay was stopped at an illegal move, see [`Replay::illegal_moves`].
    StoppedOnIllegalMove,
}

pub struct Replay {
    pub result: GameResult,
    /// Number of requests that the engine accepted.
    pub moves_played: usize,
    pub illegal_moves: Vec<IllegalMove>,
}

/// Feeds the requests to the game in order.
///
/// A rejected request leaves the game as it was. Depending on the config,
/// the replay then either stops or goes on with the next request, which is
/// usually rejected as well if it was meant for the other player.
pub fn replay(game: &mut GameState, requests: &[MoveRequest], config: &Config) -> Replay {
    let mut moves_played = 0;
    let mut illegal_moves = Vec::new();

    if let Some(player) = game.winner() {
        if !requests.is_empty() {
            warn!(winner = player.number(), "Game is already over, ignoring all moves");
        }
        return Replay {
            result: GameResult::WonByPlayer { player },
            moves_played,
            illegal_moves,
        };
    }

    for (move_idx, request) in requests.iter().enumerate() {
        if game.apply_request(request) {
            moves_played += 1;
            debug!(move_idx, player = request.player_number.number(), "Move accepted");
            if config.show_board {
                eprintln!("{}\n", game);
            } else {
                debug!("\n{}", game);
            }
        } else {
            let err = IllegalMove {
                move_idx,
                player: request.player_number,
                errors: game.errors().to_vec(),
            };
            info!(move_idx, player = request.player_number.number(), "Illegal move");
            for reason in &err.errors {
                info!("{}", reason);
            }
            illegal_moves.push(err);
            if config.stop_on_illegal_move {
                return Replay {
                    result: GameResult::StoppedOnIllegalMove,
                    moves_played,
                    illegal_moves,
                };
            }
            continue;
        }

        if let Some(player) = game.winner() {
            let remaining = requests.len() - move_idx - 1;
            if remaining > 0 {
                warn!(remaining, "Game is over, ignoring the remaining moves");
            }
            return Replay {
                result: GameResult::WonByPlayer { player },
                moves_played,
                illegal_moves,
            };
        }
    }

    Replay {
        result: GameResult::Unfinished,
        moves_played,
        illegal_moves,
    }
}

#[cfg(test)]
mod tests {
    use checkers::{Address, MoveError, Piece, Square, SquareSet};

    use super::*;

    fn request(player: Player, from: (i8, i8), to: &[(i8, i8)]) -> MoveRequest {
        MoveRequest {
            player_number: player,
            from: Address::Coordinate {
                x: from.0,
                y: from.1,
            },
            to: to
                .iter()
                .map(|&(x, y)| Address::Coordinate { x, y })
                .collect(),
        }
    }

    fn opening() -> Vec<MoveRequest> {
        vec![
            request(Player::One, (3, 2), &[(4, 3)]),
            request(Player::Two, (6, 5), &[(5, 4)]),
            request(Player::One, (4, 3), &[(6, 5)]),
            request(Player::Two, (7, 6), &[(5, 4)]),
        ]
    }

    #[test]
    fn replay_exchange_of_pieces() {
        let mut game = GameState::default();
        let outcome = replay(&mut game, &opening(), &Config::default());
        assert!(matches!(outcome.result, GameResult::Unfinished));
        assert_eq!(outcome.moves_played, 4);
        assert!(outcome.illegal_moves.is_empty());
        assert_eq!(game.squares().occupied_by(Player::One).len(), 11);
        assert_eq!(game.squares().occupied_by(Player::Two).len(), 11);
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn stop_on_illegal_move() {
        let mut requests = opening();
        requests.swap(0, 1);
        let config = Config {
            stop_on_illegal_move: true,
            ..Config::default()
        };
        let mut game = GameState::default();
        let outcome = replay(&mut game, &requests, &config);
        assert!(matches!(outcome.result, GameResult::StoppedOnIllegalMove));
        assert_eq!(outcome.moves_played, 0);
        assert_eq!(outcome.illegal_moves.len(), 1);
        assert_eq!(outcome.illegal_moves[0].move_idx, 0);
        assert_eq!(outcome.illegal_moves[0].errors, vec![MoveError::NotPlayersTurn]);
    }

    #[test]
    fn continue_after_illegal_move() {
        let mut requests = opening();
        requests.insert(1, request(Player::Two, (6, 5), &[(6, 4)]));
        let mut game = GameState::default();
        let outcome = replay(&mut game, &requests, &Config::default());
        assert!(matches!(outcome.result, GameResult::Unfinished));
        assert_eq!(outcome.moves_played, 4);
        assert_eq!(outcome.illegal_moves.len(), 1);
        assert_eq!(outcome.illegal_moves[0].move_idx, 1);
    }

    #[test]
    fn stops_when_a_player_wins() {
        let squares = SquareSet::new(vec![
            Square::new(2, 2).with_piece(Piece::man(Player::One)),
            Square::new(3, 3).with_piece(Piece::man(Player::Two)),
            Square::new(4, 4),
            Square::new(4, 2),
        ])
        .unwrap();
        let mut game = GameState::new(Player::One, squares);
        let requests = vec![
            request(Player::One, (2, 2), &[(4, 4)]),
            request(Player::Two, (3, 3), &[(2, 2)]),
        ];
        let outcome = replay(&mut game, &requests, &Config::default());
        assert!(matches!(
            outcome.result,
            GameResult::WonByPlayer {
                player: Player::One
            }
        ));
        assert_eq!(outcome.moves_played, 1);
    }
}
