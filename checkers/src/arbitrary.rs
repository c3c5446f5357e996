use quickcheck::{Arbitrary, Gen};

use crate::{Address, GameState, Piece, Player, Square, SquareSet, BOARD_SIZE};

/// A full board with a random mix of men, kings and empty squares.
#[derive(Clone, Debug)]
pub struct ArbitraryBoard(pub SquareSet);

/// A game in a random position, together with a move request for it.
///
/// About half of the requests are built from the actual moves and jumps
/// available to the current player, so that a fair share of them is legal.
#[derive(Clone, Debug)]
pub struct ArbitraryGame {
    pub game: GameState,
    pub from: Address,
    pub to: Vec<Address>,
}

impl Arbitrary for Player {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Player::One, Player::Two]).unwrap()
    }
}

impl Arbitrary for ArbitraryBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut squares = Vec::with_capacity(32);
        let mut id = 1;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if (x + y) % 2 == 0 {
                    continue;
                }
                let mut square = Square::new(x, y).with_id(id);
                id += 1;
                let player = match u8::arbitrary(g) % 6 {
                    0 | 1 => Some(Player::One),
                    2 | 3 => Some(Player::Two),
                    _ => None,
                };
                if let Some(player) = player {
                    let king = u8::arbitrary(g) % 4 == 0;
                    square = square.with_piece(Piece { player, king });
                }
                squares.push(square);
            }
        }
        ArbitraryBoard(SquareSet::from_unchecked(squares))
    }
}

fn arbitrary_address(g: &mut Gen) -> Address {
    if bool::arbitrary(g) {
        Address::Coordinate {
            x: (u8::arbitrary(g) % 9) as i8,
            y: (u8::arbitrary(g) % 9) as i8,
        }
    } else {
        Address::Id(u32::from(u8::arbitrary(g) % 34))
    }
}

fn address_of(square: &Square) -> Address {
    Address::Coordinate {
        x: square.x,
        y: square.y,
    }
}

impl Arbitrary for ArbitraryGame {
    fn arbitrary(g: &mut Gen) -> Self {
        let board = ArbitraryBoard::arbitrary(g).0;
        let game = GameState::new(Player::arbitrary(g), board);

        let own_squares: Vec<Square> = game
            .squares()
            .occupied_by(game.current_player())
            .into_iter()
            .collect();
        let origin = g.choose(&own_squares).copied();
        if let (Some(origin), true) = (origin, bool::arbitrary(g)) {
            let piece = origin.piece.unwrap();
            let mut candidates: Vec<Square> = origin
                .possible_jumps(&piece, game.squares())
                .into_iter()
                .collect();
            candidates.extend(origin.possible_moves(&piece, game.squares()));
            let mut to: Vec<Address> = g.choose(&candidates).map(address_of).into_iter().collect();
            if u8::arbitrary(g) % 8 == 0 {
                to.push(arbitrary_address(g));
            }
            return ArbitraryGame {
                game,
                from: address_of(&origin),
                to,
            };
        }

        let from = arbitrary_address(g);
        let num_legs = 1 + usize::from(u8::arbitrary(g) % 3);
        let to = (0..num_legs).map(|_| arbitrary_address(g)).collect();
        ArbitraryGame { game, from, to }
    }
}
