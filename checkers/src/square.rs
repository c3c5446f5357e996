use crate::{Piece, Player, Point, SquareSet, BOARD_SIZE};

/// A dark square of the board, which may hold a single piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    /// Optional key for addressing the square by id instead of by coordinates.
    pub id: Option<u32>,
    pub x: i8,
    pub y: i8,
    pub piece: Option<Piece>,
}

impl Square {
    /// Creates an empty square without an id.
    pub fn new(x: i8, y: i8) -> Self {
        Self {
            id: None,
            x,
            y,
            piece: None,
        }
    }

    #[must_use]
    pub fn with_id(self, id: u32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    #[must_use]
    pub fn with_piece(self, piece: Piece) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn unoccupied(&self) -> bool {
        self.piece.is_none()
    }

    /// The squares that `piece`, standing on this square, could step to.
    ///
    /// The piece is passed explicitly rather than read from `self.piece`, so
    /// that the moves of a piece can be computed before it has actually been
    /// placed here.
    pub fn possible_moves(&self, piece: &Piece, board: &SquareSet) -> SquareSet {
        board
            .squares_at_diagonal_distance(self, 1)
            .in_direction_of(piece, self)
            .unoccupied()
    }

    /// The squares that `piece`, standing on this square, could jump to.
    ///
    /// A landing square only counts if it is free and the square in between
    /// holds a piece of the opponent.
    pub fn possible_jumps(&self, piece: &Piece, board: &SquareSet) -> SquareSet {
        board
            .squares_at_diagonal_distance(self, 2)
            .in_direction_of(piece, self)
            .unoccupied()
            .filter(|landing| {
                !board
                    .between(self, landing)
                    .occupied_by_opponent_of(piece.player)
                    .is_empty()
            })
    }

    /// Whether the piece on this square has reached the far row for its direction.
    pub fn promotable(&self) -> bool {
        match self.piece {
            Some(piece) => match piece.direction() {
                1 => self.y == BOARD_SIZE - 1,
                -1 => self.y == 0,
                _ => false,
            },
            None => false,
        }
    }

    pub fn promote(&mut self) {
        if let Some(piece) = self.piece.as_mut() {
            piece.promote();
        }
    }

    pub fn matches(&self, matcher: &SquareMatcher) -> bool {
        matcher.id.map_or(true, |id| self.id == Some(id))
            && matcher.x.map_or(true, |x| self.x == x)
            && matcher.y.map_or(true, |y| self.y == y)
            && matcher.piece.map_or(true, |m| m.matches(self.piece.as_ref()))
    }
}

/// A structural pattern over the attributes of a [`Square`].
///
/// Attributes that are `None` match anything.
///
/// ```
/// use checkers::{GameState, Player, SquareMatcher};
/// let game = GameState::default();
/// let matcher = SquareMatcher::new().player(Player::One).king(false);
/// assert_eq!(game.squares().where_attributes(&matcher).len(), 12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquareMatcher {
    pub id: Option<u32>,
    pub x: Option<i8>,
    pub y: Option<i8>,
    pub piece: Option<PieceMatcher>,
}

/// The piece part of a [`SquareMatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceMatcher {
    /// Matches squares without a piece.
    Empty,
    /// Matches squares with a piece whose attributes match.
    Occupied {
        player: Option<Player>,
        king: Option<bool>,
    },
}

impl PieceMatcher {
    fn matches(&self, piece: Option<&Piece>) -> bool {
        match (self, piece) {
            (PieceMatcher::Empty, None) => true,
            (PieceMatcher::Occupied { player, king }, Some(piece)) => {
                player.map_or(true, |p| piece.player == p)
                    && king.map_or(true, |k| piece.king == k)
            }
            _ => false,
        }
    }
}

impl SquareMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(self, id: u32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    #[must_use]
    pub fn x(self, x: i8) -> Self {
        Self { x: Some(x), ..self }
    }

    #[must_use]
    pub fn y(self, y: i8) -> Self {
        Self { y: Some(y), ..self }
    }

    #[must_use]
    pub fn empty(self) -> Self {
        Self {
            piece: Some(PieceMatcher::Empty),
            ..self
        }
    }

    #[must_use]
    pub fn player(self, player: Player) -> Self {
        let king = match self.piece {
            Some(PieceMatcher::Occupied { king, .. }) => king,
            _ => None,
        };
        Self {
            piece: Some(PieceMatcher::Occupied {
                player: Some(player),
                king,
            }),
            ..self
        }
    }

    #[must_use]
    pub fn king(self, king: bool) -> Self {
        let player = match self.piece {
            Some(PieceMatcher::Occupied { player, .. }) => player,
            _ => None,
        };
        Self {
            piece: Some(PieceMatcher::Occupied {
                player,
                king: Some(king),
            }),
            ..self
        }
    }
}
