use std::collections::BTreeSet;
use std::ops::Deref;

use crate::{Piece, Player, Point, SetupError, Square, SquareMatcher, SquareRecord, Vector};

/// The number of rows and columns of the board.
pub const BOARD_SIZE: i8 = 8;

/// An ordered collection of squares.
///
/// A whole board is a `SquareSet`, and so is the result of every query on
/// it. Queries never modify the set they are called on, so they can be
/// chained freely:
///
/// ```
/// use checkers::{GameState, Player};
/// let game = GameState::default();
/// let movable = game
///     .squares()
///     .occupied_by(Player::One)
///     .filter(|s| !s.possible_moves(s.piece.as_ref().unwrap(), game.squares()).is_empty());
/// assert_eq!(movable.len(), 4);
/// ```
///
/// Dereferences to a slice of squares for iteration and indexing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquareSet {
    /// No two squares share coordinates, and no two squares share an id.
    squares: Vec<Square>,
}

impl SquareSet {
    /// Creates a set from a list of squares, checking that every square is
    /// on the board and that coordinates and ids are unique.
    pub fn new(squares: Vec<Square>) -> Result<Self, SetupError> {
        let mut points = BTreeSet::new();
        let mut ids = BTreeSet::new();
        for square in &squares {
            if !(0..BOARD_SIZE).contains(&square.x) || !(0..BOARD_SIZE).contains(&square.y) {
                return Err(SetupError::OutOfBounds {
                    x: square.x,
                    y: square.y,
                });
            }
            if !points.insert((square.x, square.y)) {
                return Err(SetupError::DuplicateCoordinate {
                    x: square.x,
                    y: square.y,
                });
            }
            if let Some(id) = square.id {
                if !ids.insert(id) {
                    return Err(SetupError::DuplicateId { id });
                }
            }
        }
        Ok(Self { squares })
    }

    // Callers guarantee unique coordinates and ids, e.g. because the squares
    // are a subset of a valid set.
    pub(crate) fn from_unchecked(squares: impl IntoIterator<Item = Square>) -> Self {
        Self {
            squares: squares.into_iter().collect(),
        }
    }

    pub fn find_by_coordinate(&self, x: i8, y: i8) -> Option<&Square> {
        self.squares.iter().find(|s| s.x == x && s.y == y)
    }

    pub fn find_by_point(&self, point: Point) -> Option<&Square> {
        self.find_by_coordinate(point.x, point.y)
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Square> {
        self.squares.iter().find(|s| s.id == Some(id))
    }

    pub(crate) fn find_by_point_mut(&mut self, point: Point) -> Option<&mut Square> {
        self.squares
            .iter_mut()
            .find(|s| s.x == point.x && s.y == point.y)
    }

    /// Whether a square with the same coordinates is in the set.
    pub fn includes(&self, square: &Square) -> bool {
        self.find_by_coordinate(square.x, square.y).is_some()
    }

    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&Square) -> bool) -> Self {
        Self::from_unchecked(self.squares.iter().copied().filter(|s| predicate(s)))
    }

    #[must_use]
    pub fn where_attributes(&self, matcher: &SquareMatcher) -> Self {
        self.filter(|s| s.matches(matcher))
    }

    /// The squares on a shared diagonal with `square`, exactly `distance` steps away.
    #[must_use]
    pub fn squares_at_diagonal_distance(&self, square: &Square, distance: u8) -> Self {
        let origin = square.point();
        self.filter(|s| Vector::new(origin, s.point()).magnitude() == Some(distance))
    }

    /// The squares lying in the forward direction of `piece` as seen from
    /// `square`. Kings have no forward direction, so for them this is the
    /// whole set.
    #[must_use]
    pub fn in_direction_of(&self, piece: &Piece, square: &Square) -> Self {
        let origin = square.point();
        self.filter(|s| {
            piece.king || Vector::new(origin, s.point()).direction().y == piece.direction()
        })
    }

    #[must_use]
    pub fn unoccupied(&self) -> Self {
        self.filter(Square::unoccupied)
    }

    #[must_use]
    pub fn occupied_by(&self, player: Player) -> Self {
        self.filter(|s| s.piece.is_some_and(|p| p.player == player))
    }

    #[must_use]
    pub fn occupied_by_opponent_of(&self, player: Player) -> Self {
        self.filter(|s| s.piece.is_some_and(|p| p.player != player))
    }

    /// The squares strictly between `a` and `b`, in order from `a`.
    ///
    /// Empty if the two squares are not on a shared diagonal.
    #[must_use]
    pub fn between(&self, a: &Square, b: &Square) -> Self {
        let vector = Vector::new(a.point(), b.point());
        let Some(magnitude) = vector.magnitude() else {
            return Self::default();
        };
        let direction = vector.direction();
        let mut point = a.point();
        let mut squares = Vec::new();
        for _ in 1..magnitude {
            point = point + direction;
            if let Some(square) = self.find_by_point(point) {
                squares.push(*square);
            }
        }
        Self { squares }
    }

    /// Converts the squares into plain records, in order.
    pub fn serialize(&self) -> Vec<SquareRecord> {
        self.squares.iter().map(SquareRecord::from).collect()
    }
}

impl Deref for SquareSet {
    type Target = [Square];

    fn deref(&self) -> &Self::Target {
        &self.squares
    }
}

impl<'a> IntoIterator for &'a SquareSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}
