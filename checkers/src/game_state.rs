use tracing::{debug, trace};

use crate::{
    Address, LastChange, MoveError, MoveRequest, Piece, Player, Point, SetupError, Snapshot,
    Square, SquareSet, BOARD_SIZE,
};

/// A game of checkers in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    current_player: Player,
    squares: SquareSet,
    /// The errors of the latest call to `make_move()`.
    errors: Vec<MoveError>,
    last_change: Option<LastChange>,
}

/// A validated move, ready to be applied to the board it was planned on.
#[derive(Debug)]
struct MovePlan {
    origin: Point,
    destination: Point,
    /// Squares whose pieces are taken, in the order they were jumped.
    captured: Vec<Point>,
}

impl GameState {
    pub fn new(current_player: Player, squares: SquareSet) -> Self {
        Self {
            current_player,
            squares,
            errors: Vec::new(),
            last_change: None,
        }
    }

    /// Restores a game from a snapshot. The `winner` field of the snapshot is ignored.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SetupError> {
        let squares = SquareSet::try_from(snapshot.squares)?;
        Ok(Self::new(snapshot.current_player_number, squares))
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn squares(&self) -> &SquareSet {
        &self.squares
    }

    pub fn errors(&self) -> &[MoveError] {
        &self.errors
    }

    pub fn last_change(&self) -> Option<&LastChange> {
        self.last_change.as_ref()
    }

    /// The player who won, if the game is over.
    ///
    /// A player loses when none of their pieces can move or jump. This
    /// includes having no pieces left. Player 1 is checked first.
    pub fn winner(&self) -> Option<Player> {
        if !self.has_action(Player::One) {
            Some(Player::Two)
        } else if !self.has_action(Player::Two) {
            Some(Player::One)
        } else {
            None
        }
    }

    fn has_action(&self, player: Player) -> bool {
        self.squares.occupied_by(player).iter().any(|s| {
            s.piece.is_some_and(|piece| {
                !s.possible_jumps(&piece, &self.squares).is_empty()
                    || !s.possible_moves(&piece, &self.squares).is_empty()
            })
        })
    }

    /// Whether any piece of the player can capture, which makes capturing mandatory.
    fn can_capture(&self, player: Player) -> bool {
        self.squares.occupied_by(player).iter().any(|s| {
            s.piece
                .is_some_and(|piece| !s.possible_jumps(&piece, &self.squares).is_empty())
        })
    }

    /// Moves a piece of `player` from one square through one or more legs.
    ///
    /// `to` lists the landing square of every leg. It has one element for a
    /// simple move or single jump and more for a chain of jumps.
    ///
    /// Returns whether the move was applied. If it wasn't, the board and the
    /// current player are unchanged and [`Self::errors()`] says why.
    pub fn make_move(&mut self, player: Player, from: Address, to: &[Address]) -> bool {
        self.errors.clear();
        let from_square = self.resolve(from);
        let to_squares: Vec<Option<Square>> = to.iter().map(|&a| self.resolve(a)).collect();

        if player != self.current_player {
            self.errors.push(MoveError::NotPlayersTurn);
        } else {
            match self.plan_move(player, from_square, &to_squares) {
                Ok(plan) => {
                    self.apply_move(&plan);
                    trace!(player = player.number(), ?plan, "Applied move");
                    self.last_change = Some(LastChange::Move {
                        player_number: player,
                        from,
                        to: to.to_vec(),
                    });
                    self.current_player = player.opponent();
                }
                Err(errors) => self.errors = errors,
            }
        }

        if !self.errors.is_empty() {
            debug!(player = player.number(), errors = ?self.errors, "Rejected move");
        }
        self.errors.is_empty()
    }

    /// Like [`Self::make_move()`], taking the arguments from a request.
    pub fn apply_request(&mut self, request: &MoveRequest) -> bool {
        self.make_move(request.player_number, request.from, &request.to)
    }

    fn resolve(&self, address: Address) -> Option<Square> {
        match address {
            Address::Coordinate { x, y } => self.squares.find_by_coordinate(x, y),
            Address::Id(id) => self.squares.find_by_id(id),
        }
        .copied()
    }

    // Checks every leg without touching the board. The legs are walked on a
    // scratch copy, so each leg is judged with the piece where the previous
    // legs left it and with the pieces it already jumped removed.
    fn plan_move(
        &self,
        player: Player,
        from: Option<Square>,
        to: &[Option<Square>],
    ) -> Result<MovePlan, Vec<MoveError>> {
        let (origin, piece) = match from.and_then(|s| s.piece.map(|p| (s, p))) {
            Some((square, piece)) if piece.player == player => (square, piece),
            _ => return Err(vec![MoveError::EmptySquareOrigin]),
        };
        if to.is_empty() {
            return Err(vec![MoveError::InvalidMove { leg: 0 }]);
        }

        let must_capture = self.can_capture(player);
        let mut scratch = self.squares.clone();
        let mut position = origin;
        let mut captured = Vec::new();
        let mut errors = Vec::new();

        for (leg, &destination) in to.iter().enumerate() {
            if must_capture {
                let landing = destination
                    .filter(|d| position.possible_jumps(&piece, &scratch).includes(d));
                match landing {
                    Some(landing) => {
                        let jumped: Vec<Point> = scratch
                            .between(&position, &landing)
                            .iter()
                            .map(Square::point)
                            .collect();
                        step(&mut scratch, position.point(), landing.point(), &jumped);
                        captured.extend(jumped);
                        position = landing;
                    }
                    None => errors.push(MoveError::PieceMustCapture { leg }),
                }
            } else if leg == 0 {
                let landing = destination
                    .filter(|d| position.possible_moves(&piece, &scratch).includes(d));
                match landing {
                    Some(landing) => position = landing,
                    None => errors.push(MoveError::InvalidMove { leg }),
                }
            } else {
                // Without a capture, a move has exactly one leg.
                errors.push(MoveError::InvalidMove { leg });
            }
        }

        if errors.is_empty() {
            Ok(MovePlan {
                origin: origin.point(),
                destination: position.point(),
                captured,
            })
        } else {
            Err(errors)
        }
    }

    // The only place where the board of a game is modified.
    fn apply_move(&mut self, plan: &MovePlan) {
        for &point in &plan.captured {
            if let Some(square) = self.squares.find_by_point_mut(point) {
                square.piece = None;
            }
        }
        let piece = self
            .squares
            .find_by_point_mut(plan.origin)
            .and_then(|square| square.piece.take());
        if let Some(square) = self.squares.find_by_point_mut(plan.destination) {
            square.piece = piece;
            if square.promotable() {
                square.promote();
            }
        }
    }

    /// The state of the game as plain records.
    pub fn serialize(&self) -> Snapshot {
        Snapshot {
            current_player_number: self.current_player,
            squares: self.squares.serialize(),
            winner: self.winner(),
        }
    }
}

// Advances the piece of a move under validation by one leg on a scratch board.
fn step(board: &mut SquareSet, from: Point, to: Point, jumped: &[Point]) {
    for &point in jumped {
        if let Some(square) = board.find_by_point_mut(point) {
            square.piece = None;
        }
    }
    let piece = board
        .find_by_point_mut(from)
        .and_then(|square| square.piece.take());
    if let Some(square) = board.find_by_point_mut(to) {
        square.piece = piece;
    }
}

impl Default for GameState {
    /// The standard starting position: twelve men per player on the dark
    /// squares, player 1 on rows 0 to 2 and player 2 on rows 5 to 7.
    ///
    /// The dark squares are numbered from 1 to 32 in row-major order.
    fn default() -> Self {
        let mut squares = Vec::with_capacity(32);
        let mut id = 1;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if (x + y) % 2 == 0 {
                    continue;
                }
                let square = Square::new(x, y).with_id(id);
                squares.push(match y {
                    0..=2 => square.with_piece(Piece::man(Player::One)),
                    5..=7 => square.with_piece(Piece::man(Player::Two)),
                    _ => square,
                });
                id += 1;
            }
        }
        Self::new(Player::One, SquareSet::from_unchecked(squares))
    }
}
