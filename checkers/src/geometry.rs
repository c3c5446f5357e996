/// A coordinate pair on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Add<Direction> for Point {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// A unit step. Both components are always one of -1, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub x: i8,
    pub y: i8,
}

impl Direction {
    /// Creates a direction from the signs of the given components.
    pub fn new(x: i8, y: i8) -> Self {
        Self {
            x: x.signum(),
            y: y.signum(),
        }
    }
}

/// The displacement from one point to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vector {
    pub origin: Point,
    pub destination: Point,
}

impl Vector {
    pub fn new(origin: Point, destination: Point) -> Self {
        Self {
            origin,
            destination,
        }
    }

    pub fn dx(&self) -> i8 {
        self.destination.x - self.origin.x
    }

    pub fn dy(&self) -> i8 {
        self.destination.y - self.origin.y
    }

    pub fn is_diagonal(&self) -> bool {
        self.dx().abs() == self.dy().abs()
    }

    /// The number of diagonal steps between the two points.
    ///
    /// This is `None` when the points do not share a diagonal, which is
    /// different from `Some(0)` for a vector from a point to itself.
    pub fn magnitude(&self) -> Option<u8> {
        if self.is_diagonal() {
            Some(self.dx().unsigned_abs())
        } else {
            None
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::new(self.dx(), self.dy())
    }
}
