use std::fmt;
use std::ops::Add;

/// A lattice point. Ordered by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    pub const fn new(row: i64, col: i64) -> Self {
        Point { row, col }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.row + other.row, self.col + other.col)
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    #[inline]
    fn add(self, dir: Direction) -> Point {
        self + dir.offset()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step in this direction, as a (row, col) offset.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(-1, 0),
            Direction::South => Point::new(1, 0),
            Direction::East => Point::new(0, 1),
            Direction::West => Point::new(0, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        use Direction::*;
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }

    /// The side on your left when walking in this direction.
    pub const fn left(self) -> Direction {
        use Direction::*;
        match self {
            North => West,
            West => South,
            South => East,
            East => North,
        }
    }

    pub const fn right(self) -> Direction {
        self.left().opposite()
    }

    /// The direction of travel from `from` to `to`, if they share a row or column.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        use Direction::*;
        if from.col == to.col && to.row < from.row {
            Some(North)
        } else if from.col == to.col && to.row > from.row {
            Some(South)
        } else if from.row == to.row && to.col > from.col {
            Some(East)
        } else if from.row == to.row && to.col < from.col {
            Some(West)
        } else {
            None
        }
    }

    /// Returns +1 for a clockwise (right) turn, -1 for counter-clockwise, 0 for straight.
    ///
    /// Rows grow southwards, so "clockwise" is as seen on screen.
    pub fn turn(self, to: Direction) -> i32 {
        use Direction::*;
        match (self, to) {
            (North, East) | (East, South) | (South, West) | (West, North) => 1,
            (North, West) | (West, South) | (South, East) | (East, North) => -1,
            (North, North) | (South, South) | (East, East) | (West, West) => 0,
            // A U-turn doubles back over the previous edge and has no turning sense.
            (North, South) | (South, North) | (East, West) | (West, East) => 0,
        }
    }
}
