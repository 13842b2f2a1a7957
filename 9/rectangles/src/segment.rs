use std::iter::FusedIterator;

use crate::error::GeometryError;
use crate::point::{Direction, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Builds the point at `along` on the line fixed at `fixed`.
    #[inline]
    pub fn point(self, fixed: i64, along: i64) -> Point {
        match self {
            Orientation::Horizontal => Point::new(fixed, along),
            Orientation::Vertical => Point::new(along, fixed),
        }
    }

    /// The two directions that step off a line of this orientation.
    pub fn perpendiculars(self) -> [Direction; 2] {
        match self {
            Orientation::Horizontal => [Direction::North, Direction::South],
            Orientation::Vertical => [Direction::West, Direction::East],
        }
    }
}

/// An axis-aligned, non-degenerate edge with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    start: Point,
    end: Point,
    orientation: Orientation,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Result<Self, GeometryError> {
        if a == b {
            return Err(GeometryError::DegenerateSegment(a));
        }
        let orientation = if a.row == b.row {
            Orientation::Horizontal
        } else if a.col == b.col {
            Orientation::Vertical
        } else {
            return Err(GeometryError::NotAxisAligned(a, b));
        };

        Ok(Segment {
            start: a.min(b),
            end: a.max(b),
            orientation,
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The step that walks from `start` to `end`.
    pub fn direction(&self) -> Direction {
        match self.orientation {
            Orientation::Horizontal => Direction::East,
            Orientation::Vertical => Direction::South,
        }
    }

    /// The coordinate shared by every point: the row of a horizontal segment, the column of a vertical one.
    #[inline]
    pub fn fixed(&self) -> i64 {
        match self.orientation {
            Orientation::Horizontal => self.start.row,
            Orientation::Vertical => self.start.col,
        }
    }

    /// Inclusive range of the varying coordinate.
    #[inline]
    pub fn span(&self) -> (i64, i64) {
        match self.orientation {
            Orientation::Horizontal => (self.start.col, self.end.col),
            Orientation::Vertical => (self.start.row, self.end.row),
        }
    }

    /// Number of lattice points on the segment, endpoints included.
    pub fn point_count(&self) -> u64 {
        let (lo, hi) = self.span();
        (hi - lo) as u64 + 1
    }

    /// The midpoint, rounded towards `start`.
    pub fn midpoint(&self) -> Point {
        let (lo, hi) = self.span();
        self.orientation.point(self.fixed(), lo + (hi - lo) / 2)
    }

    /// This segment moved one step in `dir`.
    pub fn shifted(&self, dir: Direction) -> Segment {
        Segment {
            start: self.start + dir,
            end: self.end + dir,
            orientation: self.orientation,
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                self.start.row == p.row && self.start.col <= p.col && p.col <= self.end.col
            }
            Orientation::Vertical => {
                self.start.col == p.col && self.start.row <= p.row && p.row <= self.end.row
            }
        }
    }

    /// True if the two segments share at least one lattice point.
    pub fn intersects(&self, other: &Segment) -> bool {
        use Orientation::*;
        match (self.orientation, other.orientation) {
            (Horizontal, Horizontal) | (Vertical, Vertical) => {
                let (lo, hi) = self.span();
                let (other_lo, other_hi) = other.span();
                self.fixed() == other.fixed() && lo <= other_hi && other_lo <= hi
            }
            (Horizontal, Vertical) => crosses(self, other),
            (Vertical, Horizontal) => crosses(other, self),
        }
    }

    /// Every lattice point from `start` to `end` inclusive.
    pub fn iterate_points(&self) -> SegmentPoints {
        SegmentPoints {
            next: Some(self.start),
            end: self.end,
            step: self.direction(),
        }
    }
}

#[inline]
fn crosses(horizontal: &Segment, vertical: &Segment) -> bool {
    let row = horizontal.start.row;
    let col = vertical.start.col;
    vertical.start.row <= row
        && row <= vertical.end.row
        && horizontal.start.col <= col
        && col <= horizontal.end.col
}

#[derive(Debug, Clone)]
pub struct SegmentPoints {
    next: Option<Point>,
    end: Point,
    step: Direction,
}

impl Iterator for SegmentPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        self.next = (current != self.end).then(|| current + self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(p) => ((self.end.row - p.row) + (self.end.col - p.col)) as usize + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentPoints {}

impl FusedIterator for SegmentPoints {}
