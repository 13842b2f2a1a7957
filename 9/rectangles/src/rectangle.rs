use std::collections::HashSet;

use itertools::Itertools;

use crate::error::GeometryError;
use crate::point::Point;
use crate::segment::Segment;

/// How a rectangle's size is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Measure {
    /// Lattice tiles covered, borders included: `(Δrow + 1) * (Δcol + 1)`.
    #[default]
    Tiles,
    /// Geometric area between the corners: `Δrow * Δcol`.
    Span,
}

/// An axis-aligned rectangle held as its northwest and southeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    northwest: Point,
    southeast: Point,
}

impl Rectangle {
    /// Builds the rectangle with opposite corners `a` and `b`, in either order.
    pub fn new(a: Point, b: Point) -> Result<Self, GeometryError> {
        if a == b {
            return Err(GeometryError::DegenerateRectangle(a));
        }
        Ok(Rectangle {
            northwest: Point::new(a.row.min(b.row), a.col.min(b.col)),
            southeast: Point::new(a.row.max(b.row), a.col.max(b.col)),
        })
    }

    pub fn northwest(&self) -> Point {
        self.northwest
    }

    pub fn southeast(&self) -> Point {
        self.southeast
    }

    pub fn northeast(&self) -> Point {
        Point::new(self.northwest.row, self.southeast.col)
    }

    pub fn southwest(&self) -> Point {
        Point::new(self.southeast.row, self.northwest.col)
    }

    pub fn height(&self) -> u64 {
        self.southeast.row.abs_diff(self.northwest.row)
    }

    pub fn width(&self) -> u64 {
        self.southeast.col.abs_diff(self.northwest.col)
    }

    pub fn area(&self, measure: Measure) -> u64 {
        match measure {
            Measure::Tiles => (self.height() + 1) * (self.width() + 1),
            Measure::Span => self.height() * self.width(),
        }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.northwest.row <= p.row
            && p.row <= self.southeast.row
            && self.northwest.col <= p.col
            && p.col <= self.southeast.col
    }

    /// The first point one step southeast of the northwest corner, clamped to the rectangle.
    pub fn interior_probe(&self) -> Point {
        Point::new(
            (self.northwest.row + 1).min(self.southeast.row),
            (self.northwest.col + 1).min(self.southeast.col),
        )
    }

    /// The border as segments. A rectangle one line thick is its own single border.
    pub fn borders(&self) -> impl Iterator<Item = Segment> {
        let (nw, ne, se, sw) = (
            self.northwest,
            self.northeast(),
            self.southeast,
            self.southwest(),
        );
        [(nw, ne), (ne, se), (sw, se), (nw, sw)]
            .into_iter()
            .filter_map(|(a, b)| Segment::new(a, b).ok())
            .dedup()
    }

    /// True if the rectangle shares at least one point with `segment`.
    pub fn overlaps(&self, segment: &Segment) -> bool {
        self.contains_point(segment.start())
            || self.borders().any(|border| border.intersects(segment))
    }
}

/// Every rectangle with two distinct input vertices as opposite corners.
///
/// Identical rectangles built from different pairs are reported once.
pub fn candidates(vertices: &[Point]) -> Vec<Rectangle> {
    let mut seen = HashSet::new();
    vertices
        .iter()
        .tuple_combinations()
        .filter_map(|(&a, &b)| Rectangle::new(a, b).ok())
        .filter(|rect| seen.insert(*rect))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(a: (i64, i64), b: (i64, i64)) -> Rectangle {
        Rectangle::new(Point::new(a.0, a.1), Point::new(b.0, b.1)).unwrap()
    }

    #[test]
    fn test_canonical_corners() {
        let r = rect((5, 1), (2, 9));
        assert_eq!(r.northwest(), Point::new(2, 1));
        assert_eq!(r.southeast(), Point::new(5, 9));
        assert_eq!(r.northeast(), Point::new(2, 9));
        assert_eq!(r.southwest(), Point::new(5, 1));

        // Corner order never matters
        assert_eq!(rect((5, 1), (2, 9)), rect((2, 9), (5, 1)));
        assert_eq!(rect((5, 1), (2, 9)), rect((2, 1), (5, 9)));
        assert_eq!(rect((0, 0), (0, 4)), rect((0, 4), (0, 0)));
    }

    #[test]
    fn test_rejects_single_point() {
        let p = Point::new(3, 3);
        let err = Rectangle::new(p, p).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateRectangle(p));
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn test_area() {
        // Puzzle example: 2,5 and 11,1 (col,row) span 10 x 5 tiles
        let r = rect((5, 2), (1, 11));
        assert_eq!(r.area(Measure::Tiles), 50);
        assert_eq!(r.area(Measure::Span), 36);

        let line = rect((7, 7), (7, 11));
        assert_eq!(line.area(Measure::Tiles), 5);
        assert_eq!(line.area(Measure::Span), 0);
    }

    #[test]
    fn test_contains_point() {
        let r = rect((1, 1), (3, 4));
        assert!(r.contains_point(Point::new(1, 1)));
        assert!(r.contains_point(Point::new(2, 3)));
        assert!(r.contains_point(Point::new(3, 4)));
        assert!(!r.contains_point(Point::new(0, 2)));
        assert!(!r.contains_point(Point::new(2, 5)));
    }

    #[test]
    fn test_interior_probe() {
        assert_eq!(rect((0, 0), (4, 4)).interior_probe(), Point::new(1, 1));
        assert_eq!(rect((2, 0), (2, 4)).interior_probe(), Point::new(2, 1));
        assert_eq!(rect((0, 3), (5, 3)).interior_probe(), Point::new(1, 3));
    }

    #[test]
    fn test_borders() {
        assert_eq!(rect((0, 0), (2, 3)).borders().count(), 4);

        let line = rect((2, 0), (2, 4));
        assert_eq!(
            line.borders().collect::<Vec<_>>(),
            vec![line_segment((2, 0), (2, 4))]
        );
    }

    #[test]
    fn test_overlaps() {
        let r = rect((0, 0), (4, 4));
        assert!(r.overlaps(&line_segment((2, 1), (2, 3)))); // inside
        assert!(r.overlaps(&line_segment((2, -3), (2, 1)))); // crosses the west border
        assert!(r.overlaps(&line_segment((-2, 4), (0, 4)))); // touches a corner
        assert!(!r.overlaps(&line_segment((5, 0), (5, 4))));
        assert!(!r.overlaps(&line_segment((-3, 5), (9, 5))));
    }

    fn line_segment(a: (i64, i64), b: (i64, i64)) -> Segment {
        Segment::new(Point::new(a.0, a.1), Point::new(b.0, b.1)).unwrap()
    }

    #[test]
    fn test_candidates() {
        let vertices = [
            Point::new(0, 0),
            Point::new(0, 2),
            Point::new(2, 2),
            Point::new(2, 0),
        ];
        let found = candidates(&vertices);
        // 6 pairs, but both diagonals describe the same square
        assert_eq!(found.len(), 5);
        assert!(found.contains(&rect((0, 0), (2, 2))));
        assert!(found.contains(&rect((0, 0), (0, 2))));
    }

    #[test]
    fn test_candidates_skip_repeated_vertices() {
        let vertices = [Point::new(1, 1), Point::new(1, 1), Point::new(1, 5)];
        assert_eq!(candidates(&vertices), vec![rect((1, 1), (1, 5))]);
        assert!(candidates(&[Point::new(0, 0)]).is_empty());
    }
}
