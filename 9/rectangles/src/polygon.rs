use std::collections::HashSet;

use crate::error::GeometryError;
use crate::point::{Direction, Point};
use crate::segment::{Orientation, Segment};

/// A closed orthogonal loop. Assumed simple; self-intersection is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Segment>,
    clockwise: bool,
}

impl Polygon {
    /// Builds one edge per consecutive pair of vertices, wrapping last to first.
    pub fn new(vertices: &[Point]) -> Result<Self, GeometryError> {
        let distinct = vertices.iter().collect::<HashSet<_>>().len();
        if distinct < 3 {
            return Err(GeometryError::DegenerateLoop { distinct });
        }

        let edges = (0..vertices.len())
            .map(|i| {
                let (from, to) = neighbors(vertices, i);
                Segment::new(from, to)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut polygon = Polygon {
            vertices: vertices.to_vec(),
            edges,
            clockwise: false,
        };
        polygon.clockwise = polygon.total_turn() > 0;
        Ok(polygon)
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Direction of travel along edge `i`, from vertex `i` towards vertex `i + 1`.
    pub fn travel(&self, i: usize) -> Direction {
        let (from, to) = neighbors(&self.vertices, i);
        match Direction::between(from, to) {
            Some(dir) => dir,
            None => unreachable!("edges are axis-aligned and non-degenerate"),
        }
    }

    /// True when the loop winds clockwise on screen (rows growing southwards).
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Sum of the turns at every vertex: +4 for a clockwise loop, -4 otherwise.
    fn total_turn(&self) -> i32 {
        let n = self.len();
        (0..n)
            .map(|i| self.travel(i).turn(self.travel((i + 1) % n)))
            .sum()
    }

    /// The side of edge `i` facing away from the interior, by winding.
    pub fn outward(&self, i: usize) -> Direction {
        let travel = self.travel(i);
        if self.clockwise {
            travel.left()
        } else {
            travel.right()
        }
    }

    /// Point-in-polygon by ray casting northwards. Points on an edge are inside.
    ///
    /// A horizontal edge is crossed when it lies strictly north of `p` and
    /// `start.col <= p.col < end.col`. The half-open column span keeps a ray
    /// that passes through a vertex from being counted twice.
    pub fn contains_point(&self, p: Point) -> bool {
        let mut crossings = 0u32;
        for edge in &self.edges {
            if edge.contains_point(p) {
                return true;
            }
            match edge.orientation() {
                Orientation::Horizontal => {
                    let (west, east) = edge.span();
                    if edge.fixed() < p.row && west <= p.col && p.col < east {
                        crossings += 1;
                    }
                }
                Orientation::Vertical => {}
            }
        }
        crossings % 2 == 1
    }
}

/// The vertex at `i` and its successor, wrapping around.
fn neighbors(vertices: &[Point], i: usize) -> (Point, Point) {
    (vertices[i], vertices[(i + 1) % vertices.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(coords: &[(i64, i64)]) -> Polygon {
        let points: Vec<_> = coords.iter().map(|&(r, c)| Point::new(r, c)).collect();
        Polygon::new(&points).unwrap()
    }

    // (row, col) of the puzzle sample:
    //   ..............
    //   .......#XXX#..
    //   .......XXXXX..
    //   ..#XXXX#XXXX..
    //   ..XXXXXXXXXX..
    //   ..#XXXXXX#XX..
    //   .........XXX..
    //   .........#X#..
    fn sample() -> Polygon {
        polygon(&[
            (1, 7),
            (1, 11),
            (7, 11),
            (7, 9),
            (5, 9),
            (5, 2),
            (3, 2),
            (3, 7),
        ])
    }

    #[test]
    fn test_square_parity() {
        let square = polygon(&[(0, 0), (0, 3), (3, 3), (3, 0)]);
        for row in 0..=3 {
            for col in 0..=3 {
                assert!(square.contains_point(Point::new(row, col)), "({row}, {col})");
            }
        }
        assert!(!square.contains_point(Point::new(4, 4)));
        assert!(!square.contains_point(Point::new(4, 1)));
        assert!(!square.contains_point(Point::new(-1, 2)));
        assert!(!square.contains_point(Point::new(2, -1)));
        assert!(!square.contains_point(Point::new(1, 4)));
    }

    #[test]
    fn test_edges_are_contained() {
        let shape = sample();
        for edge in shape.edges() {
            for p in edge.iterate_points() {
                assert!(shape.contains_point(p), "{p} on {edge:?}");
            }
        }
    }

    #[test]
    fn test_concave_pocket_is_outside() {
        let shape = sample();
        // Below the notch between the two lobes
        assert!(!shape.contains_point(Point::new(6, 4)));
        assert!(!shape.contains_point(Point::new(2, 3)));
        assert!(shape.contains_point(Point::new(4, 4)));
        assert!(shape.contains_point(Point::new(6, 10)));
        // The ray from (4, 7) runs through the vertices at (3, 7) and (1, 7)
        assert!(shape.contains_point(Point::new(4, 7)));
        assert!(shape.contains_point(Point::new(6, 9)));
        assert!(!shape.contains_point(Point::new(6, 8)));
        assert!(!shape.contains_point(Point::new(2, 6)));
    }

    #[test]
    fn test_winding() {
        let clockwise = polygon(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        assert!(clockwise.is_clockwise());
        assert_eq!(clockwise.outward(0), Direction::North);
        assert_eq!(clockwise.outward(1), Direction::East);

        let counter = polygon(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
        assert!(!counter.is_clockwise());
        assert_eq!(counter.outward(0), Direction::West);
        assert_eq!(counter.outward(1), Direction::South);
    }

    #[test]
    fn test_rejects_degenerate_loop() {
        let points = [Point::new(0, 0), Point::new(0, 0), Point::new(0, 4)];
        let err = Polygon::new(&points).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateLoop { distinct: 2 });
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn test_rejects_diagonal_edge() {
        let points = [Point::new(0, 0), Point::new(0, 4), Point::new(3, 4)];
        let err = Polygon::new(&points).unwrap_err();
        assert_eq!(
            err,
            GeometryError::NotAxisAligned(Point::new(3, 4), Point::new(0, 0))
        );
    }
}
