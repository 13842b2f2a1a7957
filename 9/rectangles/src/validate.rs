use crate::boundary::{Boundary, ExteriorPoints, ExteriorRun};
use crate::polygon::Polygon;
use crate::rectangle::Rectangle;

/// Decides whether a rectangle with corners on the polygon lies entirely inside it.
pub trait Validator: Sync {
    fn is_enclosed(&self, rect: &Rectangle) -> bool;
}

/// Rejects rectangles that touch any exterior run.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryValidator<'a> {
    polygon: &'a Polygon,
    boundary: &'a Boundary,
}

impl<'a> BoundaryValidator<'a> {
    pub fn new(polygon: &'a Polygon, boundary: &'a Boundary) -> Self {
        BoundaryValidator { polygon, boundary }
    }

    fn touches(rect: &Rectangle, run: &ExteriorRun) -> bool {
        match run {
            ExteriorRun::Single(p) => rect.contains_point(*p),
            ExteriorRun::Span(segment) => rect.overlaps(segment),
        }
    }
}

impl Validator for BoundaryValidator<'_> {
    fn is_enclosed(&self, rect: &Rectangle) -> bool {
        // Most rectangles spanning a concave pocket fail here, before any run is visited
        if !self.polygon.contains_point(rect.interior_probe()) {
            return false;
        }

        let (nw, se) = (rect.northwest(), rect.southeast());
        let touched = self
            .boundary
            .rows_between(nw.row, se.row)
            .iter()
            .chain(self.boundary.cols_between(nw.col, se.col))
            .any(|run| Self::touches(rect, run));

        !touched
    }
}

/// Rejects rectangles that hold any individual exterior point.
#[derive(Debug, Clone, Copy)]
pub struct ExteriorPointValidator<'a> {
    points: &'a ExteriorPoints,
}

impl<'a> ExteriorPointValidator<'a> {
    pub fn new(points: &'a ExteriorPoints) -> Self {
        ExteriorPointValidator { points }
    }
}

impl Validator for ExteriorPointValidator<'_> {
    fn is_enclosed(&self, rect: &Rectangle) -> bool {
        !self.points.any_within(rect.northwest(), rect.southeast())
    }
}
