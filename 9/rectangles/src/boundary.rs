//! Exterior lattice data just outside the polygon's edges.
//!
//! A rectangle whose corners are inside the polygon is fully enclosed exactly
//! when it contains none of these points: any outside point in the rectangle
//! can be walked towards a corner, and the last outside point on that walk
//! sits one step off some edge.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Either;
use tracing::debug;

use crate::point::{Direction, Point};
use crate::polygon::Polygon;
use crate::segment::{Orientation, Segment};

/// A maximal run of exterior points along one shifted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExteriorRun {
    Single(Point),
    Span(Segment),
}

impl ExteriorRun {
    fn on_line(orientation: Orientation, fixed: i64, lo: i64, hi: i64) -> Self {
        let (a, b) = (orientation.point(fixed, lo), orientation.point(fixed, hi));
        match Segment::new(a, b) {
            Ok(segment) => ExteriorRun::Span(segment),
            Err(_) => ExteriorRun::Single(a),
        }
    }

    /// First and last point of the run.
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            ExteriorRun::Single(p) => (*p, *p),
            ExteriorRun::Span(segment) => (segment.start(), segment.end()),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        match self {
            ExteriorRun::Single(p) => Either::Left(std::iter::once(*p)),
            ExteriorRun::Span(segment) => Either::Right(segment.iterate_points()),
        }
    }
}

/// Exterior runs off horizontal edges (sorted by row) and off vertical edges (sorted by column).
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    by_row: Vec<ExteriorRun>,
    by_col: Vec<ExteriorRun>,
}

impl Boundary {
    pub fn len(&self) -> usize {
        self.by_row.len() + self.by_col.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_row.is_empty() && self.by_col.is_empty()
    }

    pub fn runs(&self) -> impl Iterator<Item = &ExteriorRun> {
        self.by_row.iter().chain(&self.by_col)
    }

    /// Runs off horizontal edges whose row lies in `lo..=hi`.
    pub fn rows_between(&self, lo: i64, hi: i64) -> &[ExteriorRun] {
        let start = self.by_row.partition_point(|run| run.bounds().0.row < lo);
        let end = self.by_row.partition_point(|run| run.bounds().0.row <= hi);
        &self.by_row[start..end.max(start)]
    }

    /// Runs off vertical edges whose column lies in `lo..=hi`.
    pub fn cols_between(&self, lo: i64, hi: i64) -> &[ExteriorRun] {
        let start = self.by_col.partition_point(|run| run.bounds().0.col < lo);
        let end = self.by_col.partition_point(|run| run.bounds().0.col <= hi);
        &self.by_col[start..end.max(start)]
    }

    /// Expands every run into individual points.
    pub fn exterior_points(&self) -> ExteriorPoints {
        let mut points = ExteriorPoints::default();
        for p in self.runs().flat_map(|run| run.points()) {
            points.insert(p);
        }
        debug!(points = points.len(), "expanded exterior points");
        points
    }
}

/// Individual exterior points, indexed by row and by column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExteriorPoints {
    by_row: BTreeMap<i64, BTreeSet<i64>>,
    by_col: BTreeMap<i64, BTreeSet<i64>>,
    len: usize,
}

impl ExteriorPoints {
    fn insert(&mut self, p: Point) {
        if self.by_row.entry(p.row).or_default().insert(p.col) {
            self.by_col.entry(p.col).or_default().insert(p.row);
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, p: Point) -> bool {
        self.by_row
            .get(&p.row)
            .is_some_and(|cols| cols.contains(&p.col))
    }

    /// True if any point lies in the box spanned by `nw` and `se`, inclusive.
    ///
    /// Scans whichever of the row or column index covers fewer lines.
    pub fn any_within(&self, nw: Point, se: Point) -> bool {
        if se.row - nw.row <= se.col - nw.col {
            any_in_lines(&self.by_row, (nw.row, se.row), (nw.col, se.col))
        } else {
            any_in_lines(&self.by_col, (nw.col, se.col), (nw.row, se.row))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.by_row
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| Point::new(row, col)))
    }
}

fn any_in_lines(
    index: &BTreeMap<i64, BTreeSet<i64>>,
    (line_lo, line_hi): (i64, i64),
    (lo, hi): (i64, i64),
) -> bool {
    index
        .range(line_lo..=line_hi)
        .any(|(_, along)| along.range(lo..=hi).next().is_some())
}

/// Derives the exterior runs for every edge of `polygon`.
pub fn extract_boundary(polygon: &Polygon) -> Boundary {
    let mut boundary = Boundary::default();

    for (i, edge) in polygon.edges().iter().enumerate() {
        let side = exterior_side(polygon, i);
        let runs = exterior_runs(polygon, &edge.shifted(side));
        match edge.orientation() {
            Orientation::Horizontal => boundary.by_row.extend(runs),
            Orientation::Vertical => boundary.by_col.extend(runs),
        }
    }

    boundary.by_row.sort_by_key(|run| run.bounds().0.row);
    boundary.by_col.sort_by_key(|run| run.bounds().0.col);

    debug!(
        edges = polygon.len(),
        runs = boundary.len(),
        "extracted exterior boundary"
    );
    boundary
}

/// The side of edge `i` that faces out of the polygon.
///
/// One step off the edge's midpoint, exactly one side is outside unless
/// another edge runs one unit away; the loop's winding settles that case.
fn exterior_side(polygon: &Polygon, i: usize) -> Direction {
    let edge = polygon.edges()[i];
    let mid = edge.midpoint();
    let [a, b] = edge.orientation().perpendiculars();

    match (polygon.contains_point(mid + a), polygon.contains_point(mid + b)) {
        (false, true) => a,
        (true, false) => b,
        _ => polygon.outward(i),
    }
}

/// Maximal runs of points on `line` that the polygon does not contain.
///
/// Containment along the line can only change where another edge touches it,
/// so each breakpoint and one point of each gap between breakpoints are tested.
fn exterior_runs(polygon: &Polygon, line: &Segment) -> Vec<ExteriorRun> {
    let orientation = line.orientation();
    let fixed = line.fixed();
    let (lo, hi) = line.span();

    let mut breaks = vec![lo, hi];
    for edge in polygon.edges() {
        let (a, b) = edge.span();
        if edge.orientation() == orientation {
            if edge.fixed() == fixed {
                breaks.extend([a, b]);
            }
        } else if a <= fixed && fixed <= b {
            breaks.push(edge.fixed());
        }
    }
    breaks.retain(|&t| lo <= t && t <= hi);
    breaks.sort_unstable();
    breaks.dedup();

    let outside = |t: i64| !polygon.contains_point(orientation.point(fixed, t));

    let mut runs = Vec::new();
    let mut current: Option<(i64, i64)> = None;
    let mut mark = |from: i64, to: i64, is_outside: bool| {
        match (current, is_outside) {
            (Some((start, end)), true) if end + 1 == from => current = Some((start, to)),
            (_, true) => {
                if let Some((start, end)) = current.replace((from, to)) {
                    runs.push(ExteriorRun::on_line(orientation, fixed, start, end));
                }
            }
            (_, false) => {
                if let Some((start, end)) = current.take() {
                    runs.push(ExteriorRun::on_line(orientation, fixed, start, end));
                }
            }
        }
    };

    for (k, &t) in breaks.iter().enumerate() {
        mark(t, t, outside(t));
        if let Some(&next) = breaks.get(k + 1) {
            if next > t + 1 {
                mark(t + 1, next - 1, outside(t + 1));
            }
        }
    }
    mark(hi + 1, hi + 1, false);

    runs
}
