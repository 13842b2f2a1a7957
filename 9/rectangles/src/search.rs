use std::cmp::Reverse;

use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::boundary::extract_boundary;
use crate::config::{SearchConfig, Strategy};
use crate::error::GeometryError;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::rectangle::{Measure, Rectangle, candidates};
use crate::validate::{BoundaryValidator, ExteriorPointValidator, Validator};

/// The largest rectangle with two vertices as opposite corners, ignoring the polygon.
#[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
pub fn largest_rectangle_area(vertices: &[Point], measure: Measure) -> u64 {
    vertices
        .iter()
        .tuple_combinations()
        .filter_map(|(&a, &b)| Rectangle::new(a, b).ok())
        .map(|rect| rect.area(measure))
        .max()
        .unwrap_or(0)
}

/// The largest rectangle with two vertices as opposite corners that lies inside the polygon.
///
/// Candidates are tried from the largest down and the first enclosed one wins,
/// so equal-area ties go to whichever pair comes first in vertex order.
#[tracing::instrument(skip_all, fields(vertices = vertices.len(), config = ?config))]
pub fn largest_enclosed(
    vertices: &[Point],
    config: &SearchConfig,
) -> Result<Rectangle, GeometryError> {
    let polygon = Polygon::new(vertices)?;
    let boundary = extract_boundary(&polygon);

    let mut ranked = candidates(vertices);
    ranked.sort_by_key(|rect| Reverse(rect.area(config.measure)));
    debug!(candidates = ranked.len(), "ranked candidates");

    let found = match config.strategy {
        Strategy::Boundary => {
            let validator = BoundaryValidator::new(&polygon, &boundary);
            first_enclosed(&ranked, &validator, config.parallel)
        }
        Strategy::ExteriorPoints => {
            let points = boundary.exterior_points();
            let validator = ExteriorPointValidator::new(&points);
            first_enclosed(&ranked, &validator, config.parallel)
        }
    };

    match found {
        Some(rect) => {
            info!(
                northwest = %rect.northwest(),
                southeast = %rect.southeast(),
                area = rect.area(config.measure),
                "found enclosed rectangle"
            );
            Ok(rect)
        }
        None => Err(GeometryError::NoValidRectangle {
            candidates: ranked.len(),
        }),
    }
}

pub fn largest_enclosed_area(
    vertices: &[Point],
    config: &SearchConfig,
) -> Result<u64, GeometryError> {
    largest_enclosed(vertices, config).map(|rect| rect.area(config.measure))
}

/// The first rectangle in `ranked` order that passes `validator`.
///
/// The parallel path keeps that order too: rayon's `find_first` reports the
/// lowest-index match, never merely the first worker to finish.
fn first_enclosed<V: Validator>(
    ranked: &[Rectangle],
    validator: &V,
    parallel: bool,
) -> Option<Rectangle> {
    if parallel {
        ranked
            .par_iter()
            .find_first(|rect| validator.is_enclosed(rect))
            .copied()
    } else {
        ranked
            .iter()
            .find(|rect| validator.is_enclosed(rect))
            .copied()
    }
}
