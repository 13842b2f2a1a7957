use std::io;

use thiserror::Error;

use crate::point::Point;

/// Failures of the geometry core. Everything except `NoValidRectangle` is malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("points {0} and {1} share neither a row nor a column")]
    NotAxisAligned(Point, Point),

    #[error("segment from {0} to itself has no length")]
    DegenerateSegment(Point),

    #[error("rectangle needs two distinct corners, got {0} twice")]
    DegenerateRectangle(Point),

    #[error("polygon needs at least 3 distinct vertices, got {distinct}")]
    DegenerateLoop { distinct: usize },

    #[error("no candidate rectangle is enclosed by the polygon ({candidates} examined)")]
    NoValidRectangle { candidates: usize },
}

impl GeometryError {
    /// True for the errors caused by malformed geometry rather than a failed search.
    pub fn is_invalid_geometry(&self) -> bool {
        match self {
            GeometryError::NotAxisAligned(..)
            | GeometryError::DegenerateSegment(_)
            | GeometryError::DegenerateRectangle(_)
            | GeometryError::DegenerateLoop { .. } => true,
            GeometryError::NoValidRectangle { .. } => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected `<col>,<row>`, got {text:?}")]
    MissingComma { line: usize, text: String },

    #[error("line {line}: {text:?} is not an integer")]
    InvalidNumber {
        line: usize,
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing input file argument")]
    MissingInput,

    #[error("unknown flag {0:?}")]
    UnknownFlag(String),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
}
