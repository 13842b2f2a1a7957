use std::fs;

pub mod boundary;
pub mod config;
pub mod error;
pub mod point;
pub mod polygon;
pub mod rectangle;
pub mod search;
pub mod segment;
pub mod validate;

pub use config::{SearchConfig, Strategy};
pub use error::{ConfigError, GeometryError, InputError};
pub use point::{Direction, Point};
pub use polygon::Polygon;
pub use rectangle::{Measure, Rectangle};
pub use search::{largest_enclosed, largest_enclosed_area, largest_rectangle_area};
pub use segment::{Orientation, Segment};

/// Reads a puzzle file of `<col>,<row>` lines.
pub fn parse_input(filename: &str) -> Result<Vec<Point>, InputError> {
    let contents = fs::read_to_string(filename).map_err(|source| InputError::Io {
        path: filename.to_string(),
        source,
    })?;
    parse_vertices(&contents)
}

/// Parses `<col>,<row>` lines into vertices, in order. Blank lines are skipped.
pub fn parse_vertices(contents: &str) -> Result<Vec<Point>, InputError> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| -> Result<Point, InputError> {
            let (col, row) = text.split_once(',').ok_or_else(|| InputError::MissingComma {
                line,
                text: text.to_string(),
            })?;
            Ok(Point::new(number(line, row)?, number(line, col)?))
        })
        .collect()
}

fn number(line: usize, text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    text.parse().map_err(|source| InputError::InvalidNumber {
        line,
        text: text.to_string(),
        source,
    })
}

/// Installs a `tracing` subscriber filtered by `RUST_LOG`, defaulting to warnings only.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
