use std::env;

use miette::{IntoDiagnostic, Result};
use rectangles::{
    Measure, SearchConfig, Strategy, init_tracing, largest_rectangle_area, parse_input,
};

fn main() -> Result<()> {
    init_tracing();

    let (filename, config) = SearchConfig::from_args(env::args().skip(1)).into_diagnostic()?;
    if config.strategy != Strategy::default() || config.parallel {
        tracing::warn!("part 1 ignores --strategy and --parallel");
    }
    let coords = parse_input(&filename).into_diagnostic()?;

    let best = largest_rectangle_area(&coords, config.measure);
    match config.measure {
        Measure::Tiles => println!("Part 1: {}", best),
        Measure::Span => println!("Part 1 (span): {}", best),
    }
    Ok(())
}
