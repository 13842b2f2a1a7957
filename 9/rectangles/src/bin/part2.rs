use std::{env, time::Instant};

use miette::{IntoDiagnostic, Result};
use rectangles::{SearchConfig, init_tracing, largest_enclosed_area, parse_input};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let (filename, config) = SearchConfig::from_args(env::args().skip(1)).into_diagnostic()?;
    let coords = parse_input(&filename).into_diagnostic()?;
    info!(vertices = coords.len(), ?config, "loaded polygon");

    let start = Instant::now();
    let best = largest_enclosed_area(&coords, &config).into_diagnostic()?;
    let elapsed = start.elapsed();
    println!("Part 2: {} in {:?}", best, elapsed);
    Ok(())
}
