// Demo runner: builds a random color grid, prints it, and runs a few queries.
mod config;
mod sample;

use anyhow::{Context, Result};
use config::{ConfigSource, DemoConfig};
use std::path::PathBuf;

fn main() -> Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(DemoConfig::default_path);
    let (config, source) = DemoConfig::load(&path)?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level.max_level())
        .init();

    match &source {
        ConfigSource::File(path) => tracing::info!("loaded configuration from {}", path.display()),
        ConfigSource::CreatedDefault(path) => {
            tracing::info!("no config file found, wrote defaults to {}", path.display())
        }
    }

    let grid = sample::sample_grid(&config.grid).context("failed to build sample grid")?;
    tracing::info!(rows = grid.rows(), cols = grid.cols(), "grid ready");

    for line in sample::render(&grid) {
        println!("{}", line);
    }

    let queries = &config.queries;

    let lowest = grid
        .get_by_color_lowest_price(&queries.lowest_price_color)
        .with_context(|| format!("lowest price lookup for {}", queries.lowest_price_color))?;
    println!("{}", lowest);

    // Manhattan distance, so not always the nearest cell on screen
    let closest = grid
        .get_closest_color(&queries.closest_color, queries.row_offset, queries.col_offset)
        .with_context(|| {
            format!(
                "closest {} from offset ({}, {})",
                queries.closest_color, queries.row_offset, queries.col_offset
            )
        })?;
    println!("{}", closest);

    if let Some(range) = &queries.price_range {
        let found = grid
            .get_by_color_price_range(&range.color, range.min_price, range.max_price)
            .with_context(|| {
                format!(
                    "price range lookup for {} in {}..={}",
                    range.color, range.min_price, range.max_price
                )
            })?;
        println!("{}", found);
    }

    Ok(())
}
