// sample.rs — random grid generation for the demo

use crate::config::SampleConfig;
use color_grid::{Grid, GridError, Object};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Cells colored diagonally from the palette with random size and price
pub fn sample_cells<R: Rng>(config: &SampleConfig, rng: &mut R) -> Vec<Vec<Object>> {
    (0..config.rows)
        .map(|i| {
            (0..config.cols)
                .map(|j| {
                    let color = &config.palette[(i + j) % config.palette.len()];
                    let size = rng.random_range(0..config.max_size);
                    let price = rng.random_range(0..config.max_price);
                    Object::new(color.as_str(), size, price)
                })
                .collect()
        })
        .collect()
}

pub fn sample_grid(config: &SampleConfig) -> Result<Grid, GridError> {
    let mut rng = make_rng(config.seed);
    Grid::new(sample_cells(config, &mut rng))
}

/// One line per row, cells as "color price" separated by tabs
pub fn render(grid: &Grid) -> Vec<String> {
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect()
}
