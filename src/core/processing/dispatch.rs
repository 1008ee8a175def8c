use std::num::NonZeroUsize;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::image::{Image, Tile};
use crate::core::processing::crop::crop_with_padding;
use crate::core::processing::grid::{CropRect, Grid, TileGrid, TileSet};
use crate::error::{Error, Result};

fn crop_row(image: &Image, row: usize, rects: &[CropRect]) -> Result<Vec<Tile>> {
    debug!("Cropping row {} ({} tiles)", row, rects.len());
    rects
        .iter()
        .map(|rect| crop_with_padding(image, rect))
        .collect()
}

/// Worker count for `workers: None`: the logical CPUs reported by the OS.
/// `RAYON_NUM_THREADS` is deliberately not consulted.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Crops every window of `grid`, one pool task per grid row.
///
/// The pool lives only for this call and is sized to `workers`, or to
/// [`default_workers`] when `None`. Rows are collected by index, so the result has the
/// same shape and ordering as `grid`. The first failing crop fails the whole call.
pub fn crop_grid(image: &Image, grid: &TileGrid, workers: Option<usize>) -> Result<TileSet> {
    if workers == Some(0) {
        return Err(Error::invalid("workers", 0));
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.unwrap_or_else(default_workers))
        .thread_name(|i| format!("tilecut-row-{i}"))
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;

    info!(
        "Dispatching {} rows x {} cols on {} worker(s)",
        grid.rows(),
        grid.cols(),
        pool.current_num_threads()
    );

    let cols = grid.cols();
    let rows = pool.install(|| {
        grid.cells()
            .par_chunks(cols)
            .enumerate()
            .map(|(row, rects)| crop_row(image, row, rects))
            .collect::<Result<Vec<_>>>()
    })?;

    Grid::from_rows(rows)
}

/// Single-threaded counterpart of [`crop_grid`]; produces the identical grid.
pub fn crop_grid_sequential(image: &Image, grid: &TileGrid) -> Result<TileSet> {
    let rows = grid
        .iter_rows()
        .enumerate()
        .map(|(row, rects)| crop_row(image, row, rects))
        .collect::<Result<Vec<_>>>()?;
    Grid::from_rows(rows)
}
