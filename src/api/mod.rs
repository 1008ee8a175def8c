//! High-level, ergonomic library API: cut an image into its tile grid in one call, or
//! plan the grid without touching pixels. Prefer these entrypoints over the low-level
//! `core::processing` modules when integrating tilecut.
use tracing::info_span;

use crate::core::image::Image;
use crate::core::params::TilingParams;
use crate::core::processing::dispatch::crop_grid;
use crate::core::processing::grid::{TileGrid, TileSet, generate_grid};
use crate::error::Result;

/// Cut `image` into `tile_width x tile_height` RGB tiles whose starts are `stride` apart.
///
/// Fails with `InvalidParameter` before any work is done if a size or the stride is not
/// positive. The returned grid is addressed `(row, col)`, top-to-bottom and left-to-right.
pub fn tile(image: &Image, tile_width: i64, tile_height: i64, stride: i64) -> Result<TileSet> {
    tile_with_params(image, &TilingParams::new(tile_width, tile_height, stride))
}

/// Same as [`tile`], with parameters (and the worker count) taken from a preset.
pub fn tile_with_params(image: &Image, params: &TilingParams) -> Result<TileSet> {
    let layout = params.validate()?;
    let span = info_span!(
        "tile",
        width = image.width(),
        height = image.height(),
        mode = %image.mode()
    );
    let _enter = span.enter();

    let grid = generate_grid(
        image.width(),
        image.height(),
        layout.tile_width,
        layout.tile_height,
        layout.stride,
    )?;
    crop_grid(image, &grid, layout.workers)
}

/// Crop windows `tile_with_params` would realize for an image of the given size.
pub fn plan_grid(image_width: usize, image_height: usize, params: &TilingParams) -> Result<TileGrid> {
    let layout = params.validate()?;
    generate_grid(
        image_width,
        image_height,
        layout.tile_width,
        layout.tile_height,
        layout.stride,
    )
}

/// Tile an `image` crate buffer directly.
#[cfg(feature = "image")]
pub fn tile_dynamic_image(decoded: &image::DynamicImage, params: &TilingParams) -> Result<TileSet> {
    let image = Image::try_from(decoded)?;
    tile_with_params(&image, params)
}
