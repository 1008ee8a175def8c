use ndarray::s;
use tracing::trace;

use crate::core::image::{Image, Tile, to_rgb};
use crate::core::processing::grid::CropRect;
use crate::core::processing::padding::pad_to_size;
use crate::error::{Error, Result};

fn extent(arg: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::invalid(arg, value))
}

/// Realizes one crop window against `image`.
///
/// The result is always RGB and always `rect.width() x rect.height()`: the part of the
/// window inside the image is copied (and converted), anything past the right or bottom
/// edge is black. `image` is only read.
pub fn crop_with_padding(image: &Image, rect: &CropRect) -> Result<Tile> {
    rect.validate()?;

    let tile_width = extent("rect.width", rect.width())?;
    let tile_height = extent("rect.height", rect.height())?;
    let left = extent("rect.left", rect.left)?;
    let top = extent("rect.top", rect.top)?;
    let right = extent("rect.right", rect.right)?;
    let bottom = extent("rect.bottom", rect.bottom)?;

    let (width, height) = (image.width(), image.height());
    let right_in = right.min(width);
    let bottom_in = bottom.min(height);
    // Windows starting past the edge collapse to an empty region: all padding.
    let left_in = left.min(right_in);
    let top_in = top.min(bottom_in);

    let region = image
        .pixels()
        .slice_move(s![top_in..bottom_in, left_in..right_in, ..]);

    if right > width || bottom > height {
        trace!(
            "Window ({}, {}, {}, {}) overruns {}x{} image",
            rect.top, rect.left, rect.right, rect.bottom, width, height
        );
        let canvas = pad_to_size(region, image.mode(), tile_width, tile_height)?;
        return Ok(Tile::from_rgb(canvas));
    }

    Ok(Tile::from_rgb(to_rgb(region, image.mode())))
}
