use ndarray::{Array3, ArrayView3, s};
use tracing::trace;

use crate::core::image::convert_into_rgb;
use crate::error::{Error, Result};
use crate::types::ColorMode;

/// Zero-filled `(height, width, 3)` buffer. Fails instead of aborting when the
/// size overflows or the allocator refuses the request.
///
/// Best effort only: on an overcommitting kernel the allocation can succeed and the
/// process still be killed later, once the canvas pages are actually written.
pub fn zeroed_rgb_canvas(width: usize, height: usize) -> Result<Array3<u8>> {
    let len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or(Error::AllocationFailure { width, height })?;

    // Fallible reserve first; the canvas itself is a zeroed allocation (calloc) so the
    // padding is not written page by page.
    let mut reservation: Vec<u8> = Vec::new();
    reservation
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { width, height })?;
    drop(reservation);
    let data = vec![0u8; len];

    Array3::from_shape_vec((height, width, 3), data)
        .map_err(|_| Error::AllocationFailure { width, height })
}

/// Places `region` in the top-left corner of a black `width x height` RGB canvas.
/// Pixels outside the region keep the padding value (0).
pub fn pad_to_size(
    region: ArrayView3<'_, u8>,
    mode: ColorMode,
    width: usize,
    height: usize,
) -> Result<Array3<u8>> {
    let (rows, cols, _) = region.dim();
    if cols > width {
        return Err(Error::DimensionMismatch {
            expected: width,
            actual: cols,
        });
    }
    if rows > height {
        return Err(Error::DimensionMismatch {
            expected: height,
            actual: rows,
        });
    }

    trace!(
        "Padding region {}x{} to {}x{} (pad_right={}, pad_bottom={})",
        cols,
        rows,
        width,
        height,
        width - cols,
        height - rows
    );

    let mut canvas = zeroed_rgb_canvas(width, height)?;
    convert_into_rgb(region, mode, canvas.slice_mut(s![..rows, ..cols, ..]));
    Ok(canvas)
}
