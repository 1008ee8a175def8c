//! Pixel buffers: the caller-owned source `Image` and the RGB `Tile` it is cut into.
//!
//! Both are stored as `ndarray::Array3<u8>` laid out `(height, width, channels)`,
//! so a crop window is a plain `slice` and never copies until a tile is realized.
use ndarray::{Array3, ArrayView1, ArrayView3, ArrayViewMut3, Axis, Zip, s};

use crate::error::{Error, Result};
use crate::types::ColorMode;

/// Decoded source raster. Read-only for the duration of a tiling call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Array3<u8>,
    mode: ColorMode,
}

impl Image {
    /// Wraps interleaved row-major bytes (`width * height * mode.channels()` of them).
    pub fn from_raw(width: usize, height: usize, mode: ColorMode, data: Vec<u8>) -> Result<Self> {
        check_extent(width, height)?;
        let actual = data.len();
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(mode.channels()))
            .ok_or(Error::DimensionMismatch {
                expected: usize::MAX,
                actual,
            })?;
        if actual != expected {
            return Err(Error::DimensionMismatch { expected, actual });
        }

        let pixels = Array3::from_shape_vec((height, width, mode.channels()), data)
            .map_err(|_| Error::DimensionMismatch { expected, actual })?;
        Ok(Self { pixels, mode })
    }

    pub fn from_array(pixels: Array3<u8>, mode: ColorMode) -> Result<Self> {
        let (height, width, channels) = pixels.dim();
        check_extent(width, height)?;
        if channels != mode.channels() {
            return Err(Error::DimensionMismatch {
                expected: mode.channels(),
                actual: channels,
            });
        }
        Ok(Self { pixels, mode })
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn pixels(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Channel values at column `x`, row `y`, or `None` outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<ArrayView1<'_, u8>> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixels.slice(s![y, x, ..]))
    }
}

fn check_extent(width: usize, height: usize) -> Result<()> {
    if width == 0 {
        return Err(Error::invalid("width", width));
    }
    if height == 0 {
        return Err(Error::invalid("height", height));
    }
    Ok(())
}

/// One realized crop: always RGB, always exactly the requested window size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pixels: Array3<u8>,
}

impl Tile {
    pub(crate) fn from_rgb(pixels: Array3<u8>) -> Self {
        debug_assert_eq!(pixels.dim().2, 3);
        Self { pixels }
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    pub fn mode(&self) -> ColorMode {
        ColorMode::Rgb
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some([
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
        ])
    }

    pub fn as_array(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Row-major interleaved RGB bytes.
    pub fn into_raw_vec(self) -> Vec<u8> {
        if self.pixels.is_standard_layout() {
            self.pixels.into_raw_vec()
        } else {
            self.pixels.iter().copied().collect()
        }
    }
}

/// Writes the RGB rendition of `src` into `dst`; both must share `(height, width)`.
pub(crate) fn convert_into_rgb(src: ArrayView3<'_, u8>, mode: ColorMode, mut dst: ArrayViewMut3<'_, u8>) {
    debug_assert_eq!(src.dim().0, dst.dim().0);
    debug_assert_eq!(src.dim().1, dst.dim().1);

    Zip::from(dst.lanes_mut(Axis(2)))
        .and(src.lanes(Axis(2)))
        .for_each(|mut out, px| match mode {
            ColorMode::Luma | ColorMode::LumaAlpha => out.fill(px[0]),
            ColorMode::Rgb => out.assign(&px),
            ColorMode::Rgba => out.assign(&px.slice(s![..3])),
        });
}

/// Owned RGB copy of `src` with the same extent. RGB sources are copied verbatim.
pub(crate) fn to_rgb(src: ArrayView3<'_, u8>, mode: ColorMode) -> Array3<u8> {
    if mode.is_rgb() {
        return src.to_owned();
    }
    let (height, width, _) = src.dim();
    let mut out = Array3::zeros((height, width, 3));
    convert_into_rgb(src, mode, out.view_mut());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_empty_extent() {
        let err = Image::from_raw(0, 4, ColorMode::Luma, vec![]).unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = Image::from_raw(4, 0, ColorMode::Luma, vec![]).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn from_raw_rejects_short_buffer() {
        let err = Image::from_raw(2, 2, ColorMode::Rgb, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn from_array_checks_channel_count() {
        let err = Image::from_array(Array3::zeros((2, 2, 3)), ColorMode::Rgba).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let data: Vec<u8> = (0..6).collect();
        let img = Image::from_raw(3, 2, ColorMode::Luma, data).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixel(2, 1).unwrap()[0], 5);
        assert_eq!(img.pixel(0, 1).unwrap()[0], 3);
        assert!(img.pixel(3, 0).is_none());
    }

    #[test]
    fn luma_expands_to_gray_rgb() {
        let src = Array3::from_shape_vec((1, 2, 1), vec![7, 200]).unwrap();
        let rgb = to_rgb(src.view(), ColorMode::Luma);
        assert_eq!(rgb.into_raw_vec(), vec![7, 7, 7, 200, 200, 200]);
    }

    #[test]
    fn alpha_channels_are_dropped() {
        let la = Array3::from_shape_vec((1, 1, 2), vec![9, 128]).unwrap();
        assert_eq!(to_rgb(la.view(), ColorMode::LumaAlpha).into_raw_vec(), vec![9, 9, 9]);

        let rgba = Array3::from_shape_vec((1, 1, 4), vec![1, 2, 3, 4]).unwrap();
        assert_eq!(to_rgb(rgba.view(), ColorMode::Rgba).into_raw_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn conversion_leaves_source_untouched() {
        let img = Image::from_raw(2, 1, ColorMode::Rgba, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let before = img.clone();
        let _ = to_rgb(img.pixels(), img.mode());
        assert_eq!(img, before);
        assert_eq!(img.mode(), ColorMode::Rgba);
    }

    #[test]
    fn tile_raw_vec_from_strided_view_is_row_major() {
        let src = Array3::from_shape_vec((2, 2, 3), (0..12).collect()).unwrap();
        let tile = Tile::from_rgb(src.slice(s![.., 1..2, ..]).to_owned());
        assert_eq!(tile.width(), 1);
        assert_eq!(tile.pixel(0, 1), Some([9, 10, 11]));
        assert_eq!(tile.into_raw_vec(), vec![3, 4, 5, 9, 10, 11]);
    }
}
