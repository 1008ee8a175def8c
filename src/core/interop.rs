//! Conversions to and from `image` crate buffers, for callers that decode with it
//! upstream or encode tiles with it downstream.
use image::{DynamicImage, RgbImage};

use crate::core::image::{Image, Tile};
use crate::error::{Error, Result};
use crate::types::ColorMode;

impl TryFrom<&DynamicImage> for Image {
    type Error = Error;

    /// 8-bit L, LA, RGB and RGBA are taken as-is; anything else goes through RGBA8.
    fn try_from(decoded: &DynamicImage) -> Result<Self> {
        let width = decoded.width() as usize;
        let height = decoded.height() as usize;
        match decoded {
            DynamicImage::ImageLuma8(buf) => {
                Image::from_raw(width, height, ColorMode::Luma, buf.as_raw().clone())
            }
            DynamicImage::ImageLumaA8(buf) => {
                Image::from_raw(width, height, ColorMode::LumaAlpha, buf.as_raw().clone())
            }
            DynamicImage::ImageRgb8(buf) => {
                Image::from_raw(width, height, ColorMode::Rgb, buf.as_raw().clone())
            }
            DynamicImage::ImageRgba8(buf) => {
                Image::from_raw(width, height, ColorMode::Rgba, buf.as_raw().clone())
            }
            other => Image::from_raw(width, height, ColorMode::Rgba, other.to_rgba8().into_raw()),
        }
    }
}

impl Tile {
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let width = u32::try_from(self.width()).map_err(|_| Error::invalid("width", self.width()))?;
        let height =
            u32::try_from(self.height()).map_err(|_| Error::invalid("height", self.height()))?;
        let data = self.clone().into_raw_vec();
        let actual = data.len();
        RgbImage::from_raw(width, height, data).ok_or(Error::DimensionMismatch {
            expected: self.width() * self.height() * 3,
            actual,
        })
    }
}
