#![allow(dead_code)]

use tilecut::{ColorMode, Image};

/// Deterministic pattern with no zero bytes, so padding is always distinguishable.
pub fn patterned_image(width: usize, height: usize, mode: ColorMode) -> Image {
    let channels = mode.channels();
    let mut data = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                data.push(((x * 7 + y * 13 + c * 29) % 251 + 1) as u8);
            }
        }
    }
    Image::from_raw(width, height, mode, data).expect("valid pattern image")
}

/// RGB rendition of the source pixel at `(x, y)`.
pub fn expected_rgb(image: &Image, x: usize, y: usize) -> [u8; 3] {
    let px = image.pixel(x, y).expect("pixel in bounds");
    match image.mode() {
        ColorMode::Luma | ColorMode::LumaAlpha => [px[0], px[0], px[0]],
        ColorMode::Rgb | ColorMode::Rgba => [px[0], px[1], px[2]],
    }
}

pub fn all_modes() -> [ColorMode; 4] {
    [
        ColorMode::Luma,
        ColorMode::LumaAlpha,
        ColorMode::Rgb,
        ColorMode::Rgba,
    ]
}
