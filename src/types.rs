//! Shared types used across tilecut.
//! Currently the pixel layout enum `ColorMode` and its channel bookkeeping.
use serde::{Deserialize, Serialize};

/// Interleaved 8-bit pixel layout of a source raster.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Luma => 1,
            ColorMode::LumaAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    pub fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(ColorMode::Luma),
            2 => Some(ColorMode::LumaAlpha),
            3 => Some(ColorMode::Rgb),
            4 => Some(ColorMode::Rgba),
            _ => None,
        }
    }

    pub fn is_rgb(self) -> bool {
        matches!(self, ColorMode::Rgb)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Luma => write!(f, "L"),
            ColorMode::LumaAlpha => write!(f, "LA"),
            ColorMode::Rgb => write!(f, "RGB"),
            ColorMode::Rgba => write!(f, "RGBA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColorMode;

    #[test]
    fn channel_counts_round_trip() {
        for mode in [
            ColorMode::Luma,
            ColorMode::LumaAlpha,
            ColorMode::Rgb,
            ColorMode::Rgba,
        ] {
            assert_eq!(ColorMode::from_channels(mode.channels()), Some(mode));
        }
        assert_eq!(ColorMode::from_channels(0), None);
        assert_eq!(ColorMode::from_channels(5), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ColorMode::LumaAlpha).unwrap();
        assert_eq!(json, "\"lumaalpha\"");
        let mode: ColorMode = serde_json::from_str("\"rgba\"").unwrap();
        assert_eq!(mode, ColorMode::Rgba);
    }
}
