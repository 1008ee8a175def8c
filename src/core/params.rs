use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tiling parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingParams {
    pub tile_width: i64,
    pub tile_height: i64,
    /// Distance between consecutive window starts; below the tile size windows overlap
    pub stride: i64,
    /// Worker threads for the call-scoped pool; None means one per logical CPU
    pub workers: Option<usize>,
}

impl Default for TilingParams {
    fn default() -> Self {
        Self {
            tile_width: 320,
            tile_height: 320,
            stride: 300,
            workers: None,
        }
    }
}

/// Checked form of [`TilingParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub tile_width: usize,
    pub tile_height: usize,
    pub stride: usize,
    pub workers: Option<usize>,
}

fn positive(arg: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::invalid(arg, value));
    }
    usize::try_from(value).map_err(|_| Error::invalid(arg, value))
}

impl TilingParams {
    pub fn new(tile_width: i64, tile_height: i64, stride: i64) -> Self {
        Self {
            tile_width,
            tile_height,
            stride,
            workers: None,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn validate(&self) -> Result<TileLayout> {
        let layout = TileLayout {
            tile_width: positive("tile_width", self.tile_width)?,
            tile_height: positive("tile_height", self.tile_height)?,
            stride: positive("stride", self.stride)?,
            workers: self.workers,
        };
        if layout.workers == Some(0) {
            return Err(Error::invalid("workers", 0));
        }
        Ok(layout)
    }

    /// Parses a JSON preset; missing fields fall back to [`TilingParams::default`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
