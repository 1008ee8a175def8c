#![doc = r##"
tilecut — sliding-window image tiling.

This crate cuts a large decoded raster into a grid of fixed-size, possibly
overlapping RGB tiles. Windows start every `stride` pixels along each axis; a
window that runs past the right or bottom edge is completed with black padding,
so every tile has exactly the requested size. Rows of the grid are cropped in
parallel on a worker pool that exists only for the duration of the call.

Decoding, encoding and whatever consumes the tiles afterwards (e.g. a detector)
live outside this crate.

Add dependency
--------------
```toml
[dependencies]
tilecut = "0.1"
# or, to convert from/to `image::DynamicImage`
tilecut = { version = "0.1", features = ["image"] }
```

Quick start
-----------
```rust
use tilecut::{tile, ColorMode, Image};

fn main() -> tilecut::Result<()> {
    let gray = Image::from_raw(500, 500, ColorMode::Luma, vec![128; 500 * 500])?;

    let tiles = tile(&gray, 320, 320, 300)?;
    assert_eq!(tiles.shape(), (2, 2));

    // Bottom-right window covers [300, 620) on both axes: 200x200 of image, rest black.
    let corner = &tiles[(1, 1)];
    assert_eq!((corner.width(), corner.height()), (320, 320));
    assert_eq!(corner.pixel(0, 0), Some([128, 128, 128]));
    assert_eq!(corner.pixel(250, 250), Some([0, 0, 0]));
    Ok(())
}
```

Presets and worker count
------------------------
```rust
use tilecut::{tile_with_params, ColorMode, Image, TilingParams};

fn main() -> tilecut::Result<()> {
    let params = TilingParams::from_json_str(r#"{ "tile_width": 64, "tile_height": 64, "stride": 48, "workers": 2 }"#)?;
    let img = Image::from_raw(100, 60, ColorMode::Rgb, vec![0; 100 * 60 * 3])?;

    let tiles = tile_with_params(&img, &params)?;
    for (row, col, t) in tiles.iter_indexed() {
        assert_eq!((t.width(), t.height()), (64, 64), "tile ({row}, {col})");
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `tilecut::Result<T>`; match on `tilecut::Error`.

```rust
use tilecut::{tile, ColorMode, Error, Image};

let img = Image::from_raw(8, 8, ColorMode::Luma, vec![0; 64]).unwrap();
match tile(&img, 0, 4, 4) {
    Err(Error::InvalidParameter { arg, value }) => assert_eq!((arg, value.as_str()), ("tile_width", "0")),
    other => panic!("unexpected: {other:?}"),
}
```

Feature flags
-------------
- `image`: `TryFrom<&image::DynamicImage>` for [`Image`], `Tile::to_rgb_image`, and
  `api::tile_dynamic_image`.
- `full`: every optional feature.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`](crate::core) — buffers, grid generation, cropping and dispatch primitives.
- [`logging`] — optional `tracing` subscriber setup.
- [`error`] — crate-level `Error` and `Result`.
"##]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod logging;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::image::{Image, Tile};
pub use crate::core::params::{TileLayout, TilingParams};
pub use crate::core::processing::grid::{CropRect, Grid, TileGrid, TileSet};
pub use error::{Error, Result};
pub use types::ColorMode;

// Primitives
pub use crate::core::processing::crop::crop_with_padding;
pub use crate::core::processing::dispatch::{crop_grid, crop_grid_sequential, default_workers};
pub use crate::core::processing::grid::generate_grid;

// High-level API re-exports
#[cfg(feature = "image")]
pub use api::tile_dynamic_image;
pub use api::{plan_grid, tile, tile_with_params};
