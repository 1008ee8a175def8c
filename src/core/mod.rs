//! Core tiling building blocks: pixel buffers, grid generation, crop-with-padding,
//! and the parallel row dispatcher. These are the primitives consumed by the
//! high-level `api` module.
pub mod image;
#[cfg(feature = "image")]
pub mod interop;
pub mod params;
pub mod processing;
