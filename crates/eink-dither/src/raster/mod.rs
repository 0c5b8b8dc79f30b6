//! Immutable RGB raster.
//!
//! [`Raster`] is the value that flows through every enhancement stage. Each
//! stage borrows its input and returns a new raster, so a render never
//! mutates an image another stage (or another request) can observe.

mod raster;

pub use raster::Raster;
