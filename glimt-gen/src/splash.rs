//! Built-in splash raster
//!
//! Exported from the image-authoring tool as one byte per pixel, row
//! major, 0 = off / 1 = on. This is the 16x18 pumpkin motif the carrier
//! board flashes at boot.

use glimt_bitmap::{BitmapError, Raster};

/// Image identifier used for the namespace and include guard
pub const SPLASH_NAME: &str = "splash";

/// Splash width in pixels
pub const SPLASH_WIDTH: u16 = 16;

/// Splash height in pixels
pub const SPLASH_HEIGHT: u16 = 18;

#[rustfmt::skip]
const SPLASH_PIXELS: [u8; SPLASH_WIDTH as usize * SPLASH_HEIGHT as usize] = [
    0,0,0,0,0,0,0,0, 0,0,1,0,0,0,0,0,
    0,0,0,0,0,0,0,0, 1,1,1,0,0,0,0,0,
    0,0,0,0,0,0,0,1, 1,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,1, 1,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,1, 1,0,0,0,0,0,0,0,
    0,0,0,0,0,0,1,1, 1,1,1,0,0,0,0,0,
    0,0,0,0,1,1,1,1, 1,1,1,1,1,0,0,0,
    0,0,1,1,1,1,1,1, 1,1,1,1,1,0,0,0,
    0,1,1,1,1,1,1,1, 1,1,1,1,1,1,1,0,
    0,1,1,1,1,1,1,1, 1,1,1,1,1,1,1,0,
    1,1,1,1,1,1,1,1, 1,1,1,1,1,1,1,1,
    1,1,1,1,1,1,1,1, 1,1,1,1,1,1,1,1,
    1,1,1,1,1,1,1,1, 1,1,1,1,1,1,1,1,
    0,1,1,1,1,1,1,1, 1,1,1,1,1,1,1,0,
    0,1,1,1,1,1,1,1, 1,1,1,1,1,1,1,0,
    0,0,0,1,1,1,1,1, 1,1,1,1,1,0,0,0,
    0,0,0,1,1,1,1,1, 1,1,1,1,0,0,0,0,
    0,0,0,0,0,1,1,1, 1,1,1,0,0,0,0,0,
];

/// The built-in splash raster
pub fn splash_raster() -> Result<Raster<'static>, BitmapError> {
    Raster::new(SPLASH_WIDTH, SPLASH_HEIGHT, &SPLASH_PIXELS)
}
