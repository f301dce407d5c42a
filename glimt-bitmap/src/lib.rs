//! Monochrome bitmap packing for Glimt splash images
//!
//! Display bitmaps arrive from image-authoring tools as one byte per pixel
//! (0 = off, nonzero = on). The OLED driver wants them packed eight pixels
//! per byte, MSB first, so the first pixel in raster order lands in the most
//! significant bit of each byte group:
//!
//! ```text
//! pixels:  p0 p1 p2 p3 p4 p5 p6 p7 | p8 ...
//! packed:  bit7 .. bit0 of byte 0  | byte 1 ...
//! ```
//!
//! Packing runs once at build time (see `glimt-gen`), but the codec itself
//! is a pure no_std transformation so firmware can unpack or verify bitmaps
//! without touching the generator.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod pack;
pub mod raster;

pub use pack::{pack_into, packed_len, unpack_into};
pub use raster::Raster;

/// Errors that can occur while packing or unpacking a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    /// Pixel buffer length does not match the declared width * height
    DimensionMismatch,
    /// Pixel count is not a multiple of 8; packing works in whole byte groups
    NotByteAligned { pixel_count: usize },
    /// Destination buffer is too small for the result
    BufferTooSmall,
}

impl core::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitmapError::DimensionMismatch => {
                write!(f, "pixel buffer does not match declared dimensions")
            }
            BitmapError::NotByteAligned { pixel_count } => {
                write!(f, "pixel count {pixel_count} is not a multiple of 8")
            }
            BitmapError::BufferTooSmall => write!(f, "destination buffer too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitmapError {}
