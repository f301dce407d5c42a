//! Raster image model
//!
//! A raster is the flat, one-byte-per-pixel form an image-authoring tool
//! exports: declared width and height plus a pixel buffer in row-major
//! order. The buffer is borrowed; image data is constant in practice
//! (embedded in the generator binary or in firmware flash).

use crate::{pack, BitmapError};

/// A borrowed monochrome raster image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Raster<'a> {
    width: u16,
    height: u16,
    pixels: &'a [u8],
}

impl<'a> Raster<'a> {
    /// Create a raster, validating the buffer against the declared size
    ///
    /// # Errors
    /// [`BitmapError::DimensionMismatch`] if `pixels.len()` is not exactly
    /// `width * height`.
    pub fn new(width: u16, height: u16, pixels: &'a [u8]) -> Result<Self, BitmapError> {
        if pixels.len() != width as usize * height as usize {
            return Err(BitmapError::DimensionMismatch);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw pixel bytes in raster order
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Number of packed bytes this raster produces
    pub fn packed_len(&self) -> usize {
        pack::packed_len(self.pixels.len())
    }

    /// Pack this raster into `out`, MSB first
    ///
    /// Returns the number of bytes written. See [`pack::pack_into`] for
    /// the error conditions; a raster whose pixel count is not a multiple
    /// of 8 fails rather than being padded.
    pub fn pack_into(&self, out: &mut [u8]) -> Result<usize, BitmapError> {
        pack::pack_into(self.pixels, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_validates_dimensions() {
        let pixels = [0u8; 16];
        assert!(Raster::new(16, 1, &pixels).is_ok());
        assert!(Raster::new(4, 4, &pixels).is_ok());
        assert_eq!(
            Raster::new(16, 2, &pixels),
            Err(BitmapError::DimensionMismatch)
        );
    }

    #[test]
    fn test_raster_pack() {
        let pixels = [1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0];
        let raster = Raster::new(16, 1, &pixels).unwrap();
        assert_eq!(raster.packed_len(), 2);

        let mut out = [0u8; 2];
        let len = raster.pack_into(&mut out).unwrap();
        assert_eq!(len, 2);
        assert_eq!(out, [0b1111_0000, 0b1010_1010]);
    }

    #[test]
    fn test_ragged_raster_fails_to_pack() {
        // 3x3 is a valid raster but cannot be packed into whole bytes
        let pixels = [1u8; 9];
        let raster = Raster::new(3, 3, &pixels).unwrap();
        let mut out = [0u8; 2];
        assert_eq!(
            raster.pack_into(&mut out),
            Err(BitmapError::NotByteAligned { pixel_count: 9 })
        );
    }
}
