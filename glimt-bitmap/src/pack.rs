//! Bit-level pack and unpack routines
//!
//! Pure functions over byte slices. The caller owns both buffers, so the
//! same code serves the host-side generator and no_std firmware.

use crate::BitmapError;

/// Number of packed bytes needed for `pixel_count` pixels
pub const fn packed_len(pixel_count: usize) -> usize {
    pixel_count / 8
}

/// Pack one-byte-per-pixel data into a dense 1-bit-per-pixel buffer
///
/// Groups pixels eight at a time in raster order; the first pixel of each
/// group sets the most significant bit of the output byte. Any nonzero
/// pixel value counts as "on".
///
/// Returns the number of bytes written to `out`.
///
/// # Errors
/// - [`BitmapError::NotByteAligned`] if `pixels.len()` is not a multiple
///   of 8. Trailing pixels are never silently dropped or padded; the
///   caller must supply whole byte groups.
/// - [`BitmapError::BufferTooSmall`] if `out` cannot hold the result.
pub fn pack_into(pixels: &[u8], out: &mut [u8]) -> Result<usize, BitmapError> {
    if pixels.len() % 8 != 0 {
        return Err(BitmapError::NotByteAligned {
            pixel_count: pixels.len(),
        });
    }

    let len = packed_len(pixels.len());
    if out.len() < len {
        return Err(BitmapError::BufferTooSmall);
    }

    for (byte, group) in out.iter_mut().zip(pixels.chunks_exact(8)) {
        let mut packed = 0u8;
        for (j, &pixel) in group.iter().enumerate() {
            if pixel != 0 {
                packed |= 1 << (7 - j); // Fill in leftmost (MSB) bit first
            }
        }
        *byte = packed;
    }

    Ok(len)
}

/// Unpack a dense bitmap back into one byte per pixel (0 or 1)
///
/// Inverse of [`pack_into`]. Returns the number of pixel bytes written.
///
/// # Errors
/// - [`BitmapError::BufferTooSmall`] if `out` is shorter than
///   `packed.len() * 8`.
pub fn unpack_into(packed: &[u8], out: &mut [u8]) -> Result<usize, BitmapError> {
    let len = packed.len() * 8;
    if out.len() < len {
        return Err(BitmapError::BufferTooSmall);
    }

    for (&byte, group) in packed.iter().zip(out.chunks_exact_mut(8)) {
        for (j, pixel) in group.iter_mut().enumerate() {
            *pixel = (byte >> (7 - j)) & 1;
        }
    }

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::vec;

    #[test]
    fn test_pack_msb_first() {
        let mut out = [0u8; 1];
        let len = pack_into(&[1, 0, 0, 0, 0, 0, 0, 0], &mut out).unwrap();
        assert_eq!(len, 1);
        assert_eq!(out, [0b1000_0000]);

        pack_into(&[0, 0, 0, 0, 0, 0, 0, 1], &mut out).unwrap();
        assert_eq!(out, [0b0000_0001]);
    }

    #[test]
    fn test_pack_all_on_all_off() {
        let mut out = [0u8; 2];
        pack_into(&[1u8; 16], &mut out).unwrap();
        assert_eq!(out, [0xFF, 0xFF]);

        pack_into(&[0u8; 16], &mut out).unwrap();
        assert_eq!(out, [0x00, 0x00]);
    }

    #[test]
    fn test_pack_nonzero_is_on() {
        // Truthiness is "nonzero byte", not strictly 1
        let mut out = [0u8; 1];
        pack_into(&[0xFF, 2, 0, 0, 0, 0, 0, 0], &mut out).unwrap();
        assert_eq!(out, [0b1100_0000]);
    }

    #[test]
    fn test_pack_rejects_ragged_input() {
        let mut out = [0u8; 2];
        let result = pack_into(&[1u8; 13], &mut out);
        assert_eq!(result, Err(BitmapError::NotByteAligned { pixel_count: 13 }));
    }

    #[test]
    fn test_pack_rejects_short_buffer() {
        let mut out = [0u8; 1];
        let result = pack_into(&[0u8; 16], &mut out);
        assert_eq!(result, Err(BitmapError::BufferTooSmall));
    }

    #[test]
    fn test_splash_row_packing() {
        // 16x1 strip: half bar then alternating pattern
        let pixels = [1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0];
        let mut out = [0u8; 2];
        pack_into(&pixels, &mut out).unwrap();
        assert_eq!(out, [0b1111_0000, 0b1010_1010]);
    }

    #[test]
    fn test_unpack_rejects_short_buffer() {
        let mut out = [0u8; 7];
        let result = unpack_into(&[0xFF], &mut out);
        assert_eq!(result, Err(BitmapError::BufferTooSmall));
    }

    proptest! {
        #[test]
        fn prop_pack_unpack_roundtrip(pixels in proptest::collection::vec(0u8..=1, 0..32)
            .prop_filter("whole byte groups", |v| v.len() % 8 == 0))
        {
            let mut packed = vec![0u8; packed_len(pixels.len())];
            let written = pack_into(&pixels, &mut packed).unwrap();
            prop_assert_eq!(written, pixels.len() / 8);

            let mut unpacked = vec![0u8; pixels.len()];
            unpack_into(&packed, &mut unpacked).unwrap();
            prop_assert_eq!(unpacked, pixels);
        }

        #[test]
        fn prop_packed_bit_matches_pixel(pixels in proptest::collection::vec(any::<u8>(), 8..=8),
                                         j in 0usize..8)
        {
            let mut packed = [0u8; 1];
            pack_into(&pixels, &mut packed).unwrap();
            let bit = (packed[0] >> (7 - j)) & 1;
            prop_assert_eq!(bit == 1, pixels[j] != 0);
        }
    }
}
