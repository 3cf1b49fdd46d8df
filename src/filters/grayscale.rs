//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.601 luma weights (0.299, 0.587, 0.114) in fixed point,
//! scaled by 1000. Integer weights that sum to exactly 1000 give the exact
//! truncated luma for every input, which also makes the filter idempotent:
//! `(299 + 587 + 114) * g / 1000 == g` for every gray level.

use tracing::{debug_span, trace};

use super::core::PixelBuffer;

/// ITU-R BT.601 luma coefficients, scaled by 1000
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;
const LUMA_SCALE: u32 = 1000;

/// BT.601 luma of one pixel, truncated toward zero.
#[inline]
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    let sum = LUMA_R * u32::from(r) + LUMA_G * u32::from(g) + LUMA_B * u32::from(b);
    (sum / LUMA_SCALE) as u8
}

/// Convert an RGBA8 image to grayscale in place.
///
/// R, G and B are all replaced by the pixel's luma; A is preserved.
pub fn grayscale(buffer: &mut PixelBuffer<'_>) {
    let _span = debug_span!("grayscale", width = buffer.width(), height = buffer.height()).entered();
    trace!("grayscale");

    for px in buffer.pixels_mut() {
        let gray = luma_bt601(px[0], px[1], px[2]);
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::core::pattern;

    #[test]
    fn test_luma_primaries() {
        assert_eq!(luma_bt601(255, 0, 0), 76);
        assert_eq!(luma_bt601(0, 255, 0), 149);
        assert_eq!(luma_bt601(0, 0, 255), 29);
        assert_eq!(luma_bt601(255, 255, 255), 255);
        assert_eq!(luma_bt601(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_exact_for_every_gray_level() {
        for g in 0..=255u8 {
            assert_eq!(luma_bt601(g, g, g), g, "gray level {g}");
        }
    }

    #[test]
    fn test_grayscale_red_pixel() {
        let mut data = vec![255, 0, 0, 200];
        let mut buffer = PixelBuffer::new(&mut data, 1, 1).unwrap();

        grayscale(&mut buffer);

        assert_eq!(data, vec![76, 76, 76, 200]);
    }

    #[test]
    fn test_grayscale_equal_channels_and_alpha() {
        let original = pattern(6, 4);
        let mut data = original.clone();
        let mut buffer = PixelBuffer::new(&mut data, 6, 4).unwrap();

        grayscale(&mut buffer);

        for (px, orig) in data.chunks_exact(4).zip(original.chunks_exact(4)) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[0], luma_bt601(orig[0], orig[1], orig[2]));
            assert_eq!(px[3], orig[3]);
        }
    }

    #[test]
    fn test_grayscale_idempotent() {
        // One pixel per gray level, then a colored image.
        let mut levels: Vec<u8> = (0..=255u8).flat_map(|g| [g, g, g, 255 - g]).collect();
        let before = levels.clone();
        let mut buffer = PixelBuffer::new(&mut levels, 256, 1).unwrap();
        grayscale(&mut buffer);
        assert_eq!(levels, before);

        let mut data = pattern(7, 5);
        let mut buffer = PixelBuffer::new(&mut data, 7, 5).unwrap();
        grayscale(&mut buffer);
        let once = buffer.as_bytes().to_vec();
        grayscale(&mut buffer);
        assert_eq!(buffer.as_bytes(), once.as_slice());
    }
}
