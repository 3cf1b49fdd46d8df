//! Box blur for RGBA8 images.
//!
//! Each color channel becomes the unweighted average of every in-bounds
//! pixel in the `(2r+1) x (2r+1)` window around it. Windows are clipped at
//! the image edges rather than padded, so corner pixels average fewer samples
//! than interior ones. Alpha is left untouched.

use tracing::{debug_span, trace};

use super::core::{BlurRadius, Dimensions, PixelBuffer, Window, CHANNELS, COLOR_CHANNELS};

/// In-bounds sampling window for pixel `(x, y)`.
///
/// # Example
///
/// ```
/// use pixel_filters::{sample_window, BlurRadius, Dimensions};
///
/// let dims = Dimensions::new(7, 7).unwrap();
/// let r = BlurRadius::new(2);
/// assert_eq!(sample_window(dims, 3, 3, r).count(), 25);
/// assert_eq!(sample_window(dims, 0, 0, r).count(), 9);
/// ```
pub fn sample_window(dims: Dimensions, x: usize, y: usize, radius: BlurRadius) -> Window {
    let r = radius.get();
    Window {
        x: x.saturating_sub(r)..=x.saturating_add(r).min(dims.width() - 1),
        y: y.saturating_sub(r)..=y.saturating_add(r).min(dims.height() - 1),
    }
}

/// Apply box blur in place.
///
/// All samples are read from a snapshot of the image taken before the first
/// write, so no output pixel sees an already-blurred neighbor. Sums are
/// divided by the clipped sample count with truncation.
///
/// # Arguments
/// * `buffer` - RGBA8 image, modified in place
/// * `radius` - Window half-width; 0 leaves the image unchanged
pub fn box_blur(buffer: &mut PixelBuffer<'_>, radius: BlurRadius) {
    let dims = buffer.dimensions();
    let _span = debug_span!(
        "box_blur",
        width = dims.width(),
        height = dims.height(),
        radius = radius.get()
    )
    .entered();
    trace!("box_blur");

    if radius.get() == 0 {
        return;
    }

    let source = buffer.as_bytes().to_vec();
    let output = buffer.as_bytes_mut();

    for y in 0..dims.height() {
        for x in 0..dims.width() {
            let window = sample_window(dims, x, y, radius);
            let mut sum = [0u64; COLOR_CHANNELS];

            for sy in window.y.clone() {
                let start = dims.offset(*window.x.start(), sy);
                let end = dims.offset(*window.x.end(), sy) + CHANNELS;
                for px in source[start..end].chunks_exact(CHANNELS) {
                    for c in 0..COLOR_CHANNELS {
                        sum[c] += u64::from(px[c]);
                    }
                }
            }

            let count = window.count() as u64;
            let i = dims.offset(x, y);
            for c in 0..COLOR_CHANNELS {
                output[i + c] = (sum[c] / count) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::core::pattern;

    fn rgba_row(values: &[(u8, u8)]) -> Vec<u8> {
        values.iter().flat_map(|&(r, a)| [r, r, r, a]).collect()
    }

    #[test]
    fn test_blur_radius_zero_is_identity() {
        let original = pattern(5, 4);
        let mut data = original.clone();
        let mut buffer = PixelBuffer::new(&mut data, 5, 4).unwrap();

        box_blur(&mut buffer, BlurRadius::new(0));

        assert_eq!(data, original);
    }

    #[test]
    fn test_blur_uniform_image_unchanged() {
        for radius in [1, 2, 5] {
            let mut data: Vec<u8> = [100, 100, 100, 255].repeat(9);
            let mut buffer = PixelBuffer::new(&mut data, 3, 3).unwrap();

            box_blur(&mut buffer, BlurRadius::new(radius));

            assert!(data.chunks_exact(4).all(|px| px == [100, 100, 100, 255]));
        }
    }

    #[test]
    fn test_sample_window_counts() {
        let dims = Dimensions::new(7, 7).unwrap();
        let r = BlurRadius::new(2);

        // Interior: full (2r+1)^2
        assert_eq!(sample_window(dims, 3, 3, r).count(), 25);
        // Corners: (r+1)^2
        assert_eq!(sample_window(dims, 0, 0, r).count(), 9);
        assert_eq!(sample_window(dims, 6, 6, r).count(), 9);
        assert_eq!(sample_window(dims, 6, 0, r).count(), 9);
        // Edge: (r+1) * (2r+1)
        assert_eq!(sample_window(dims, 0, 3, r).count(), 15);
        // One pixel from the edge
        assert_eq!(sample_window(dims, 1, 3, r).count(), 20);
    }

    #[test]
    fn test_sample_window_larger_than_image() {
        let dims = Dimensions::new(3, 2).unwrap();
        let window = sample_window(dims, 1, 1, BlurRadius::new(10));
        assert_eq!(window, Window { x: 0..=2, y: 0..=1 });
        assert_eq!(window.count(), 6);

        let huge = sample_window(dims, 2, 1, BlurRadius::new(usize::MAX));
        assert_eq!(huge.count(), 6);
    }

    #[test]
    fn test_blur_reads_from_snapshot() {
        // Sequential in-place averaging would give the middle pixel
        // (45 + 90 + 0) / 3 = 45 instead of 30.
        let mut data = rgba_row(&[(0, 255), (90, 255), (0, 255)]);
        let mut buffer = PixelBuffer::new(&mut data, 3, 1).unwrap();

        box_blur(&mut buffer, BlurRadius::new(1));

        assert_eq!(buffer.pixel(0, 0), [45, 45, 45, 255]);
        assert_eq!(buffer.pixel(1, 0), [30, 30, 30, 255]);
        assert_eq!(buffer.pixel(2, 0), [45, 45, 45, 255]);
    }

    #[test]
    fn test_blur_truncates_average() {
        let mut data = rgba_row(&[(0, 255), (255, 255)]);
        let mut buffer = PixelBuffer::new(&mut data, 2, 1).unwrap();

        box_blur(&mut buffer, BlurRadius::new(1));

        assert_eq!(buffer.pixel(0, 0)[0], 127);
        assert_eq!(buffer.pixel(1, 0)[0], 127);
    }

    #[test]
    fn test_blur_edges_average_fewer_samples() {
        // Single bright center pixel in a 3x3 image.
        let mut data = vec![0u8; 3 * 3 * 4];
        data[Dimensions::new(3, 3).unwrap().offset(1, 1)] = 90;
        let mut buffer = PixelBuffer::new(&mut data, 3, 3).unwrap();

        box_blur(&mut buffer, BlurRadius::new(1));

        assert_eq!(buffer.pixel(1, 1)[0], 10); // 90 / 9
        assert_eq!(buffer.pixel(1, 0)[0], 15); // 90 / 6
        assert_eq!(buffer.pixel(0, 0)[0], 22); // 90 / 4
        assert_eq!(buffer.pixel(2, 2)[0], 22);
        assert_eq!(buffer.pixel(0, 0)[1], 0);
    }

    #[test]
    fn test_blur_channels_independent() {
        let mut data = vec![
            30, 0, 200, 255, //
            90, 60, 0, 255,
        ];
        let mut buffer = PixelBuffer::new(&mut data, 2, 1).unwrap();

        box_blur(&mut buffer, BlurRadius::new(1));

        assert_eq!(buffer.pixel(0, 0), [60, 30, 100, 255]);
        assert_eq!(buffer.pixel(1, 0), [60, 30, 100, 255]);
    }

    #[test]
    fn test_blur_preserves_alpha() {
        let mut data = rgba_row(&[(10, 3), (200, 128), (50, 0), (255, 77)]);
        let mut buffer = PixelBuffer::new(&mut data, 2, 2).unwrap();

        box_blur(&mut buffer, BlurRadius::new(1));

        let alpha: Vec<u8> = data.chunks_exact(4).map(|px| px[3]).collect();
        assert_eq!(alpha, vec![3, 128, 0, 77]);
        // 2x2 with r=1: every window covers the whole image.
        assert_eq!(data[0], ((10 + 200 + 50 + 255) / 4) as u8);
    }

    #[test]
    fn test_blur_matches_direct_window_average() {
        let width = 6;
        let height = 5;
        let original = pattern(width, height);
        let mut data = original.clone();
        let mut buffer = PixelBuffer::new(&mut data, width, height).unwrap();

        box_blur(&mut buffer, BlurRadius::new(2));

        for y in 0..height as isize {
            for x in 0..width as isize {
                for c in 0..3 {
                    let mut sum = 0u32;
                    let mut count = 0u32;
                    for dy in -2..=2isize {
                        for dx in -2..=2isize {
                            let (sx, sy) = (x + dx, y + dy);
                            if sx >= 0 && sx < width as isize && sy >= 0 && sy < height as isize {
                                let i = ((sy as usize) * width + sx as usize) * 4 + c;
                                sum += original[i] as u32;
                                count += 1;
                            }
                        }
                    }
                    let i = ((y as usize) * width + x as usize) * 4 + c;
                    assert_eq!(data[i], (sum / count) as u8, "pixel ({x}, {y}) channel {c}");
                }
                let a = ((y as usize) * width + x as usize) * 4 + 3;
                assert_eq!(data[a], original[a]);
            }
        }
    }
}
