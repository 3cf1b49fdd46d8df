//! Color adjustment filters: Brightness, Contrast.
//!
//! These are pixel-wise linear maps that don't require spatial context.
//! Results are clamped to [0, 255] and truncated; alpha is never touched.

use tracing::{debug_span, trace};

use super::core::{saturate_u8, PixelBuffer, COLOR_CHANNELS};

// ============================================================================
// Brightness
// ============================================================================

/// Scale brightness in place.
///
/// Each color channel becomes `clamp(v * factor, 0, 255)`.
///
/// # Arguments
/// * `buffer` - RGBA8 image, modified in place
/// * `factor` - Multiplier: 0.0 = black, 1.0 = no change
pub fn adjust_brightness(buffer: &mut PixelBuffer<'_>, factor: f32) {
    let _span = debug_span!(
        "adjust_brightness",
        width = buffer.width(),
        height = buffer.height(),
        factor
    )
    .entered();
    trace!("adjust_brightness");

    for px in buffer.pixels_mut() {
        for v in &mut px[..COLOR_CHANNELS] {
            *v = saturate_u8(f32::from(*v) * factor);
        }
    }
}

// ============================================================================
// Contrast
// ============================================================================

/// Offset that keeps mid-gray (128) fixed under contrast scaling.
#[inline]
pub fn contrast_bias(factor: f32) -> f32 {
    (factor - 1.0) * 128.0
}

/// Scale contrast around mid-gray in place.
///
/// Each color channel becomes `clamp(factor * v - (factor - 1) * 128, 0, 255)`.
///
/// # Arguments
/// * `buffer` - RGBA8 image, modified in place
/// * `factor` - Contrast: below 1.0 flattens toward gray, 1.0 = no change
pub fn adjust_contrast(buffer: &mut PixelBuffer<'_>, factor: f32) {
    let _span = debug_span!(
        "adjust_contrast",
        width = buffer.width(),
        height = buffer.height(),
        factor
    )
    .entered();
    trace!("adjust_contrast");

    let bias = contrast_bias(factor);
    for px in buffer.pixels_mut() {
        for v in &mut px[..COLOR_CHANNELS] {
            *v = saturate_u8(factor * f32::from(*v) - bias);
        }
    }
}
