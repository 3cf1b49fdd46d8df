//! WebAssembly exports for the pixel filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen under the
//! same names as the host page expects: `applyBlur`, `adjustBrightness`,
//! `adjustContrast`, `grayscale` and `applyFilter`.
//!
//! `data` is a `Uint8Array` / `Uint8ClampedArray` of RGBA bytes
//! (length = width * height * 4). wasm-bindgen copies it into linear memory
//! and writes the filtered bytes back into the caller's array on return.
//! Invalid arguments throw a JS `Error` and leave `data` unchanged.

use wasm_bindgen::prelude::*;

use crate::error::FilterResult;
use crate::filters::apply::Filter;
use crate::filters::blur::box_blur;
use crate::filters::color_adjust::{adjust_brightness, adjust_contrast};
use crate::filters::core::{BlurRadius, Dimensions, PixelBuffer};
use crate::filters::grayscale::grayscale;

fn wrap(data: &mut [u8], width: i32, height: i32) -> FilterResult<PixelBuffer<'_>> {
    let dims = Dimensions::from_i32(width, height)?;
    PixelBuffer::with_dimensions(data, dims)
}

// ============================================================================
// Box Blur
// ============================================================================

/// Box blur RGBA bytes in place.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `radius` - Window half-width, must not be negative
#[wasm_bindgen(js_name = applyBlur)]
pub fn apply_blur(data: &mut [u8], width: i32, height: i32, radius: i32) -> Result<(), JsError> {
    let radius = BlurRadius::try_from(radius)?;
    let mut buffer = wrap(data, width, height)?;
    box_blur(&mut buffer, radius);
    Ok(())
}

// ============================================================================
// Brightness / Contrast
// ============================================================================

/// Scale brightness of RGBA bytes in place. 1.0 = no change.
#[wasm_bindgen(js_name = adjustBrightness)]
pub fn adjust_brightness_rgba(
    data: &mut [u8],
    width: i32,
    height: i32,
    factor: f32,
) -> Result<(), JsError> {
    let mut buffer = wrap(data, width, height)?;
    adjust_brightness(&mut buffer, factor);
    Ok(())
}

/// Scale contrast around mid-gray of RGBA bytes in place. 1.0 = no change.
#[wasm_bindgen(js_name = adjustContrast)]
pub fn adjust_contrast_rgba(
    data: &mut [u8],
    width: i32,
    height: i32,
    factor: f32,
) -> Result<(), JsError> {
    let mut buffer = wrap(data, width, height)?;
    adjust_contrast(&mut buffer, factor);
    Ok(())
}

// ============================================================================
// Grayscale
// ============================================================================

/// Convert RGBA bytes to BT.601 grayscale in place, alpha preserved.
#[wasm_bindgen(js_name = grayscale)]
pub fn grayscale_rgba(data: &mut [u8], width: i32, height: i32) -> Result<(), JsError> {
    let mut buffer = wrap(data, width, height)?;
    grayscale(&mut buffer);
    Ok(())
}

// ============================================================================
// Dispatch
// ============================================================================

/// Apply a filter selected by name with a slider intensity.
///
/// Blur uses the intensity as radius; brightness and contrast use
/// `intensity / 10` as factor; grayscale ignores it.
#[wasm_bindgen(js_name = applyFilter)]
pub fn apply_filter(
    data: &mut [u8],
    width: i32,
    height: i32,
    name: &str,
    intensity: i32,
) -> Result<(), JsError> {
    let filter = Filter::from_name(name, intensity)?;
    let mut buffer = wrap(data, width, height)?;
    filter.apply(&mut buffer);
    Ok(())
}
