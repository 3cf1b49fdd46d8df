//! In-place filters for RGBA8 images.
//!
//! ## Supported Format
//!
//! | Format | Layout | Type | Description |
//! |--------|--------|------|-------------|
//! | RGBA8 | row-major, 4 bytes/pixel, no padding | u8 | Red, green, blue, alpha, 0-255 |
//!
//! Every filter takes a [`PixelBuffer`](core::PixelBuffer) view over
//! caller-owned bytes and rewrites it in place. Nothing is retained between
//! calls.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Validated once** - dimensions and length are checked when the view is built
//! - **Alpha preservation** - channel 3 is never written
//! - **Saturating** - results are clamped to [0, 255], never wrapped
//! - **Single-threaded** - one synchronous pass per call
//!
//! ## Filter Categories
//!
//! - **Spatial**: box blur (neighborhood average with clipped edges)
//! - **Pixel-wise**: brightness, contrast, grayscale

pub mod core;
pub mod blur;
pub mod color_adjust;
pub mod grayscale;
pub mod apply;
