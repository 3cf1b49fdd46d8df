//! Core types shared by all filters.
//!
//! This module provides the data contract every filter works against:
//! - Validated image dimensions
//! - A mutable RGBA8 view over caller-owned bytes
//! - Blur radius and clipped sampling windows
//! - Saturating float-to-byte conversion
//!
//! ## Memory Layout
//!
//! Pixels are interleaved RGBA8, row-major, with no row padding. Channel `c`
//! of pixel `(x, y)` lives at byte `(y * width + x) * 4 + c`.

use std::ops::RangeInclusive;
use std::slice::ChunksExactMut;

use ndarray::ArrayViewMut3;
use tracing::debug;

use crate::error::{FilterError, FilterResult};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Color channels touched by filters. Alpha (index 3) is never written.
pub const COLOR_CHANNELS: usize = 3;

/// Width and height of a non-empty image whose byte length fits in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Validate image dimensions.
    ///
    /// Rejects zero-sized sides and sizes whose `width * height * 4`
    /// overflows `usize`.
    pub fn new(width: usize, height: usize) -> FilterResult<Self> {
        let invalid = || FilterError::InvalidDimensions {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        };

        if width == 0 || height == 0 {
            debug!(width, height, "rejecting empty image");
            return Err(invalid());
        }
        if width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .is_none()
        {
            debug!(width, height, "rejecting image too large to address");
            return Err(invalid());
        }

        Ok(Self { width, height })
    }

    /// Validate signed dimensions as received from a host binding.
    pub fn from_i32(width: i32, height: i32) -> FilterResult<Self> {
        match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) => Self::new(w, h),
            _ => {
                debug!(width, height, "rejecting negative dimensions");
                Err(FilterError::InvalidDimensions {
                    width: width.into(),
                    height: height.into(),
                })
            }
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Required buffer length in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * CHANNELS
    }

    /// Byte offset of the red channel of pixel `(x, y)`.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * CHANNELS
    }
}

/// Mutable RGBA8 view over a caller-owned buffer.
///
/// The view never allocates or frees the pixels it points at; it only
/// guarantees that the slice length matches the dimensions, so every
/// `(x, y)` inside the image addresses valid bytes.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    dims: Dimensions,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw RGBA8 bytes of a `width` x `height` image.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_filters::{FilterError, PixelBuffer};
    ///
    /// let mut data = vec![0u8; 2 * 3 * 4];
    /// assert!(PixelBuffer::new(&mut data, 2, 3).is_ok());
    ///
    /// let mut short = vec![0u8; 5];
    /// assert!(matches!(
    ///     PixelBuffer::new(&mut short, 2, 3),
    ///     Err(FilterError::BufferLengthMismatch { expected: 24, actual: 5 })
    /// ));
    /// ```
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> FilterResult<Self> {
        let dims = Dimensions::new(width, height)?;
        Self::with_dimensions(data, dims)
    }

    /// Wrap raw RGBA8 bytes of an image with already-validated dimensions.
    pub fn with_dimensions(data: &'a mut [u8], dims: Dimensions) -> FilterResult<Self> {
        let expected = dims.byte_len();
        if data.len() != expected {
            debug!(expected, actual = data.len(), "rejecting buffer of wrong length");
            return Err(FilterError::BufferLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, dims })
    }

    /// Wrap an array view of shape `(height, width, 4)`.
    ///
    /// The view must be in standard (row-major, gap-free) layout so that it
    /// can be addressed with the flat offset formula.
    pub fn from_array(view: ArrayViewMut3<'a, u8>) -> FilterResult<Self> {
        let (height, width, channels) = view.dim();
        if channels != CHANNELS {
            debug!(channels, "rejecting array with wrong channel count");
            return Err(FilterError::ChannelCount(channels));
        }
        let dims = Dimensions::new(width, height)?;
        let data = view.into_slice().ok_or(FilterError::NonContiguous)?;
        Self::with_dimensions(data, dims)
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// Iterate over pixels as 4-byte RGBA chunks.
    pub fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// Copy out pixel `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(
            x < self.dims.width && y < self.dims.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.dims.width,
            self.dims.height
        );
        let i = self.dims.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

/// Half-width of a square box blur window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlurRadius(usize);

impl BlurRadius {
    pub const fn new(radius: usize) -> Self {
        Self(radius)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Side length of the full window, `2 * radius + 1`.
    pub const fn side(self) -> usize {
        self.0.saturating_mul(2).saturating_add(1)
    }
}

impl TryFrom<i64> for BlurRadius {
    type Error = FilterError;

    fn try_from(radius: i64) -> FilterResult<Self> {
        if radius < 0 {
            debug!(radius, "rejecting negative blur radius");
            return Err(FilterError::NegativeRadius(radius));
        }
        // Anything wider than the address space already covers the image.
        Ok(Self(usize::try_from(radius).unwrap_or(usize::MAX)))
    }
}

impl TryFrom<i32> for BlurRadius {
    type Error = FilterError;

    fn try_from(radius: i32) -> FilterResult<Self> {
        Self::try_from(i64::from(radius))
    }
}

/// The in-bounds part of a blur window, as inclusive pixel ranges.
///
/// Never empty: the center pixel is always inside the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub x: RangeInclusive<usize>,
    pub y: RangeInclusive<usize>,
}

impl Window {
    /// Number of pixels sampled.
    pub fn count(&self) -> usize {
        (self.x.end() - self.x.start() + 1) * (self.y.end() - self.y.start() + 1)
    }
}

/// Clamp a float to [0, 255] and truncate toward zero.
///
/// NaN maps to 0.
#[inline]
pub fn saturate_u8(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Deterministic non-uniform RGBA image for tests.
#[cfg(test)]
pub(crate) fn pattern(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * CHANNELS);
    for y in 0..height {
        for x in 0..width {
            for c in 0..CHANNELS {
                data.push(((x * 37 + y * 11 + c * 53 + x * y * 7) % 256) as u8);
            }
        }
    }
    data
}
