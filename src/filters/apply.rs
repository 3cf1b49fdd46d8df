//! Filter selection by name and a single integer intensity.
//!
//! Hosts that expose all filters behind one control (a filter picker plus an
//! intensity slider) map the slider value as follows:
//!
//! | Filter | Parameter |
//! |--------|-----------|
//! | `blur` | radius = intensity |
//! | `brightness` | factor = intensity / 10 |
//! | `contrast` | factor = intensity / 10 |
//! | `grayscale` | intensity ignored |

use std::fmt;
use std::str::FromStr;

use super::blur::box_blur;
use super::color_adjust::{adjust_brightness, adjust_contrast};
use super::core::{BlurRadius, PixelBuffer};
use super::grayscale::grayscale;
use crate::error::{FilterError, FilterResult};

/// Slider units per 1.0 of brightness/contrast factor.
pub const INTENSITY_SCALE: f32 = 10.0;

/// The four available filters, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Blur,
    Brightness,
    Contrast,
    Grayscale,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Blur,
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Grayscale,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Blur => "blur",
            FilterKind::Brightness => "brightness",
            FilterKind::Contrast => "contrast",
            FilterKind::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> FilterResult<Self> {
        let name = s.trim();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))
    }
}

/// A filter together with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Blur(BlurRadius),
    Brightness(f32),
    Contrast(f32),
    Grayscale,
}

impl Filter {
    /// Build a filter from a slider intensity.
    pub fn from_intensity(kind: FilterKind, intensity: i32) -> FilterResult<Self> {
        Ok(match kind {
            FilterKind::Blur => Filter::Blur(BlurRadius::try_from(intensity)?),
            FilterKind::Brightness => Filter::Brightness(intensity as f32 / INTENSITY_SCALE),
            FilterKind::Contrast => Filter::Contrast(intensity as f32 / INTENSITY_SCALE),
            FilterKind::Grayscale => Filter::Grayscale,
        })
    }

    /// Parse a filter name and build it from a slider intensity.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_filters::{Filter, PixelBuffer};
    ///
    /// let mut data = vec![200, 100, 50, 255];
    /// let mut buffer = PixelBuffer::new(&mut data, 1, 1).unwrap();
    /// Filter::from_name("brightness", 15).unwrap().apply(&mut buffer);
    /// assert_eq!(data, vec![255, 150, 75, 255]);
    /// ```
    pub fn from_name(name: &str, intensity: i32) -> FilterResult<Self> {
        Self::from_intensity(name.parse()?, intensity)
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Blur(_) => FilterKind::Blur,
            Filter::Brightness(_) => FilterKind::Brightness,
            Filter::Contrast(_) => FilterKind::Contrast,
            Filter::Grayscale => FilterKind::Grayscale,
        }
    }

    /// Run the filter on `buffer` in place.
    pub fn apply(&self, buffer: &mut PixelBuffer<'_>) {
        match *self {
            Filter::Blur(radius) => box_blur(buffer, radius),
            Filter::Brightness(factor) => adjust_brightness(buffer, factor),
            Filter::Contrast(factor) => adjust_contrast(buffer, factor),
            Filter::Grayscale => grayscale(buffer),
        }
    }
}
