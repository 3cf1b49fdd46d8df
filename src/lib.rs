//! Pixel Filters
//!
//! In-place filters over raw RGBA8 pixel buffers, with optional bindings
//! for JavaScript via wasm-bindgen and Python via PyO3.
//!
//! ## Image Format
//! Interleaved RGBA8, row-major, no row padding. Byte `c` of pixel `(x, y)`
//! is at offset `(y * width + x) * 4 + c` with R=0, G=1, B=2, A=3.
//!
//! ## Filters
//! - **Box blur**: average over a `(2r+1)^2` window, clipped at the edges
//! - **Brightness**: `v * factor`
//! - **Contrast**: `factor * v - (factor - 1) * 128`
//! - **Grayscale**: BT.601 luma
//!
//! All outputs are clamped to [0, 255]. Alpha is passed through untouched.
//!
//! ## Example
//!
//! ```
//! use pixel_filters::{box_blur, grayscale, BlurRadius, PixelBuffer};
//!
//! let mut data = vec![
//!     255, 0, 0, 255,   0, 0, 0, 128,
//! ];
//! let mut image = PixelBuffer::new(&mut data, 2, 1)?;
//! grayscale(&mut image);
//! box_blur(&mut image, BlurRadius::new(1));
//! assert_eq!(image.pixel(0, 0), [38, 38, 38, 255]);
//! assert_eq!(image.pixel(1, 0), [38, 38, 38, 128]);
//! # Ok::<(), pixel_filters::FilterError>(())
//! ```

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FilterError, FilterResult};
pub use filters::apply::{Filter, FilterKind, INTENSITY_SCALE};
pub use filters::blur::{box_blur, sample_window};
pub use filters::color_adjust::{adjust_brightness, adjust_contrast, contrast_bias};
pub use filters::core::{saturate_u8, BlurRadius, Dimensions, PixelBuffer, Window, CHANNELS};
pub use filters::grayscale::{grayscale, luma_bt601};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::PyReadwriteArray3;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FilterError;
    use crate::filters::apply::Filter;
    use crate::filters::blur::box_blur;
    use crate::filters::color_adjust::{adjust_brightness, adjust_contrast};
    use crate::filters::core::{BlurRadius, PixelBuffer};
    use crate::filters::grayscale::grayscale;

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> Self {
            PyValueError::new_err(err.to_string())
        }
    }

    // ========================================================================
    // Spatial Filters
    // ========================================================================

    /// Box blur an RGBA u8 image of shape (height, width, 4) in place.
    ///
    /// Raises ValueError for a negative radius or a non-RGBA/non-contiguous array.
    #[pyfunction]
    pub fn box_blur_rgba<'py>(mut image: PyReadwriteArray3<'py, u8>, radius: i64) -> PyResult<()> {
        let radius = BlurRadius::try_from(radius)?;
        let mut buffer = PixelBuffer::from_array(image.as_array_mut())?;
        box_blur(&mut buffer, radius);
        Ok(())
    }

    // ========================================================================
    // Pixel-wise Filters
    // ========================================================================

    /// Scale brightness of an RGBA u8 image in place. 1.0 = no change.
    #[pyfunction]
    pub fn brightness_rgba<'py>(mut image: PyReadwriteArray3<'py, u8>, factor: f32) -> PyResult<()> {
        let mut buffer = PixelBuffer::from_array(image.as_array_mut())?;
        adjust_brightness(&mut buffer, factor);
        Ok(())
    }

    /// Scale contrast around mid-gray of an RGBA u8 image in place. 1.0 = no change.
    #[pyfunction]
    pub fn contrast_rgba<'py>(mut image: PyReadwriteArray3<'py, u8>, factor: f32) -> PyResult<()> {
        let mut buffer = PixelBuffer::from_array(image.as_array_mut())?;
        adjust_contrast(&mut buffer, factor);
        Ok(())
    }

    /// Convert an RGBA u8 image to BT.601 grayscale in place, alpha preserved.
    #[pyfunction]
    pub fn grayscale_rgba<'py>(mut image: PyReadwriteArray3<'py, u8>) -> PyResult<()> {
        let mut buffer = PixelBuffer::from_array(image.as_array_mut())?;
        grayscale(&mut buffer);
        Ok(())
    }

    /// Apply a filter selected by name ("blur", "brightness", "contrast",
    /// "grayscale") with a slider intensity.
    #[pyfunction]
    pub fn apply_filter<'py>(
        mut image: PyReadwriteArray3<'py, u8>,
        name: &str,
        intensity: i32,
    ) -> PyResult<()> {
        let filter = Filter::from_name(name, intensity)?;
        let mut buffer = PixelBuffer::from_array(image.as_array_mut())?;
        filter.apply(&mut buffer);
        Ok(())
    }

    #[pymodule]
    pub fn pixel_filters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(box_blur_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(brightness_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(contrast_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(grayscale_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixel_filters;
