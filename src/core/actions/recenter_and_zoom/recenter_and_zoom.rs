use crate::core::data::complex::Complex;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::{FractalError, ParameterError};

pub const DEFAULT_ZOOM_SCALE: f64 = 0.5;

pub(crate) fn ensure_scale_factor(scale_factor: f64) -> Result<f64, FractalError> {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(ParameterError::InvalidScaleFactor { scale_factor }.into());
    }

    Ok(scale_factor)
}

/// Scales the region by `scale_factor` and centres it on `click`.
///
/// A factor below one zooms in. The aspect ratio is preserved. Fails with
/// `InvalidGeometry` once the region becomes too small to represent.
pub fn recenter_and_zoom(
    region: &ViewedRegion,
    click: Complex,
    scale_factor: f64,
) -> Result<ViewedRegion, FractalError> {
    if !click.is_finite() {
        return Err(ParameterError::NonFiniteCoordinate {
            x: click.real,
            y: click.imag,
        }
        .into());
    }

    let scale_factor = ensure_scale_factor(scale_factor)?;
    let width = region.width() * scale_factor;
    let height = region.height() * scale_factor;

    ViewedRegion::new(
        click.real - width / 2.0,
        click.imag - height / 2.0,
        width,
        height,
    )
}
