use crate::core::data::complex::Complex;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::point::Point;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::{FractalError, GeometryError, ParameterError};

/// Maps one pixel index on a single axis to a plane coordinate.
///
/// Index 0 maps exactly to `region_min`; the last index stops one pixel
/// short of `region_max`.
pub fn map_pixel_to_plane(
    region_min: f64,
    region_max: f64,
    display_extent: u32,
    pixel_index: i32,
) -> Result<f64, FractalError> {
    if display_extent == 0 {
        return Err(GeometryError::ZeroDisplayExtent.into());
    }

    if !region_min.is_finite() || !region_max.is_finite() || region_min >= region_max {
        return Err(GeometryError::DegenerateBounds {
            min: region_min,
            max: region_max,
        }
        .into());
    }

    if pixel_index < 0 || pixel_index as u32 >= display_extent {
        return Err(ParameterError::PixelIndexOutOfRange {
            index: i64::from(pixel_index),
            extent: display_extent,
        }
        .into());
    }

    let range = region_max - region_min;

    Ok(region_min + f64::from(pixel_index) * range / f64::from(display_extent))
}

/// Maps a pixel to its plane coordinate: x over the region's horizontal
/// bounds, y over its vertical bounds.
pub fn map_point_to_plane(
    point: Point,
    region: &ViewedRegion,
    geometry: DisplayGeometry,
) -> Result<Complex, FractalError> {
    if !geometry.contains(point) {
        return Err(ParameterError::PointOutsideDisplay {
            point,
            width: geometry.width(),
            height: geometry.height(),
        }
        .into());
    }

    let real = map_pixel_to_plane(region.x_min(), region.x_max(), geometry.width(), point.x)?;
    let imag = map_pixel_to_plane(region.y_min(), region.y_max(), geometry.height(), point.y)?;

    Ok(Complex::new(real, imag))
}
