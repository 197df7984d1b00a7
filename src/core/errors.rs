//! Error taxonomy shared by the core.

use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractalError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("display extent must be greater than zero")]
    ZeroDisplayExtent,

    #[error("bounds [{min}, {max}] do not form a finite, non-empty interval")]
    DegenerateBounds { min: f64, max: f64 },

    #[error("region at ({x}, {y}) sized {width}x{height} is not a finite rectangle with positive extent")]
    InvalidRegion {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("scale factor {scale_factor} must be finite and greater than zero")]
    InvalidScaleFactor { scale_factor: f64 },

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("pixel index {index} outside of [0, {extent})")]
    PixelIndexOutOfRange { index: i64, extent: u32 },

    #[error("pixel {point:?} outside of {width}x{height} display")]
    PointOutsideDisplay {
        point: Point,
        width: u32,
        height: u32,
    },

    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax { iterations: u32, max_iterations: u32 },

    #[error("hue parameters base {base_hue} and scale {hue_scale} must be finite with a non-zero scale")]
    InvalidHue { base_hue: f32, hue_scale: f32 },
}
