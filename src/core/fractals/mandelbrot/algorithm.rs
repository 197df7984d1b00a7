use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;
use crate::core::fractals::escape_time::{ensure_finite, ensure_max_iterations, escape_time};

pub const MANDELBROT_INITIAL_REGION: ViewedRegion = ViewedRegion::fixed(-2.0, -2.0, 4.0, 4.0);

/// `z ← z² + c`, starting from `z = 0` with `c` the plane coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn initial_region(&self) -> ViewedRegion {
        MANDELBROT_INITIAL_REGION
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn num_iterations(&self, point: Complex) -> Result<IterationResult, FractalError> {
        let c = ensure_finite(point)?;

        Ok(escape_time(Complex::ZERO, self.max_iterations, |z| z * z + c))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalError> {
        Ok(Self {
            max_iterations: ensure_max_iterations(max_iterations)?,
        })
    }
}
