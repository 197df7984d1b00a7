use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;
use crate::core::fractals::escape_time::{ensure_finite, ensure_max_iterations, escape_time};

pub const JULIA_INITIAL_REGION: ViewedRegion = ViewedRegion::fixed(-2.0, -2.0, 4.0, 4.0);

/// `z ← z² + k` for a fixed constant `k`, starting from the plane coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn initial_region(&self) -> ViewedRegion {
        JULIA_INITIAL_REGION
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn num_iterations(&self, point: Complex) -> Result<IterationResult, FractalError> {
        let z0 = ensure_finite(point)?;
        let k = self.constant;

        Ok(escape_time(z0, self.max_iterations, |z| z * z + k))
    }
}

impl JuliaAlgorithm {
    pub fn new(max_iterations: u32, constant: Complex) -> Result<Self, FractalError> {
        Ok(Self {
            constant: ensure_finite(constant)?,
            max_iterations: ensure_max_iterations(max_iterations)?,
        })
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }
}
