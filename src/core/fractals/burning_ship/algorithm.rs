use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;
use crate::core::fractals::escape_time::{ensure_finite, ensure_max_iterations, escape_time};

pub const BURNING_SHIP_INITIAL_REGION: ViewedRegion = ViewedRegion::fixed(-2.0, -2.5, 4.0, 4.0);

/// `z ← (|Re z| + i|Im z|)² + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct BurningShipAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for BurningShipAlgorithm {
    fn initial_region(&self) -> ViewedRegion {
        BURNING_SHIP_INITIAL_REGION
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn num_iterations(&self, point: Complex) -> Result<IterationResult, FractalError> {
        let c = ensure_finite(point)?;

        Ok(escape_time(Complex::ZERO, self.max_iterations, |z| {
            let folded = z.abs_components();
            folded * folded + c
        }))
    }
}

impl BurningShipAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalError> {
        Ok(Self {
            max_iterations: ensure_max_iterations(max_iterations)?,
        })
    }
}
