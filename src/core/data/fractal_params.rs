use crate::core::data::complex::Complex;
use crate::core::errors::{FractalError, ParameterError};

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27);

/// Settings shared by every iteration rule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParams {
    max_iterations: u32,
    julia_constant: Complex,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            julia_constant: DEFAULT_JULIA_CONSTANT,
        }
    }
}

impl FractalParams {
    pub fn new(max_iterations: u32, julia_constant: Complex) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(ParameterError::ZeroMaxIterations.into());
        }

        if !julia_constant.is_finite() {
            return Err(ParameterError::NonFiniteCoordinate {
                x: julia_constant.real,
                y: julia_constant.imag,
            }
            .into());
        }

        Ok(Self {
            max_iterations,
            julia_constant,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }
}
