use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::tricorn::algorithm::TricornAlgorithm;

/// The iteration rule driving a session.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalRule {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
    Tricorn(TricornAlgorithm),
    BurningShip(BurningShipAlgorithm),
}

impl FractalRule {
    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
            Self::Tricorn(_) => FractalKinds::Tricorn,
            Self::BurningShip(_) => FractalKinds::BurningShip,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    fn algorithm(&self) -> &dyn FractalAlgorithm {
        match self {
            Self::Mandelbrot(algorithm) => algorithm,
            Self::Julia(algorithm) => algorithm,
            Self::Tricorn(algorithm) => algorithm,
            Self::BurningShip(algorithm) => algorithm,
        }
    }
}

impl FractalAlgorithm for FractalRule {
    fn initial_region(&self) -> ViewedRegion {
        self.algorithm().initial_region()
    }

    fn max_iterations(&self) -> u32 {
        self.algorithm().max_iterations()
    }

    fn num_iterations(&self, point: Complex) -> Result<IterationResult, FractalError> {
        self.algorithm().num_iterations(point)
    }
}
