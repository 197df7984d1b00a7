use crate::core::data::fractal_params::FractalParams;
use crate::core::errors::FractalError;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::fractal_rule::FractalRule;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::tricorn::algorithm::TricornAlgorithm;

pub fn fractal_rule_factory(
    kind: FractalKinds,
    params: &FractalParams,
) -> Result<FractalRule, FractalError> {
    let max_iterations = params.max_iterations();

    Ok(match kind {
        FractalKinds::Mandelbrot => FractalRule::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
        FractalKinds::Julia => {
            FractalRule::Julia(JuliaAlgorithm::new(max_iterations, params.julia_constant())?)
        }
        FractalKinds::Tricorn => FractalRule::Tricorn(TricornAlgorithm::new(max_iterations)?),
        FractalKinds::BurningShip => {
            FractalRule::BurningShip(BurningShipAlgorithm::new(max_iterations)?)
        }
    })
}
