use std::ops::ControlFlow;

use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::errors::{FractalError, ParameterError};

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Runs `step` from `z0` until `|z|² >= 4` or `max_iterations` steps have
/// been taken. Running out of budget is `Bounded`, even if the final step
/// would have escaped.
pub fn escape_time<F>(z0: Complex, max_iterations: u32, step: F) -> IterationResult
where
    F: Fn(Complex) -> Complex,
{
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(step(z))
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => IterationResult::Escaped(iteration),
        ControlFlow::Continue(_) => IterationResult::Bounded,
    }
}

pub(crate) fn ensure_finite(point: Complex) -> Result<Complex, FractalError> {
    if !point.is_finite() {
        return Err(ParameterError::NonFiniteCoordinate {
            x: point.real,
            y: point.imag,
        }
        .into());
    }

    Ok(point)
}

pub(crate) fn ensure_max_iterations(max_iterations: u32) -> Result<u32, FractalError> {
    if max_iterations == 0 {
        return Err(ParameterError::ZeroMaxIterations.into());
    }

    Ok(max_iterations)
}
