pub mod blue_white_gradient;
pub mod fire_gradient;
pub mod hue_cycle;

use crate::core::data::iteration_result::IterationResult;
use crate::core::errors::{FractalError, ParameterError};

/// Escape count as a fraction of the budget, or `None` inside the set.
fn escape_fraction(
    result: IterationResult,
    max_iterations: u32,
) -> Result<Option<f64>, FractalError> {
    match result {
        IterationResult::Bounded => Ok(None),
        IterationResult::Escaped(iterations) if iterations >= max_iterations => {
            Err(ParameterError::IterationsExceedMax {
                iterations,
                max_iterations,
            }
            .into())
        }
        IterationResult::Escaped(iterations) => {
            Ok(Some(f64::from(iterations) / f64::from(max_iterations)))
        }
    }
}
