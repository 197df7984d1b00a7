use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;

/// An escape-time iteration rule.
pub trait FractalAlgorithm {
    /// The region shown at session start and after every reset.
    fn initial_region(&self) -> ViewedRegion;

    fn max_iterations(&self) -> u32;

    /// Iterates the rule for one plane coordinate. Fails on non-finite input.
    fn num_iterations(&self, point: Complex) -> Result<IterationResult, FractalError>;
}
