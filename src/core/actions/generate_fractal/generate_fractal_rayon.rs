use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal::PlaneAxes;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are computed independently and stitched back in row-major order, so
/// the output matches [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(
    algorithm: &Alg,
    region: &ViewedRegion,
    geometry: DisplayGeometry,
) -> Result<Vec<IterationResult>, FractalError>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
{
    let axes = PlaneAxes::new(region, geometry)?;

    let rows: Vec<Vec<IterationResult>> = axes
        .imags
        .par_iter()
        .map(|&imag| axes.row(algorithm, imag))
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}
