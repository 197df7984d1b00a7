use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;
use crate::core::util::map_pixel_to_plane::map_pixel_to_plane;

/// Plane coordinates of every column and every row of the display.
pub(crate) struct PlaneAxes {
    pub reals: Vec<f64>,
    pub imags: Vec<f64>,
}

impl PlaneAxes {
    pub(crate) fn new(
        region: &ViewedRegion,
        geometry: DisplayGeometry,
    ) -> Result<Self, FractalError> {
        let reals = (0..geometry.width() as i32)
            .map(|x| map_pixel_to_plane(region.x_min(), region.x_max(), geometry.width(), x))
            .collect::<Result<Vec<_>, _>>()?;
        let imags = (0..geometry.height() as i32)
            .map(|y| map_pixel_to_plane(region.y_min(), region.y_max(), geometry.height(), y))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { reals, imags })
    }

    pub(crate) fn row<Alg: FractalAlgorithm + ?Sized>(
        &self,
        algorithm: &Alg,
        imag: f64,
    ) -> Result<Vec<IterationResult>, FractalError> {
        self.reals
            .iter()
            .map(|&real| algorithm.num_iterations(Complex::new(real, imag)))
            .collect()
    }
}

/// Computes every pixel's iteration result on the calling thread, row-major.
pub fn generate_fractal<Alg: FractalAlgorithm + ?Sized>(
    algorithm: &Alg,
    region: &ViewedRegion,
    geometry: DisplayGeometry,
) -> Result<Vec<IterationResult>, FractalError> {
    let axes = PlaneAxes::new(region, geometry)?;
    let mut results = Vec::with_capacity(geometry.pixel_count());

    for &imag in &axes.imags {
        results.extend(axes.row(algorithm, imag)?);
    }

    Ok(results)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::errors::ParameterError;

    /// Encodes the plane coordinate into the escape count.
    #[derive(Debug)]
    pub(crate) struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        fn initial_region(&self) -> ViewedRegion {
            ViewedRegion::new(0.0, 0.0, 1.0, 1.0).unwrap()
        }

        fn max_iterations(&self) -> u32 {
            u32::MAX
        }

        fn num_iterations(&self, point: Complex) -> Result<IterationResult, FractalError> {
            if point.real == 0.0 && point.imag == 0.0 {
                return Ok(IterationResult::Bounded);
            }
            Ok(IterationResult::Escaped((point.real + 100.0 * point.imag) as u32))
        }
    }

    #[derive(Debug)]
    pub(crate) struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        fn initial_region(&self) -> ViewedRegion {
            ViewedRegion::new(0.0, 0.0, 1.0, 1.0).unwrap()
        }

        fn max_iterations(&self) -> u32 {
            1
        }

        fn num_iterations(&self, _: Complex) -> Result<IterationResult, FractalError> {
            Err(ParameterError::ZeroMaxIterations.into())
        }
    }

    /// A region whose plane coordinates equal the pixel indices.
    pub(crate) fn identity_region(geometry: DisplayGeometry) -> ViewedRegion {
        ViewedRegion::new(
            0.0,
            0.0,
            f64::from(geometry.width()),
            f64::from(geometry.height()),
        )
        .unwrap()
    }

    #[test]
    fn test_results_are_row_major() {
        let geometry = DisplayGeometry::new(3, 2).unwrap();
        let results = generate_fractal(
            &StubSuccessAlgorithm {},
            &identity_region(geometry),
            geometry,
        )
        .unwrap();

        assert_eq!(
            results,
            vec![
                IterationResult::Bounded,
                IterationResult::Escaped(1),
                IterationResult::Escaped(2),
                IterationResult::Escaped(100),
                IterationResult::Escaped(101),
                IterationResult::Escaped(102),
            ]
        );
    }

    #[test]
    fn test_one_result_per_pixel() {
        let geometry = DisplayGeometry::new(17, 9).unwrap();
        let results = generate_fractal(
            &StubSuccessAlgorithm {},
            &identity_region(geometry),
            geometry,
        )
        .unwrap();

        assert_eq!(results.len(), geometry.pixel_count());
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let geometry = DisplayGeometry::new(3, 3).unwrap();
        let result = generate_fractal(
            &StubFailureAlgorithm {},
            &identity_region(geometry),
            geometry,
        );

        assert_eq!(
            result,
            Err(FractalError::InvalidParameter(ParameterError::ZeroMaxIterations))
        );
    }
}
