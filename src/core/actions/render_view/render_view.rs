use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_view::ports::colour_map::ColourMap;
use crate::core::actions::render_view::ports::raster_sink::RasterSink;
use crate::core::data::colour::Colour;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategy {
    #[default]
    Serial,
    /// Rows are computed on the rayon pool; sink writes stay on the caller's thread.
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub pixels: usize,
    pub in_set: usize,
    pub duration: Duration,
}

#[derive(Debug, Error)]
pub enum RenderError<E> {
    #[error("fractal computation failed: {0}")]
    Fractal(#[from] FractalError),

    #[error("raster sink failed: {0}")]
    Sink(#[source] E),
}

/// Drives one full pass: iterate, colour, write, present.
#[derive(Debug)]
pub struct ViewRenderer<M: ColourMap> {
    colour_map: M,
    strategy: RenderStrategy,
}

impl<M: ColourMap> ViewRenderer<M> {
    pub fn new(colour_map: M, strategy: RenderStrategy) -> Self {
        Self {
            colour_map,
            strategy,
        }
    }

    pub fn colour_map(&self) -> &M {
        &self.colour_map
    }

    pub fn set_colour_map(&mut self, colour_map: M) {
        self.colour_map = colour_map;
    }

    #[must_use]
    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: RenderStrategy) {
        self.strategy = strategy;
    }

    /// Iteration results for every pixel, row-major.
    pub fn compute<Alg>(
        &self,
        algorithm: &Alg,
        region: &ViewedRegion,
        geometry: DisplayGeometry,
    ) -> Result<Vec<IterationResult>, FractalError>
    where
        Alg: FractalAlgorithm + Sync + ?Sized,
    {
        match self.strategy {
            RenderStrategy::Serial => generate_fractal(algorithm, region, geometry),
            RenderStrategy::Parallel => generate_fractal_rayon(algorithm, region, geometry),
        }
    }

    /// Renders the region into `sink`.
    ///
    /// Every colour is computed before the first write, so a computation
    /// error leaves the sink untouched. `present` is called exactly once,
    /// and only after every pixel has been written.
    pub fn render<Alg, S>(
        &self,
        algorithm: &Alg,
        region: &ViewedRegion,
        geometry: DisplayGeometry,
        sink: &mut S,
    ) -> Result<RenderStats, RenderError<S::Failure>>
    where
        Alg: FractalAlgorithm + Sync + ?Sized,
        S: RasterSink,
    {
        let start = Instant::now();

        debug!(
            "rendering {}x{} over x:[{}, {}] y:[{}, {}] ({:?}, {})",
            geometry.width(),
            geometry.height(),
            region.x_min(),
            region.x_max(),
            region.y_min(),
            region.y_max(),
            self.strategy,
            self.colour_map.display_name(),
        );

        let results = self.compute(algorithm, region, geometry)?;
        let in_set = results.iter().filter(|result| result.is_bounded()).count();
        let colours = results
            .into_iter()
            .map(|result| self.colour_map.map(result))
            .collect::<Result<Vec<Colour>, _>>()?;

        for (pixel, colour) in geometry.points().zip(colours) {
            sink.set_pixel(pixel, colour).map_err(RenderError::Sink)?;
        }

        sink.present().map_err(RenderError::Sink)?;

        let stats = RenderStats {
            pixels: geometry.pixel_count(),
            in_set,
            duration: start.elapsed(),
        };

        debug!(
            "rendered {} pixels ({} in set) in {:?}",
            stats.pixels, stats.in_set, stats.duration
        );

        Ok(stats)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::tests::{
        identity_region, StubFailureAlgorithm, StubSuccessAlgorithm,
    };
    use crate::core::colour_mapping::maps::fire_gradient::FireGradientColourMap;
    use crate::core::colour_mapping::maps::hue_cycle::HueCycleColourMap;
    use crate::core::data::point::Point;
    use crate::core::errors::ParameterError;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use std::collections::HashSet;

    #[derive(Debug, Error, PartialEq)]
    #[error("sink refused pixel")]
    pub(crate) struct StubSinkError;

    /// Records every call; optionally fails on the n-th write.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub writes: Vec<(Point, Colour)>,
        pub presents: usize,
        pub fail_on_write: Option<usize>,
    }

    impl RasterSink for RecordingSink {
        type Failure = StubSinkError;

        fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure> {
            if self.fail_on_write == Some(self.writes.len()) {
                return Err(StubSinkError);
            }
            self.writes.push((pixel, colour));
            Ok(())
        }

        fn present(&mut self) -> Result<(), Self::Failure> {
            self.presents += 1;
            Ok(())
        }
    }

    fn mandelbrot_setup() -> (MandelbrotAlgorithm, ViewedRegion, DisplayGeometry) {
        let algorithm = MandelbrotAlgorithm::new(256).unwrap();
        let region = algorithm.initial_region();
        (algorithm, region, DisplayGeometry::square(4).unwrap())
    }

    #[test]
    fn test_presents_once_after_writing_every_pixel_once() {
        let (algorithm, region, geometry) = mandelbrot_setup();
        let renderer = ViewRenderer::new(HueCycleColourMap::default(), RenderStrategy::Serial);
        let mut sink = RecordingSink::default();

        let stats = renderer.render(&algorithm, &region, geometry, &mut sink).unwrap();

        assert_eq!(sink.presents, 1);
        assert_eq!(sink.writes.len(), 16);
        let unique: HashSet<Point> = sink.writes.iter().map(|(point, _)| *point).collect();
        assert_eq!(unique.len(), 16);
        assert_eq!(stats.pixels, 16);
    }

    #[test]
    fn test_origin_pixel_is_black_and_corner_is_coloured() {
        let (algorithm, region, geometry) = mandelbrot_setup();
        let renderer = ViewRenderer::new(HueCycleColourMap::default(), RenderStrategy::Serial);
        let mut sink = RecordingSink::default();

        let stats = renderer.render(&algorithm, &region, geometry, &mut sink).unwrap();

        // pixel (2, 2) maps to the origin of the plane
        let centre = sink
            .writes
            .iter()
            .find(|(point, _)| *point == Point { x: 2, y: 2 })
            .unwrap();
        assert_eq!(centre.1, Colour::BLACK);
        assert_ne!(sink.writes[0].1, Colour::BLACK);
        assert!(stats.in_set >= 1);
    }

    #[test]
    fn test_serial_and_parallel_frames_match() {
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();
        let region = algorithm.initial_region();
        let geometry = DisplayGeometry::new(40, 30).unwrap();
        let mut serial_sink = RecordingSink::default();
        let mut parallel_sink = RecordingSink::default();

        let serial = ViewRenderer::new(HueCycleColourMap::default(), RenderStrategy::Serial);
        let parallel = ViewRenderer::new(HueCycleColourMap::default(), RenderStrategy::Parallel);
        let serial_stats = serial.render(&algorithm, &region, geometry, &mut serial_sink).unwrap();
        let parallel_stats = parallel
            .render(&algorithm, &region, geometry, &mut parallel_sink)
            .unwrap();

        assert_eq!(serial_sink.writes, parallel_sink.writes);
        assert_eq!(serial_stats.in_set, parallel_stats.in_set);
        assert_eq!(parallel_sink.presents, 1);
    }

    #[test]
    fn test_algorithm_failure_writes_and_presents_nothing() {
        let geometry = DisplayGeometry::new(3, 3).unwrap();
        let renderer = ViewRenderer::new(HueCycleColourMap::default(), RenderStrategy::Serial);
        let mut sink = RecordingSink::default();

        let result = renderer.render(
            &StubFailureAlgorithm {},
            &identity_region(geometry),
            geometry,
            &mut sink,
        );

        assert!(matches!(
            result,
            Err(RenderError::Fractal(FractalError::InvalidParameter(
                ParameterError::ZeroMaxIterations
            )))
        ));
        assert!(sink.writes.is_empty());
        assert_eq!(sink.presents, 0);
    }

    #[test]
    fn test_colour_map_failure_writes_nothing() {
        // stub escape counts run up to 302, beyond the gradient's budget of 10
        let geometry = DisplayGeometry::new(3, 4).unwrap();
        let renderer = ViewRenderer::new(FireGradientColourMap::new(10), RenderStrategy::Serial);
        let mut sink = RecordingSink::default();

        let result = renderer.render(
            &StubSuccessAlgorithm {},
            &identity_region(geometry),
            geometry,
            &mut sink,
        );

        assert!(matches!(result, Err(RenderError::Fractal(_))));
        assert!(sink.writes.is_empty());
        assert_eq!(sink.presents, 0);
    }

    #[test]
    fn test_sink_failure_is_not_presented() {
        let (algorithm, region, geometry) = mandelbrot_setup();
        let renderer = ViewRenderer::new(HueCycleColourMap::default(), RenderStrategy::Serial);
        let mut sink = RecordingSink {
            fail_on_write: Some(5),
            ..RecordingSink::default()
        };

        let result = renderer.render(&algorithm, &region, geometry, &mut sink);

        assert!(matches!(result, Err(RenderError::Sink(StubSinkError))));
        assert_eq!(sink.writes.len(), 5);
        assert_eq!(sink.presents, 0);
    }

    #[test]
    fn test_strategy_can_be_switched() {
        let mut renderer = ViewRenderer::new(HueCycleColourMap::default(), RenderStrategy::default());

        assert_eq!(renderer.strategy(), RenderStrategy::Serial);
        renderer.set_strategy(RenderStrategy::Parallel);
        assert_eq!(renderer.strategy(), RenderStrategy::Parallel);
    }
}
