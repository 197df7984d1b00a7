use std::time::Duration;

use crate::adapters::buffered_raster_sink::BufferedRasterSink;
use crate::controllers::config::ExplorerConfig;
use crate::controllers::explorer_session::ExplorerSession;
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;

/// Summary of a CLI run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CliReport {
    pub frames: usize,
    pub region: ViewedRegion,
    pub total_duration: Duration,
}

/// Renders the initial view, then replays clicks one frame at a time.
pub struct CliController<P: FramePresenterPort> {
    session: ExplorerSession<BufferedRasterSink<P>>,
}

impl<P: FramePresenterPort> CliController<P> {
    pub fn new(config: &ExplorerConfig, presenter: P) -> Result<Self, FractalError> {
        let sink = BufferedRasterSink::new(config.geometry()?, presenter);

        Ok(Self {
            session: ExplorerSession::new(config, sink)?,
        })
    }

    pub fn run(&mut self, clicks: &[Point]) -> Result<CliReport, Box<dyn std::error::Error>> {
        let geometry = self.session.geometry();
        let rule = self.session.rule();

        println!("Rendering {} set...", rule.display_name());
        println!("Image size: {}x{}", geometry.width(), geometry.height());
        println!("Max iterations: {}", rule.max_iterations());

        let mut stats = vec![self.session.render()?];

        for &click in clicks {
            stats.push(self.session.click(click)?);
            let region = self.session.region();
            println!(
                "Zoomed at ({}, {}): centre ({:.6}, {:.6}), width {:e}",
                click.x,
                click.y,
                region.center().real,
                region.center().imag,
                region.width()
            );
        }

        let total_duration: Duration = stats.iter().map(|s| s.duration).sum();

        println!("Frames:     {}", stats.len());
        println!("Duration:   {:?}", total_duration);

        Ok(CliReport {
            frames: stats.len(),
            region: self.session.region(),
            total_duration,
        })
    }

    pub fn session(&self) -> &ExplorerSession<BufferedRasterSink<P>> {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::memory::latest_frame::LatestFramePresenter;

    fn config() -> ExplorerConfig {
        ExplorerConfig {
            display_size: 8,
            max_iterations: 32,
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn test_run_without_clicks_presents_initial_frame() {
        let mut controller = CliController::new(&config(), LatestFramePresenter::default()).unwrap();

        let report = controller.run(&[]).unwrap();

        assert_eq!(report.frames, 1);
        assert_eq!(report.region, ViewedRegion::new(-2.0, -2.0, 4.0, 4.0).unwrap());
        let sink = controller.session().sink();
        assert_eq!(sink.frames_presented(), 1);
        assert_eq!(sink.presenter().frame().unwrap().buffer_size(), 8 * 8 * 3);
    }

    #[test]
    fn test_run_replays_clicks_in_order() {
        let mut controller = CliController::new(&config(), LatestFramePresenter::default()).unwrap();

        let report = controller
            .run(&[Point { x: 4, y: 4 }, Point { x: 4, y: 4 }])
            .unwrap();

        assert_eq!(report.frames, 3);
        assert_eq!(report.region.width(), 1.0);
        assert_eq!(controller.session().sink().presenter().presented(), 3);
    }

    #[test]
    fn test_run_stops_at_invalid_click() {
        let mut controller = CliController::new(&config(), LatestFramePresenter::default()).unwrap();

        let result = controller.run(&[Point { x: 100, y: 0 }]);

        assert!(result.is_err());
        assert_eq!(controller.session().sink().frames_presented(), 1);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ExplorerConfig {
            display_size: 0,
            ..ExplorerConfig::default()
        };

        assert!(CliController::new(&config, LatestFramePresenter::default()).is_err());
    }
}
