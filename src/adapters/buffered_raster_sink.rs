//! Raster sink that collects pixels into an RGB buffer and hands the
//! finished frame to a presenter.

use thiserror::Error;

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_view::ports::raster_sink::RasterSink;
use crate::core::data::colour::Colour;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;

#[derive(Debug, Error)]
pub enum SinkError<E> {
    #[error("pixel buffer error: {0}")]
    Buffer(#[from] PixelBufferError),

    #[error("presenter error: {0}")]
    Presenter(#[source] E),
}

#[derive(Debug)]
pub struct BufferedRasterSink<P: FramePresenterPort> {
    buffer: PixelBuffer,
    presenter: P,
    frames_presented: u64,
}

impl<P: FramePresenterPort> RasterSink for BufferedRasterSink<P> {
    type Failure = SinkError<P::Failure>;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure> {
        self.buffer.set_pixel(pixel, colour)?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Failure> {
        self.presenter
            .present(&self.buffer)
            .map_err(SinkError::Presenter)?;
        self.frames_presented += 1;
        Ok(())
    }
}

impl<P: FramePresenterPort> BufferedRasterSink<P> {
    pub fn new(geometry: DisplayGeometry, presenter: P) -> Self {
        Self {
            buffer: PixelBuffer::new(geometry),
            presenter,
            frames_presented: 0,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::memory::latest_frame::LatestFramePresenter;
    use std::io;

    #[derive(Debug, Default)]
    struct FailingPresenter {}

    impl FramePresenterPort for FailingPresenter {
        type Failure = io::Error;

        fn present(&mut self, _: &PixelBuffer) -> Result<(), Self::Failure> {
            Err(io::Error::other("display gone"))
        }
    }

    fn geometry() -> DisplayGeometry {
        DisplayGeometry::new(2, 2).unwrap()
    }

    #[test]
    fn test_present_hands_buffer_to_presenter() {
        let mut sink = BufferedRasterSink::new(geometry(), LatestFramePresenter::default());
        let red = Colour { r: 255, g: 0, b: 0 };

        sink.set_pixel(Point { x: 1, y: 0 }, red).unwrap();
        sink.present().unwrap();

        let frame = sink.presenter_mut().take_frame().unwrap();
        assert_eq!(frame.pixel(Point { x: 1, y: 0 }).unwrap(), red);
        assert_eq!(sink.frames_presented(), 1);
    }

    #[test]
    fn test_nothing_presented_until_present_is_called() {
        let mut sink = BufferedRasterSink::new(geometry(), LatestFramePresenter::default());

        sink.set_pixel(Point { x: 0, y: 0 }, Colour::BLACK).unwrap();

        assert!(sink.presenter().frame().is_none());
        assert_eq!(sink.frames_presented(), 0);
    }

    #[test]
    fn test_out_of_bounds_pixel_is_buffer_error() {
        let mut sink = BufferedRasterSink::new(geometry(), LatestFramePresenter::default());

        let result = sink.set_pixel(Point { x: 2, y: 0 }, Colour::BLACK);

        assert!(matches!(
            result,
            Err(SinkError::Buffer(PixelBufferError::PixelOutsideBounds { .. }))
        ));
    }

    #[test]
    fn test_presenter_failure_is_reported() {
        let mut sink = BufferedRasterSink::new(geometry(), FailingPresenter::default());

        assert!(matches!(sink.present(), Err(SinkError::Presenter(_))));
        assert_eq!(sink.frames_presented(), 0);
    }
}
