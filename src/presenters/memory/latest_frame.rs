use std::convert::Infallible;

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Keeps a copy of the most recent frame until someone takes it.
#[derive(Debug, Default)]
pub struct LatestFramePresenter {
    frame: Option<PixelBuffer>,
    presented: u64,
}

impl FramePresenterPort for LatestFramePresenter {
    type Failure = Infallible;

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Self::Failure> {
        self.frame = Some(frame.clone());
        self.presented += 1;
        Ok(())
    }
}

impl LatestFramePresenter {
    #[must_use]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref()
    }

    pub fn take_frame(&mut self) -> Option<PixelBuffer> {
        self.frame.take()
    }

    #[must_use]
    pub fn presented(&self) -> u64 {
        self.presented
    }
}
