use std::error::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Receives each completed frame.
pub trait FramePresenterPort {
    type Failure: Error + 'static;

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Self::Failure>;
}
