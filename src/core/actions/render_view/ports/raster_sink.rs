use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;

/// Destination for a rendered frame.
///
/// A render pass calls `set_pixel` once per pixel and then `present` once.
/// Nothing is presented if the pass fails part way.
pub trait RasterSink {
    type Failure: Error + 'static;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure>;

    fn present(&mut self) -> Result<(), Self::Failure>;
}
