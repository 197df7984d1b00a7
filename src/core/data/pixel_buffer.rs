use crate::core::data::colour::Colour;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::point::Point;
use thiserror::Error;

fn geometry_to_buffer_size(geometry: DisplayGeometry) -> usize {
    geometry.pixel_count() * 3
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {}x{} buffer", pixel.x, pixel.y, geometry.width(), geometry.height())]
    PixelOutsideBounds {
        pixel: Point,
        geometry: DisplayGeometry,
    },

    #[error("display size {geometry_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        geometry_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB image, three bytes per pixel, row-major.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    geometry: DisplayGeometry,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(geometry: DisplayGeometry) -> Self {
        Self {
            geometry,
            buffer: vec![0; geometry_to_buffer_size(geometry)],
        }
    }

    pub fn from_data(
        geometry: DisplayGeometry,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = geometry_to_buffer_size(geometry);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                geometry_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { geometry, buffer })
    }

    #[must_use]
    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.geometry.contains(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                geometry: self.geometry,
            });
        }

        Ok((pixel.y as usize * self.geometry.width() as usize + pixel.x as usize) * 3)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.offset(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.offset(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
