use crate::core::data::point::Point;
use crate::core::errors::{FractalError, GeometryError};

/// Pixel dimensions of the output surface. Indices run over
/// `[0, width) x [0, height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayGeometry {
    width: u32,
    height: u32,
}

impl DisplayGeometry {
    pub fn new(width: u32, height: u32) -> Result<Self, FractalError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GeometryError::ZeroDisplayExtent.into());
        }

        Ok(Self { width, height })
    }

    pub fn square(size: u32) -> Result<Self, FractalError> {
        Self::new(size, size)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Every pixel, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as i32;

        (0..self.height as i32).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }

    /// Pixels of a single row, left to right.
    pub fn row(&self, y: i32) -> impl Iterator<Item = Point> {
        (0..self.width as i32).map(move |x| Point { x, y })
    }
}
