use crate::core::data::complex::Complex;
use crate::core::errors::{FractalError, GeometryError};

/// The rectangle of the complex plane currently on screen.
///
/// `(x, y)` is the lower-left corner, i.e. the minimum real and minimum
/// imaginary coordinate. Width and height are always finite and positive, and
/// large enough that `x_max() > x_min()` and `y_max() > y_min()` hold in f64.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewedRegion {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl ViewedRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, FractalError> {
        let finite = x.is_finite()
            && y.is_finite()
            && width.is_finite()
            && height.is_finite()
            && (x + width).is_finite()
            && (y + height).is_finite();

        // x + width can round back to x once the width drops below half an ulp of x
        if !finite || width <= 0.0 || height <= 0.0 || x + width <= x || y + height <= y {
            return Err(GeometryError::InvalidRegion {
                x,
                y,
                width,
                height,
            }
            .into());
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// For compile-time regions only: the values must already satisfy the
    /// invariants `new` checks.
    pub(crate) const fn fixed(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}
