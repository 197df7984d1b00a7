use crate::core::actions::render_view::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::maps::escape_fraction;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::errors::FractalError;

#[derive(Debug)]
pub struct BlueWhiteGradientColourMap {
    max_iterations: u32,
}

impl ColourMap for BlueWhiteGradientColourMap {
    fn map(&self, result: IterationResult) -> Result<Colour, FractalError> {
        let Some(t) = escape_fraction(result, self.max_iterations)? else {
            return Ok(Colour::BLACK);
        };

        // Bernstein polynomials give a smooth blue-to-white ramp
        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Ok(Colour { r, g, b })
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::BlueWhiteGradient
    }
}

impl BlueWhiteGradientColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_is_black() {
        let mapper = BlueWhiteGradientColourMap::new(100);

        assert_eq!(mapper.map(IterationResult::Bounded), Ok(Colour::BLACK));
    }

    #[test]
    fn test_mid_range_is_blue_dominant() {
        let colour = BlueWhiteGradientColourMap::new(100)
            .map(IterationResult::Escaped(20))
            .unwrap();

        assert!(colour.b > colour.r);
    }

    #[test]
    fn test_rejects_count_beyond_budget() {
        assert!(BlueWhiteGradientColourMap::new(10)
            .map(IterationResult::Escaped(11))
            .is_err());
    }
}
