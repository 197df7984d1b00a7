use crate::core::actions::render_view::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::maps::escape_fraction;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::errors::FractalError;

#[derive(Debug)]
pub struct FireGradientColourMap {
    max_iterations: u32,
}

impl ColourMap for FireGradientColourMap {
    fn map(&self, result: IterationResult) -> Result<Colour, FractalError> {
        let Some(t) = escape_fraction(result, self.max_iterations)? else {
            return Ok(Colour::BLACK);
        };

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::FireGradient
    }
}

impl FireGradientColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ParameterError;

    fn map(count: u32) -> Colour {
        FireGradientColourMap::new(100)
            .map(IterationResult::Escaped(count))
            .unwrap()
    }

    #[test]
    fn test_bounded_is_black() {
        let mapper = FireGradientColourMap::new(100);

        assert_eq!(mapper.map(IterationResult::Bounded), Ok(Colour::BLACK));
    }

    #[test]
    fn test_gradient_stops() {
        assert_eq!(map(0), Colour::BLACK);
        assert_eq!(map(25), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(map(50), Colour { r: 255, g: 165, b: 0 });
        assert_eq!(map(75), Colour { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn test_near_max_is_near_white() {
        let colour = map(99);

        assert_eq!((colour.r, colour.g), (255, 255));
        assert!(colour.b > 240);
    }

    #[test]
    fn test_rejects_count_beyond_budget() {
        assert_eq!(
            FireGradientColourMap::new(100).map(IterationResult::Escaped(100)),
            Err(FractalError::InvalidParameter(
                ParameterError::IterationsExceedMax {
                    iterations: 100,
                    max_iterations: 100
                }
            ))
        );
    }
}
