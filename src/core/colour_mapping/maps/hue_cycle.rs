use crate::core::actions::render_view::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::errors::{FractalError, ParameterError};
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

pub const DEFAULT_BASE_HUE: f32 = 0.6;
pub const DEFAULT_HUE_SCALE: f32 = 200.0;

/// Fully saturated colours whose hue advances by `1 / hue_scale` per
/// iteration, starting at `base_hue`. Points in the set are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCycleColourMap {
    base_hue: f32,
    hue_scale: f32,
}

impl ColourMap for HueCycleColourMap {
    fn map(&self, result: IterationResult) -> Result<Colour, FractalError> {
        Ok(match result {
            IterationResult::Bounded => Colour::BLACK,
            IterationResult::Escaped(count) => {
                let hue = self.base_hue + count as f32 / self.hue_scale;
                hsb_to_rgb(hue, 1.0, 1.0)
            }
        })
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::HueCycle
    }
}

impl Default for HueCycleColourMap {
    fn default() -> Self {
        Self {
            base_hue: DEFAULT_BASE_HUE,
            hue_scale: DEFAULT_HUE_SCALE,
        }
    }
}

impl HueCycleColourMap {
    pub fn new(base_hue: f32, hue_scale: f32) -> Result<Self, FractalError> {
        if !base_hue.is_finite() || !hue_scale.is_finite() || hue_scale == 0.0 {
            return Err(ParameterError::InvalidHue {
                base_hue,
                hue_scale,
            }
            .into());
        }

        Ok(Self {
            base_hue,
            hue_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_is_black() {
        let map = HueCycleColourMap::default();

        assert_eq!(map.map(IterationResult::Bounded), Ok(Colour::BLACK));
    }

    #[test]
    fn test_zero_iterations_uses_base_hue() {
        let map = HueCycleColourMap::default();

        assert_eq!(
            map.map(IterationResult::Escaped(0)),
            Ok(Colour {
                r: 0,
                g: 102,
                b: 255
            })
        );
    }

    #[test]
    fn test_hue_wraps_after_full_cycle() {
        let map = HueCycleColourMap::default();

        assert_eq!(
            map.map(IterationResult::Escaped(200)),
            map.map(IterationResult::Escaped(0))
        );
    }

    #[test]
    fn test_escaped_pixels_are_never_black() {
        let map = HueCycleColourMap::default();

        for count in 0..400 {
            let colour = map.map(IterationResult::Escaped(count)).unwrap();
            assert_ne!(colour, Colour::BLACK, "count {count} mapped to black");
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let map = HueCycleColourMap::new(0.1, 50.0).unwrap();

        assert_eq!(
            map.map(IterationResult::Escaped(17)),
            map.map(IterationResult::Escaped(17))
        );
    }

    #[test]
    fn test_rejects_invalid_hue_parameters() {
        assert!(HueCycleColourMap::new(0.6, 0.0).is_err());
        assert!(HueCycleColourMap::new(f32::NAN, 200.0).is_err());
        assert!(HueCycleColourMap::new(0.6, f32::INFINITY).is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(HueCycleColourMap::default().display_name(), "Hue cycle");
    }
}
