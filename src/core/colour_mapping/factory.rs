use crate::core::actions::render_view::ports::colour_map::BoxedColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::maps::blue_white_gradient::BlueWhiteGradientColourMap;
use crate::core::colour_mapping::maps::fire_gradient::FireGradientColourMap;
use crate::core::colour_mapping::maps::hue_cycle::HueCycleColourMap;
use crate::core::errors::FractalError;

/// Builds a colour map. The hue settings only apply to the hue cycle, the
/// gradients are scaled to `max_iterations`.
pub fn colour_map_factory(
    kind: ColourMapKinds,
    max_iterations: u32,
    base_hue: f32,
    hue_scale: f32,
) -> Result<BoxedColourMap, FractalError> {
    Ok(match kind {
        ColourMapKinds::HueCycle => Box::new(HueCycleColourMap::new(base_hue, hue_scale)?),
        ColourMapKinds::FireGradient => Box::new(FireGradientColourMap::new(max_iterations)),
        ColourMapKinds::BlueWhiteGradient => {
            Box::new(BlueWhiteGradientColourMap::new(max_iterations))
        }
    })
}
