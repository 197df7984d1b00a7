use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Something the user asked for through the UI this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiAction {
    Reset,
    SelectFractal(FractalKinds),
    SelectColourMap(ColourMapKinds),
}

/// Widget values; the combo boxes edit these in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiAppState {
    pub selected_fractal: FractalKinds,
    pub selected_colour_map: ColourMapKinds,
    applied_fractal: FractalKinds,
    applied_colour_map: ColourMapKinds,
}

impl GuiAppState {
    #[must_use]
    pub fn new(fractal: FractalKinds, colour_map: ColourMapKinds) -> Self {
        Self {
            selected_fractal: fractal,
            selected_colour_map: colour_map,
            applied_fractal: fractal,
            applied_colour_map: colour_map,
        }
    }

    /// Actions implied by selections that differ from what the session shows.
    pub fn take_selection_changes(&mut self) -> Vec<GuiAction> {
        let mut actions = Vec::new();

        if self.selected_fractal != self.applied_fractal {
            self.applied_fractal = self.selected_fractal;
            actions.push(GuiAction::SelectFractal(self.selected_fractal));
        }

        if self.selected_colour_map != self.applied_colour_map {
            self.applied_colour_map = self.selected_colour_map;
            actions.push(GuiAction::SelectColourMap(self.selected_colour_map));
        }

        actions
    }
}
