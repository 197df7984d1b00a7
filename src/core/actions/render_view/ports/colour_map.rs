use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use crate::core::errors::FractalError;

/// Turns an iteration result into a pixel colour. Implementations are pure.
pub trait ColourMap {
    fn map(&self, result: IterationResult) -> Result<Colour, FractalError>;

    fn kind(&self) -> ColourMapKinds;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl<M: ColourMap + ?Sized> ColourMap for Box<M> {
    fn map(&self, result: IterationResult) -> Result<Colour, FractalError> {
        (**self).map(result)
    }

    fn kind(&self) -> ColourMapKinds {
        (**self).kind()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

pub type BoxedColourMap = Box<dyn ColourMap + Send + Sync>;
