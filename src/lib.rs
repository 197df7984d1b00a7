mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::buffered_raster_sink::{BufferedRasterSink, SinkError};
pub use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
pub use crate::controllers::cli::cli_controller::{CliController, CliReport};
pub use crate::controllers::config::{ConfigError, DEFAULT_DISPLAY_SIZE, ExplorerConfig};
pub use crate::controllers::explorer_session::{ExplorerSession, SessionResult};
pub use crate::controllers::ports::frame_presenter::FramePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::recenter_and_zoom::recenter_and_zoom::{
    DEFAULT_ZOOM_SCALE, recenter_and_zoom,
};
pub use crate::core::actions::render_view::ports::colour_map::{BoxedColourMap, ColourMap};
pub use crate::core::actions::render_view::ports::raster_sink::RasterSink;
pub use crate::core::actions::render_view::render_view::{
    RenderError, RenderStats, RenderStrategy, ViewRenderer,
};
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::{ColourMapKinds, UnknownColourMapKind};
pub use crate::core::colour_mapping::maps::blue_white_gradient::BlueWhiteGradientColourMap;
pub use crate::core::colour_mapping::maps::fire_gradient::FireGradientColourMap;
pub use crate::core::colour_mapping::maps::hue_cycle::HueCycleColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::display_geometry::DisplayGeometry;
pub use crate::core::data::fractal_params::FractalParams;
pub use crate::core::data::iteration_result::IterationResult;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewed_region::ViewedRegion;
pub use crate::core::errors::{FractalError, GeometryError, ParameterError};
pub use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
pub use crate::core::fractals::escape_time::escape_time;
pub use crate::core::fractals::factory::fractal_rule_factory;
pub use crate::core::fractals::fractal_kinds::{FractalKinds, UnknownFractalKind};
pub use crate::core::fractals::fractal_rule::FractalRule;
pub use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::tricorn::algorithm::TricornAlgorithm;
pub use crate::core::util::hsb_to_rgb::hsb_to_rgb;
pub use crate::core::util::map_pixel_to_plane::{map_pixel_to_plane, map_point_to_plane};
pub use crate::presenters::file::ppm::{PpmFilePresenter, write_ppm};
pub use crate::presenters::memory::latest_frame::LatestFramePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
