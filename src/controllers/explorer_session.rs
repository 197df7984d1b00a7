use log::{info, warn};

use crate::controllers::config::ExplorerConfig;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::recenter_and_zoom::recenter_and_zoom::{
    ensure_scale_factor, recenter_and_zoom,
};
use crate::core::actions::render_view::ports::colour_map::{BoxedColourMap, ColourMap};
use crate::core::actions::render_view::ports::raster_sink::RasterSink;
use crate::core::actions::render_view::render_view::{RenderError, RenderStats, ViewRenderer};
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::point::Point;
use crate::core::data::viewed_region::ViewedRegion;
use crate::core::errors::FractalError;
use crate::core::fractals::factory::fractal_rule_factory;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::fractal_rule::FractalRule;
use crate::core::util::map_pixel_to_plane::map_point_to_plane;

pub type SessionResult<S> = Result<RenderStats, RenderError<<S as RasterSink>::Failure>>;

/// One interactive exploration: a rule, the region on screen and the sink
/// frames are drawn into.
///
/// The region only changes through [`reset`](Self::reset),
/// [`click`](Self::click) and [`select_rule`](Self::select_rule), and each of
/// those renders a full frame afterwards.
pub struct ExplorerSession<S: RasterSink, M: ColourMap = BoxedColourMap> {
    rule: FractalRule,
    params: FractalParams,
    region: ViewedRegion,
    geometry: DisplayGeometry,
    zoom_scale: f64,
    renderer: ViewRenderer<M>,
    sink: S,
}

impl<S: RasterSink> ExplorerSession<S, BoxedColourMap> {
    /// Builds a session from validated settings. Nothing is rendered yet.
    pub fn new(config: &ExplorerConfig, sink: S) -> Result<Self, FractalError> {
        config.validate()?;

        let params = config.fractal_params()?;
        let colour_map = colour_map_factory(
            config.colour_map,
            params.max_iterations(),
            config.base_hue,
            config.hue_scale,
        )?;

        Self::from_parts(
            fractal_rule_factory(config.fractal, &params)?,
            params,
            config.geometry()?,
            config.zoom_scale,
            ViewRenderer::new(colour_map, config.strategy),
            sink,
        )
    }
}

impl<S: RasterSink, M: ColourMap> ExplorerSession<S, M> {
    pub fn from_parts(
        rule: FractalRule,
        params: FractalParams,
        geometry: DisplayGeometry,
        zoom_scale: f64,
        renderer: ViewRenderer<M>,
        sink: S,
    ) -> Result<Self, FractalError> {
        let zoom_scale = ensure_scale_factor(zoom_scale)?;

        Ok(Self {
            region: rule.initial_region(),
            rule,
            params,
            geometry,
            zoom_scale,
            renderer,
            sink,
        })
    }

    /// Renders the current region without changing it.
    pub fn render(&mut self) -> SessionResult<S> {
        self.renderer
            .render(&self.rule, &self.region, self.geometry, &mut self.sink)
    }

    pub fn reset(&mut self) -> SessionResult<S> {
        self.region = self.rule.initial_region();
        info!("reset {} view", self.rule.display_name());

        self.render()
    }

    /// Zooms in on the clicked pixel.
    ///
    /// The region is left untouched if the click cannot be mapped or the
    /// zoomed region would be degenerate.
    pub fn click(&mut self, pixel: Point) -> SessionResult<S> {
        let zoomed = map_point_to_plane(pixel, &self.region, self.geometry)
            .and_then(|point| recenter_and_zoom(&self.region, point, self.zoom_scale));

        let region = match zoomed {
            Ok(region) => region,
            Err(error) => {
                warn!("ignoring click at ({}, {}): {}", pixel.x, pixel.y, error);
                return Err(error.into());
            }
        };

        self.region = region;
        info!(
            "zoomed to centre ({}, {}) width {}",
            region.center().real,
            region.center().imag,
            region.width()
        );

        self.render()
    }

    /// Switches to another rule and shows its initial region.
    pub fn select_rule(&mut self, kind: FractalKinds) -> SessionResult<S> {
        self.rule = fractal_rule_factory(kind, &self.params)?;
        info!("selected {}", self.rule.display_name());

        self.reset()
    }

    /// Replaces the colour map and redraws the current region.
    pub fn set_colour_map(&mut self, colour_map: M) -> SessionResult<S> {
        self.renderer.set_colour_map(colour_map);
        info!("colour map {}", self.renderer.colour_map().display_name());

        self.render()
    }

    #[must_use]
    pub fn region(&self) -> ViewedRegion {
        self.region
    }

    pub fn rule(&self) -> &FractalRule {
        &self.rule
    }

    #[must_use]
    pub fn params(&self) -> FractalParams {
        self.params
    }

    #[must_use]
    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    pub fn renderer(&self) -> &ViewRenderer<M> {
        &self.renderer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
