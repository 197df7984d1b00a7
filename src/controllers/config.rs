//! Explorer settings, loadable from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::actions::recenter_and_zoom::recenter_and_zoom::{
    DEFAULT_ZOOM_SCALE, ensure_scale_factor,
};
use crate::core::actions::render_view::render_view::RenderStrategy;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::maps::hue_cycle::{
    DEFAULT_BASE_HUE, DEFAULT_HUE_SCALE, HueCycleColourMap,
};
use crate::core::data::complex::Complex;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::fractal_params::{
    DEFAULT_JULIA_CONSTANT, DEFAULT_MAX_ITERATIONS, FractalParams,
};
use crate::core::errors::FractalError;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const DEFAULT_DISPLAY_SIZE: u32 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(#[from] FractalError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Width and height of the square display, in pixels.
    pub display_size: u32,
    pub fractal: FractalKinds,
    pub max_iterations: u32,
    pub zoom_scale: f64,
    pub colour_map: ColourMapKinds,
    pub base_hue: f32,
    pub hue_scale: f32,
    pub julia_constant: [f64; 2],
    pub strategy: RenderStrategy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            display_size: DEFAULT_DISPLAY_SIZE,
            fractal: FractalKinds::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_scale: DEFAULT_ZOOM_SCALE,
            colour_map: ColourMapKinds::default(),
            base_hue: DEFAULT_BASE_HUE,
            hue_scale: DEFAULT_HUE_SCALE,
            julia_constant: [DEFAULT_JULIA_CONSTANT.real, DEFAULT_JULIA_CONSTANT.imag],
            strategy: RenderStrategy::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), FractalError> {
        self.geometry()?;
        self.fractal_params()?;
        ensure_scale_factor(self.zoom_scale)?;
        HueCycleColourMap::new(self.base_hue, self.hue_scale)?;
        Ok(())
    }

    pub fn geometry(&self) -> Result<DisplayGeometry, FractalError> {
        DisplayGeometry::square(self.display_size)
    }

    pub fn fractal_params(&self) -> Result<FractalParams, FractalError> {
        let [real, imag] = self.julia_constant;
        FractalParams::new(self.max_iterations, Complex::new(real, imag))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
