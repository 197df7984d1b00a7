use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    Tricorn,
    BurningShip,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fractal '{0}', expected one of: mandelbrot, julia, tricorn, burning-ship")]
pub struct UnknownFractalKind(pub String);

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::Tricorn,
        Self::BurningShip,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Tricorn => "Tricorn",
            Self::BurningShip => "Burning Ship",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::Tricorn => "tricorn",
            Self::BurningShip => "burning-ship",
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = UnknownFractalKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == normalised)
            .ok_or_else(|| UnknownFractalKind(value.to_string()))
    }
}
